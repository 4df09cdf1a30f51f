//! # User Administration
//!
//! Account management and manual loyalty-point adjustments.

use mayan_api::resources::users::{AdjustLoyalty, CreateUser, UpdateUser};
use mayan_api::ApiClient;
use mayan_core::{validation, Order, User};
use tracing::info;

use crate::error::StorefrontResult;

/// The user administration flow.
#[derive(Debug, Clone)]
pub struct UserAdmin {
    api: ApiClient,
}

impl UserAdmin {
    pub fn new(api: ApiClient) -> Self {
        UserAdmin { api }
    }

    /// `GET /users`.
    pub async fn list(&self) -> StorefrontResult<Vec<User>> {
        Ok(self.api.users().list().await?)
    }

    /// Creates an account, then returns the re-fetched list.
    pub async fn create(&self, request: &CreateUser) -> StorefrontResult<Vec<User>> {
        validation::validate_name("name", &request.name)
            .map_err(mayan_core::CoreError::from)?;
        validation::validate_email(&request.email).map_err(mayan_core::CoreError::from)?;

        let created = self.api.users().create(request).await?;
        info!(user = %created.id, "user created");
        self.list().await
    }

    /// Updates an account, then returns the re-fetched list.
    pub async fn update(&self, id: &str, request: &UpdateUser) -> StorefrontResult<Vec<User>> {
        self.api.users().update(id, request).await?;
        self.list().await
    }

    /// Deletes an account, then returns the re-fetched list.
    pub async fn delete(&self, id: &str) -> StorefrontResult<Vec<User>> {
        self.api.users().delete(id).await?;
        info!(user = %id, "user deleted");
        self.list().await
    }

    /// Sets a user's loyalty balance to a new absolute value.
    pub async fn set_loyalty_points(&self, id: &str, points: i64) -> StorefrontResult<User> {
        validation::validate_points(points).map_err(mayan_core::CoreError::from)?;

        let user = self
            .api
            .users()
            .adjust_loyalty(
                id,
                &AdjustLoyalty {
                    loyalty_points: points,
                },
            )
            .await?;

        info!(user = %id, points, "loyalty balance adjusted");
        Ok(user)
    }

    /// A user's order history (`GET /users/:id/orders`).
    pub async fn orders(&self, id: &str) -> StorefrontResult<Vec<Order>> {
        Ok(self.api.users().orders(id).await?)
    }
}
