//! User management endpoints: admin CRUD, profile updates, loyalty
//! adjustments and per-user order history.

use mayan_core::{Order, User, UserRole};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /users` body (admin-created accounts).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// `PUT /users/:id` body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// `PUT /users/profile` body - the signed-in user's own profile.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `PUT /users/:id/loyalty` body - admin adjustment of a point balance.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustLoyalty {
    /// The new absolute balance.
    pub loyalty_points: i64,
}

/// Accessor for `/users` endpoints.
#[derive(Debug)]
pub struct UsersApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl UsersApi<'_> {
    /// `GET /users`.
    pub async fn list(&self) -> ApiResult<Vec<User>> {
        self.client.get("/users").await
    }

    /// `POST /users`.
    pub async fn create(&self, request: &CreateUser) -> ApiResult<User> {
        self.client.post("/users", request).await
    }

    /// `PUT /users/:id`.
    pub async fn update(&self, id: &str, request: &UpdateUser) -> ApiResult<User> {
        self.client.put(&format!("/users/{id}"), request).await
    }

    /// `DELETE /users/:id`.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/users/{id}")).await
    }

    /// `PUT /users/profile`.
    pub async fn update_profile(&self, request: &UpdateProfile) -> ApiResult<User> {
        self.client.put("/users/profile", request).await
    }

    /// `PUT /users/:id/loyalty`.
    pub async fn adjust_loyalty(&self, id: &str, request: &AdjustLoyalty) -> ApiResult<User> {
        self.client
            .put(&format!("/users/{id}/loyalty"), request)
            .await
    }

    /// `GET /users/:id/orders`.
    pub async fn orders(&self, id: &str) -> ApiResult<Vec<Order>> {
        self.client.get(&format!("/users/{id}/orders")).await
    }
}
