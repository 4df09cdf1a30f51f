//! # Order Administration
//!
//! The back-office order list: filter by status, confirm manual bank
//! transfers, and walk orders through the delivery workflow. Transitions are
//! enforced server-side; this flow only requests them and re-fetches.

use mayan_api::resources::orders::UpdateOrder;
use mayan_api::ApiClient;
use mayan_core::{Order, OrderStatus};
use tracing::info;

use crate::error::StorefrontResult;

/// The order administration flow.
#[derive(Debug, Clone)]
pub struct OrderAdmin {
    api: ApiClient,
}

impl OrderAdmin {
    pub fn new(api: ApiClient) -> Self {
        OrderAdmin { api }
    }

    /// Orders, optionally filtered by status (`GET /orders?status=`).
    pub async fn list(&self, status: Option<OrderStatus>) -> StorefrontResult<Vec<Order>> {
        Ok(self.api.orders().list(status).await?)
    }

    /// A single order with its payment proof.
    pub async fn get(&self, id: &str) -> StorefrontResult<Order> {
        Ok(self.api.orders().get(id).await?)
    }

    /// Requests a status transition, then returns the refreshed list for
    /// the screen's current filter.
    pub async fn set_status(
        &self,
        id: &str,
        status: OrderStatus,
        current_filter: Option<OrderStatus>,
    ) -> StorefrontResult<Vec<Order>> {
        self.api
            .orders()
            .update(
                id,
                &UpdateOrder {
                    status: Some(status),
                    notes: None,
                },
            )
            .await?;

        info!(order = %id, ?status, "order status updated");
        self.list(current_filter).await
    }

    /// Confirms a submitted bank transfer.
    pub async fn confirm_payment(
        &self,
        id: &str,
        current_filter: Option<OrderStatus>,
    ) -> StorefrontResult<Vec<Order>> {
        self.set_status(id, OrderStatus::Confirmed, current_filter)
            .await
    }
}
