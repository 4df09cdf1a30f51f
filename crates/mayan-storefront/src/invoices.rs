//! # Invoices
//!
//! The customer's order history ("invoices") and the bank-transfer proof
//! upload that moves an order from `pending` to `payment_submitted`.

use mayan_api::ApiClient;
use mayan_core::{Order, OrderStatus, User};
use tracing::info;

use crate::error::StorefrontResult;

/// Customer-facing order history flow.
#[derive(Debug, Clone)]
pub struct InvoicesService {
    api: ApiClient,
}

impl InvoicesService {
    pub fn new(api: ApiClient) -> Self {
        InvoicesService { api }
    }

    /// The signed-in user's invoices, optionally filtered by status.
    pub async fn list(
        &self,
        user: &User,
        status: Option<OrderStatus>,
    ) -> StorefrontResult<Vec<Order>> {
        let orders = self.api.users().orders(&user.id).await?;
        Ok(match status {
            Some(status) => orders.into_iter().filter(|o| o.status == status).collect(),
            None => orders,
        })
    }

    /// A single invoice.
    pub async fn get(&self, order_id: &str) -> StorefrontResult<Order> {
        Ok(self.api.orders().get(order_id).await?)
    }

    /// Uploads the bank-transfer screenshot for an order and returns the
    /// refreshed record.
    pub async fn submit_payment_proof(
        &self,
        order_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> StorefrontResult<Order> {
        let order = self
            .api
            .orders()
            .upload_payment_proof(order_id, file_name, bytes)
            .await?;
        info!(order = %order.id, "payment proof submitted");
        Ok(order)
    }
}
