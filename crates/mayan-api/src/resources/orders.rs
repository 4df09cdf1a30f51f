//! Order (invoice) endpoints, including the bank-transfer proof upload.

use mayan_core::{Money, Order, OrderItem, OrderStatus};
use reqwest::multipart;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /orders` body - the checkout submission.
///
/// Amounts are the quote the customer saw; the server recomputes and
/// enforces its own totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub items: Vec<OrderItem>,
    pub subtotal: Money,
    pub delivery: Money,
    pub discount: Money,
    pub loyalty_discount: Money,
    pub total: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub use_loyalty_points: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Client-generated key so a double-submitted checkout creates one
    /// order, not two.
    pub client_request_id: String,
}

/// `PUT /orders/:id` body (admin status transitions).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Accessor for `/orders` endpoints.
#[derive(Debug)]
pub struct OrdersApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl OrdersApi<'_> {
    /// `GET /orders`, optionally filtered by status.
    pub async fn list(&self, status: Option<OrderStatus>) -> ApiResult<Vec<Order>> {
        match status {
            Some(status) => {
                // The query value matches the wire form of the enum.
                let value = serde_json::to_value(status)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default();
                self.client
                    .get_with_query("/orders", &[("status", value)])
                    .await
            }
            None => self.client.get("/orders").await,
        }
    }

    /// `GET /orders/:id`.
    pub async fn get(&self, id: &str) -> ApiResult<Order> {
        self.client.get(&format!("/orders/{id}")).await
    }

    /// `POST /orders` - place the order assembled at checkout.
    pub async fn create(&self, request: &CreateOrder) -> ApiResult<Order> {
        self.client.post("/orders", request).await
    }

    /// `PUT /orders/:id`.
    pub async fn update(&self, id: &str, request: &UpdateOrder) -> ApiResult<Order> {
        self.client.put(&format!("/orders/{id}"), request).await
    }

    /// `POST /orders/:id/payment-proof` - multipart upload of the
    /// bank-transfer screenshot.
    pub async fn upload_payment_proof(
        &self,
        id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<Order> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("screenshot", part);
        self.client
            .post_multipart(&format!("/orders/{id}/payment-proof"), form)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_query_value_matches_wire_format() {
        let value = serde_json::to_value(OrderStatus::PaymentSubmitted).unwrap();
        assert_eq!(value.as_str(), Some("payment_submitted"));
    }

    #[test]
    fn test_create_order_serializes_amounts_as_numbers() {
        let request = CreateOrder {
            items: vec![],
            subtotal: Money::from_units(2000),
            delivery: Money::from_units(3000),
            discount: Money::from_units(500),
            loyalty_discount: Money::from_units(200),
            total: Money::from_units(4300),
            coupon_code: Some("SUMMER-10".to_string()),
            use_loyalty_points: true,
            bank_account_id: None,
            country: None,
            state: None,
            address: None,
            notes: None,
            client_request_id: "req-1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["total"], 4300);
        assert_eq!(json["useLoyaltyPoints"], true);
        assert!(json.get("bankAccountId").is_none());
    }
}
