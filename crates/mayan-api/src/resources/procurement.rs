//! Procurement (stock-in) endpoints.

use mayan_core::{ProcurementItem, ProcurementOrder};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /procurement` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcurement {
    pub supplier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_ref: Option<String>,
    pub items: Vec<ProcurementItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `PUT /procurement/:id` body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcurement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ProcurementItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Accessor for `/procurement` endpoints.
#[derive(Debug)]
pub struct ProcurementApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ProcurementApi<'_> {
    /// `GET /procurement`.
    pub async fn list(&self) -> ApiResult<Vec<ProcurementOrder>> {
        self.client.get("/procurement").await
    }

    /// `GET /procurement/:id`.
    pub async fn get(&self, id: &str) -> ApiResult<ProcurementOrder> {
        self.client.get(&format!("/procurement/{id}")).await
    }

    /// `POST /procurement` - records the batch purchase and increases stock.
    pub async fn create(&self, request: &CreateProcurement) -> ApiResult<ProcurementOrder> {
        self.client.post("/procurement", request).await
    }

    /// `PUT /procurement/:id`.
    pub async fn update(&self, id: &str, request: &UpdateProcurement) -> ApiResult<ProcurementOrder> {
        self.client.put(&format!("/procurement/{id}"), request).await
    }
}
