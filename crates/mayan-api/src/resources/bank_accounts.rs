//! Bank account endpoints (the transfer destinations shown at checkout).

use mayan_core::BankAccount;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /bank-accounts` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBankAccount {
    pub bank_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name_ar: Option<String>,
    pub account_holder: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

/// `PUT /bank-accounts/:id` body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Accessor for `/bank-accounts` endpoints.
#[derive(Debug)]
pub struct BankAccountsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl BankAccountsApi<'_> {
    /// `GET /bank-accounts`.
    pub async fn list(&self) -> ApiResult<Vec<BankAccount>> {
        self.client.get("/bank-accounts").await
    }

    /// `POST /bank-accounts`.
    pub async fn create(&self, request: &CreateBankAccount) -> ApiResult<BankAccount> {
        self.client.post("/bank-accounts", request).await
    }

    /// `PUT /bank-accounts/:id`.
    pub async fn update(&self, id: &str, request: &UpdateBankAccount) -> ApiResult<BankAccount> {
        self.client
            .put(&format!("/bank-accounts/{id}"), request)
            .await
    }

    /// `DELETE /bank-accounts/:id`.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/bank-accounts/{id}")).await
    }
}
