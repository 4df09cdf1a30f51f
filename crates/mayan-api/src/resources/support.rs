//! Support ticket endpoints (the anonymous-friendly contact channel).

use mayan_core::Message;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /support` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupportRequest {
    pub subject: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Accessor for `/support` endpoints.
#[derive(Debug)]
pub struct SupportApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl SupportApi<'_> {
    /// `GET /support` - support threads for the current user (admin sees all).
    pub async fn list(&self) -> ApiResult<Vec<Message>> {
        self.client.get("/support").await
    }

    /// `POST /support`.
    pub async fn create(&self, request: &CreateSupportRequest) -> ApiResult<Message> {
        self.client.post("/support", request).await
    }
}
