//! Messaging/support inbox endpoints.

use mayan_core::Message;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Which folder to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mailbox {
    Inbox,
    Sent,
}

impl Mailbox {
    fn as_str(&self) -> &'static str {
        match self {
            Mailbox::Inbox => "inbox",
            Mailbox::Sent => "sent",
        }
    }
}

/// `POST /messages` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Accessor for `/messages` endpoints.
#[derive(Debug)]
pub struct MessagesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl MessagesApi<'_> {
    /// `GET /messages?type=inbox|sent`.
    pub async fn list(&self, mailbox: Mailbox) -> ApiResult<Vec<Message>> {
        self.client
            .get_with_query("/messages", &[("type", mailbox.as_str().to_string())])
            .await
    }

    /// `POST /messages`.
    pub async fn send(&self, request: &SendMessage) -> ApiResult<Message> {
        self.client.post("/messages", request).await
    }

    /// `PUT /messages/:id/read`.
    pub async fn mark_read(&self, id: &str) -> ApiResult<Message> {
        self.client.put_empty(&format!("/messages/{id}/read")).await
    }

    /// `DELETE /messages/:id`.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/messages/{id}")).await
    }
}
