//! # Messaging
//!
//! The support inbox: list inbox/sent, send, mark read, delete.

use mayan_api::resources::messages::{Mailbox, SendMessage};
use mayan_api::resources::support::CreateSupportRequest;
use mayan_api::ApiClient;
use mayan_core::{validation, Message};

use crate::error::StorefrontResult;

/// Messaging flow for both the customer inbox and the admin side.
#[derive(Debug, Clone)]
pub struct MessagingService {
    api: ApiClient,
}

impl MessagingService {
    pub fn new(api: ApiClient) -> Self {
        MessagingService { api }
    }

    /// `GET /messages?type=inbox`.
    pub async fn inbox(&self) -> StorefrontResult<Vec<Message>> {
        Ok(self.api.messages().list(Mailbox::Inbox).await?)
    }

    /// `GET /messages?type=sent`.
    pub async fn sent(&self) -> StorefrontResult<Vec<Message>> {
        Ok(self.api.messages().list(Mailbox::Sent).await?)
    }

    /// Sends a message, then returns the refreshed sent folder.
    pub async fn send(
        &self,
        recipient_id: Option<&str>,
        subject: &str,
        body: &str,
    ) -> StorefrontResult<Vec<Message>> {
        validation::validate_name("subject", subject).map_err(mayan_core::CoreError::from)?;

        self.api
            .messages()
            .send(&SendMessage {
                recipient_id: recipient_id.map(str::to_string),
                subject: subject.trim().to_string(),
                body: body.to_string(),
            })
            .await?;

        self.sent().await
    }

    /// Marks a message read, returning the updated record.
    pub async fn mark_read(&self, id: &str) -> StorefrontResult<Message> {
        Ok(self.api.messages().mark_read(id).await?)
    }

    /// Deletes a message, then returns the refreshed inbox.
    pub async fn delete(&self, id: &str) -> StorefrontResult<Vec<Message>> {
        self.api.messages().delete(id).await?;
        self.inbox().await
    }

    /// Files a support request (works signed-out with an email).
    pub async fn contact_support(
        &self,
        subject: &str,
        body: &str,
        email: Option<&str>,
    ) -> StorefrontResult<Message> {
        if let Some(email) = email {
            validation::validate_email(email).map_err(mayan_core::CoreError::from)?;
        }

        Ok(self
            .api
            .support()
            .create(&CreateSupportRequest {
                subject: subject.trim().to_string(),
                body: body.to_string(),
                email: email.map(str::to_string),
            })
            .await?)
    }
}
