use async_trait::async_trait;

use crate::domain::client_email::ClientEmail;

#[derive(thiserror::Error, Debug)]
#[error("Failed to deliver the notification.")]
pub struct NotificationError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

/// Delivers a message to a client. The sender is fixed by the implementation.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        recipient: &ClientEmail,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError>;
}
