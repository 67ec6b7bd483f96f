use std::sync::Arc;
use uuid::Uuid;

use crate::config::NotificationFailurePolicy;
use crate::domain::client::Client;
use crate::domain::new_client::{NewClient, NewClientBody};
use crate::ports::client_repository::{ClientReader, ClientWriter};
use crate::ports::notifier::{NotificationError, Notifier};
use crate::ports::RepositoryError;
use crate::services::error_chain_fmt;
use crate::validation::ValidationError;

pub struct ClientService {
    reader: Arc<dyn ClientReader>,
    writer: Arc<dyn ClientWriter>,
    notifier: Arc<dyn Notifier>,
    notification_failure_policy: NotificationFailurePolicy,
}

#[derive(thiserror::Error)]
pub enum ClientServiceError {
    #[error("The client is not valid: {0}.")]
    Validation(#[from] ValidationError),
    #[error("Failed to access the client repository.")]
    Repository(#[from] RepositoryError),
    #[error("Failed to notify the client about its new status.")]
    Notification(#[source] NotificationError),
}

impl std::fmt::Debug for ClientServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ClientService {
    pub fn new(
        reader: Arc<dyn ClientReader>,
        writer: Arc<dyn ClientWriter>,
        notifier: Arc<dyn Notifier>,
        notification_failure_policy: NotificationFailurePolicy,
    ) -> ClientService {
        ClientService {
            reader,
            writer,
            notifier,
            notification_failure_policy,
        }
    }

    /// Validates the body and persists it as a new client with a fresh id.
    /// Nothing is written when validation fails.
    #[tracing::instrument(
        name = "Adding a new client",
        skip(self, body),
        fields(
            client_email = %body.email,
            client_name = %body.name
        )
    )]
    pub async fn add_client(&self, body: NewClientBody) -> Result<Client, ClientServiceError> {
        let new_client: NewClient = match body.try_into() {
            Ok(client) => client,
            Err(err) => {
                tracing::error!("Validation error: {:?}", err);
                return Err(ClientServiceError::Validation(err));
            }
        };

        let client = self
            .writer
            .add_client(Client::create(new_client))
            .await
            .map_err(|err| {
                tracing::error!("Failed to insert new client: {:?}", err);
                err
            })?;

        Ok(client)
    }

    /// `Ok(None)` when the client does not exist.
    #[tracing::instrument(name = "Getting a client", skip(self))]
    pub async fn get_client(&self, id: Uuid) -> Result<Option<Client>, ClientServiceError> {
        Ok(self.reader.get_client(id).await?)
    }

    /// Persists the new active flag, then tells the client by email.
    ///
    /// A failed notification never undoes the update; whether it fails the
    /// call depends on the configured [`NotificationFailurePolicy`].
    #[tracing::instrument(name = "Enabling or disabling a client", skip(self))]
    pub async fn enable_disable_client(
        &self,
        id: Uuid,
        active: bool,
    ) -> Result<Client, ClientServiceError> {
        let client = self
            .writer
            .enable_disable_client(id, active)
            .await
            .map_err(|err| {
                tracing::error!("Failed to update the client status: {:?}", err);
                err
            })?;

        let (subject, html_body) = status_change_email(&client);

        if let Err(err) = self.notifier.send(&client.email, subject, &html_body).await {
            tracing::error!(
                "Failed to send an email to {}: {:?}",
                client.email.as_ref(),
                err
            );

            if self.notification_failure_policy == NotificationFailurePolicy::Propagate {
                return Err(ClientServiceError::Notification(err));
            }
        }

        Ok(client)
    }
}

fn status_change_email(client: &Client) -> (&'static str, String) {
    let (subject, status) = if client.active {
        ("Your account was enabled", "enabled")
    } else {
        ("Your account was disabled", "disabled")
    };
    let html_body = format!(
        r#"
            <div>
                <h1>Hello {}!</h1>
                <p>Your account was {}.</p>
            </div>
        "#,
        client.name.as_ref(),
        status
    );

    (subject, html_body)
}
