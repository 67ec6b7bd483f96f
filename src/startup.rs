use std::sync::Arc;

use crate::adapters::in_memory::{InMemoryClientRepository, InMemorySubscriptionRepository};
use crate::config::Settings;
use crate::email_client::EmailClient;
use crate::ports::client_repository::{ClientReader, ClientWriter};
use crate::ports::subscription_repository::{SubscriptionReader, SubscriptionWriter};
use crate::services::client_service::ClientService;
use crate::services::error_chain_fmt;
use crate::services::subscription_service::SubscriptionService;
use crate::validation::ValidationError;

/// The persistence side of the application, one handle per port.
#[derive(Clone)]
pub struct Repositories {
    pub client_reader: Arc<dyn ClientReader>,
    pub client_writer: Arc<dyn ClientWriter>,
    pub subscription_reader: Arc<dyn SubscriptionReader>,
    pub subscription_writer: Arc<dyn SubscriptionWriter>,
}

impl Repositories {
    /// Uses each repository for both its read and write ports.
    pub fn from_in_memory(
        clients: Arc<InMemoryClientRepository>,
        subscriptions: Arc<InMemorySubscriptionRepository>,
    ) -> Repositories {
        Repositories {
            client_reader: clients.clone(),
            client_writer: clients,
            subscription_reader: subscriptions.clone(),
            subscription_writer: subscriptions,
        }
    }
}

#[derive(thiserror::Error)]
pub enum ApplicationError {
    #[error("The email client sender is not valid.")]
    InvalidSender(#[source] ValidationError),
    #[error("Failed to build the email client.")]
    EmailClient(#[source] reqwest::Error),
}

impl std::fmt::Debug for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct Application {
    client_service: ClientService,
    subscription_service: SubscriptionService,
}

impl Application {
    pub fn build(config: Settings, repositories: Repositories) -> Result<Self, ApplicationError> {
        let sender_email = config
            .get_email_client_sender()
            .map_err(ApplicationError::InvalidSender)?;
        let email_client = EmailClient::new(
            config.get_email_client_base_url(),
            sender_email,
            config.get_email_client_api(),
            Some(config.get_email_client_timeout()),
        )
        .map_err(ApplicationError::EmailClient)?;

        let client_service = ClientService::new(
            repositories.client_reader,
            repositories.client_writer,
            Arc::new(email_client),
            config.get_notification_failure_policy(),
        );
        let subscription_service = SubscriptionService::new(
            repositories.subscription_reader,
            repositories.subscription_writer,
        );

        tracing::info!(
            "Application built with notification failure policy {:?}",
            config.get_notification_failure_policy()
        );

        Ok(Self {
            client_service,
            subscription_service,
        })
    }

    pub fn client_service(&self) -> &ClientService {
        &self.client_service
    }

    pub fn subscription_service(&self) -> &SubscriptionService {
        &self.subscription_service
    }
}
