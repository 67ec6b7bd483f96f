//! In-memory repositories backing local composition and tests.
//!
//! Nothing here serialises the read-then-write done by the subscription
//! service, so two concurrent active subscriptions for one client are still
//! possible through these adapters.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::client::Client;
use crate::domain::subscription::Subscription;
use crate::ports::client_repository::{ClientReader, ClientWriter};
use crate::ports::subscription_repository::{SubscriptionReader, SubscriptionWriter};
use crate::ports::RepositoryError;

#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<Uuid, Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let clients = clients
            .into_iter()
            .map(|client| (client.id, client))
            .collect();

        Self {
            clients: RwLock::new(clients),
        }
    }
}

#[async_trait]
impl ClientReader for InMemoryClientRepository {
    async fn get_client(&self, id: Uuid) -> Result<Option<Client>, RepositoryError> {
        Ok(self.clients.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl ClientWriter for InMemoryClientRepository {
    async fn add_client(&self, client: Client) -> Result<Client, RepositoryError> {
        self.clients.write().await.insert(client.id, client.clone());

        Ok(client)
    }

    async fn enable_disable_client(
        &self,
        id: Uuid,
        active: bool,
    ) -> Result<Client, RepositoryError> {
        let mut clients = self.clients.write().await;
        let client = clients
            .get_mut(&id)
            .ok_or(RepositoryError::ClientNotFound(id))?;

        client.active = active;

        Ok(client.clone())
    }
}

/// Keeps subscriptions in insertion order.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: RwLock<Vec<Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn with_subscriptions(subscriptions: impl IntoIterator<Item = Subscription>) -> Self {
        Self {
            subscriptions: RwLock::new(subscriptions.into_iter().collect()),
        }
    }
}

#[async_trait]
impl SubscriptionReader for InMemorySubscriptionRepository {
    async fn get_client_subscriptions(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<Subscription>, RepositoryError> {
        let subscriptions = self
            .subscriptions
            .read()
            .await
            .iter()
            .filter(|subscription| subscription.client_id == client_id)
            .cloned()
            .collect();

        Ok(subscriptions)
    }
}

#[async_trait]
impl SubscriptionWriter for InMemorySubscriptionRepository {
    async fn add_subscription(
        &self,
        subscription: Subscription,
    ) -> Result<Subscription, RepositoryError> {
        self.subscriptions.write().await.push(subscription.clone());

        Ok(subscription)
    }
}
