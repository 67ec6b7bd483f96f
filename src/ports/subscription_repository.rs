use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::subscription::Subscription;
use crate::ports::RepositoryError;

#[async_trait]
pub trait SubscriptionReader: Send + Sync {
    /// Every subscription of the client, active or not, in storage order.
    async fn get_client_subscriptions(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<Subscription>, RepositoryError>;
}

#[async_trait]
pub trait SubscriptionWriter: Send + Sync {
    async fn add_subscription(
        &self,
        subscription: Subscription,
    ) -> Result<Subscription, RepositoryError>;
}
