use std::sync::Arc;
use uuid::Uuid;

use crate::domain::new_subscription::{NewSubscription, NewSubscriptionBody};
use crate::domain::subscription::Subscription;
use crate::ports::subscription_repository::{SubscriptionReader, SubscriptionWriter};
use crate::ports::RepositoryError;
use crate::services::error_chain_fmt;
use crate::validation::ValidationError;

pub struct SubscriptionService {
    reader: Arc<dyn SubscriptionReader>,
    writer: Arc<dyn SubscriptionWriter>,
}

/// Conflicts between a request and the state already stored.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BusinessRuleError {
    #[error("Client {client_id} already has an active subscription.")]
    DuplicateActiveSubscription { client_id: Uuid },
}

#[derive(thiserror::Error)]
pub enum SubscriptionServiceError {
    #[error("The subscription is not valid: {0}.")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    BusinessRule(#[from] BusinessRuleError),
    #[error("Failed to access the subscription repository.")]
    Repository(#[from] RepositoryError),
}

impl std::fmt::Debug for SubscriptionServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SubscriptionService {
    pub fn new(
        reader: Arc<dyn SubscriptionReader>,
        writer: Arc<dyn SubscriptionWriter>,
    ) -> SubscriptionService {
        SubscriptionService { reader, writer }
    }

    /// Creates a subscription, refusing a second active one for the same client.
    ///
    /// The active check reads then writes without any guard: two concurrent
    /// calls for one client can both pass it unless storage enforces
    /// uniqueness.
    #[tracing::instrument(
        name = "Adding a new subscription",
        skip(self, body),
        fields(
            client_id = %body.client_id,
            subscription_name = %body.name,
            active = %body.active
        )
    )]
    pub async fn add_subscription(
        &self,
        body: NewSubscriptionBody,
    ) -> Result<Subscription, SubscriptionServiceError> {
        if body.active {
            self.ensure_no_active_subscription(body.client_id).await?;
        }

        let new_subscription: NewSubscription = match body.try_into() {
            Ok(subscription) => subscription,
            Err(err) => {
                tracing::error!("Validation error: {:?}", err);
                return Err(SubscriptionServiceError::Validation(err));
            }
        };

        let subscription = self
            .writer
            .add_subscription(Subscription::create(new_subscription))
            .await
            .map_err(|err| {
                tracing::error!("Failed to insert new subscription: {:?}", err);
                err
            })?;

        Ok(subscription)
    }

    /// Every subscription of the client in repository order; empty when none.
    #[tracing::instrument(name = "Getting the subscriptions of a client", skip(self))]
    pub async fn get_client_subscriptions(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<Subscription>, SubscriptionServiceError> {
        Ok(self.reader.get_client_subscriptions(client_id).await?)
    }

    async fn ensure_no_active_subscription(
        &self,
        client_id: Uuid,
    ) -> Result<(), SubscriptionServiceError> {
        let subscriptions = self.reader.get_client_subscriptions(client_id).await?;

        if subscriptions.iter().any(Subscription::is_active) {
            tracing::error!("Client {} already has an active subscription", client_id);
            return Err(BusinessRuleError::DuplicateActiveSubscription { client_id }.into());
        }

        Ok(())
    }
}
