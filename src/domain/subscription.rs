use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::new_subscription::NewSubscription;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Subscription {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn create(new_subscription: NewSubscription) -> Subscription {
        Subscription {
            id: Uuid::new_v4(),
            client_id: new_subscription.client_id,
            name: new_subscription.name,
            active: new_subscription.active,
            created_at: new_subscription.created_at,
            expires_at: new_subscription.expires_at,
            last_updated_at: new_subscription.last_updated_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
