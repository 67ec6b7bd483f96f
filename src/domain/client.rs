use uuid::Uuid;

use crate::domain::address::Address;
use crate::domain::client_email::ClientEmail;
use crate::domain::client_name::ClientName;
use crate::domain::new_client::NewClient;
use crate::domain::subscription::Subscription;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Client {
    pub id: Uuid,
    pub name: ClientName,
    pub email: ClientEmail,
    pub active: bool,
    pub address: Address,
    pub subscriptions: Vec<Subscription>,
}

impl Client {
    /// Assigns a fresh identifier to a validated client.
    pub fn create(new_client: NewClient) -> Client {
        Client {
            id: Uuid::new_v4(),
            name: new_client.name,
            email: new_client.email,
            active: new_client.active,
            address: new_client.address,
            subscriptions: Vec::new(),
        }
    }
}
