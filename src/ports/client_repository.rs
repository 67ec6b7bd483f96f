use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::client::Client;
use crate::ports::RepositoryError;

/// Read side of client persistence.
#[async_trait]
pub trait ClientReader: Send + Sync {
    /// `Ok(None)` when no client has the given id.
    async fn get_client(&self, id: Uuid) -> Result<Option<Client>, RepositoryError>;
}

/// Write side of client persistence.
#[async_trait]
pub trait ClientWriter: Send + Sync {
    async fn add_client(&self, client: Client) -> Result<Client, RepositoryError>;

    /// Sets the active flag and returns the updated client.
    async fn enable_disable_client(&self, id: Uuid, active: bool)
        -> Result<Client, RepositoryError>;
}
