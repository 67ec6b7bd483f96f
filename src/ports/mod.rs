//! Capabilities the services need from the outside world. Repositories and
//! the notifier are implemented by adapters and injected at composition time.

pub mod client_repository;
pub mod notifier;
pub mod subscription_repository;

use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("Client {0} does not exist.")]
    ClientNotFound(Uuid),
    #[error("The repository failed to complete the operation.")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}
