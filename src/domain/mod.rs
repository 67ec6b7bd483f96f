pub mod address;
pub mod client;
pub mod client_email;
pub mod client_name;
pub mod new_client;
pub mod new_subscription;
pub mod subscription;
