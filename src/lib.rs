pub mod adapters;
pub mod config;
pub mod domain;
pub mod email_client;
pub mod ports;
pub mod services;
pub mod startup;
pub mod telemetry;
pub mod validation;
