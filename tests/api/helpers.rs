use chrono::{Duration, Utc};
use std::str::FromStr;
use std::sync::{Arc, Once};
use uuid::Uuid;
use wiremock::MockServer;

use client_subscriptions::{
    adapters::in_memory::{InMemoryClientRepository, InMemorySubscriptionRepository},
    config::{get_configuration, NotificationFailurePolicy},
    domain::{
        address::Address, client::Client, client_email::ClientEmail, client_name::ClientName,
        subscription::Subscription,
    },
    startup::{Application, Repositories},
    telemetry::{get_subscriber, init_subscriber},
};

pub const CLIENT_ID: &str = "4781C571-C246-470B-9CD5-13D3D169E799";
pub const SUBSCRIBED_CLIENT_ID: &str = "A2735C13-29F8-4BB4-9857-F1E07C164A68";

static TRACING: Once = Once::new();

// Logs are only printed when TEST_LOG is set, e.g. `TEST_LOG=true cargo test`
fn init_tracing() {
    TRACING.call_once(|| {
        let name = String::from("test");
        let env_filter = String::from("debug");

        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber(name, env_filter, std::io::stdout));
        } else {
            init_subscriber(get_subscriber(name, env_filter, std::io::sink));
        }
    });
}

pub struct TestApp {
    pub application: Application,
    pub clients: Arc<InMemoryClientRepository>,
    pub subscriptions: Arc<InMemorySubscriptionRepository>,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        TestApp::spawn_app_with_policy(NotificationFailurePolicy::Log).await
    }

    pub async fn spawn_app_with_policy(policy: NotificationFailurePolicy) -> TestApp {
        init_tracing();

        let mut config = get_configuration().expect("Missing configuration file.");
        let email_server = MockServer::start().await;

        config.set_email_client_base_url(email_server.uri());
        config.set_notification_failure_policy(policy);

        let clients = Arc::new(InMemoryClientRepository::with_clients(vec![
            client(client_id()),
            client(subscribed_client_id()),
        ]));
        let subscriptions = Arc::new(InMemorySubscriptionRepository::with_subscriptions(vec![
            subscription(subscribed_client_id(), "Assinatura semanal", true),
        ]));
        let repositories = Repositories::from_in_memory(clients.clone(), subscriptions.clone());

        let application =
            Application::build(config, repositories).expect("Failed to build application.");

        TestApp {
            application,
            clients,
            subscriptions,
            email_server,
        }
    }
}

pub fn client_id() -> Uuid {
    Uuid::from_str(CLIENT_ID).unwrap()
}

pub fn subscribed_client_id() -> Uuid {
    Uuid::from_str(SUBSCRIBED_CLIENT_ID).unwrap()
}

fn client(id: Uuid) -> Client {
    Client {
        id,
        name: ClientName::parse(String::from("Ze Tabajara")).unwrap(),
        email: ClientEmail::parse(String::from("ze@tabajara.com")).unwrap(),
        active: true,
        address: Address {
            street: String::from("Rua dos testes"),
            number: String::from("42"),
            neighborhood: String::from("Bairro Novo"),
            city: String::from("Cidade"),
            state: String::from("MG"),
            country: String::from("Brasil"),
            zip_code: String::from("123456"),
        },
        subscriptions: Vec::new(),
    }
}

fn subscription(client_id: Uuid, name: &str, active: bool) -> Subscription {
    Subscription {
        id: Uuid::new_v4(),
        client_id,
        name: String::from(name),
        active,
        created_at: Utc::now(),
        expires_at: Utc::now() + Duration::days(30),
        last_updated_at: None,
    }
}
