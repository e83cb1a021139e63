use once_cell::sync::Lazy;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;
use wiremock::MockServer;

use membership::configuration::{DatabaseSettings, get_configuration};
use membership::startup::{Application, get_connection_pool};
use membership::telemetry::{get_subscriber, init_subscriber};

// Initialised once for the whole test binary.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info";
    let subscriber_name = "test";

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    // Stands in for the Mailjet API.
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_registration_form(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/inscription", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_registration<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/inscription", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_donation_page(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/inscription/don", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_donation<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/inscription/don", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_completion(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/inscription/terminee", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Registers Jérôme Pichoud, leaving his id in this client's session.
    pub async fn register_adherent(&self) -> Uuid {
        let response = self
            .post_registration(&serde_json::json!({
                "email": "jerome@example.com",
                "first_name": "Jérôme",
                "last_name": "Pichoud",
            }))
            .await;
        assert_is_redirect_to(&response, "/inscription/don");

        let saved: (Uuid,) =
            sqlx::query_as("SELECT id FROM adherents WHERE email_address = 'jerome@example.com'")
                .fetch_one(&self.db_pool)
                .await
                .expect("Failed to fetch the registered adherent.");
        saved.0
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut config = get_configuration().expect("Failed to read configuration.");
        config.database.database_name = Uuid::new_v4().to_string();
        config.application.port = 0;
        config.email_client.base_url = email_server.uri();
        config
    };

    configure_database(&configuration.database).await;

    let application = Application::build(&configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        db_pool: get_connection_pool(&configuration.database),
        email_server,
        api_client,
    }
}

async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("Failed to connect to Postgres.");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect_with(config.with_db())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database.");
    connection_pool
}
