use std::net::TcpListener;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, dev::Server, web};
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing_actix_web::TracingLogger;

use crate::{
    adherent_repository::PostgresAdherentRepository,
    configuration::{DatabaseSettings, Settings},
    domain::DonationRequestFactory,
    email_client::EmailClient,
    onboarding::OnboardingResolver,
    routes::{
        completion::complete_onboarding,
        donation::{donate, donation_form},
        health_check::health_check,
        registration::{register, registration_form},
    },
    session_state::SESSION_COOKIE_NAME,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: &Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&config.database);

        let sender = config
            .email_client
            .sender()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid sender email address")?;
        let email_client = EmailClient::new(
            config.email_client.base_url.clone(),
            sender,
            config.email_client.sender_name.clone(),
            config.email_client.api_key.clone(),
            config.email_client.api_secret.clone(),
            config.email_client.timeout(),
        )
        .context("Failed to build the email client")?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            connection_pool,
            email_client,
            &config.application.base_url,
            &config.application.hmac_secret,
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(database_config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(database_config.with_db())
}

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    email_client: EmailClient,
    base_url: &str,
    hmac_secret: &SecretString,
) -> Result<Server, anyhow::Error> {
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .map_err(|e| anyhow::anyhow!("Invalid session secret: {:?}", e))?;
    let secure_cookies = base_url.starts_with("https://");

    let resolver = web::Data::new(OnboardingResolver::new(
        PostgresAdherentRepository::new(db_pool.clone()),
        DonationRequestFactory,
    ));
    let donation_request_factory = web::Data::new(DonationRequestFactory);
    let db_pool = web::Data::new(db_pool);
    let email_client = web::Data::new(email_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_name(SESSION_COOKIE_NAME.to_string())
                    .cookie_secure(secure_cookies)
                    .build(),
            )
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/inscription", web::get().to(registration_form))
            .route("/inscription", web::post().to(register))
            .route("/inscription/don", web::get().to(donation_form))
            .route("/inscription/don", web::post().to(donate))
            .route("/inscription/terminee", web::get().to(complete_onboarding))
            .app_data(db_pool.clone())
            .app_data(email_client.clone())
            .app_data(resolver.clone())
            .app_data(donation_request_factory.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
