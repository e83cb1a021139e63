pub mod adherent_repository;
pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod messages;
pub mod onboarding;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
