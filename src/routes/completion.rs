use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use anyhow::Context;
use sqlx::PgPool;

use crate::adherent_repository::{count_adherents, count_committees};
use crate::email_client::EmailClient;
use crate::messages::AdherentAccountConfirmationMessage;
use crate::onboarding::RegisteringAdherent;
use crate::routes::error_chain_fmt;
use crate::session_state::TypedSession;

#[derive(thiserror::Error)]
pub enum CompletionError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for CompletionError {
    fn status_code(&self) -> StatusCode {
        match self {
            CompletionError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[tracing::instrument(
    name = "Completing onboarding",
    skip(registering, session, pool, email_client),
    fields(adherent_id = %registering.adherent().id)
)]
pub async fn complete_onboarding(
    registering: RegisteringAdherent,
    session: TypedSession,
    pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, CompletionError> {
    let adherent = registering.into_adherent();
    let adherents_count = count_adherents(&pool).await?;
    let committees_count = count_committees(&pool).await?;

    let message = AdherentAccountConfirmationMessage::create_from_adherent(
        &adherent,
        adherents_count,
        committees_count,
    );
    email_client
        .send_message(&message)
        .await
        .with_context(|| {
            format!(
                "Failed to send the account confirmation to {}",
                adherent.email_address()
            )
        })?;

    session.remove_new_adherent_id();

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Bienvenue</title>
</head>
<body>
    <p>Bienvenue {full_name} ! Vous rejoignez {adherents_count} adhérents et {committees_count} comités.</p>
</body>
</html>"#,
            full_name = adherent.full_name(),
        )))
}
