use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use sqlx::PgPool;

use crate::adherent_repository::insert_adherent;
use crate::domain::{AdherentEmail, NewAdherent, PersonName};
use crate::routes::{error_chain_fmt, see_other};
use crate::session_state::TypedSession;

#[derive(Debug, serde::Deserialize)]
pub struct RegistrationForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl TryFrom<RegistrationForm> for NewAdherent {
    type Error = String;

    fn try_from(value: RegistrationForm) -> Result<Self, Self::Error> {
        let email = AdherentEmail::parse(value.email)?;
        let first_name = PersonName::parse(value.first_name)?;
        let last_name = PersonName::parse(value.last_name)?;
        Ok(NewAdherent {
            email,
            first_name,
            last_name,
        })
    }
}

#[derive(thiserror::Error)]
pub enum RegistrationError {
    #[error("{0}")]
    ValidationError(String),
    #[error("This email address is already registered")]
    AlreadyRegistered,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistrationError::ValidationError(_) => StatusCode::BAD_REQUEST,
            RegistrationError::AlreadyRegistered => StatusCode::CONFLICT,
            RegistrationError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub async fn registration_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Adhérer</title>
</head>
<body>
    <form action="/inscription" method="post">
        <label>Prénom <input type="text" name="first_name"></label>
        <label>Nom <input type="text" name="last_name"></label>
        <label>Adresse email <input type="email" name="email"></label>
        <button type="submit">J'adhère</button>
    </form>
</body>
</html>"#,
        )
}

#[tracing::instrument(
    name = "Registering a new adherent",
    skip(form, pool, session),
    fields(
        adherent_email = %form.email,
        adherent_id = tracing::field::Empty,
    )
)]
pub async fn register(
    form: web::Form<RegistrationForm>,
    pool: web::Data<PgPool>,
    session: TypedSession,
) -> Result<HttpResponse, RegistrationError> {
    let new_adherent: NewAdherent = form
        .0
        .try_into()
        .map_err(RegistrationError::ValidationError)?;

    let adherent_id = match insert_adherent(&pool, &new_adherent).await {
        Ok(adherent_id) => adherent_id,
        Err(e) => {
            let is_duplicate =
                matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
            return Err(if is_duplicate {
                RegistrationError::AlreadyRegistered
            } else {
                RegistrationError::UnexpectedError(
                    anyhow::Error::from(e).context("Failed to insert a new adherent"),
                )
            });
        }
    };
    tracing::Span::current().record("adherent_id", tracing::field::display(&adherent_id));

    session.renew();
    session
        .insert_new_adherent_id(adherent_id)
        .map_err(|e| anyhow::anyhow!("Failed to store the new adherent in the session: {}", e))?;

    Ok(see_other("/inscription/don"))
}
