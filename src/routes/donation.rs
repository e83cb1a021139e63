use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use anyhow::Context;
use sqlx::PgPool;

use crate::adherent_repository::insert_donation;
use crate::domain::{DonationRequestFactory, MAX_DONATION_AMOUNT};
use crate::onboarding::{RegisteringAdherent, RegisteringDonation};
use crate::routes::{error_chain_fmt, see_other};

#[derive(Debug, serde::Deserialize)]
pub struct DonationForm {
    /// In cents.
    pub amount: u32,
}

#[derive(thiserror::Error)]
pub enum DonationError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for DonationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for DonationError {
    fn status_code(&self) -> StatusCode {
        match self {
            DonationError::ValidationError(_) => StatusCode::BAD_REQUEST,
            DonationError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub async fn donation_form(registering: RegisteringDonation) -> HttpResponse {
    let amount = registering
        .donation_request()
        .amount
        .map(|amount| amount.to_string())
        .unwrap_or_default();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Faire un don</title>
</head>
<body>
    <p>Merci {first_name}, votre adhésion est enregistrée.</p>
    <form action="/inscription/don" method="post">
        <label>Montant (en centimes)
            <input type="number" name="amount" min="1" max="{max}" value="{amount}">
        </label>
        <button type="submit">Je donne</button>
    </form>
    <p><a href="/inscription/terminee">Passer cette étape</a></p>
</body>
</html>"#,
            first_name = registering.adherent().first_name(),
            max = MAX_DONATION_AMOUNT,
            amount = amount,
        ))
}

#[tracing::instrument(
    name = "Pledging a donation during onboarding",
    skip(registering, form, pool, factory),
    fields(adherent_id = %registering.adherent().id, amount = form.amount)
)]
pub async fn donate(
    registering: RegisteringAdherent,
    form: web::Form<DonationForm>,
    pool: web::Data<PgPool>,
    factory: web::Data<DonationRequestFactory>,
) -> Result<HttpResponse, DonationError> {
    let adherent = registering.adherent();
    let donation_request = factory
        .create_for_adherent(adherent, form.amount)
        .map_err(DonationError::ValidationError)?;

    insert_donation(&pool, adherent.id, &donation_request)
        .await
        .context("Failed to record the pledged donation")?;

    Ok(see_other("/inscription/terminee"))
}
