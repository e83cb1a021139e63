use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};

use crate::adherent_repository::PostgresAdherentRepository;
use crate::onboarding::{
    MembershipOnboardingResolver, OnboardingError, RegisteringAdherent, RegisteringDonation,
};
use crate::session_state::{SESSION_COOKIE_NAME, TypedSession};

pub type OnboardingResolver = MembershipOnboardingResolver<PostgresAdherentRepository>;

/// The resolver and session of a request that may hydrate `declared_type`.
async fn onboarding_context(
    req: &HttpRequest,
    declared_type: &str,
) -> Result<(web::Data<OnboardingResolver>, TypedSession), OnboardingError> {
    let resolver = req
        .app_data::<web::Data<OnboardingResolver>>()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("The onboarding resolver is not registered"))?;

    // Only a request presenting the session cookie has a session to read from.
    let session = match req.cookie(SESSION_COOKIE_NAME) {
        Some(_) => Some(
            TypedSession::extract(req)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load the session: {}", e))?,
        ),
        None => None,
    };

    match session {
        Some(session) if resolver.supports(Some(&session), declared_type) => {
            Ok((resolver, session))
        }
        _ => {
            tracing::info!("The request carries no onboarding session");
            Err(OnboardingError::NotFound)
        }
    }
}

impl FromRequest for RegisteringAdherent {
    type Error = OnboardingError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let (resolver, session) = onboarding_context(&req, Self::TYPE_NAME).await?;
            resolver.resolve_adherent(&session).await
        })
    }
}

impl FromRequest for RegisteringDonation {
    type Error = OnboardingError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let (resolver, session) = onboarding_context(&req, Self::TYPE_NAME).await?;
            resolver.resolve_donation(&session).await
        })
    }
}
