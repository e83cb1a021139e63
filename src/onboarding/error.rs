use actix_web::{ResponseError, http::StatusCode};

use crate::routes::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum OnboardingError {
    #[error("No adherent is being onboarded in this session")]
    NotFound,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for OnboardingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for OnboardingError {
    fn status_code(&self) -> StatusCode {
        match self {
            OnboardingError::NotFound => StatusCode::NOT_FOUND,
            OnboardingError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
