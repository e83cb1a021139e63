use std::future::{Ready, ready};

use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::onboarding::{NEW_ADHERENT_ID, OnboardingSession};

/// Name of the cookie carrying the signed session state.
pub const SESSION_COOKIE_NAME: &str = "membership_session";

pub struct TypedSession(Session);

impl TypedSession {
    pub fn renew(&self) {
        self.0.renew();
    }

    pub fn insert_new_adherent_id(&self, adherent_id: Uuid) -> Result<(), SessionInsertError> {
        self.0.insert(NEW_ADHERENT_ID, adherent_id.to_string())
    }

    pub fn get_new_adherent_id(&self) -> Result<Option<String>, SessionGetError> {
        self.0.get(NEW_ADHERENT_ID)
    }

    pub fn remove_new_adherent_id(&self) {
        self.0.remove(NEW_ADHERENT_ID);
    }
}

impl OnboardingSession for TypedSession {
    fn new_adherent_id(&self) -> Result<Option<String>, anyhow::Error> {
        self.get_new_adherent_id()
            .map_err(|e| anyhow::anyhow!("Failed to read the onboarding session: {}", e))
    }
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
