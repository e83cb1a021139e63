use std::ops::Deref;

use serde_json::{Map, Value};

use crate::domain::Adherent;
use crate::messages::MailjetMessage;

/// Sent once an adherent completes onboarding.
#[derive(Debug, Clone, PartialEq)]
pub struct AdherentAccountConfirmationMessage(MailjetMessage);

impl AdherentAccountConfirmationMessage {
    pub const TEMPLATE: &'static str = "54673";
    pub const SUBJECT: &'static str = "Confirmation de votre inscription au mouvement EnMarche !";

    pub fn create_from_adherent(
        adherent: &Adherent,
        adherents_count: u64,
        committees_count: u64,
    ) -> Self {
        let mut vars = Map::new();
        vars.insert("target_firstname".into(), Value::from(adherent.first_name()));
        vars.insert("target_lastname".into(), Value::from(adherent.last_name()));
        vars.insert("adherents_count".into(), Value::from(adherents_count));
        vars.insert("committees_count".into(), Value::from(committees_count));

        Self(MailjetMessage::new(
            adherent.email_address(),
            adherent.full_name(),
            Self::SUBJECT,
            Self::TEMPLATE,
            vars,
        ))
    }
}

impl Deref for AdherentAccountConfirmationMessage {
    type Target = MailjetMessage;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
