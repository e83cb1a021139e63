use uuid::Uuid;

use crate::domain::{AdherentEmail, PersonName};

/// A registered member.
#[derive(Debug, Clone, PartialEq)]
pub struct Adherent {
    pub id: Uuid,
    pub email: AdherentEmail,
    pub first_name: PersonName,
    pub last_name: PersonName,
}

impl Adherent {
    pub fn email_address(&self) -> &str {
        self.email.as_ref()
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_ref()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_ref()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
