use crate::domain::{AdherentEmail, PersonName};

#[derive(Debug)]
pub struct NewAdherent {
    pub email: AdherentEmail,
    pub first_name: PersonName,
    pub last_name: PersonName,
}
