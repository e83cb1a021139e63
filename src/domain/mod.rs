mod adherent;
mod adherent_email;
mod donation_request;
mod new_adherent;
mod person_name;

pub use adherent::Adherent;
pub use adherent_email::AdherentEmail;
pub use donation_request::{DonationRequest, DonationRequestFactory, MAX_DONATION_AMOUNT};
pub use new_adherent::NewAdherent;
pub use person_name::PersonName;
