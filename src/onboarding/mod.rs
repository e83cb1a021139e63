//! Resolution of the adherent currently going through the onboarding flow.
//!
//! Registration stores the new adherent's id in the session under
//! [`NEW_ADHERENT_ID`]; later steps of the flow declare a [`RegisteringAdherent`]
//! or [`RegisteringDonation`] parameter and get it hydrated from that id.
mod error;
mod extractor;
mod registering;
mod resolver;

pub use error::OnboardingError;
pub use extractor::OnboardingResolver;
pub use registering::{Onboarding, OnboardingArgument, RegisteringAdherent, RegisteringDonation};
pub use resolver::{MembershipOnboardingResolver, OnboardingSession};

/// Session key holding the id of the adherent created earlier in this session.
pub const NEW_ADHERENT_ID: &str = "membership.onboarding.new_adherent_id";
