use crate::domain::{Adherent, DonationRequest};

/// The onboarding parameter types a handler can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingArgument {
    RegisteringAdherent,
    RegisteringDonation,
}

impl OnboardingArgument {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingArgument::RegisteringAdherent => RegisteringAdherent::TYPE_NAME,
            OnboardingArgument::RegisteringDonation => RegisteringDonation::TYPE_NAME,
        }
    }
}

impl TryFrom<&str> for OnboardingArgument {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            RegisteringAdherent::TYPE_NAME => Ok(Self::RegisteringAdherent),
            RegisteringDonation::TYPE_NAME => Ok(Self::RegisteringDonation),
            other => Err(format!(
                "{} is not an onboarding argument. \
                Use either `{}` or `{}`.",
                other,
                RegisteringAdherent::TYPE_NAME,
                RegisteringDonation::TYPE_NAME
            )),
        }
    }
}

/// The adherent currently being onboarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteringAdherent {
    adherent: Adherent,
}

impl RegisteringAdherent {
    pub const TYPE_NAME: &'static str = "RegisteringAdherent";

    pub fn new(adherent: Adherent) -> Self {
        Self { adherent }
    }

    pub fn adherent(&self) -> &Adherent {
        &self.adherent
    }

    pub fn into_adherent(self) -> Adherent {
        self.adherent
    }
}

/// The adherent currently being onboarded and the donation they may pledge.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteringDonation {
    adherent: Adherent,
    donation_request: DonationRequest,
}

impl RegisteringDonation {
    pub const TYPE_NAME: &'static str = "RegisteringDonation";

    pub fn new(adherent: Adherent, donation_request: DonationRequest) -> Self {
        Self {
            adherent,
            donation_request,
        }
    }

    pub fn adherent(&self) -> &Adherent {
        &self.adherent
    }

    pub fn donation_request(&self) -> &DonationRequest {
        &self.donation_request
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Onboarding {
    Adherent(RegisteringAdherent),
    Donation(RegisteringDonation),
}
