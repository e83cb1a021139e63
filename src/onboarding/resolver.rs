use anyhow::Context;

use crate::adherent_repository::AdherentRepository;
use crate::domain::{Adherent, DonationRequestFactory};
use crate::onboarding::{
    Onboarding, OnboardingArgument, OnboardingError, RegisteringAdherent, RegisteringDonation,
};

/// Read access to the request's session, scoped to the onboarding flow.
pub trait OnboardingSession {
    fn new_adherent_id(&self) -> Result<Option<String>, anyhow::Error>;
}

pub struct MembershipOnboardingResolver<R> {
    adherent_repository: R,
    donation_request_factory: DonationRequestFactory,
}

impl<R: AdherentRepository> MembershipOnboardingResolver<R> {
    pub fn new(adherent_repository: R, donation_request_factory: DonationRequestFactory) -> Self {
        Self {
            adherent_repository,
            donation_request_factory,
        }
    }

    /// Whether a value of `declared_type` can be produced for a request.
    ///
    /// A request without a session is never supported, whatever the type.
    pub fn supports<S: OnboardingSession>(&self, session: Option<&S>, declared_type: &str) -> bool {
        session.is_some() && OnboardingArgument::try_from(declared_type).is_ok()
    }

    #[tracing::instrument(name = "Resolve onboarding argument", skip(self, session))]
    pub async fn resolve<S: OnboardingSession>(
        &self,
        session: &S,
        argument: OnboardingArgument,
    ) -> Result<Onboarding, OnboardingError> {
        let adherent = self.load_adherent(session).await?;

        Ok(match argument {
            OnboardingArgument::RegisteringAdherent => {
                Onboarding::Adherent(RegisteringAdherent::new(adherent))
            }
            OnboardingArgument::RegisteringDonation => {
                Onboarding::Donation(self.registering_donation(adherent))
            }
        })
    }

    pub async fn resolve_adherent<S: OnboardingSession>(
        &self,
        session: &S,
    ) -> Result<RegisteringAdherent, OnboardingError> {
        self.load_adherent(session)
            .await
            .map(RegisteringAdherent::new)
    }

    pub async fn resolve_donation<S: OnboardingSession>(
        &self,
        session: &S,
    ) -> Result<RegisteringDonation, OnboardingError> {
        let adherent = self.load_adherent(session).await?;
        Ok(self.registering_donation(adherent))
    }

    fn registering_donation(&self, adherent: Adherent) -> RegisteringDonation {
        RegisteringDonation::new(adherent, self.donation_request_factory.create_empty())
    }

    async fn load_adherent<S: OnboardingSession>(
        &self,
        session: &S,
    ) -> Result<Adherent, OnboardingError> {
        let Some(adherent_id) = session.new_adherent_id()? else {
            tracing::info!("No adherent id was stored in the session");
            return Err(OnboardingError::NotFound);
        };

        let adherent = self
            .adherent_repository
            .find(&adherent_id)
            .await
            .context("Failed to look up the registering adherent")?;

        adherent.ok_or_else(|| {
            tracing::info!(adherent_id = %adherent_id, "The session refers to an unknown adherent");
            OnboardingError::NotFound
        })
    }
}
