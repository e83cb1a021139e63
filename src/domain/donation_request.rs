use crate::domain::Adherent;

/// Upper bound for a single donation, in cents.
pub const MAX_DONATION_AMOUNT: u32 = 750_000;

/// A donation pledged during onboarding and not yet paid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationRequest {
    pub amount: Option<u32>,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl DonationRequest {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DonationRequestFactory;

impl DonationRequestFactory {
    pub fn create_empty(&self) -> DonationRequest {
        DonationRequest::default()
    }

    pub fn create_for_adherent(
        &self,
        adherent: &Adherent,
        amount: u32,
    ) -> Result<DonationRequest, String> {
        if amount == 0 || amount > MAX_DONATION_AMOUNT {
            return Err(format!(
                "{} is not a valid donation amount, it must be between 1 and {} cents.",
                amount, MAX_DONATION_AMOUNT
            ));
        }

        Ok(DonationRequest {
            amount: Some(amount),
            email_address: Some(adherent.email_address().to_owned()),
            first_name: Some(adherent.first_name().to_owned()),
            last_name: Some(adherent.last_name().to_owned()),
        })
    }
}
