mod adherent_account_confirmation;

pub use adherent_account_confirmation::AdherentAccountConfirmationMessage;

use serde_json::{Map, Value};

/// A transactional email rendered by a Mailjet template.
#[derive(Debug, Clone, PartialEq)]
pub struct MailjetMessage {
    recipient: (String, String),
    subject: String,
    template: &'static str,
    vars: Map<String, Value>,
}

impl MailjetMessage {
    pub fn new(
        recipient_email: impl Into<String>,
        recipient_name: impl Into<String>,
        subject: impl Into<String>,
        template: &'static str,
        vars: Map<String, Value>,
    ) -> Self {
        Self {
            recipient: (recipient_email.into(), recipient_name.into()),
            subject: subject.into(),
            template,
            vars,
        }
    }

    /// `(email, display name)` of the single recipient.
    pub fn recipient(&self) -> (&str, &str) {
        (&self.recipient.0, &self.recipient.1)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn template(&self) -> &str {
        self.template
    }

    pub fn vars(&self) -> &Map<String, Value> {
        &self.vars
    }
}
