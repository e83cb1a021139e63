use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::AdherentEmail;
use crate::messages::MailjetMessage;

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: AdherentEmail,
    sender_name: String,
    api_key: String,
    api_secret: SecretString,
}

#[derive(Debug, Serialize)]
struct SendRecipient<'a> {
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    #[serde(rename = "FromEmail")]
    from_email: &'a str,
    #[serde(rename = "FromName")]
    from_name: &'a str,
    #[serde(rename = "Subject")]
    subject: &'a str,
    #[serde(rename = "MJ-TemplateID")]
    template_id: &'a str,
    #[serde(rename = "MJ-TemplateLanguage")]
    template_language: bool,
    #[serde(rename = "Recipients")]
    recipients: [SendRecipient<'a>; 1],
    #[serde(rename = "Vars")]
    vars: &'a Map<String, Value>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: AdherentEmail,
        sender_name: String,
        api_key: String,
        api_secret: SecretString,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            base_url,
            sender,
            sender_name,
            http_client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_secret,
        })
    }

    #[tracing::instrument(
        name = "Send a templated email",
        skip(self, message),
        fields(template = %message.template())
    )]
    pub async fn send_message(&self, message: &MailjetMessage) -> Result<(), reqwest::Error> {
        let url = format!("{}/send", self.base_url);
        let (recipient_email, recipient_name) = message.recipient();
        let request = SendMessageRequest {
            from_email: self.sender.as_ref(),
            from_name: &self.sender_name,
            subject: message.subject(),
            template_id: message.template(),
            template_language: true,
            recipients: [SendRecipient {
                email: recipient_email,
                name: recipient_name,
            }],
            vars: message.vars(),
        };
        self.http_client
            .post(url)
            .basic_auth(&self.api_key, Some(self.api_secret.expose_secret()))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
