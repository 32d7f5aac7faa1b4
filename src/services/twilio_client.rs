use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::domain::recipient::{whatsapp_address, Recipient};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Twilio request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Twilio returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Invalid Twilio url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub to: Recipient,
    pub body: String,
    pub media_url: Option<String>,
}

#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<(), TransportError>;
}

#[derive(Debug, Clone)]
pub struct TwilioOptions {
    pub base_url: String,
    pub account_sid: String,
    pub auth_token: String,
    pub whatsapp_number: String,
}

pub struct TwilioClient {
    client: Client,
    options: TwilioOptions,
}

impl TwilioClient {
    pub fn new(options: TwilioOptions) -> Self {
        TwilioClient {
            client: Client::new(),
            options,
        }
    }

    fn messages_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.options.base_url)?.join(&format!(
            "/2010-04-01/Accounts/{}/Messages.json",
            self.options.account_sid
        ))
    }
}

#[async_trait]
impl MessageTransport for TwilioClient {
    async fn send(&self, message: &OutboundMessage) -> Result<(), TransportError> {
        let mut form_body: HashMap<&str, String> = HashMap::new();
        form_body.insert("From", whatsapp_address(&self.options.whatsapp_number));
        form_body.insert("To", message.to.whatsapp_address());
        form_body.insert("Body", message.body.clone());
        if let Some(media_url) = &message.media_url {
            form_body.insert("MediaUrl", media_url.clone());
        }

        let res = self
            .client
            .post(self.messages_url()?)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&form_body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_url_uses_account_sid() {
        let client = TwilioClient::new(TwilioOptions {
            base_url: "https://api.twilio.com".to_string(),
            account_sid: "AC42".to_string(),
            auth_token: "secret".to_string(),
            whatsapp_number: "+14155238886".to_string(),
        });

        assert_eq!(
            client.messages_url().unwrap().as_str(),
            "https://api.twilio.com/2010-04-01/Accounts/AC42/Messages.json"
        );
    }
}
