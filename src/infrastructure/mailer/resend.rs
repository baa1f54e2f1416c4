use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    errors::MailerError,
    mailer::{DeliveryReceipt, Mailer, OutboundEmail},
    settings::AppConfig,
};

const DEFAULT_BASE_URL: &str = "https://api.resend.com";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the Resend `POST /emails` endpoint.
///
/// A missing API key is not a startup failure: the site keeps serving content
/// and the contact endpoint reports an internal error on dispatch, matching
/// the lazy-initialization behavior the frontend relies on.
pub struct ResendMailer {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    reply_to: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

#[derive(Deserialize)]
struct ProviderError {
    message: Option<String>,
}

impl ResendMailer {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(config: &AppConfig, base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_default();

        ResendMailer {
            http,
            api_key: config.resend_api_key.clone(),
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailerError> {
        let api_key = self.api_key.as_deref().ok_or(MailerError::NotConfigured)?;

        let payload = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: &email.reply_to,
        };

        let response = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: SendEmailResponse = response.json().await?;
            return Ok(DeliveryReceipt { id: body.id });
        }

        let message = response
            .json::<ProviderError>()
            .await
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("Email provider returned {}", status));

        tracing::error!(status = %status, %message, "Resend rejected the message");
        Err(MailerError::Provider(message))
    }
}
