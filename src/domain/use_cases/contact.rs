use validator::Validate;

use crate::{
    constants::CONTACT_SUBJECT_PREFIX,
    entities::contact::{ContactForm, SubmissionOutcome},
    errors::{AppError, MailerError},
    limiter::rate_limit::RateLimitStore,
    mailer::{Mailer, OutboundEmail},
    settings::AppConfig,
    utils::sanitize::{clean_text, escape_html},
};

/// Address configuration for relayed submissions.
#[derive(Debug, Clone)]
pub struct ContactOptions {
    pub from: String,
    pub recipients: Vec<String>,
    /// Submissions filled out faster than this are treated as automated.
    pub min_fill_ms: i64,
}

impl From<&AppConfig> for ContactOptions {
    fn from(config: &AppConfig) -> Self {
        ContactOptions {
            from: config.contact_from.clone(),
            recipients: config.contact_recipients(),
            min_fill_ms: config.contact_min_fill_ms,
        }
    }
}

pub struct ContactHandler<S, M>
where
    S: RateLimitStore,
    M: Mailer,
{
    store: S,
    mailer: M,
    options: ContactOptions,
}

impl<S, M> ContactHandler<S, M>
where
    S: RateLimitStore,
    M: Mailer,
{
    pub fn new(store: S, mailer: M, options: ContactOptions) -> Self {
        ContactHandler {
            store,
            mailer,
            options,
        }
    }

    /// Runs the abuse-mitigation pipeline and relays the submission by email.
    /// Checks short-circuit in order: honeypot, fill-time, rate limit.
    pub async fn submit(
        &self,
        form: ContactForm,
        client_ip: &str,
    ) -> Result<SubmissionOutcome, AppError> {
        form.validate()?;

        if form.honeypot_tripped() {
            // Pretend it worked so automated senders get no signal.
            tracing::info!(client_ip, "honeypot tripped, dropping submission");
            return Ok(SubmissionOutcome::HoneypotTripped);
        }

        if let Some(elapsed) = form.fill_time_ms() {
            if elapsed < self.options.min_fill_ms {
                tracing::info!(client_ip, elapsed_ms = elapsed, "submission too fast");
                return Err(AppError::BadRequest(
                    "Rejected (suspiciously fast submission).".to_string(),
                ));
            }
        }

        let decision = self.store.record_and_check(client_ip).await;
        if !decision.allowed {
            tracing::info!(client_ip, count = decision.count, "rate limit exceeded");
            return Err(AppError::BadRequest(
                "Rate limit exceeded. Please wait a moment.".to_string(),
            ));
        }

        let email = compose_email(&self.options, &form, client_ip);

        match self.mailer.send(&email).await {
            Ok(receipt) => {
                tracing::info!(client_ip, id = ?receipt.id, "contact submission relayed");
                Ok(SubmissionOutcome::Sent { id: receipt.id })
            }
            Err(MailerError::Provider(message)) => {
                tracing::error!(client_ip, %message, "email provider rejected submission");
                Err(AppError::BadRequest(message))
            }
            Err(err) => {
                tracing::error!(client_ip, error = %err, "contact dispatch failed");
                Err(AppError::InternalError(err.to_string()))
            }
        }
    }
}

/// Builds HTML and plain-text bodies. Every user-supplied field is
/// entity-escaped before interpolation; subject and message are also trimmed.
fn compose_email(options: &ContactOptions, form: &ContactForm, client_ip: &str) -> OutboundEmail {
    let clean_subject = clean_text(&form.subject);
    let clean_message = clean_text(&form.message);
    let first_name = escape_html(form.first_name.trim());
    let last_name = escape_html(form.last_name.trim());
    let email = escape_html(form.email.trim());

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #0C1C2C;">New Contact Form Submission</h2>
  <div style="background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {first_name} {last_name}</p>
    <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
    <p><strong>Subject:</strong> {clean_subject}</p>
  </div>
  <div style="background: #ffffff; border: 1px solid #e9ecef; padding: 20px; border-radius: 8px;">
    <h3 style="color: #0C1C2C; margin-top: 0;">Message:</h3>
    <p style="line-height: 1.6; white-space: pre-wrap;">{message_html}</p>
  </div>
  <hr style="border: none; border-top: 1px solid #e9ecef; margin: 30px 0;">
  <p style="color: #6c757d; font-size: 14px;">
    This message was sent from the Nexor Software contact form. IP: {client_ip}
  </p>
</div>"#,
        message_html = clean_message.replace('\n', "<br/>"),
    );

    let text = format!(
        "New Contact Form Submission\n\n\
         Name: {first_name} {last_name}\n\
         Email: {email}\n\
         Subject: {clean_subject}\n\
         IP: {client_ip}\n\n\
         Message:\n{clean_message}",
    );

    OutboundEmail {
        from: options.from.clone(),
        to: options.recipients.clone(),
        subject: format!("{}{}", CONTACT_SUBJECT_PREFIX, clean_subject),
        html,
        text,
        reply_to: form.email.trim().to_string(),
    }
}
