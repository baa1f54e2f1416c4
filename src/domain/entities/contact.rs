use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::SUBMISSION_SUCCESS_MESSAGE;

/// Incoming contact-form payload. Field names mirror the wire format the
/// frontend posts (camelCase plus the `company`/`_ts` anti-abuse fields).
/// Never persisted; validated, relayed by email, then dropped.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"), length(max = 320))]
    pub email: String,

    #[validate(length(min = 1, max = 150, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,

    /// Honeypot. Hidden from humans by the frontend; bots fill it in.
    #[serde(default)]
    pub company: Option<String>,

    /// Client-reported render timestamp (epoch ms) for the fill-time check.
    #[serde(default, rename = "_ts")]
    pub started_at: Option<String>,
}

impl ContactForm {
    pub fn honeypot_tripped(&self) -> bool {
        self.company
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Milliseconds between the client rendering the form and submitting it,
    /// when the client sent a parseable timestamp. Negative values (client
    /// clock ahead of ours) are kept as-is so they fail the minimum-fill
    /// check like any other implausible reading.
    pub fn fill_time_ms(&self) -> Option<i64> {
        let started: i64 = self.started_at.as_deref()?.trim().parse().ok()?;
        Some(Utc::now().timestamp_millis() - started)
    }
}

/// What the pipeline decided. `HoneypotTripped` is kept distinct from a real
/// send so tests and logs can see the trap fire, while the HTTP response is
/// deliberately indistinguishable from success.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent { id: Option<String> },
    HoneypotTripped,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<SubmissionOutcome> for ContactResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        let id = match outcome {
            SubmissionOutcome::Sent { id } => id,
            SubmissionOutcome::HoneypotTripped => None,
        };
        ContactResponse {
            success: true,
            message: SUBMISSION_SUCCESS_MESSAGE.to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> ContactForm {
        ContactForm {
            first_name: "Anna".to_string(),
            last_name: "Beta".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
            company: None,
            started_at: None,
        }
    }

    #[test]
    fn blank_honeypot_does_not_trip() {
        let mut form = base_form();
        form.company = Some("   ".to_string());
        assert!(!form.honeypot_tripped());
    }

    #[test]
    fn filled_honeypot_trips() {
        let mut form = base_form();
        form.company = Some("Acme Inc".to_string());
        assert!(form.honeypot_tripped());
    }

    #[test]
    fn unparseable_timestamp_yields_no_fill_time() {
        let mut form = base_form();
        form.started_at = Some("not-a-number".to_string());
        assert_eq!(form.fill_time_ms(), None);
    }

    #[test]
    fn old_timestamp_yields_large_fill_time() {
        let mut form = base_form();
        form.started_at = Some((Utc::now().timestamp_millis() - 10_000).to_string());
        assert!(form.fill_time_ms().unwrap() >= 10_000);
    }

    #[test]
    fn oversized_message_fails_validation() {
        let mut form = base_form();
        form.message = "x".repeat(5001);
        assert!(form.validate().is_err());
    }

    #[test]
    fn honeypot_response_matches_real_success_shape() {
        let trapped = ContactResponse::from(SubmissionOutcome::HoneypotTripped);
        let sent = ContactResponse::from(SubmissionOutcome::Sent { id: None });
        assert!(trapped.success && sent.success);
        assert_eq!(trapped.message, sent.message);
    }
}
