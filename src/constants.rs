use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Returned for every accepted submission, including honeypot traps.
pub const SUBMISSION_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Returned for any internal fault; never carries provider or config detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

pub const CONTACT_SUBJECT_PREFIX: &str = "Contact Form: ";
