use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

use crate::constants::GENERIC_FAILURE_MESSAGE;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    BadRequest(String),
    NotFound(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors
                    .iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => serde_json::json!({
                "code": "BAD_REQUEST",
                "message": "Validation failed",
                "details": errors
            }),
            AppError::BadRequest(msg) => serde_json::json!({
                "code": "BAD_REQUEST",
                "message": msg
            }),
            AppError::NotFound(msg) => serde_json::json!({
                "code": "NOT_FOUND",
                "message": msg
            }),
            // The internal detail stays in logs; callers get a fixed message.
            AppError::InternalError(_) => serde_json::json!({
                "code": "INTERNAL_SERVER_ERROR",
                "message": GENERIC_FAILURE_MESSAGE
            }),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        AppError::ValidationError(field_errors)
    }
}

impl From<MailerError> for AppError {
    fn from(err: MailerError) -> Self {
        match err {
            // Provider rejections are usually bad recipient/sender data the
            // caller should hear about verbatim.
            MailerError::Provider(msg) => AppError::BadRequest(msg),
            MailerError::NotConfigured | MailerError::Transport(_) => {
                AppError::InternalError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Display)]
pub enum MailerError {
    #[display("Email service not configured (missing RESEND_API_KEY)")]
    NotConfigured,

    #[display("{_0}")]
    Provider(String),

    #[display("Email transport failed: {_0}")]
    Transport(String),
}

impl From<reqwest::Error> for MailerError {
    fn from(err: reqwest::Error) -> Self {
        MailerError::Transport(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
