use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::MailerError;

pub mod resend;

/// A composed transactional email, ready for the delivery provider.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub reply_to: String,
}

#[derive(Debug, Clone, Default)]
pub struct DeliveryReceipt {
    pub id: Option<String>,
}

/// Delivery seam. Production uses [`resend::ResendMailer`]; tests inject
/// spies or mocks.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailerError>;
}

#[async_trait]
impl<M: Mailer + ?Sized> Mailer for Arc<M> {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailerError> {
        (**self).send(email).await
    }
}
