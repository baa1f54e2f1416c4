use std::{sync::Arc, time::Duration};

mod domain;
mod infrastructure;
mod interfaces;
pub mod background_task;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{content, entities, use_cases};
pub use infrastructure::{limiter, mailer, utils};
pub use interfaces::{handlers, routes};

use limiter::rate_limit::InMemoryRateLimitStore;
use mailer::{resend::ResendMailer, Mailer};
use use_cases::contact::{ContactHandler, ContactOptions};

pub type AppContactHandler = ContactHandler<InMemoryRateLimitStore, Arc<dyn Mailer>>;

pub struct AppState {
    pub contact_handler: AppContactHandler,
    /// Clone of the handler's store, kept for the eviction sweep.
    pub rate_limits: InMemoryRateLimitStore,
    pub trust_forwarded: bool,
    pub mailer_configured: bool,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let mailer = ResendMailer::new(config);
        let configured = mailer.is_configured();
        Self::with_mailer(config, Arc::new(mailer), configured)
    }

    /// Wiring seam for tests: any [`Mailer`] can stand in for Resend.
    pub fn with_mailer(
        config: &settings::AppConfig,
        mailer: Arc<dyn Mailer>,
        mailer_configured: bool,
    ) -> Self {
        let rate_limits = InMemoryRateLimitStore::new(
            Duration::from_secs(config.contact_rate_window_secs),
            config.contact_rate_limit,
        );
        let contact_handler = ContactHandler::new(
            rate_limits.clone(),
            mailer,
            ContactOptions::from(config),
        );

        AppState {
            contact_handler,
            rate_limits,
            trust_forwarded: config.trust_x_forwarded_for,
            mailer_configured,
        }
    }
}
