use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Whether the first `x-forwarded-for` value identifies the client.
    /// Enable only behind a proxy that sets the header itself.
    #[serde(default = "default_trust_forwarded")]
    pub trust_x_forwarded_for: bool,

    #[serde(default)]
    pub resend_api_key: Option<String>,

    #[serde(default = "default_contact_from")]
    pub contact_from: String,

    /// Comma-separated recipient list for relayed submissions.
    #[serde(default = "default_contact_to")]
    pub contact_to: String,

    #[serde(default = "default_rate_limit")]
    pub contact_rate_limit: u32,

    #[serde(default = "default_rate_window_secs")]
    pub contact_rate_window_secs: u64,

    #[serde(default = "default_min_fill_ms")]
    pub contact_min_fill_ms: i64,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Nexor-Site-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_trust_forwarded() -> bool {
    true
}
fn default_contact_from() -> String {
    "Nexor Software <noreply@auth.nexor-software.de>".to_string()
}
fn default_contact_to() -> String {
    "info@nexor-software.de".to_string()
}
fn default_rate_limit() -> u32 {
    5
}
fn default_rate_window_secs() -> u64 {
    60
}
fn default_min_fill_ms() -> i64 {
    500
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            cors_allowed_origins: default_cors_origins(),
            trust_x_forwarded_for: default_trust_forwarded(),
            resend_api_key: None,
            contact_from: default_contact_from(),
            contact_to: default_contact_to(),
            contact_rate_limit: default_rate_limit(),
            contact_rate_window_secs: default_rate_window_secs(),
            contact_min_fill_ms: default_min_fill_ms(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!("config/{}", env_name.to_string().to_lowercase()))
                    .required(false),
            )
            .add_source(Environment::with_prefix("APP").separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // The Resend SDK convention is a bare RESEND_API_KEY variable; honor
        // it when the prefixed form is absent.
        if config.resend_api_key.is_none() {
            config.resend_api_key = env_non_empty("APP_RESEND_API_KEY")
                .or_else(|| env_non_empty("RESEND_API_KEY"));
        }

        // `separator("_")` turns multi-word variables like APP_CONTACT_TO
        // into nested keys that never reach their flat fields, so those
        // overrides are read from the environment directly.
        if let Some(v) = env_non_empty("APP_CONTACT_FROM") {
            config.contact_from = v;
        }
        if let Some(v) = env_non_empty("APP_CONTACT_TO") {
            config.contact_to = v;
        }
        if let Some(v) = env_non_empty("APP_CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = vec![v];
        }
        if let Some(v) = env_parsed("APP_TRUST_X_FORWARDED_FOR")? {
            config.trust_x_forwarded_for = v;
        }
        if let Some(v) = env_parsed("APP_WORKER_COUNT")? {
            config.worker_count = v;
        }
        if let Some(v) = env_parsed("APP_CONTACT_RATE_LIMIT")? {
            config.contact_rate_limit = v;
        }
        if let Some(v) = env_parsed("APP_CONTACT_RATE_WINDOW_SECS")? {
            config.contact_rate_window_secs = v;
        }
        if let Some(v) = env_parsed("APP_CONTACT_MIN_FILL_MS")? {
            config.contact_min_fill_ms = v;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.contact_from.trim().is_empty() {
            errors.push("CONTACT_FROM cannot be empty");
        }
        if self.contact_recipients().is_empty() {
            errors.push("CONTACT_TO must name at least one recipient");
        }
        if self.contact_rate_limit == 0 {
            errors.push("CONTACT_RATE_LIMIT must be at least 1");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn contact_recipients(&self) -> Vec<String> {
        self.contact_to
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_parsed<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match env_non_empty(key) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Message(format!("{key} has an invalid value: {raw}"))),
        None => Ok(None),
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for Option<String> {
    fn redact(&self) -> &str {
        match self {
            Some(s) => s.as_str().redact(),
            None => "[MISSING]",
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("trust_x_forwarded_for", &self.trust_x_forwarded_for)
            .field("resend_api_key", &self.resend_api_key.redact())
            .field("contact_from", &self.contact_from)
            .field("contact_to", &self.contact_to)
            .field("contact_rate_limit", &self.contact_rate_limit)
            .field("contact_rate_window_secs", &self.contact_rate_window_secs)
            .field("contact_min_fill_ms", &self.contact_min_fill_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn recipient_list_splits_and_trims() {
        let config = AppConfig {
            contact_to: "info@nexor-software.de, ops@nexor-software.de ,".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.contact_recipients(),
            vec!["info@nexor-software.de", "ops@nexor-software.de"]
        );
    }

    #[test]
    fn multi_word_env_overrides_are_applied() {
        unsafe {
            env::set_var("APP_CONTACT_TO", "ops@nexor-software.de");
            env::set_var(
                "APP_CONTACT_FROM",
                "Nexor Software <kontakt@nexor-software.de>",
            );
            env::set_var("APP_CONTACT_RATE_LIMIT", "9");
        }

        let config = AppConfig::new().expect("config should load");

        unsafe {
            env::remove_var("APP_CONTACT_TO");
            env::remove_var("APP_CONTACT_FROM");
            env::remove_var("APP_CONTACT_RATE_LIMIT");
        }

        assert_eq!(config.contact_recipients(), vec!["ops@nexor-software.de"]);
        assert_eq!(
            config.contact_from,
            "Nexor Software <kontakt@nexor-software.de>"
        );
        assert_eq!(config.contact_rate_limit, 9);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AppConfig {
            resend_api_key: Some("re_secret_key".to_string()),
            ..Default::default()
        };
        let dump = format!("{:?}", config);
        assert!(!dump.contains("re_secret_key"));
        assert!(dump.contains("[REDACTED]"));
    }
}
