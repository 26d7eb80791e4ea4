//! Configuration loading from environment.

use std::env;
use std::fmt;

use helpcenter_gateway::DEFAULT_API_URL;
use helpcenter_types::{ConfigError, Credentials, RuntimeMode};

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub mode: RuntimeMode,
    pub credentials: Credentials,
    pub webhook_secret: String,
    pub api_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Missing provider secrets fall back to empty strings and are reported
    /// through [`Config::warnings`]; the provider rejects them when the client
    /// is first used.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 3000,
        };

        let mode = match lookup("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => RuntimeMode::default(),
        };

        let credentials = Credentials::from_optional(
            lookup("RAZORPAY_KEY_ID"),
            lookup("RAZORPAY_KEY_SECRET"),
        );
        let webhook_secret = lookup("RAZORPAY_WEBHOOK_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_default();
        let api_url = lookup("RAZORPAY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let config = Self {
            port,
            mode,
            credentials,
            webhook_secret,
            api_url,
        };
        for warning in config.warnings() {
            tracing::warn!("{}", warning);
        }
        Ok(config)
    }

    /// Problems worth reporting at startup. Unset and empty values are
    /// treated alike.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.credentials.is_incomplete() {
            warnings.push(
                "RAZORPAY_KEY_ID or RAZORPAY_KEY_SECRET is not set; using empty credentials",
            );
        } else if self.mode.is_production() && !self.credentials.is_live_mode() {
            warnings.push("Running in production without live keys");
        } else if !self.mode.is_production() && self.credentials.is_live_mode() {
            warnings.push("Live keys configured outside production");
        }
        if self.webhook_secret.is_empty() {
            warnings
                .push("RAZORPAY_WEBHOOK_SECRET is not set; every webhook will be rejected");
        }
        warnings
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("mode", &self.mode)
            .field("credentials", &self.credentials)
            .field("webhook_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
