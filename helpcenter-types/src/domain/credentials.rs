use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// API credentials for the payment provider.
///
/// Missing values are carried as empty strings; the provider rejects them
/// at request time rather than at construction.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    key_id: String,
    key_secret: String,
}

impl Credentials {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// Builds credentials from optional values, substituting `""` for absent ones.
    pub fn from_optional(key_id: Option<String>, key_secret: Option<String>) -> Self {
        Self::new(key_id.unwrap_or_default(), key_secret.unwrap_or_default())
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn key_secret(&self) -> &str {
        &self.key_secret
    }

    /// True when either half of the pair is empty.
    pub fn is_incomplete(&self) -> bool {
        self.key_id.is_empty() || self.key_secret.is_empty()
    }

    /// Live keys are issued with an `rzp_live_` prefix.
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

/// Execution mode of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    Development,
    Test,
    Production,
}

impl RuntimeMode {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl AsRef<str> for RuntimeMode {
    fn as_ref(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RuntimeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}
