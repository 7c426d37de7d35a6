use crate::i18n::FallbackPolicy;
use anyhow::{bail, Context, Result};
use std::env::VarError;

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP
    pub port: u16,

    // Lookup behavior for unknown language codes
    pub fallback_policy: FallbackPolicy,

    // Protects /metrics when set
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset and blank variables both mean "use the default". A value that is
    /// not valid Unicode is an error.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match env_value("PORT")? {
                Some(value) => value
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
                None => 8080,
            },

            fallback_policy: match env_value("FALLBACK_POLICY")? {
                Some(value) => value.parse().context("FALLBACK_POLICY is invalid")?,
                None => FallbackPolicy::default(),
            },

            api_key: env_value("API_KEY")?,
        })
    }
}

/// Read an optional variable, mapping unset and whitespace-only values to `None`
fn env_value(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            bail!("{} must be valid UTF-8, got {:?}", name, raw)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            fallback_policy: FallbackPolicy::default(),
            api_key: None,
        }
    }
}
