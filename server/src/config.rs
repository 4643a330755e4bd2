//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Language used for composed notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// Spanish (default).
    Es,
    /// English.
    En,
}

impl Locale {
    /// Parse from a string (e.g., `"es"`).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Convert to string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Shared secret expected in the `?token=` query parameter
    pub token: String,

    /// Discord incoming-webhook URL events are forwarded to
    pub discord_webhook_url: String,

    /// Optional deep-link template back into `HacknPlan`, with `{Field}`
    /// placeholders substituted from top-level payload fields
    pub hnp_url_template: Option<String>,

    /// Notification language (default: Spanish)
    pub locale: Locale,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            token: env::var("TOKEN").context("TOKEN must be set")?,
            discord_webhook_url: env::var("DISCORD_WEBHOOK_URL")
                .context("DISCORD_WEBHOOK_URL must be set")?,
            hnp_url_template: env::var("HNP_URL_TEMPLATE").ok(),
            locale: env::var("NOTIF_LOCALE")
                .ok()
                .and_then(|v| Locale::parse_str(v.trim()))
                .unwrap_or(Locale::Es),
        })
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            token: "test-token".into(),
            discord_webhook_url: "http://127.0.0.1:9/webhook".into(),
            hnp_url_template: None,
            locale: Locale::Es,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_round_trip() {
        assert_eq!(Locale::parse_str("es"), Some(Locale::Es));
        assert_eq!(Locale::parse_str("en"), Some(Locale::En));
        assert_eq!(Locale::parse_str("fr"), None);
        assert_eq!(Locale::En.as_str(), "en");
    }
}
