//! # Configuration
//!
//! Endpoints, resources and animation timings for the landing page.
//!
//! Defaults are baked in at build time and may be overridden with the
//! `PIGGY_RATES_URL`, `PIGGY_API_BASE` and `PIGGY_KEYCLOAK_CONFIG` environment
//! variables. A page can also embed a JSON document which is parsed with
//! [`FrontendConfig::from_json`]; fields it omits keep their defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_RATES_URL: &str = "https://api.ratesapi.io/api/latest?base=RUB&symbols=EUR,USD";
const DEFAULT_IDENTITY_CONFIG: &str = "keycloak.json";
const DEFAULT_AVATAR_URL: &str = "images/userpic.jpg";

/// Errors raised while loading the frontend configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The override document is not valid JSON for this shape
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration: {field} - {message}")]
    Invalid {
        /// Offending field
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    fn invalid<T: Into<String>, U: Into<String>>(field: T, message: U) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Frontend configuration for endpoints and timings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Exchange-rate service, RUB based, EUR and USD symbols
    pub rates_url: String,

    /// Base URL the backend account paths are resolved against. Empty means
    /// the page's own URL.
    pub api_base: String,

    /// Resource the identity-provider client is constructed with
    pub identity_config: String,

    /// Avatar preloaded before the greeting page is revealed
    pub avatar_url: String,

    /// Log level for the browser console
    pub log_level: String,

    /// Delays of the landing transitions
    pub timings: Timings,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            rates_url: option_env!("PIGGY_RATES_URL")
                .unwrap_or(DEFAULT_RATES_URL)
                .to_string(),
            api_base: option_env!("PIGGY_API_BASE").unwrap_or("").to_string(),
            identity_config: option_env!("PIGGY_KEYCLOAK_CONFIG")
                .unwrap_or(DEFAULT_IDENTITY_CONFIG)
                .to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            log_level: "info".to_string(),
            timings: Timings::default(),
        }
    }
}

impl FrontendConfig {
    /// Parses a JSON document and validates the result.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the document is not valid JSON for this
    /// structure or a value fails validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would otherwise only fail at request time.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rates_url.starts_with("http://") || self.rates_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "rates_url",
                "must be an absolute http(s) URL",
            ));
        }
        if self.identity_config.trim().is_empty() {
            return Err(ConfigError::invalid("identity_config", "must not be empty"));
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed console log level.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for names `log` does not know.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::invalid("log_level", format!("unknown level '{}'", self.log_level)))
    }
}

/// Fixed delays, in milliseconds, of the landing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Avatar loaded until the greeting page appears
    pub greeting_reveal_ms: u64,
    /// Login form shown until the first automatic shake
    pub initial_shake_ms: u64,
    /// First automatic shake until the second
    pub shake_repeat_ms: u64,
    /// Hover shake start until it is toggled off
    pub hover_shake_ms: u64,
    /// Skip-mail click until the greeting page appears
    pub skip_mail_ms: u64,
    /// Card flip back from the info side until the panel toggles
    pub info_panel_ms: u64,
    /// Card flip until the avatar animation starts
    pub avatar_animation_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            greeting_reveal_ms: 500,
            initial_shake_ms: 700,
            shake_repeat_ms: 1900,
            hover_shake_ms: 1700,
            skip_mail_ms: 300,
            info_panel_ms: 400,
            avatar_animation_ms: 1000,
        }
    }
}

impl Timings {
    /// Delay before the greeting page appears.
    pub const fn greeting_reveal(&self) -> Duration {
        Duration::from_millis(self.greeting_reveal_ms)
    }

    /// Delay before the first automatic shake.
    pub const fn initial_shake(&self) -> Duration {
        Duration::from_millis(self.initial_shake_ms)
    }

    /// Delay before the second automatic shake.
    pub const fn shake_repeat(&self) -> Duration {
        Duration::from_millis(self.shake_repeat_ms)
    }

    /// Length of a hover shake.
    pub const fn hover_shake(&self) -> Duration {
        Duration::from_millis(self.hover_shake_ms)
    }

    /// Delay between skip-mail and the greeting.
    pub const fn skip_mail(&self) -> Duration {
        Duration::from_millis(self.skip_mail_ms)
    }

    /// Delay before the info panel toggles.
    pub const fn info_panel(&self) -> Duration {
        Duration::from_millis(self.info_panel_ms)
    }

    /// Delay before the avatar animates.
    pub const fn avatar_animation(&self) -> Duration {
        Duration::from_millis(self.avatar_animation_ms)
    }
}
