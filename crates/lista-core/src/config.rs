//! # Configuration
//!
//! Display configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (applied by the front end)
//! 2. Environment variables (`LISTA_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;
use crate::money::Money;
use crate::{DEFAULT_CURRENCY_LABEL, DEFAULT_TITLE};

/// Environment variable names.
pub const ENV_TITLE: &str = "LISTA_TITLE";
pub const ENV_CURRENCY: &str = "LISTA_CURRENCY";
pub const ENV_SEED: &str = "LISTA_SEED";

/// Shopping list configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ListConfig {
    /// Header title.
    pub title: String,

    /// Label prefixed to every amount, e.g. `"R$"`.
    pub currency_label: String,

    /// Start with the sample items.
    pub seed: bool,
}

impl Default for ListConfig {
    /// ## Default Values
    /// - Title: "Lista de Compras"
    /// - Currency: R$
    /// - Seed items: on
    fn default() -> Self {
        ListConfig {
            title: DEFAULT_TITLE.to_string(),
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            seed: true,
        }
    }
}

impl ListConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `LISTA_TITLE`: header title
    /// - `LISTA_CURRENCY`: currency label
    /// - `LISTA_SEED`: `true`/`false`, `1`/`0`, `yes`/`no`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key/value source.
    ///
    /// Unset keys keep their defaults. Blank title or currency values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ListConfig::default();

        if let Some(title) = lookup(ENV_TITLE).filter(|v| !v.trim().is_empty()) {
            config.title = title.trim().to_string();
        }

        if let Some(label) = lookup(ENV_CURRENCY).filter(|v| !v.trim().is_empty()) {
            config.currency_label = label.trim().to_string();
        }

        if let Some(seed) = lookup(ENV_SEED) {
            config.seed = parse_bool(&seed).ok_or_else(|| ConfigError::InvalidValue {
                var: ENV_SEED.to_string(),
                value: seed.clone(),
            })?;
        }

        Ok(config)
    }

    /// Formats an amount with the currency label and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use lista_core::{ListConfig, Money};
    ///
    /// let config = ListConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(6900)), "R$ 69.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", self.currency_label, amount)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
