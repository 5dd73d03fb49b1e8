//! Kurrency configuration module.
//!
//! The default locale is loaded from environment variables with fallback to
//! `en-US`:
//!
//! 1. `KURRENCY_LOCALE` - a BCP 47 tag; an invalid value is an error
//! 2. `LC_ALL`, `LC_MONETARY`, `LANG` - POSIX names, first non-empty wins
//!
//! `C`, `POSIX` and unparseable POSIX names resolve to the default.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use kurrency_core::{KurrencyLocale, LocaleError};

/// Explicit locale override.
pub const LOCALE_VAR: &str = "KURRENCY_LOCALE";

/// POSIX locale variables in precedence order.
pub const POSIX_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Kurrency configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KurrencyConfig {
    /// Locale used by the process-wide formatter
    pub locale: KurrencyLocale,
}

impl KurrencyConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = match non_blank(&lookup, LOCALE_VAR) {
            Some(tag) => KurrencyLocale::from_language_tag(&tag).map_err(|source| {
                ConfigError::InvalidLocale {
                    var: LOCALE_VAR,
                    source,
                }
            })?,
            None => posix_locale(&lookup),
        };

        Ok(KurrencyConfig { locale })
    }

    /// Like [`load`](Self::load), but logs and falls back to defaults.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "Invalid kurrency configuration, using defaults");
                KurrencyConfig::default()
            }
        }
    }
}

/// The locale named by `LC_ALL` / `LC_MONETARY` / `LANG`, or `en-US`.
pub fn system_locale() -> KurrencyLocale {
    posix_locale(&|key: &str| env::var(key).ok())
}

fn posix_locale<F>(lookup: &F) -> KurrencyLocale
where
    F: Fn(&str) -> Option<String>,
{
    let Some((var, value)) = POSIX_LOCALE_VARS
        .iter()
        .find_map(|var| non_blank(lookup, var).map(|value| (*var, value)))
    else {
        return KurrencyLocale::default();
    };

    if value == "C" || value == "POSIX" || value.starts_with("C.") {
        debug!(var, value, "POSIX C locale, using default");
        return KurrencyLocale::default();
    }

    match KurrencyLocale::from_posix(&value) {
        Ok(locale) => locale,
        Err(err) => {
            debug!(var, value, error = %err, "Ignoring unparseable locale variable");
            KurrencyLocale::default()
        }
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {source}")]
    InvalidLocale {
        var: &'static str,
        #[source]
        source: LocaleError,
    },
}
