//! # kurrency: Locale-Aware Currency Formatting
//!
//! Validates currency codes and amount text, then renders them through a
//! pluggable [`PlatformFormatter`].
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kurrency Architecture                            │
//! │                                                                         │
//! │   free functions ──┐                                                    │
//! │   (global())       │                                                    │
//! │                    ▼                                                    │
//! │   Currency ──► CurrencyFormatter ──► dyn PlatformFormatter              │
//! │   (ext trait)      │  validate         │                                │
//! │                    │  log              ├── BuiltinFormatter (default)   │
//! │                    │  wrap errors      └── your backend                 │
//! │                    ▼                                                    │
//! │   ┌─────────────────────────────────────────────────────────────────┐   │
//! │   │ kurrency-core: registry • validation • locale • currency • error│   │
//! │   └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`formatter`] - Validate-then-delegate dispatch and the global default
//! - [`platform`] - Backend trait
//! - [`builtin`] - Registry-backed backend
//! - [`currency_ext`] - Formatting methods on [`Currency`]
//! - [`config`] - Environment-driven locale selection
//!
//! ## Example Usage
//!
//! ```rust
//! use kurrency::{CurrencyFormatter, KurrencyError, KurrencyLocale};
//!
//! let formatter = CurrencyFormatter::new(KurrencyLocale::US);
//! assert_eq!(formatter.format_currency_style("100,50", "EUR").unwrap(), "€100.50");
//!
//! let err = formatter.format_currency_style("12.34.56", "USD").unwrap_err();
//! assert!(matches!(err, KurrencyError::InvalidAmount(_)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builtin;
pub mod config;
pub mod currency_ext;
pub mod formatter;
pub mod platform;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use builtin::{BuiltinFormatter, FormatError};
pub use config::{system_locale, ConfigError, KurrencyConfig};
pub use currency_ext::CurrencyFormatExt;
pub use formatter::CurrencyFormatter;
pub use platform::{PlatformFormatter, RenderRequest};

pub use kurrency_core::{
    registry, validation, Amount, BoxError, Currency, CurrencyMetadata, CurrencyStyle, Decimal,
    KurrencyError, KurrencyLocale, KurrencyResult, LocaleError, NumberConventions,
    SymbolPlacement, DEFAULT_FRACTION_DIGITS,
};

// =============================================================================
// Global Shortcuts
// =============================================================================

/// Symbol style through [`CurrencyFormatter::global`].
pub fn format_currency_style(amount: &str, code: &str) -> KurrencyResult<String> {
    CurrencyFormatter::global().format_currency_style(amount, code)
}

/// ISO code style through [`CurrencyFormatter::global`].
pub fn format_iso_currency_style(amount: &str, code: &str) -> KurrencyResult<String> {
    CurrencyFormatter::global().format_iso_currency_style(amount, code)
}

/// Minor-unit digits through [`CurrencyFormatter::global`].
pub fn fraction_digits(code: &str) -> KurrencyResult<u32> {
    CurrencyFormatter::global().fraction_digits(code)
}

/// Minor-unit digits or 2, through [`CurrencyFormatter::global`].
pub fn fraction_digits_or_default(code: &str) -> u32 {
    CurrencyFormatter::global().fraction_digits_or_default(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_shortcuts() {
        assert_eq!(fraction_digits("jpy").unwrap(), 0);
        assert_eq!(fraction_digits_or_default("KWD"), 3);
        assert_eq!(fraction_digits_or_default("UNKNOWN"), 2);
        assert!(matches!(
            format_currency_style("not-a-number", "XX"),
            Err(KurrencyError::InvalidCurrencyCode(_))
        ));
        assert!(matches!(
            format_iso_currency_style("abc", "USD"),
            Err(KurrencyError::InvalidAmount(_))
        ));
        assert!(format_iso_currency_style("1", "USD").unwrap().starts_with("USD "));
    }
}
