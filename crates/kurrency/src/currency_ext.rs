//! Formatting straight from a [`Currency`] handle.
//!
//! ```rust
//! use kurrency::{Currency, CurrencyFormatExt, CurrencyStyle, KurrencyLocale};
//!
//! let text = Currency::EUR
//!     .format_amount("1234,5", CurrencyStyle::Standard, &KurrencyLocale::GERMANY)
//!     .unwrap();
//! assert_eq!(text, "1.234,50\u{a0}€");
//! ```

use tracing::debug;

use kurrency_core::{Currency, CurrencyStyle, KurrencyLocale, KurrencyResult};

use crate::formatter::CurrencyFormatter;

/// Extension methods that format an amount in this currency.
pub trait CurrencyFormatExt {
    /// Formats `amount` (text) with the built-in formatter for `locale`.
    fn format_amount(
        &self,
        amount: &str,
        style: CurrencyStyle,
        locale: &KurrencyLocale,
    ) -> KurrencyResult<String>;

    /// Formats a floating point amount; any finite value is accepted.
    fn format_f64(
        &self,
        amount: f64,
        style: CurrencyStyle,
        locale: &KurrencyLocale,
    ) -> KurrencyResult<String> {
        self.format_amount(&amount.to_string(), style, locale)
    }

    /// Like [`format_amount`](Self::format_amount) but `""` on failure.
    fn format_amount_or_empty(
        &self,
        amount: &str,
        style: CurrencyStyle,
        locale: &KurrencyLocale,
    ) -> String {
        self.format_amount(amount, style, locale).unwrap_or_default()
    }
}

impl CurrencyFormatExt for Currency {
    fn format_amount(
        &self,
        amount: &str,
        style: CurrencyStyle,
        locale: &KurrencyLocale,
    ) -> KurrencyResult<String> {
        debug!(currency = %self, ?style, locale = %locale, "Formatting via Currency");
        CurrencyFormatter::new(locale.clone()).format(amount, self.code(), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurrency_core::KurrencyError;

    #[test]
    fn test_format_amount_styles() {
        let us = KurrencyLocale::US;
        assert_eq!(
            Currency::USD.format_amount("1234.5", CurrencyStyle::Standard, &us).unwrap(),
            "$1,234.50"
        );
        assert_eq!(
            Currency::USD.format_amount("1234.5", CurrencyStyle::Iso, &us).unwrap(),
            "USD 1,234.50"
        );
        assert_eq!(
            Currency::JPY.format_amount("99.5", CurrencyStyle::Standard, &KurrencyLocale::JAPAN).unwrap(),
            "¥100"
        );
    }

    #[test]
    fn test_format_f64() {
        let us = KurrencyLocale::US;
        assert_eq!(
            Currency::GBP.format_f64(-12.5, CurrencyStyle::Standard, &us).unwrap(),
            "-£12.50"
        );
        assert!(matches!(
            Currency::GBP.format_f64(f64::NAN, CurrencyStyle::Standard, &us),
            Err(KurrencyError::InvalidAmount(amount)) if amount == "NaN"
        ));
        assert!(Currency::GBP.format_f64(f64::INFINITY, CurrencyStyle::Iso, &us).is_err());
        assert_eq!(
            Currency::USD.format_f64(1e30, CurrencyStyle::Standard, &us).unwrap(),
            "$1,000,000,000,000,000,000,000,000,000,000.00"
        );
        assert_eq!(
            Currency::USD.format_f64(f64::MAX, CurrencyStyle::Iso, &us).unwrap().len(),
            "USD ".len() + 309 + 102 + 3
        );
    }

    #[test]
    fn test_format_amount_or_empty() {
        let us = KurrencyLocale::US;
        assert_eq!(Currency::CHF.format_amount_or_empty("abc", CurrencyStyle::Iso, &us), "");
        assert_eq!(
            Currency::CHF.format_amount_or_empty("1", CurrencyStyle::Iso, &us),
            "CHF 1.00"
        );
    }
}
