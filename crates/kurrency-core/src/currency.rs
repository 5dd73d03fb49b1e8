//! # Currency Handle
//!
//! [`Currency`] is a currency code that has already passed validation.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Currency::from_code("usd")  ──┐                                       │
//! │                                ├──► Currency { code: "USD" }  (equal)  │
//! │  Currency::USD  ───────────────┘                                       │
//! │                                                                         │
//! │  Equality and hashing look at the code only. Fraction digits, symbol   │
//! │  and name are looked up in the registry on demand, never stored.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The code is borrowed from the registry's static table, so a handle is
//! `Copy` and costs one pointer.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{KurrencyError, KurrencyResult};
use crate::registry::{self, CurrencyMetadata};
use crate::validation::is_known_currency;

/// Fraction digits assumed when a lookup fails.
pub const DEFAULT_FRACTION_DIGITS: u32 = 2;

// =============================================================================
// Currency Style
// =============================================================================

/// How an amount is labelled when formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyStyle {
    /// Currency symbol, e.g. `$1,234.56`.
    #[default]
    Standard,
    /// ISO 4217 code, e.g. `USD 1,234.56`.
    Iso,
}

// =============================================================================
// Currency
// =============================================================================

/// A validated ISO 4217 currency.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency {
    code: &'static str,
}

impl Currency {
    /// US Dollar
    pub const USD: Currency = Currency { code: "USD" };
    /// Euro
    pub const EUR: Currency = Currency { code: "EUR" };
    /// British Pound
    pub const GBP: Currency = Currency { code: "GBP" };
    /// Japanese Yen
    pub const JPY: Currency = Currency { code: "JPY" };
    /// Australian Dollar
    pub const AUD: Currency = Currency { code: "AUD" };
    /// Canadian Dollar
    pub const CAD: Currency = Currency { code: "CAD" };
    /// Swiss Franc
    pub const CHF: Currency = Currency { code: "CHF" };
    /// Chinese Yuan
    pub const CNY: Currency = Currency { code: "CNY" };
    /// Indian Rupee
    pub const INR: Currency = Currency { code: "INR" };
    /// South Korean Won
    pub const KRW: Currency = Currency { code: "KRW" };
    /// Mexican Peso
    pub const MXN: Currency = Currency { code: "MXN" };
    /// Brazilian Real
    pub const BRL: Currency = Currency { code: "BRL" };
    /// South African Rand
    pub const ZAR: Currency = Currency { code: "ZAR" };
    /// New Zealand Dollar
    pub const NZD: Currency = Currency { code: "NZD" };
    /// Singapore Dollar
    pub const SGD: Currency = Currency { code: "SGD" };
    /// Hong Kong Dollar
    pub const HKD: Currency = Currency { code: "HKD" };

    /// Validates a code and returns a handle for it.
    ///
    /// On failure the error carries `code` exactly as passed in.
    ///
    /// ## Example
    /// ```rust
    /// use kurrency_core::{Currency, KurrencyError};
    ///
    /// let dollar = Currency::from_code("usd").unwrap();
    /// assert_eq!(dollar.code(), "USD");
    /// assert_eq!(dollar, Currency::USD);
    ///
    /// assert!(matches!(
    ///     Currency::from_code("INVALID"),
    ///     Err(KurrencyError::InvalidCurrencyCode(code)) if code == "INVALID"
    /// ));
    /// ```
    pub fn from_code(code: &str) -> KurrencyResult<Currency> {
        if !is_known_currency(code) {
            return Err(KurrencyError::invalid_code(code));
        }

        let metadata = CurrencyMetadata::parse(code)?;
        Ok(Currency {
            code: metadata.code,
        })
    }

    /// Same check as [`Currency::from_code`] without building an error.
    pub fn is_valid(code: &str) -> bool {
        is_known_currency(code)
    }

    /// The uppercase ISO 4217 code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry entry for this currency.
    pub fn metadata(&self) -> KurrencyResult<&'static CurrencyMetadata> {
        CurrencyMetadata::parse(self.code)
    }

    /// Minor-unit digits from the registry.
    pub fn fraction_digits(&self) -> KurrencyResult<u32> {
        self.metadata().map(|metadata| metadata.fraction_digits)
    }

    /// Minor-unit digits, or [`DEFAULT_FRACTION_DIGITS`] if unknown.
    pub fn fraction_digits_or_default(&self) -> u32 {
        self.fraction_digits().unwrap_or(DEFAULT_FRACTION_DIGITS)
    }

    /// Every currency in the registry as a handle.
    pub fn all() -> impl Iterator<Item = Currency> {
        registry::all().iter().map(|metadata| Currency {
            code: metadata.code,
        })
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency(code={})", self.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for Currency {
    type Err = KurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = KurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::from_code(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code.to_string()
    }
}

impl From<&'static CurrencyMetadata> for Currency {
    fn from(metadata: &'static CurrencyMetadata) -> Self {
        Currency {
            code: metadata.code,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(currency: &Currency) -> u64 {
        let mut hasher = DefaultHasher::new();
        currency.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_from_code_usd() {
        let first = Currency::from_code("USD").unwrap();
        let second = Currency::from_code("USD").unwrap();

        assert_eq!(first.code(), "USD");
        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn test_from_code_uppercases() {
        let lower = Currency::from_code("eur").unwrap();
        assert_eq!(lower.code(), "EUR");
        assert_eq!(lower, Currency::EUR);
        assert_eq!(hash_of(&lower), hash_of(&Currency::EUR));
    }

    #[test]
    fn test_from_code_invalid_keeps_original_input() {
        for input in ["INVALID", "xx", "", "   ", "XYZ", "U5D"] {
            match Currency::from_code(input) {
                Err(KurrencyError::InvalidCurrencyCode(code)) => assert_eq!(code, input),
                other => panic!("expected InvalidCurrencyCode for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(Currency::is_valid("USD"));
        assert!(Currency::is_valid("jpy"));
        assert!(!Currency::is_valid("XYZ"));
        assert!(!Currency::is_valid("US"));
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(Currency::JPY.fraction_digits().unwrap(), 0);
        assert_eq!(Currency::USD.fraction_digits().unwrap(), 2);
        assert_eq!(Currency::from_code("KWD").unwrap().fraction_digits_or_default(), 3);
    }

    #[test]
    fn test_constants_are_registered() {
        for currency in [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::AUD,
            Currency::CAD,
            Currency::CHF,
            Currency::CNY,
            Currency::INR,
            Currency::KRW,
            Currency::MXN,
            Currency::BRL,
            Currency::ZAR,
            Currency::NZD,
            Currency::SGD,
            Currency::HKD,
        ] {
            assert_eq!(Currency::from_code(currency.code()).unwrap(), currency);
            assert!(currency.metadata().is_ok());
        }
    }

    #[test]
    fn test_all_handles() {
        assert_eq!(Currency::all().count(), registry::all().len());
        assert!(Currency::all().any(|currency| currency == Currency::KRW));
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq!(format!("{:?}", Currency::USD), "Currency(code=USD)");
        assert_eq!(Currency::GBP.to_string(), "GBP");
    }

    #[test]
    fn test_serde_goes_through_validation() {
        assert_eq!(serde_json::to_string(&Currency::CHF).unwrap(), "\"CHF\"");

        let parsed: Currency = serde_json::from_str("\"chf\"").unwrap();
        assert_eq!(parsed, Currency::CHF);

        assert!(serde_json::from_str::<Currency>("\"XYZ\"").is_err());
    }

    #[test]
    fn test_style_default_and_serde() {
        assert_eq!(CurrencyStyle::default(), CurrencyStyle::Standard);
        assert_eq!(serde_json::to_string(&CurrencyStyle::Iso).unwrap(), "\"iso\"");
    }
}
