//! # Amount Module
//!
//! A parsed, finite monetary amount.
//!
//! Most amounts are held exactly as a [`Decimal`]. Values beyond `Decimal`'s
//! range (about 7.9e28) are still finite numbers, so they are kept as an
//! `f64` instead of being rejected. At that magnitude an `f64` has no
//! fractional part.
//!
//! ```text
//! "1234.5"  ──► Exact(1234.5)
//! "1e-28"   ──► Exact(0.0000000000000000000000000001)
//! "1e30"    ──► Wide(1e30)
//! "1e400"   ──► rejected (not finite)
//! ```

use std::fmt;

use rust_decimal::Decimal;

/// A finite amount, exact where `Decimal` can hold it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Within `Decimal` range; exact.
    Exact(Decimal),
    /// Finite but too large for `Decimal`; always integral.
    Wide(f64),
}

impl Amount {
    /// Converts a finite `f64`, preferring the exact form.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Amount> {
        if !value.is_finite() {
            return None;
        }

        match Decimal::try_from(value) {
            Ok(exact) => Some(Amount::Exact(exact.normalize())),
            Err(_) => Some(Amount::Wide(value)),
        }
    }

    /// The exact value, if in `Decimal` range.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Amount::Exact(value) => Some(*value),
            Amount::Wide(_) => None,
        }
    }

    /// True for values strictly below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Amount::Exact(value) => value.is_sign_negative() && !value.is_zero(),
            Amount::Wide(value) => *value < 0.0,
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Exact(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Exact(value) => value.fmt(f),
            Amount::Wide(value) => value.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_prefers_exact() {
        assert_eq!(Amount::from_f64(12.5), Some(Amount::Exact(Decimal::new(125, 1))));
        assert_eq!(Amount::from_f64(1e30), Some(Amount::Wide(1e30)));
        assert_eq!(Amount::from_f64(-1e30).map(|a| a.is_negative()), Some(true));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert_eq!(Amount::from_f64(f64::NAN), None);
        assert_eq!(Amount::from_f64(f64::INFINITY), None);
        assert_eq!(Amount::from_f64(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        assert!(!Amount::Exact(Decimal::new(-0, 2)).is_negative());
        assert!(!Amount::Wide(-0.0).is_negative());
        assert!(Amount::Exact(Decimal::new(-1, 2)).is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::Exact(Decimal::new(1005, 1)).to_string(), "100.5");
        assert_eq!(Amount::Wide(1e29).to_string(), "100000000000000000000000000000");
    }
}
