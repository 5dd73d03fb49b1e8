//! # Validation Module
//!
//! Input checks that run before any formatting happens.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validate-then-delegate                             │
//! │                                                                         │
//! │  1. Currency code   is_syntactically_valid_code → is_known_currency    │
//! │           │               (fail: InvalidCurrencyCode)                   │
//! │           ▼                                                             │
//! │  2. Amount          trim → comma normalization → decimal grammar       │
//! │           │               (fail: InvalidAmount)                         │
//! │           ▼                                                             │
//! │  3. Platform formatter (only reached with clean input)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Comma Handling
//! A comma is read as the decimal separator, never as a grouping separator.
//! `"100,50"` is one hundred and a half; `"1,234"` is one point two three
//! four. A string that mixes `,` and `.` is rejected.
//!
//! ## Usage
//! ```rust
//! use kurrency_core::validation::{is_known_currency, is_valid_amount};
//!
//! assert!(is_known_currency("usd"));
//! assert!(!is_known_currency("XYZ"));
//!
//! assert!(is_valid_amount("100,50"));
//! assert!(!is_valid_amount("12,34.56"));
//! ```

use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::amount::Amount;
use crate::error::{KurrencyError, KurrencyResult};
use crate::registry::{self, CurrencyMetadata};

/// Plain decimal with optional sign, fraction and exponent.
/// `5.`, `.5`, `+5`, `-1.5e3` all match; `.`, `1.2.3`, `1,5` do not.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>[+-])?(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?(?:[eE](?P<exp>[+-]?[0-9]+))?$")
        .unwrap()
});

// =============================================================================
// Currency Codes
// =============================================================================

/// Shape check only: three alphabetic characters after trimming.
///
/// Says nothing about whether the code is a real currency.
///
/// ## Example
/// ```rust
/// use kurrency_core::validation::is_syntactically_valid_code;
///
/// assert!(is_syntactically_valid_code("XYZ"));
/// assert!(is_syntactically_valid_code(" usd "));
/// assert!(!is_syntactically_valid_code("US1"));
/// assert!(!is_syntactically_valid_code("USDD"));
/// ```
pub fn is_syntactically_valid_code(code: &str) -> bool {
    let code = code.trim();
    code.chars().count() == 3 && code.chars().all(char::is_alphabetic)
}

/// Shape check plus registry membership of the uppercased code.
pub fn is_known_currency(code: &str) -> bool {
    is_syntactically_valid_code(code) && registry::contains(&code.trim().to_uppercase())
}

/// Resolves a code to its registry entry or reports it as invalid.
///
/// The error carries `code` exactly as passed in.
pub fn validate_currency_code(code: &str) -> KurrencyResult<&'static CurrencyMetadata> {
    if !is_syntactically_valid_code(code) {
        return Err(KurrencyError::invalid_code(code));
    }

    CurrencyMetadata::parse(code)
}

// =============================================================================
// Amounts
// =============================================================================

/// Rewrites comma decimal separators as dots.
///
/// Commas are only touched when the string has no dot at all, so
/// `"12,34.56"` comes back unchanged and fails to parse later.
pub fn normalize_amount(amount: &str) -> Cow<'_, str> {
    if amount.contains(',') && !amount.contains('.') {
        Cow::Owned(amount.replace(',', "."))
    } else {
        Cow::Borrowed(amount)
    }
}

/// Integer digits beyond this always overflow `Decimal`.
const MAX_EXACT_INTEGER_DIGITS: i64 = 30;

/// Fraction positions beyond this round to zero in `Decimal`.
const MAX_EXACT_FRACTION_DIGITS: i64 = 64;

/// Parses amount text into a finite [`Amount`].
///
/// Returns `None` for blank input, anything outside the decimal grammar,
/// and values that overflow to infinity. Values too large for `Decimal`
/// come back as [`Amount::Wide`].
///
/// ## Example
/// ```rust
/// use kurrency_core::validation::parse_amount;
/// use kurrency_core::{Amount, Decimal};
///
/// assert_eq!(parse_amount("100,50"), Some(Amount::Exact(Decimal::new(10050, 2))));
/// assert_eq!(parse_amount("-1.5e2"), Some(Amount::Exact(Decimal::new(-150, 0))));
/// assert_eq!(parse_amount("1e30"), Some(Amount::Wide(1e30)));
/// assert_eq!(parse_amount("12.34.56"), None);
/// ```
pub fn parse_amount(amount: &str) -> Option<Amount> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = normalize_amount(trimmed);
    let caps = AMOUNT_RE.captures(&normalized)?;

    let int = caps.name("int").map_or("", |m| m.as_str());
    let frac = caps.name("frac").map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return None;
    }

    let sign = match caps.name("sign").map(|m| m.as_str()) {
        Some("-") => "-",
        _ => "",
    };
    let exp = caps.name("exp").map_or("0", |m| m.as_str());

    let exact = exp
        .parse::<i64>()
        .ok()
        .and_then(|exp| shift_point(int, frac, exp))
        .and_then(|(int, frac)| Decimal::from_str(&format!("{sign}{int}.{frac}")).ok());

    match exact {
        Some(value) => Some(Amount::Exact(value.normalize())),
        None => {
            let int = if int.is_empty() { "0" } else { int };
            let frac = if frac.is_empty() { "0" } else { frac };
            let wide: f64 = format!("{sign}{int}.{frac}e{exp}").parse().ok()?;
            Amount::from_f64(wide)
        }
    }
}

/// Applies a base-ten exponent by moving the decimal point.
///
/// Returns plain `(integer, fraction)` digit strings, or `None` when the
/// integer part is too long for `Decimal`.
fn shift_point(int: &str, frac: &str, exp: i64) -> Option<(String, String)> {
    let zero = || Some(("0".to_string(), "0".to_string()));

    let digits = format!("{int}{frac}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return zero();
    }

    let leading_zeros = (digits.len() - significant.len()) as i64;
    let point = (int.len() as i64 - leading_zeros).checked_add(exp)?;
    if point > MAX_EXACT_INTEGER_DIGITS {
        return None;
    }
    if point < -MAX_EXACT_FRACTION_DIGITS {
        return zero();
    }

    let len = significant.len() as i64;
    let (int, frac) = if point <= 0 {
        ("0".to_string(), format!("{}{significant}", "0".repeat(-point as usize)))
    } else if point >= len {
        (format!("{significant}{}", "0".repeat((point - len) as usize)), "0".to_string())
    } else {
        let (int, frac) = significant.split_at(point as usize);
        (int.to_string(), frac.to_string())
    };

    let frac = match frac.trim_end_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    };
    Some((int, frac))
}

/// True if [`parse_amount`] accepts the text.
pub fn is_valid_amount(amount: &str) -> bool {
    parse_amount(amount).is_some()
}

/// Parses an amount or reports it as invalid with the original text.
pub fn validate_amount(amount: &str) -> KurrencyResult<Amount> {
    parse_amount(amount).ok_or_else(|| KurrencyError::invalid_amount(amount))
}

// =============================================================================
// Unit Tests
// =============================================================================
