//! # Built-in Formatter
//!
//! A pure-Rust [`PlatformFormatter`] backed by the bundled registry and the
//! locale conventions table in kurrency-core.
//!
//! ## Rendering Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value 1234.565, USD, de-DE, Standard                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  round to fraction digits (half to even)   → 1234.56                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  group integer part in threes              → 1.234 | 56                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  join with locale decimal separator        → 1.234,56                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  place symbol (Standard) or code (Iso)     → 1.234,56 $                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ISO style is always `CODE number` with a plain space: `USD -5.00`.
//!
//! Grouping is always in threes; lakh/crore grouping for Indian locales is
//! not modelled.

use rust_decimal::RoundingStrategy;
use thiserror::Error;

use kurrency_core::{registry, Amount, BoxError, CurrencyStyle, NumberConventions, SymbolPlacement};

use crate::platform::{PlatformFormatter, RenderRequest};

const NO_BREAK_SPACE: char = '\u{a0}';

/// Failures of the built-in formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The code is not in the bundled registry.
    #[error("Currency not supported by the built-in formatter: {0}")]
    UnsupportedCurrency(String),
}

/// Registry-backed formatter used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFormatter;

impl BuiltinFormatter {
    pub fn new() -> Self {
        BuiltinFormatter
    }
}

impl PlatformFormatter for BuiltinFormatter {
    fn fraction_digits(&self, code: &str) -> Result<u32, BoxError> {
        let metadata = registry::lookup(code)
            .ok_or_else(|| FormatError::UnsupportedCurrency(code.to_string()))?;
        Ok(metadata.fraction_digits)
    }

    fn render(&self, request: &RenderRequest<'_>) -> Result<String, BoxError> {
        let metadata = registry::lookup(request.code)
            .ok_or_else(|| FormatError::UnsupportedCurrency(request.code.to_string()))?;
        let conventions = request.locale.conventions();

        let (negative, number) =
            format_number(request.value, metadata.fraction_digits, &conventions);
        let sign = if negative { "-" } else { "" };

        let rendered = match request.style {
            CurrencyStyle::Iso => format!("{} {sign}{number}", metadata.code),
            CurrencyStyle::Standard => match conventions.symbol_placement {
                SymbolPlacement::Before => format!("{sign}{}{number}", metadata.symbol),
                SymbolPlacement::BeforeWithSpace => {
                    format!("{sign}{}{NO_BREAK_SPACE}{number}", metadata.symbol)
                }
                SymbolPlacement::AfterWithSpace => {
                    format!("{sign}{number}{NO_BREAK_SPACE}{}", metadata.symbol)
                }
            },
        };

        Ok(rendered)
    }
}

/// Rounds and lays out the magnitude; returns whether a minus sign is due.
fn format_number(value: Amount, fraction_digits: u32, conventions: &NumberConventions) -> (bool, String) {
    let (negative, magnitude) = match value {
        Amount::Exact(value) => {
            let rounded = value.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointNearestEven);
            (Amount::Exact(rounded).is_negative(), rounded.abs().to_string())
        }
        // Integral at this magnitude; shortest round-trip digits.
        Amount::Wide(value) => (value < 0.0, value.abs().to_string()),
    };

    let (int_part, frac_part) = magnitude.split_once('.').unwrap_or((magnitude.as_str(), ""));
    let frac_part = &frac_part[..frac_part.len().min(fraction_digits as usize)];

    let mut number = group_digits(int_part, conventions.grouping_separator);
    if fraction_digits > 0 {
        number.push(conventions.decimal_separator);
        number.push_str(frac_part);
        for _ in frac_part.len()..fraction_digits as usize {
            number.push('0');
        }
    }

    (negative, number)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
