//! # Error Types
//!
//! Error taxonomy for kurrency.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kurrency-core errors (this file)                                      │
//! │  ├── KurrencyError  - Validation + formatting failures (closed set)    │
//! │  └── LocaleError    - Language tag rejected                            │
//! │                                                                         │
//! │  kurrency errors (separate crate)                                      │
//! │  ├── FormatError    - Built-in platform adapter failures               │
//! │  └── ConfigError    - Environment configuration problems               │
//! │                                                                         │
//! │  Flow: FormatError ──(cause)──► KurrencyError::FormattingFailure       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Validation failures carry the offending input exactly as supplied
//! 2. Delegate failures are wrapped, the platform error stays reachable via
//!    [`std::error::Error::source`]
//! 3. No variant is ever produced by a panic

use thiserror::Error;

/// Opaque cause produced by a platform formatter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// =============================================================================
// Kurrency Error
// =============================================================================

/// Every way a currency operation can fail.
///
/// Validation variants are returned before the platform formatter is touched.
/// The two failure variants only occur after validation passed.
#[derive(Debug, Error)]
pub enum KurrencyError {
    /// Code failed the syntax check or is not a recognized currency.
    ///
    /// ## When This Occurs
    /// - Blank input, wrong length, digits or punctuation
    /// - Syntactically fine but unknown (`"XYZ"`)
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// Amount is blank, not a number after normalization, or not finite.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The platform formatter could not render a validated amount.
    #[error("Formatting failed for {code}: {amount}")]
    FormattingFailure {
        code: String,
        amount: String,
        #[source]
        source: BoxError,
    },

    /// The platform fraction-digit lookup failed for a validated code.
    #[error("Failed to get fraction digits for {code}")]
    FractionDigitsFailure {
        code: String,
        #[source]
        source: BoxError,
    },
}

impl KurrencyError {
    /// Creates an InvalidCurrencyCode error.
    pub fn invalid_code(code: impl Into<String>) -> Self {
        KurrencyError::InvalidCurrencyCode(code.into())
    }

    /// Creates an InvalidAmount error.
    pub fn invalid_amount(amount: impl Into<String>) -> Self {
        KurrencyError::InvalidAmount(amount.into())
    }

    /// Wraps a renderer failure.
    pub fn formatting_failure(
        code: impl Into<String>,
        amount: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        KurrencyError::FormattingFailure {
            code: code.into(),
            amount: amount.into(),
            source: source.into(),
        }
    }

    /// Wraps a fraction-digit lookup failure.
    pub fn fraction_digits_failure(code: impl Into<String>, source: impl Into<BoxError>) -> Self {
        KurrencyError::FractionDigitsFailure {
            code: code.into(),
            source: source.into(),
        }
    }

    /// True for the two variants produced by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            KurrencyError::InvalidCurrencyCode(_) | KurrencyError::InvalidAmount(_)
        )
    }
}

// =============================================================================
// Locale Error
// =============================================================================

/// A language tag was rejected.
///
/// Blank and malformed input are kept apart so callers can log them
/// differently; both mean the same thing to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Language tag cannot be blank")]
    Blank,

    #[error("Invalid language tag format: {0}")]
    Malformed(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with KurrencyError.
pub type KurrencyResult<T> = Result<T, KurrencyError>;

// =============================================================================
// Unit Tests
// =============================================================================
