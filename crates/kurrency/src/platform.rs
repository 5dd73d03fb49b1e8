//! # Platform Formatter Seam
//!
//! [`PlatformFormatter`] is the one place where numbers become text. The
//! dispatch layer validates input, then hands a [`RenderRequest`] to
//! whichever implementation it was built with.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CurrencyFormatter                    PlatformFormatter                 │
//! │  ─────────────────                    ─────────────────                 │
//! │  validate code ─────────────────────► is_known_currency(code)          │
//! │  validate amount                                                        │
//! │  fraction digits ───────────────────► fraction_digits(code)            │
//! │  render ────────────────────────────► render(&RenderRequest)           │
//! │                                                                         │
//! │  Implementations only ever see:                                        │
//! │  • uppercase, known codes                                              │
//! │  • finite amounts                                                      │
//! │  and must be deterministic for a given request.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are returned as [`BoxError`]; the dispatch layer wraps them into
//! `KurrencyError::FormattingFailure` / `FractionDigitsFailure`.

use kurrency_core::{registry, Amount, BoxError, CurrencyStyle, KurrencyLocale};

/// Everything a platform needs to render one amount.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Parsed, finite amount.
    pub value: Amount,
    /// Uppercase ISO 4217 code.
    pub code: &'a str,
    pub locale: &'a KurrencyLocale,
    pub style: CurrencyStyle,
}

/// A number-formatting backend.
pub trait PlatformFormatter: Send + Sync {
    /// Currency-existence oracle. Defaults to the bundled registry.
    fn is_known_currency(&self, code: &str) -> bool {
        registry::contains(code)
    }

    /// Minor-unit digits for a known code.
    fn fraction_digits(&self, code: &str) -> Result<u32, BoxError>;

    /// Renders a validated amount.
    fn render(&self, request: &RenderRequest<'_>) -> Result<String, BoxError>;
}
