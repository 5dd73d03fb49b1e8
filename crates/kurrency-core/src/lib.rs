//! # kurrency-core: Currency Data & Validation
//!
//! The pure half of kurrency. Everything here is deterministic, allocation
//! light and free of I/O, so it can be shared by any formatter backend.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kurrency Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kurrency (dispatch crate)                      │   │
//! │  │   CurrencyFormatter ──► PlatformFormatter ──► BuiltinFormatter  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ kurrency-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────┐ │   │
//! │  │   │ registry │ │validation│ │  locale  │ │ currency │ │error │ │   │
//! │  │   │ 50 codes │ │ code/amt │ │ BCP 47   │ │  handle  │ │ enum │ │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL MUTABLE STATE                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - Static ISO 4217 metadata table
//! - [`validation`] - Currency code and amount checks
//! - [`amount`] - Parsed finite amounts
//! - [`locale`] - Language tags and number conventions
//! - [`currency`] - Validated currency handle and formatting style
//! - [`error`] - Error taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use kurrency_core::{Currency, registry};
//!
//! let won = Currency::from_code("krw").unwrap();
//! assert_eq!(won.fraction_digits_or_default(), 0);
//!
//! let meta = registry::lookup("KRW").unwrap();
//! assert_eq!(meta.symbol, "₩");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod currency;
pub mod error;
pub mod locale;
pub mod registry;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::Amount;
pub use currency::{Currency, CurrencyStyle, DEFAULT_FRACTION_DIGITS};
pub use error::{BoxError, KurrencyError, KurrencyResult, LocaleError};
pub use locale::{KurrencyLocale, NumberConventions, SymbolPlacement};
pub use registry::CurrencyMetadata;
pub use rust_decimal::Decimal;
