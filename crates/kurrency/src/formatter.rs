//! # Currency Formatter
//!
//! [`CurrencyFormatter`] is the validate-then-delegate pipeline.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  format_currency_style("100,50", "eur")                                 │
//! │       │                                                                 │
//! │       ├── code: 3 letters? known to platform?                          │
//! │       │       └── no → InvalidCurrencyCode("eur")      (warn)          │
//! │       │                                                                 │
//! │       ├── amount: parses after comma normalization?                    │
//! │       │       └── no → InvalidAmount("100,50")         (warn)          │
//! │       │                                                                 │
//! │       ├── platform.render(100.50, "EUR", locale, Standard)             │
//! │       │       └── Err → FormattingFailure(cause kept)  (error)         │
//! │       │                                                                 │
//! │       └── Ok("€100.50")                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The code is always checked before the amount, so a call where both are
//! bad reports `InvalidCurrencyCode`.
//!
//! ## Strict vs Lenient
//! Every strict call returns `KurrencyResult`. The lenient variants collapse
//! any failure to a safe default: `""` for text, `2` for fraction digits.
//!
//! ## Usage
//! ```rust
//! use kurrency::{CurrencyFormatter, KurrencyLocale};
//!
//! let formatter = CurrencyFormatter::new(KurrencyLocale::US);
//! assert_eq!(formatter.format_currency_style("1234.5", "usd").unwrap(), "$1,234.50");
//! assert_eq!(formatter.format_iso_currency_style("1234.5", "USD").unwrap(), "USD 1,234.50");
//! assert_eq!(formatter.fraction_digits_or_default("JPY"), 0);
//! assert_eq!(formatter.format_currency_style_or_empty("abc", "USD"), "");
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::{debug, error, warn};

use kurrency_core::validation::{is_syntactically_valid_code, validate_amount};
use kurrency_core::{
    Currency, CurrencyStyle, KurrencyError, KurrencyLocale, KurrencyResult, LocaleError,
    DEFAULT_FRACTION_DIGITS,
};

use crate::builtin::BuiltinFormatter;
use crate::config::KurrencyConfig;
use crate::platform::{PlatformFormatter, RenderRequest};

static DEFAULT_FORMATTER: OnceLock<CurrencyFormatter> = OnceLock::new();

/// Validates input and delegates rendering to a [`PlatformFormatter`].
///
/// Cheap to clone; the platform is shared behind an `Arc`.
#[derive(Clone)]
pub struct CurrencyFormatter {
    platform: Arc<dyn PlatformFormatter>,
    locale: KurrencyLocale,
}

impl CurrencyFormatter {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Formatter for `locale` using the [`BuiltinFormatter`].
    pub fn new(locale: KurrencyLocale) -> Self {
        debug!(locale = %locale, "Creating CurrencyFormatter");
        Self::with_platform(Arc::new(BuiltinFormatter::new()), locale)
    }

    /// Formatter for `locale` using a caller-supplied backend.
    pub fn with_platform(platform: Arc<dyn PlatformFormatter>, locale: KurrencyLocale) -> Self {
        CurrencyFormatter { platform, locale }
    }

    /// Formatter for a raw BCP 47 tag.
    pub fn for_language_tag(tag: &str) -> Result<Self, LocaleError> {
        match KurrencyLocale::from_language_tag(tag) {
            Ok(locale) => Ok(Self::new(locale)),
            Err(LocaleError::Blank) => {
                warn!("Rejected blank language tag");
                Err(LocaleError::Blank)
            }
            Err(err) => {
                warn!(tag, "Rejected malformed language tag");
                Err(err)
            }
        }
    }

    /// Formatter for the locale resolved from the environment.
    pub fn with_system_locale() -> Self {
        debug!("Creating CurrencyFormatter with system locale");
        Self::new(KurrencyConfig::load_or_default().locale)
    }

    /// Process-wide default formatter.
    ///
    /// Built on first use from [`KurrencyConfig::load_or_default`] and never
    /// replaced. Concurrent first calls all observe the same instance.
    pub fn global() -> &'static CurrencyFormatter {
        DEFAULT_FORMATTER.get_or_init(|| {
            debug!("Initializing default CurrencyFormatter");
            Self::with_system_locale()
        })
    }

    pub fn locale(&self) -> &KurrencyLocale {
        &self.locale
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Syntax check plus the platform's currency oracle.
    pub fn is_valid_currency(&self, code: &str) -> bool {
        self.validate_code(code).is_ok()
    }

    /// Returns the canonical uppercase code or `InvalidCurrencyCode(code)`.
    fn validate_code(&self, code: &str) -> KurrencyResult<String> {
        if is_syntactically_valid_code(code) {
            let canonical = code.trim().to_uppercase();
            if self.platform.is_known_currency(&canonical) {
                return Ok(canonical);
            }
        }

        let err = KurrencyError::invalid_code(code);
        warn!(code, "{err}");
        Err(err)
    }

    // =========================================================================
    // Fraction Digits
    // =========================================================================

    /// Minor-unit digits for `code`.
    pub fn fraction_digits(&self, code: &str) -> KurrencyResult<u32> {
        let canonical = self.validate_code(code)?;

        debug!(code = %canonical, "Getting fraction digits");
        self.platform.fraction_digits(&canonical).map_err(|source| {
            error!(code = %canonical, cause = %source, "Fraction digit lookup failed");
            KurrencyError::fraction_digits_failure(code, source)
        })
    }

    /// Minor-unit digits, or `default` on any failure.
    pub fn fraction_digits_or(&self, code: &str, default: u32) -> u32 {
        self.fraction_digits(code).unwrap_or(default)
    }

    /// Minor-unit digits, or 2 on any failure.
    pub fn fraction_digits_or_default(&self, code: &str) -> u32 {
        self.fraction_digits_or(code, DEFAULT_FRACTION_DIGITS)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Validates both inputs, then renders in `style`.
    pub fn format(&self, amount: &str, code: &str, style: CurrencyStyle) -> KurrencyResult<String> {
        let canonical = self.validate_code(code)?;

        let value = validate_amount(amount).inspect_err(|err| {
            warn!(code = %canonical, amount, "{err}");
        })?;

        debug!(amount, code = %canonical, ?style, locale = %self.locale, "Formatting");

        let request = RenderRequest {
            value,
            code: &canonical,
            locale: &self.locale,
            style,
        };

        self.platform.render(&request).map_err(|source| {
            error!(code = %canonical, amount, cause = %source, "Platform formatter failed");
            KurrencyError::formatting_failure(code, amount, source)
        })
    }

    /// Symbol style, e.g. `$1,234.56`.
    pub fn format_currency_style(&self, amount: &str, code: &str) -> KurrencyResult<String> {
        self.format(amount, code, CurrencyStyle::Standard)
    }

    /// ISO code style, e.g. `USD 1,234.56`.
    pub fn format_iso_currency_style(&self, amount: &str, code: &str) -> KurrencyResult<String> {
        self.format(amount, code, CurrencyStyle::Iso)
    }

    pub fn format_currency_style_or_empty(&self, amount: &str, code: &str) -> String {
        self.format_currency_style(amount, code).unwrap_or_default()
    }

    pub fn format_iso_currency_style_or_empty(&self, amount: &str, code: &str) -> String {
        self.format_iso_currency_style(amount, code).unwrap_or_default()
    }

    /// Symbol style for a validated [`Currency`].
    pub fn format_currency(&self, amount: &str, currency: &Currency) -> KurrencyResult<String> {
        self.format_currency_style(amount, currency.code())
    }

    /// ISO code style for a validated [`Currency`].
    pub fn format_iso_currency(&self, amount: &str, currency: &Currency) -> KurrencyResult<String> {
        self.format_iso_currency_style(amount, currency.code())
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        CurrencyFormatter::new(KurrencyLocale::default())
    }
}

impl fmt::Debug for CurrencyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyFormatter")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kurrency_core::{registry, BoxError};
    use std::error::Error as _;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn us() -> CurrencyFormatter {
        init_tracing();
        CurrencyFormatter::new(KurrencyLocale::US)
    }

    /// Counts delegate calls so tests can prove validation short-circuits.
    #[derive(Default)]
    struct CountingPlatform {
        renders: AtomicUsize,
        lookups: AtomicUsize,
    }

    impl PlatformFormatter for CountingPlatform {
        fn fraction_digits(&self, code: &str) -> Result<u32, BoxError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            BuiltinFormatter.fraction_digits(code)
        }

        fn render(&self, request: &RenderRequest<'_>) -> Result<String, BoxError> {
            self.renders.fetch_add(1, Ordering::SeqCst);
            BuiltinFormatter.render(request)
        }
    }

    struct FailingPlatform;

    impl PlatformFormatter for FailingPlatform {
        fn fraction_digits(&self, _code: &str) -> Result<u32, BoxError> {
            Err("currency database unavailable".into())
        }

        fn render(&self, _request: &RenderRequest<'_>) -> Result<String, BoxError> {
            Err("renderer exploded".into())
        }
    }

    /// A richer oracle that also knows the ISO test code XTS.
    struct WideOraclePlatform;

    impl PlatformFormatter for WideOraclePlatform {
        fn is_known_currency(&self, code: &str) -> bool {
            code == "XTS" || registry::contains(code)
        }

        fn fraction_digits(&self, code: &str) -> Result<u32, BoxError> {
            match code {
                "XTS" => Ok(4),
                other => BuiltinFormatter.fraction_digits(other),
            }
        }

        fn render(&self, request: &RenderRequest<'_>) -> Result<String, BoxError> {
            Ok(format!("{}:{}", request.code, request.value))
        }
    }

    #[test]
    fn test_format_standard_and_iso() {
        let formatter = us();
        assert_eq!(formatter.format_currency_style("1234.56", "USD").unwrap(), "$1,234.56");
        assert_eq!(
            formatter.format_iso_currency_style("1234.56", "USD").unwrap(),
            "USD 1,234.56"
        );
        assert_eq!(formatter.format_currency_style("-100", "usd").unwrap(), "-$100.00");
    }

    #[test]
    fn test_fraction_digits_or_default() {
        let formatter = us();
        assert_eq!(formatter.fraction_digits_or_default("JPY"), 0);
        assert_eq!(formatter.fraction_digits_or_default("USD"), 2);
        assert_eq!(formatter.fraction_digits_or_default("KWD"), 3);
        assert_eq!(formatter.fraction_digits_or_default("UNKNOWN"), 2);
        assert_eq!(formatter.fraction_digits_or("UNKNOWN", 7), 7);
    }

    #[test]
    fn test_fraction_digits_invalid_code() {
        let formatter = us();
        for code in ["", "US", "XYZ", "UNKNOWN"] {
            match formatter.fraction_digits(code) {
                Err(KurrencyError::InvalidCurrencyCode(reported)) => assert_eq!(reported, code),
                other => panic!("expected InvalidCurrencyCode for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_bad_codes_fail_before_amount() {
        let formatter = us();
        for code in ["", "   ", "US", "USDD", "U5D", "XX"] {
            assert!(matches!(
                formatter.format_currency_style("100", code),
                Err(KurrencyError::InvalidCurrencyCode(_))
            ));
        }

        assert!(matches!(
            formatter.format_currency_style("not-a-number", "XX"),
            Err(KurrencyError::InvalidCurrencyCode(code)) if code == "XX"
        ));
        assert!(matches!(
            formatter.format_iso_currency_style("", "XYZ"),
            Err(KurrencyError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_invalid_amount() {
        let formatter = us();
        for amount in ["", "   ", "abc", "12.34.56", "12,34.56", "NaN"] {
            match formatter.format_currency_style(amount, "USD") {
                Err(KurrencyError::InvalidAmount(reported)) => assert_eq!(reported, amount),
                other => panic!("expected InvalidAmount for {amount:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_comma_amount_matches_dot_amount() {
        let formatter = us();
        let comma = formatter.format_currency_style("100,50", "EUR").unwrap();
        let dot = formatter.format_currency_style("100.50", "EUR").unwrap();
        assert_eq!(comma, dot);
        assert_eq!(comma, "€100.50");
    }

    #[test]
    fn test_scientific_and_wide_amounts() {
        let formatter = us();
        assert_eq!(
            formatter.format_currency_style("1e-28", "USD").unwrap(),
            formatter.format_currency_style("0.0000000000000000000000000001", "USD").unwrap()
        );
        assert_eq!(formatter.format_currency_style("1e-28", "USD").unwrap(), "$0.00");
        assert_eq!(
            formatter.format_iso_currency_style("1e29", "USD").unwrap(),
            "USD 100,000,000,000,000,000,000,000,000,000.00"
        );
        assert!(matches!(
            formatter.format_currency_style("1e400", "USD"),
            Err(KurrencyError::InvalidAmount(amount)) if amount == "1e400"
        ));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let formatter = us();
        let first = formatter.format_currency_style("98765.4321", "GBP");
        let second = formatter.format_currency_style("98765.4321", "GBP");
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_locale_is_passed_through() {
        init_tracing();
        let formatter = CurrencyFormatter::new(KurrencyLocale::GERMANY);
        assert_eq!(formatter.locale(), &KurrencyLocale::GERMANY);
        assert_eq!(
            formatter.format_currency_style("1234.56", "EUR").unwrap(),
            "1.234,56\u{a0}€"
        );
    }

    #[test]
    fn test_validation_failures_never_reach_platform() {
        init_tracing();
        let platform = Arc::new(CountingPlatform::default());
        let formatter = CurrencyFormatter::with_platform(platform.clone(), KurrencyLocale::US);

        let _ = formatter.format_currency_style("abc", "USD");
        let _ = formatter.format_currency_style("1", "XYZ");
        let _ = formatter.format_iso_currency_style("", "");
        let _ = formatter.fraction_digits("ZZZ");
        assert_eq!(platform.renders.load(Ordering::SeqCst), 0);
        assert_eq!(platform.lookups.load(Ordering::SeqCst), 0);

        formatter.format_currency_style("1", "USD").unwrap();
        formatter.fraction_digits("USD").unwrap();
        assert_eq!(platform.renders.load(Ordering::SeqCst), 1);
        assert_eq!(platform.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_platform_failures_are_wrapped() {
        init_tracing();
        let formatter = CurrencyFormatter::with_platform(Arc::new(FailingPlatform), KurrencyLocale::US);

        match formatter.format_currency_style("100,5", "usd") {
            Err(err @ KurrencyError::FormattingFailure { .. }) => {
                assert_eq!(err.to_string(), "Formatting failed for usd: 100,5");
                assert_eq!(err.source().unwrap().to_string(), "renderer exploded");
            }
            other => panic!("expected FormattingFailure, got {other:?}"),
        }

        match formatter.fraction_digits("JPY") {
            Err(KurrencyError::FractionDigitsFailure { code, source }) => {
                assert_eq!(code, "JPY");
                assert_eq!(source.to_string(), "currency database unavailable");
            }
            other => panic!("expected FractionDigitsFailure, got {other:?}"),
        }

        assert_eq!(formatter.fraction_digits_or_default("JPY"), 2);
        assert_eq!(formatter.format_currency_style_or_empty("1", "USD"), "");
        assert_eq!(formatter.format_iso_currency_style_or_empty("1", "USD"), "");
    }

    #[test]
    fn test_platform_oracle_extends_registry() {
        init_tracing();
        let formatter =
            CurrencyFormatter::with_platform(Arc::new(WideOraclePlatform), KurrencyLocale::US);

        assert!(formatter.is_valid_currency("xts"));
        assert_eq!(formatter.fraction_digits("XTS").unwrap(), 4);
        assert_eq!(formatter.format_currency_style("1.5", "xts").unwrap(), "XTS:1.5");

        assert!(!formatter.is_valid_currency("QQQ"));
    }

    #[test]
    fn test_currency_overloads() {
        let formatter = us();
        let yen = Currency::from_code("jpy").unwrap();
        assert_eq!(
            formatter.format_currency("1234", &yen).unwrap(),
            formatter.format_currency_style("1234", "JPY").unwrap()
        );
        assert_eq!(formatter.format_iso_currency("1234", &yen).unwrap(), "JPY 1,234");
    }

    #[test]
    fn test_for_language_tag() {
        init_tracing();
        assert_eq!(
            CurrencyFormatter::for_language_tag("fr-fr").unwrap().locale(),
            &KurrencyLocale::FRANCE
        );
        assert_eq!(
            CurrencyFormatter::for_language_tag("  ").unwrap_err(),
            LocaleError::Blank
        );
        assert_eq!(
            CurrencyFormatter::for_language_tag("en_US").unwrap_err(),
            LocaleError::Malformed("en_US".to_string())
        );
    }

    #[test]
    fn test_global_is_initialized_once() {
        init_tracing();
        let addresses: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| CurrencyFormatter::global() as *const _ as usize))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(std::ptr::eq(CurrencyFormatter::global(), CurrencyFormatter::global()));
    }
}
