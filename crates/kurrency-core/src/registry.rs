//! # Currency Registry
//!
//! The curated table of ISO 4217 currencies shipped with kurrency.
//!
//! ## Lookup Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lookup("  usd ")                                                       │
//! │       │                                                                 │
//! │       ├── trim            → "usd"                                       │
//! │       ├── len != 3?       → None (never an error)                       │
//! │       └── ASCII case-insensitive match against the table                │
//! │                           → Some(&USD)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is a `static` array: built at compile time, never mutated,
//! safe to read from any thread.
//!
//! ## Usage
//! ```rust
//! use kurrency_core::registry::{self, CurrencyMetadata};
//!
//! let yen = registry::lookup("jpy").unwrap();
//! assert_eq!(yen.fraction_digits, 0);
//!
//! assert!(CurrencyMetadata::parse("XXX").is_err());
//! assert_eq!(registry::all().len(), 50);
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{KurrencyError, KurrencyResult};

// =============================================================================
// Currency Metadata
// =============================================================================

/// Display metadata for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct CurrencyMetadata {
    /// ISO 4217 code, always three uppercase ASCII letters.
    #[ts(type = "string")]
    pub code: &'static str,

    /// English display name.
    #[ts(type = "string")]
    pub display_name: &'static str,

    /// Customary symbol. Several currencies share `$`-style symbols.
    #[ts(type = "string")]
    pub symbol: &'static str,

    /// ISO 3166 alpha-2 code of the issuing country (`EU` for the euro).
    #[ts(type = "string")]
    pub country_iso: &'static str,

    /// Digits of the minor unit: 0 for JPY, 2 for USD, 3 for KWD.
    pub fraction_digits: u32,

    /// Flag emoji of the issuing country.
    #[ts(type = "string")]
    pub flag: &'static str,
}

impl CurrencyMetadata {
    const fn new(
        code: &'static str,
        display_name: &'static str,
        symbol: &'static str,
        country_iso: &'static str,
        fraction_digits: u32,
        flag: &'static str,
    ) -> Self {
        CurrencyMetadata {
            code,
            display_name,
            symbol,
            country_iso,
            fraction_digits,
            flag,
        }
    }

    /// Strict lookup.
    ///
    /// Same matching rules as [`lookup`], but a miss is reported as
    /// [`KurrencyError::InvalidCurrencyCode`] carrying the input unchanged.
    pub fn parse(code: &str) -> KurrencyResult<&'static CurrencyMetadata> {
        lookup(code).ok_or_else(|| KurrencyError::invalid_code(code))
    }
}

// =============================================================================
// The Table
// =============================================================================

static CURRENCIES: [CurrencyMetadata; 50] = [
    CurrencyMetadata::new("USD", "US Dollar", "$", "US", 2, "🇺🇸"),
    CurrencyMetadata::new("EUR", "Euro", "€", "EU", 2, "🇪🇺"),
    CurrencyMetadata::new("GBP", "British Pound", "£", "GB", 2, "🇬🇧"),
    CurrencyMetadata::new("JPY", "Japanese Yen", "¥", "JP", 0, "🇯🇵"),
    CurrencyMetadata::new("CNY", "Chinese Yuan", "¥", "CN", 2, "🇨🇳"),
    CurrencyMetadata::new("AUD", "Australian Dollar", "A$", "AU", 2, "🇦🇺"),
    CurrencyMetadata::new("CAD", "Canadian Dollar", "CA$", "CA", 2, "🇨🇦"),
    CurrencyMetadata::new("CHF", "Swiss Franc", "CHF", "CH", 2, "🇨🇭"),
    CurrencyMetadata::new("HKD", "Hong Kong Dollar", "HK$", "HK", 2, "🇭🇰"),
    CurrencyMetadata::new("SGD", "Singapore Dollar", "S$", "SG", 2, "🇸🇬"),
    CurrencyMetadata::new("SEK", "Swedish Krona", "kr", "SE", 2, "🇸🇪"),
    CurrencyMetadata::new("NOK", "Norwegian Krone", "kr", "NO", 2, "🇳🇴"),
    CurrencyMetadata::new("DKK", "Danish Krone", "kr", "DK", 2, "🇩🇰"),
    CurrencyMetadata::new("NZD", "New Zealand Dollar", "NZ$", "NZ", 2, "🇳🇿"),
    CurrencyMetadata::new("INR", "Indian Rupee", "₹", "IN", 2, "🇮🇳"),
    CurrencyMetadata::new("BRL", "Brazilian Real", "R$", "BR", 2, "🇧🇷"),
    CurrencyMetadata::new("RUB", "Russian Ruble", "₽", "RU", 2, "🇷🇺"),
    CurrencyMetadata::new("KRW", "South Korean Won", "₩", "KR", 0, "🇰🇷"),
    CurrencyMetadata::new("MXN", "Mexican Peso", "MX$", "MX", 2, "🇲🇽"),
    CurrencyMetadata::new("ZAR", "South African Rand", "R", "ZA", 2, "🇿🇦"),
    CurrencyMetadata::new("TRY", "Turkish Lira", "₺", "TR", 2, "🇹🇷"),
    CurrencyMetadata::new("PLN", "Polish Zloty", "zł", "PL", 2, "🇵🇱"),
    CurrencyMetadata::new("THB", "Thai Baht", "฿", "TH", 2, "🇹🇭"),
    CurrencyMetadata::new("IDR", "Indonesian Rupiah", "Rp", "ID", 2, "🇮🇩"),
    CurrencyMetadata::new("MYR", "Malaysian Ringgit", "RM", "MY", 2, "🇲🇾"),
    CurrencyMetadata::new("PHP", "Philippine Peso", "₱", "PH", 2, "🇵🇭"),
    CurrencyMetadata::new("CZK", "Czech Koruna", "Kč", "CZ", 2, "🇨🇿"),
    CurrencyMetadata::new("HUF", "Hungarian Forint", "Ft", "HU", 2, "🇭🇺"),
    CurrencyMetadata::new("ILS", "Israeli New Shekel", "₪", "IL", 2, "🇮🇱"),
    CurrencyMetadata::new("CLP", "Chilean Peso", "CLP$", "CL", 0, "🇨🇱"),
    CurrencyMetadata::new("AED", "UAE Dirham", "د.إ", "AE", 2, "🇦🇪"),
    CurrencyMetadata::new("SAR", "Saudi Riyal", "﷼", "SA", 2, "🇸🇦"),
    CurrencyMetadata::new("TWD", "New Taiwan Dollar", "NT$", "TW", 2, "🇹🇼"),
    CurrencyMetadata::new("VND", "Vietnamese Dong", "₫", "VN", 0, "🇻🇳"),
    CurrencyMetadata::new("ARS", "Argentine Peso", "AR$", "AR", 2, "🇦🇷"),
    CurrencyMetadata::new("COP", "Colombian Peso", "COL$", "CO", 2, "🇨🇴"),
    CurrencyMetadata::new("EGP", "Egyptian Pound", "E£", "EG", 2, "🇪🇬"),
    CurrencyMetadata::new("UAH", "Ukrainian Hryvnia", "₴", "UA", 2, "🇺🇦"),
    CurrencyMetadata::new("PKR", "Pakistani Rupee", "₨", "PK", 2, "🇵🇰"),
    CurrencyMetadata::new("NGN", "Nigerian Naira", "₦", "NG", 2, "🇳🇬"),
    CurrencyMetadata::new("BDT", "Bangladeshi Taka", "৳", "BD", 2, "🇧🇩"),
    CurrencyMetadata::new("KES", "Kenyan Shilling", "KSh", "KE", 2, "🇰🇪"),
    CurrencyMetadata::new("PEN", "Peruvian Sol", "S/", "PE", 2, "🇵🇪"),
    CurrencyMetadata::new("QAR", "Qatari Riyal", "ر.ق", "QA", 2, "🇶🇦"),
    CurrencyMetadata::new("KWD", "Kuwaiti Dinar", "د.ك", "KW", 3, "🇰🇼"),
    CurrencyMetadata::new("OMR", "Omani Rial", "ر.ع.", "OM", 3, "🇴🇲"),
    CurrencyMetadata::new("BHD", "Bahraini Dinar", ".د.ب", "BH", 3, "🇧🇭"),
    CurrencyMetadata::new("JOD", "Jordanian Dinar", "د.ا", "JO", 3, "🇯🇴"),
    CurrencyMetadata::new("MAD", "Moroccan Dirham", "د.م.", "MA", 2, "🇲🇦"),
    CurrencyMetadata::new("RON", "Romanian Leu", "lei", "RO", 2, "🇷🇴"),
];

// =============================================================================
// Queries
// =============================================================================

/// Every currency in the registry.
pub fn all() -> &'static [CurrencyMetadata] {
    &CURRENCIES
}

/// Finds a currency by code.
///
/// Surrounding whitespace and letter case are ignored. Anything that is not
/// a three-character code simply misses.
pub fn lookup(code: &str) -> Option<&'static CurrencyMetadata> {
    let code = code.trim();
    if code.len() != 3 {
        return None;
    }

    CURRENCIES
        .iter()
        .find(|currency| currency.code.eq_ignore_ascii_case(code))
}

/// True if the code names a registry entry.
pub fn contains(code: &str) -> bool {
    lookup(code).is_some()
}

// =============================================================================
// Unit Tests
// =============================================================================
