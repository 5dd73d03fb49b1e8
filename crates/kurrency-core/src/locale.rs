//! # Locale Module
//!
//! [`KurrencyLocale`] is an opaque BCP 47 language tag plus the handful of
//! number conventions the built-in formatter needs.
//!
//! ## Tag Grammar
//! ```text
//! language[-Script][-REGION][-variant...]
//!    │        │        │         └── 1+ alphanumerics, repeatable
//!    │        │        └──────────── 2 letters
//!    │        └───────────────────── 4 letters, first capital
//!    └────────────────────────────── 2-3 letters
//!
//! Matching is case-insensitive; accepted tags are stored canonically
//! cased: "EN-us" → "en-US", "zh-hant-tw" → "zh-Hant-TW"
//! ```
//!
//! ## Usage
//! ```rust
//! use kurrency_core::locale::KurrencyLocale;
//!
//! let locale = KurrencyLocale::from_language_tag("de-de").unwrap();
//! assert_eq!(locale.language_tag(), "de-DE");
//! assert!(locale.uses_comma_as_decimal_separator());
//!
//! assert!(KurrencyLocale::from_language_tag("en_US").is_err());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

static LANGUAGE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z]{2,3}(-[A-Z][a-z]{3})?(-[A-Z]{2})?(-[0-9A-Za-z]+)*$").unwrap()
});

/// True if the tag matches the supported BCP 47 subset.
pub fn is_valid_language_tag(tag: &str) -> bool {
    validate_language_tag(tag).is_ok()
}

/// Checks a tag, telling blank input apart from malformed input.
pub fn validate_language_tag(tag: &str) -> Result<(), LocaleError> {
    if tag.trim().is_empty() {
        return Err(LocaleError::Blank);
    }

    if !LANGUAGE_TAG_RE.is_match(tag) {
        return Err(LocaleError::Malformed(tag.to_string()));
    }

    Ok(())
}

// =============================================================================
// Number Conventions
// =============================================================================

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1,234.56`
    Before,
    /// `R$ 1.234,56`
    BeforeWithSpace,
    /// `1.234,56 €`
    AfterWithSpace,
}

/// Separators and symbol placement used when rendering amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberConventions {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_placement: SymbolPlacement,
}

impl NumberConventions {
    const fn new(decimal: char, grouping: char, placement: SymbolPlacement) -> Self {
        NumberConventions {
            decimal_separator: decimal,
            grouping_separator: grouping,
            symbol_placement: placement,
        }
    }

    /// Conventions for a language subtag and optional region subtag.
    ///
    /// Compact table covering the common cases; unknown languages fall back
    /// to English conventions.
    pub fn for_subtags(language: &str, region: Option<&str>) -> Self {
        use SymbolPlacement::*;

        match (language, region) {
            ("de" | "fr" | "it", Some("CH")) => Self::new('.', '’', BeforeWithSpace),
            ("pt", Some("BR")) => Self::new(',', '.', BeforeWithSpace),
            ("pt", _) => Self::new(',', '\u{a0}', AfterWithSpace),
            ("nl" | "id", _) => Self::new(',', '.', BeforeWithSpace),
            ("tr", _) => Self::new(',', '.', Before),
            ("de" | "es" | "it" | "da" | "el" | "ro" | "hr" | "sl" | "vi", _) => {
                Self::new(',', '.', AfterWithSpace)
            }
            ("fr", _) => Self::new(',', '\u{202f}', AfterWithSpace),
            (
                "ru" | "uk" | "pl" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "hu" | "bg" | "lt"
                | "lv" | "et",
                _,
            ) => Self::new(',', '\u{a0}', AfterWithSpace),
            ("ar" | "he" | "fa", _) => Self::new('.', ',', AfterWithSpace),
            _ => Self::new('.', ',', Before),
        }
    }
}

impl Default for NumberConventions {
    fn default() -> Self {
        NumberConventions::new('.', ',', SymbolPlacement::Before)
    }
}

// =============================================================================
// KurrencyLocale
// =============================================================================

/// A validated, canonically cased BCP 47 language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KurrencyLocale {
    tag: Cow<'static, str>,
}

impl KurrencyLocale {
    /// United States English (en-US)
    pub const US: KurrencyLocale = KurrencyLocale::from_static("en-US");
    /// United Kingdom English (en-GB)
    pub const UK: KurrencyLocale = KurrencyLocale::from_static("en-GB");
    /// Canadian English (en-CA)
    pub const CANADA: KurrencyLocale = KurrencyLocale::from_static("en-CA");
    /// Canadian French (fr-CA)
    pub const CANADA_FRENCH: KurrencyLocale = KurrencyLocale::from_static("fr-CA");
    /// German (de-DE)
    pub const GERMANY: KurrencyLocale = KurrencyLocale::from_static("de-DE");
    /// French (fr-FR)
    pub const FRANCE: KurrencyLocale = KurrencyLocale::from_static("fr-FR");
    /// Italian (it-IT)
    pub const ITALY: KurrencyLocale = KurrencyLocale::from_static("it-IT");
    /// Spanish (es-ES)
    pub const SPAIN: KurrencyLocale = KurrencyLocale::from_static("es-ES");
    /// Japanese (ja-JP)
    pub const JAPAN: KurrencyLocale = KurrencyLocale::from_static("ja-JP");
    /// Simplified Chinese (zh-CN)
    pub const CHINA: KurrencyLocale = KurrencyLocale::from_static("zh-CN");
    /// Korean (ko-KR)
    pub const KOREA: KurrencyLocale = KurrencyLocale::from_static("ko-KR");
    /// Brazilian Portuguese (pt-BR)
    pub const BRAZIL: KurrencyLocale = KurrencyLocale::from_static("pt-BR");
    /// Russian (ru-RU)
    pub const RUSSIA: KurrencyLocale = KurrencyLocale::from_static("ru-RU");
    /// Arabic, Saudi Arabia (ar-SA)
    pub const SAUDI_ARABIA: KurrencyLocale = KurrencyLocale::from_static("ar-SA");
    /// Hindi (hi-IN)
    pub const INDIA: KurrencyLocale = KurrencyLocale::from_static("hi-IN");

    /// Every predefined locale.
    pub const PREDEFINED: [KurrencyLocale; 15] = [
        Self::US,
        Self::UK,
        Self::CANADA,
        Self::CANADA_FRENCH,
        Self::GERMANY,
        Self::FRANCE,
        Self::ITALY,
        Self::SPAIN,
        Self::JAPAN,
        Self::CHINA,
        Self::KOREA,
        Self::BRAZIL,
        Self::RUSSIA,
        Self::SAUDI_ARABIA,
        Self::INDIA,
    ];

    const fn from_static(tag: &'static str) -> Self {
        KurrencyLocale {
            tag: Cow::Borrowed(tag),
        }
    }

    /// Validates a BCP 47 tag and stores it canonically cased.
    pub fn from_language_tag(tag: &str) -> Result<Self, LocaleError> {
        validate_language_tag(tag)?;
        Ok(KurrencyLocale {
            tag: Cow::Owned(canonicalize(tag)),
        })
    }

    /// Converts a POSIX locale name such as `de_DE.UTF-8` or `sr_RS@latin`.
    ///
    /// `C` and `POSIX` are not language tags and are rejected as malformed.
    pub fn from_posix(name: &str) -> Result<Self, LocaleError> {
        let base = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-");

        if base.trim().is_empty() {
            return Err(LocaleError::Blank);
        }

        Self::from_language_tag(&base).map_err(|_| LocaleError::Malformed(name.to_string()))
    }

    /// The canonical tag, e.g. `en-US`.
    pub fn language_tag(&self) -> &str {
        &self.tag
    }

    /// The primary language subtag, lowercase.
    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or_default()
    }

    /// The two-letter region subtag, if present.
    pub fn region(&self) -> Option<&str> {
        let mut subtags = self.tag.split('-').skip(1);
        let mut candidate = subtags.next()?;
        if is_script(candidate) {
            candidate = subtags.next()?;
        }

        is_region(candidate).then_some(candidate)
    }

    /// Separators and symbol placement for this locale.
    pub fn conventions(&self) -> NumberConventions {
        NumberConventions::for_subtags(self.language(), self.region())
    }

    /// `.` for en-US, `,` for de-DE.
    pub fn decimal_separator(&self) -> char {
        self.conventions().decimal_separator
    }

    /// `,` for en-US, `.` for de-DE, a no-break space for ru-RU.
    pub fn grouping_separator(&self) -> char {
        self.conventions().grouping_separator
    }

    /// True for locales that write `100,50`.
    pub fn uses_comma_as_decimal_separator(&self) -> bool {
        self.decimal_separator() == ','
    }
}

impl Default for KurrencyLocale {
    fn default() -> Self {
        KurrencyLocale::US
    }
}

impl fmt::Display for KurrencyLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl std::str::FromStr for KurrencyLocale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KurrencyLocale::from_language_tag(s)
    }
}

impl TryFrom<String> for KurrencyLocale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        KurrencyLocale::from_language_tag(&value)
    }
}

impl From<KurrencyLocale> for String {
    fn from(locale: KurrencyLocale) -> Self {
        locale.tag.into_owned()
    }
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region(subtag: &str) -> bool {
    subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

/// Lowercase language, title-case script, uppercase region, lowercase rest.
fn canonicalize(tag: &str) -> String {
    let mut subtags = tag.split('-');
    let mut parts = Vec::new();

    if let Some(language) = subtags.next() {
        parts.push(language.to_ascii_lowercase());
    }

    let mut next = subtags.next();
    if let Some(script) = next.filter(|s| is_script(s)) {
        let (first, rest) = script.split_at(1);
        parts.push(format!("{}{}", first.to_ascii_uppercase(), rest.to_ascii_lowercase()));
        next = subtags.next();
    }
    if let Some(region) = next.filter(|s| is_region(s)) {
        parts.push(region.to_ascii_uppercase());
        next = subtags.next();
    }

    while let Some(variant) = next {
        parts.push(variant.to_ascii_lowercase());
        next = subtags.next();
    }

    parts.join("-")
}

// =============================================================================
// Unit Tests
// =============================================================================
