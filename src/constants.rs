//! # constants.rs
//!
//! Constants used when parsing and rendering complex numbers.
//!
//! Provides the whole-string literals recognized by the parser, the decimal
//! separators known for locale tags, and the default zero-snap precision.

use phf::Map;
use phf_macros::phf_map;

/// Default precision of [`ComplexBackend::zero_snap_default`](crate::ComplexBackend::zero_snap_default).
pub const DEFAULT_ZERO_SNAP_PRECISION: f64 = 1.0e-14;

/// Rendering of the undefined value.
pub const NAN_LITERAL: &str = "NaN";

/// Rendering of the point at infinity.
pub const INFINITY_LITERAL: &str = "Infinity";

/// Whole-string literals and the raw parts they stand for.
static SPECIAL_LITERALS: Map<&'static str, (f64, f64)> = phf_map! {
    "Infinity" => (f64::INFINITY, f64::INFINITY),
    "NaN" => (f64::NAN, f64::NAN),
};

/// Decimal separator by primary language subtag.
static DECIMAL_SEPARATORS: Map<&'static str, char> = phf_map! {
    "ar" => ',',
    "cs" => ',',
    "da" => ',',
    "de" => ',',
    "el" => ',',
    "en" => '.',
    "es" => ',',
    "fi" => ',',
    "fr" => ',',
    "he" => '.',
    "hi" => '.',
    "id" => ',',
    "it" => ',',
    "ja" => '.',
    "ko" => '.',
    "nl" => ',',
    "no" => ',',
    "pl" => ',',
    "pt" => ',',
    "ru" => ',',
    "sv" => ',',
    "th" => '.',
    "tr" => ',',
    "uk" => ',',
    "zh" => '.',
};

/// Looks up a whole-string literal such as `"Infinity"`.
pub fn literal(text: &str) -> Option<(f64, f64)> {
    SPECIAL_LITERALS.get(text).copied()
}

/// Returns the decimal separator of a locale tag like `de-DE` or `en_US`.
///
/// Only the language subtag is considered; unknown languages give `None`.
pub fn decimal_separator(locale: &str) -> Option<char> {
    let language = locale.split(['-', '_']).next()?.to_ascii_lowercase();
    DECIMAL_SEPARATORS.get(language.as_str()).copied()
}
