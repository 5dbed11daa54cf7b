//! # format.rs
//!
//! Text rendering of complex numbers.
//!
//! The output grammar is `<signed-real>[<sign><imag-magnitude>i]`. The
//! imaginary term is left out when it is exactly zero and a unit magnitude is
//! rendered as a bare `i`. The undefined value renders as `NaN` and the point
//! at infinity as `Infinity`.
//!
//! Without a precision, numbers use Rust's shortest round-trip rendering with
//! a mandatory fractional part (`2.0`, `1e-7`), so the default output parses
//! back to the same value.

use crate::constants::{self, INFINITY_LITERAL, NAN_LITERAL};
use crate::functions::core::ComplexBackend;
use crate::lexer::IMAGINARY_UNIT;

use std::fmt;

/// How numbers are rendered by [`as_string`].
///
/// # Examples
///
/// ```
/// use riemann_complex::{Complex, ComplexBackend, FormatStyle};
///
/// let z = Complex::new(2.5, -0.126);
/// assert_eq!(z.as_string(&FormatStyle::default()), "2.5-0.126i");
/// assert_eq!(z.as_string(&FormatStyle::new().with_precision(2)), "2.50-0.13i");
/// assert_eq!(z.as_string(&FormatStyle::for_locale("de-DE").with_precision(1)), "2,5-0,1i");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatStyle {
    precision: Option<usize>,
    decimal_separator: char,
}

impl FormatStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style using the decimal separator of a locale tag such as `fr-FR`.
    ///
    /// Unknown locales fall back to `.`.
    pub fn for_locale(locale: &str) -> Self {
        Self::default().with_decimal_separator(constants::decimal_separator(locale).unwrap_or('.'))
    }

    /// Renders every number with exactly `precision` fractional digits.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    fn render(&self, x: f64) -> String {
        let text = match self.precision {
            Some(precision) => format!("{:.*}", precision, x),
            None => format!("{:?}", x),
        };
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self {
            precision: None,
            decimal_separator: '.',
        }
    }
}

/// Renders `z` according to `style`.
pub fn as_string<B: ComplexBackend>(z: &B, style: &FormatStyle) -> String {
    if z.is_nan() {
        return NAN_LITERAL.to_string();
    }
    if z.is_infinite() {
        return INFINITY_LITERAL.to_string();
    }

    let mut text = style.render(z.re());
    let im = z.im();
    if im != 0.0 {
        text.push(if im < 0.0 { '-' } else { '+' });
        let magnitude = im.abs();
        if magnitude != 1.0 {
            text.push_str(&style.render(magnitude));
        }
        text.push(IMAGINARY_UNIT);
    }
    text
}

/// `Display` support; a formatter precision (`{:.3}`) selects fixed digits.
pub(crate) fn write_complex<B: ComplexBackend>(z: &B, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let style = match f.precision() {
        Some(precision) => FormatStyle::default().with_precision(precision),
        None => FormatStyle::default(),
    };
    f.write_str(&as_string(z, &style))
}
