//! # riemann_complex
//!
//! `riemann_complex` is a Rust library for complex numbers on the
//! **Riemann sphere**: the complex plane extended by a single unsigned point
//! at infinity and an undefined value.
//!
//! ## Overview
//! - Arithmetic never panics and never returns an error. `1 / 0` is
//!   [`Complex::INF`], `0 / 0` and `∞ - ∞` are [`Complex::NAN`].
//! - Elementary functions `exp`, `ln`, `sin`, `cos`, `sqrt` and `pow` with
//!   principal branches and well-defined special-value results.
//! - Parsing from and rendering to text, e.g. `"-2.0-3.0i"`.
//! - Polar form via [`ComplexBackend::to_polar`] and [`Polar::to_complex`].
//! - Pluggable representations: any type implementing [`ComplexBackend`]
//!   inherits the whole algebra. [`backends`] provides one backed by
//!   [`num_complex`] and one caching modulus and argument.
//!
//! ## Special values
//! Any attempt to build a value with an infinite component yields `INF`; a
//! NaN component yields `NAN`. `NAN` equals itself, so values can be used as
//! `HashMap` keys.
//!
//! ## Example
//! ```rust
//! use riemann_complex::{Complex, ComplexBackend, to_complex};
//!
//! let z = to_complex("3+4i").unwrap();
//! assert_eq!(z.modulus(), 5.0);
//! assert_eq!(z.conj(), Complex::new(3.0, -4.0));
//! assert_eq!(z / Complex::ZERO, Complex::INF);
//! assert_eq!(Complex::INF - Complex::INF, Complex::NAN);
//!
//! let w = riemann_complex::sqrt(-4.0);
//! assert_eq!(w.to_string(), "0.0+2.0i");
//! ```
//!
//! ## Example: Switching Representation
//! ```rust
//! use riemann_complex::{complex_of, ComplexBackend, backends::{MemoComplex, NumComplex}};
//!
//! fn unit_circle<B: ComplexBackend>(t: f64) -> B {
//!     complex_of::<B>(0.0, t).exp()
//! }
//!
//! let a: NumComplex = unit_circle(0.5);
//! let b: MemoComplex = unit_circle(0.5);
//! assert!((a.modulus() - 1.0).abs() < 1e-15);
//! assert!((b.arg() - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Logging
//! The crate emits [`tracing`] events: `debug` when a function table is
//! installed, `trace` when a string fails to parse. No subscriber is
//! installed by the library.

pub mod backends;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod functions;
mod complex;
mod lexer;
mod operators;
mod parser;
mod polar;

pub use crate::complex::Complex;
pub use crate::config::Grammar;
pub use crate::error::{ConfigError, FormatError, ParseFuncError};
pub use crate::format::FormatStyle;
pub use crate::functions::buildin::{FuncKind, FunctionTable};
pub use crate::functions::core::ComplexBackend;
pub use crate::functions::{arg, conj, cos, exp, ln, modulus, pow, pow_real, sin, sqrt};
pub use crate::parser::parse_with;
pub use crate::polar::Polar;

/// Builds a value of representation `B`, see [`ComplexBackend::of`].
///
/// # Example
/// ```rust
/// use riemann_complex::{complex_of, Complex};
///
/// assert_eq!(complex_of::<Complex>(f64::INFINITY, 1.0), Complex::INF);
/// assert_eq!(complex_of::<Complex>(1.0, f64::NAN), Complex::NAN);
/// ```
pub fn complex_of<B: ComplexBackend>(re: f64, im: f64) -> B {
    B::of(re, im)
}

/// Parses a string into a [`Complex`] with the default [`Grammar`].
///
/// Equivalent to `text.parse::<Complex>()`.
///
/// # Example
/// ```rust
/// use riemann_complex::{to_complex, Complex, FormatError};
///
/// assert_eq!(to_complex("-2.0-3.0i"), Ok(Complex::new(-2.0, -3.0)));
/// assert_eq!(to_complex("-i"), Ok(Complex::new(0.0, -1.0)));
/// assert!(matches!(to_complex("3+4j"), Err(FormatError::UnexpectedChar { .. })));
/// ```
pub fn to_complex(text: &str) -> Result<Complex, FormatError> {
    parse_with(text, &Grammar::default())
}

/// Commonly used items.
pub mod prelude {
    pub use crate::backends::{MemoComplex, NumComplex};
    pub use crate::{complex_of, to_complex, Complex, ComplexBackend, FormatStyle, Polar};
}
