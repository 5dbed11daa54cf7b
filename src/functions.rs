//! Top-level functions module.
//!
//! This module groups the elementary functions of the crate. It provides:
//!
//! - `buildin`: the closed forms of `exp`, `ln`, `sin`, `cos`, `sqrt` and
//!   `pow`, generic over any representation, and the replaceable
//!   [`FunctionTable`](buildin::FunctionTable).
//! - `core`: the [`ComplexBackend`](core::ComplexBackend) trait carrying the
//!   arithmetic of the extended plane.
//!
//! The free functions below accept anything convertible into [`Complex`], so
//! `exp(1.0)`, `exp(2)` and `exp(z)` all work and always return a complex
//! result. They go through the installed function table.

pub mod buildin;
pub mod core;

use crate::complex::Complex;
use crate::functions::core::ComplexBackend;

pub fn exp(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    z.exp()
}

pub fn ln(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    z.ln()
}

pub fn sin(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    z.sin()
}

pub fn cos(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    z.cos()
}

pub fn sqrt(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    z.sqrt()
}

/// Principal power for a complex base, see [`buildin::pow`].
pub fn pow(z: impl Into<Complex>, w: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    z.pow(&w.into())
}

/// Power with a real base, negative bases give `NAN`. See [`buildin::pow_real`].
pub fn pow_real(x: f64, w: impl Into<Complex>) -> Complex {
    buildin::pow_real(x, &w.into())
}

pub fn conj(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    z.conj()
}

pub fn modulus(z: impl Into<Complex>) -> f64 {
    let z: Complex = z.into();
    z.modulus()
}

pub fn arg(z: impl Into<Complex>) -> f64 {
    let z: Complex = z.into();
    z.arg()
}

/// Return the available elementary function names.
///
/// The slice is static and intended for error messages or lookups through
/// [`FuncKind`](buildin::FuncKind).
pub fn names() -> &'static [&'static str]
{
    buildin::FuncKind::available_names()
}
