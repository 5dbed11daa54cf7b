//! # memo.rs
//!
//! Representation that memoizes its modulus and argument.

use crate::functions::core::{arg_of, modulus_of, ComplexBackend};

use std::sync::OnceLock;

/// A complex number whose modulus and argument are computed on first use
/// and cached afterwards.
///
/// Useful when the same values go through `ln`, `sqrt`, `pow` or
/// [`to_polar`](ComplexBackend::to_polar) repeatedly. Cloning carries the
/// cache over. The cache is thread safe.
///
/// # Examples
///
/// ```
/// use riemann_complex::{backends::MemoComplex, ComplexBackend};
///
/// let z = MemoComplex::new(3.0, 4.0);
/// assert!(!z.is_memoized());
/// assert_eq!(z.modulus(), 5.0);
/// assert!(z.is_memoized());
/// ```
#[derive(Clone, Debug)]
pub struct MemoComplex {
    re: f64,
    im: f64,
    modulus: OnceLock<f64>,
    arg: OnceLock<f64>,
}

impl MemoComplex {
    /// Creates a new value, normalizing non-finite parts.
    pub fn new(re: f64, im: f64) -> Self {
        <Self as ComplexBackend>::of(re, im)
    }

    /// Returns true once the modulus or the argument has been computed.
    pub fn is_memoized(&self) -> bool {
        self.modulus.get().is_some() || self.arg.get().is_some()
    }
}

impl ComplexBackend for MemoComplex {
    fn from_parts(re: f64, im: f64) -> Self {
        Self {
            re,
            im,
            modulus: OnceLock::new(),
            arg: OnceLock::new(),
        }
    }

    fn re(&self) -> f64 { self.re }
    fn im(&self) -> f64 { self.im }

    fn modulus(&self) -> f64 {
        *self.modulus.get_or_init(|| modulus_of(self))
    }

    fn arg(&self) -> f64 {
        *self.arg.get_or_init(|| arg_of(self))
    }
}

crate::operators::impl_complex_operators!(MemoComplex);

impl Default for MemoComplex {
    fn default() -> Self {
        <Self as ComplexBackend>::zero()
    }
}

impl From<crate::Complex> for MemoComplex {
    fn from(value: crate::Complex) -> Self {
        Self::from_parts(value.re(), value.im())
    }
}
