//! # complex.rs
//!
//! The default complex number representation.
//!
//! `Complex` is a plain `Copy` pair of `f64`. Its elementary functions are
//! resolved through the process-wide [`FunctionTable`](crate::FunctionTable)
//! (see [`crate::config`]), every other operation is the default algebra of
//! [`ComplexBackend`].

use crate::config;
use crate::functions::core::ComplexBackend;

use num_complex::Complex64;

/// A complex number on the Riemann sphere.
///
/// Values are immutable. Components are always finite except for the two
/// distinguished values [`Complex::NAN`] and [`Complex::INF`]; any attempt to
/// build a value with an infinite component yields `INF`.
///
/// # Examples
///
/// ```
/// use riemann_complex::{Complex, ComplexBackend};
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.modulus(), 5.0);
/// assert_eq!(z * Complex::ONE, z);
/// assert_eq!(Complex::ONE / Complex::ZERO, Complex::INF);
/// assert_eq!(z.to_string(), "3.0+4.0i");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    pub const I: Self = Self { re: 0.0, im: 1.0 };
    /// The undefined value.
    pub const NAN: Self = Self { re: f64::NAN, im: f64::NAN };
    /// The point at infinity.
    pub const INF: Self = Self { re: f64::INFINITY, im: f64::INFINITY };

    /// Creates a new value, normalizing non-finite parts to `NAN` or `INF`.
    pub fn new(re: f64, im: f64) -> Self {
        <Self as ComplexBackend>::of(re, im)
    }
}

impl ComplexBackend for Complex {
    fn from_parts(re: f64, im: f64) -> Self { Self { re, im } }
    fn re(&self) -> f64 { self.re }
    fn im(&self) -> f64 { self.im }

    fn exp(&self) -> Self { config::functions().exp(self) }
    fn ln(&self) -> Self { config::functions().ln(self) }
    fn sin(&self) -> Self { config::functions().sin(self) }
    fn cos(&self) -> Self { config::functions().cos(self) }
    fn sqrt(&self) -> Self { config::functions().sqrt(self) }
    fn pow(&self, w: &Self) -> Self { config::functions().pow(self, w) }
}

crate::operators::impl_complex_operators!(Complex);

impl Default for Complex {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl From<i32> for Complex {
    fn from(re: i32) -> Self {
        Self::new(f64::from(re), 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex64> for Complex {
    fn from(value: Complex64) -> Self {
        Self::new(value.re, value.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Self {
        Complex64::new(value.re, value.im)
    }
}

impl num_traits::Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        <Self as ComplexBackend>::is_zero(self)
    }
}

impl num_traits::One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}

impl num_traits::Pow<Complex> for Complex {
    type Output = Complex;

    fn pow(self, rhs: Complex) -> Complex {
        <Self as ComplexBackend>::pow(&self, &rhs)
    }
}

impl num_traits::Pow<f64> for Complex {
    type Output = Complex;

    fn pow(self, rhs: f64) -> Complex {
        <Self as ComplexBackend>::pow(&self, &Self::from(rhs))
    }
}
