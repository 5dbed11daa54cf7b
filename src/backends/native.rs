//! # native.rs
//!
//! Representation backed by `num_complex::Complex64`.

use crate::functions::core::{
    of_finite_input, scaled_quotient, special_product, special_quotient, special_sum,
    ComplexBackend,
};

use num_complex::Complex64;

/// A complex number whose finite arithmetic is done by `num-complex`.
///
/// Special values are checked before delegating, so `NumComplex` has the
/// same results as [`Complex`](crate::Complex) on `nan`, `inf` and zero
/// operands. Finite results may differ in the last bits. Division uses the
/// crate's scaled quotient instead of `Complex64`'s `Div`.
///
/// # Examples
///
/// ```
/// use riemann_complex::{backends::NumComplex, ComplexBackend};
///
/// let z = NumComplex::new(3.0, 4.0);
/// assert_eq!(z.modulus(), 5.0);
/// assert_eq!(z / NumComplex::zero(), NumComplex::inf());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NumComplex(Complex64);

impl NumComplex {
    /// Creates a new value, normalizing non-finite parts.
    pub fn new(re: f64, im: f64) -> Self {
        <Self as ComplexBackend>::of(re, im)
    }

    /// The wrapped `num-complex` value.
    pub fn value(&self) -> Complex64 {
        self.0
    }

    fn wrap(value: Complex64) -> Self {
        of_finite_input(value.re, value.im)
    }
}

impl ComplexBackend for NumComplex {
    fn from_parts(re: f64, im: f64) -> Self { Self(Complex64::new(re, im)) }
    fn re(&self) -> f64 { self.0.re }
    fn im(&self) -> f64 { self.0.im }

    fn modulus(&self) -> f64 {
        if self.is_nan() || self.is_infinite() {
            return crate::functions::core::modulus_of(self);
        }
        self.0.norm()
    }

    fn plus(&self, rhs: &Self) -> Self {
        special_sum(self, rhs).unwrap_or_else(|| Self::wrap(self.0 + rhs.0))
    }

    fn minus(&self, rhs: &Self) -> Self {
        special_sum(self, rhs).unwrap_or_else(|| Self::wrap(self.0 - rhs.0))
    }

    fn times(&self, rhs: &Self) -> Self {
        special_product(self, rhs).unwrap_or_else(|| Self::wrap(self.0 * rhs.0))
    }

    // `Complex64`'s `Div` forms `re² + im²` of the divisor, which underflows
    // or overflows for extreme magnitudes.
    fn divide(&self, rhs: &Self) -> Self {
        special_quotient(self, rhs).unwrap_or_else(|| {
            let (re, im) = scaled_quotient(self.0.re, self.0.im, rhs.0.re, rhs.0.im);
            of_finite_input(re, im)
        })
    }

    fn exp(&self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return Self::nan();
        }
        Self::wrap(self.0.exp())
    }

}

crate::operators::impl_complex_operators!(NumComplex);

impl Default for NumComplex {
    fn default() -> Self {
        <Self as ComplexBackend>::zero()
    }
}

impl From<Complex64> for NumComplex {
    fn from(value: Complex64) -> Self {
        Self::new(value.re, value.im)
    }
}

impl From<NumComplex> for Complex64 {
    fn from(value: NumComplex) -> Self {
        value.0
    }
}
