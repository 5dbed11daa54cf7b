//! # polar.rs
//!
//! Polar form `(modulus, arg)` of a complex number.

use crate::functions::core::ComplexBackend;

/// A complex number given by its modulus and argument.
///
/// Obtained from [`ComplexBackend::to_polar`]. The fields are public and no
/// range is enforced; [`to_complex`](Polar::to_complex) accepts any argument
/// and a negative modulus reflects through the origin.
///
/// # Examples
///
/// ```
/// use riemann_complex::{Complex, ComplexBackend, Polar};
/// use std::f64::consts::FRAC_PI_2;
///
/// let p = Complex::I.to_polar();
/// assert_eq!(p, Polar::new(1.0, FRAC_PI_2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub modulus: f64,
    pub arg: f64,
}

impl Polar {
    pub fn new(modulus: f64, arg: f64) -> Self {
        Self { modulus, arg }
    }

    /// Converts back to rectangular form with the representation `B`.
    ///
    /// A NaN modulus gives `nan`. An infinite modulus gives `inf` whatever
    /// the argument, so `inf` survives the round trip.
    pub fn to_complex<B: ComplexBackend>(&self) -> B {
        if self.modulus.is_nan() {
            return B::nan();
        }
        if self.modulus.is_infinite() {
            return B::inf();
        }
        if self.arg.is_nan() {
            return B::nan();
        }
        let (sin, cos) = self.arg.sin_cos();
        B::of(self.modulus * cos, self.modulus * sin)
    }
}

impl From<(f64, f64)> for Polar {
    fn from((modulus, arg): (f64, f64)) -> Self {
        Self::new(modulus, arg)
    }
}
