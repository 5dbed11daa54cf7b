//! # core.rs
//!
//! Core trait definitions for complex number representations.
//!
//! This module defines the `ComplexBackend` trait which carries the whole
//! algebra of the extended complex plane (one unsigned point at infinity plus
//! an undefined value) as provided methods. A representation only has to say
//! how it stores a pair of `f64`; it may override any operation, e.g. to
//! delegate to a third-party library, and still inherits the special-value
//! rules through the helpers exported here.

use crate::constants::DEFAULT_ZERO_SNAP_PRECISION;
use crate::format::FormatStyle;
use crate::functions::buildin;
use crate::polar::Polar;

use std::f64::consts::{FRAC_PI_2, PI};
use std::hash::{Hash, Hasher};

/// Trait for complex number representations.
///
/// Implementors provide [`from_parts`](ComplexBackend::from_parts),
/// [`re`](ComplexBackend::re) and [`im`](ComplexBackend::im). Every other
/// operation has a default implementation that constructs its result through
/// [`of`](ComplexBackend::of), the representation's factory, so generic code
/// written against `B: ComplexBackend` switches representation by changing
/// the type parameter only.
///
/// The undefined value (`nan`) is stored as `(NaN, NaN)` and the point at
/// infinity (`inf`) as `(+∞, +∞)`. `of` guarantees that no other value carries
/// a non-finite component.
pub trait ComplexBackend: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Builds a value from raw parts. No normalization is applied.
    fn from_parts(re: f64, im: f64) -> Self;

    /// Real part.
    fn re(&self) -> f64;

    /// Imaginary part.
    fn im(&self) -> f64;

    /// Factory used by every operation.
    ///
    /// A NaN component yields `nan`, otherwise an infinite component yields
    /// `inf`.
    fn of(re: f64, im: f64) -> Self {
        if re.is_nan() || im.is_nan() {
            Self::nan()
        } else if re.is_infinite() || im.is_infinite() {
            Self::inf()
        } else {
            Self::from_parts(re, im)
        }
    }

    fn zero() -> Self { Self::from_parts(0.0, 0.0) }
    fn one() -> Self { Self::from_parts(1.0, 0.0) }
    fn i() -> Self { Self::from_parts(0.0, 1.0) }
    fn nan() -> Self { Self::from_parts(f64::NAN, f64::NAN) }
    fn inf() -> Self { Self::from_parts(f64::INFINITY, f64::INFINITY) }

    fn is_nan(&self) -> bool {
        self.re().is_nan() || self.im().is_nan()
    }

    fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.re().is_infinite() || self.im().is_infinite())
    }

    /// True for both signed zeros, `-0.0` included.
    fn is_zero(&self) -> bool {
        self.re() == 0.0 && self.im() == 0.0
    }

    /// Euclidean norm, `+∞` for `inf` and NaN for `nan`.
    fn modulus(&self) -> f64 { modulus_of(self) }

    /// Principal argument in (-π, π]; 0 at the origin, NaN for `inf` and `nan`.
    fn arg(&self) -> f64 { arg_of(self) }

    fn conj(&self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return self.clone();
        }
        Self::of(self.re(), -self.im())
    }

    fn negate(&self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return self.clone();
        }
        Self::of(-self.re(), -self.im())
    }

    fn plus(&self, rhs: &Self) -> Self {
        special_sum(self, rhs).unwrap_or_else(|| {
            of_finite_input(self.re() + rhs.re(), self.im() + rhs.im())
        })
    }

    fn minus(&self, rhs: &Self) -> Self {
        special_sum(self, rhs).unwrap_or_else(|| {
            of_finite_input(self.re() - rhs.re(), self.im() - rhs.im())
        })
    }

    fn times(&self, rhs: &Self) -> Self {
        special_product(self, rhs).unwrap_or_else(|| {
            of_finite_input(
                self.re() * rhs.re() - self.im() * rhs.im(),
                self.im() * rhs.re() + self.re() * rhs.im(),
            )
        })
    }

    fn divide(&self, rhs: &Self) -> Self {
        special_quotient(self, rhs).unwrap_or_else(|| {
            let (re, im) = scaled_quotient(self.re(), self.im(), rhs.re(), rhs.im());
            of_finite_input(re, im)
        })
    }

    /// Replaces components whose magnitude is below `precision` by zero.
    fn zero_snap(&self, precision: f64) -> Self {
        if self.is_nan() || self.is_infinite() {
            return self.clone();
        }
        let snap = |x: f64| if x.abs() < precision { 0.0 } else { x };
        Self::of(snap(self.re()), snap(self.im()))
    }

    /// [`zero_snap`](ComplexBackend::zero_snap) with
    /// [`DEFAULT_ZERO_SNAP_PRECISION`].
    fn zero_snap_default(&self) -> Self {
        self.zero_snap(DEFAULT_ZERO_SNAP_PRECISION)
    }

    fn exp(&self) -> Self { buildin::exp(self) }
    fn ln(&self) -> Self { buildin::ln(self) }
    fn sin(&self) -> Self { buildin::sin(self) }
    fn cos(&self) -> Self { buildin::cos(self) }
    fn sqrt(&self) -> Self { buildin::sqrt(self) }
    fn pow(&self, w: &Self) -> Self { buildin::pow(self, w) }

    fn to_polar(&self) -> Polar {
        Polar::new(self.modulus(), self.arg())
    }

    /// Renders the value, see [`crate::format::as_string`].
    fn as_string(&self, style: &FormatStyle) -> String {
        crate::format::as_string(self, style)
    }
}

/// Default modulus: `sqrt(re² + im²)` without intermediate overflow.
pub fn modulus_of<B: ComplexBackend>(z: &B) -> f64 {
    if z.is_nan() {
        f64::NAN
    } else if z.is_infinite() {
        f64::INFINITY
    } else {
        z.re().hypot(z.im())
    }
}

/// Default argument with explicit branch selection.
pub fn arg_of<B: ComplexBackend>(z: &B) -> f64 {
    if z.is_nan() || z.is_infinite() {
        return f64::NAN;
    }
    let (x, y) = (z.re(), z.im());
    if x > 0.0 {
        (y / x).atan()
    } else if x < 0.0 {
        if y >= 0.0 { (y / x).atan() + PI } else { (y / x).atan() - PI }
    } else if y > 0.0 {
        FRAC_PI_2
    } else if y < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    }
}

/// Special-value result of `a + b` or `a - b`, `None` when both are finite.
pub fn special_sum<B: ComplexBackend>(a: &B, b: &B) -> Option<B> {
    if a.is_nan() || b.is_nan() {
        return Some(B::nan());
    }
    match (a.is_infinite(), b.is_infinite()) {
        (true, true) => Some(B::nan()),
        (true, false) | (false, true) => Some(B::inf()),
        (false, false) => None,
    }
}

/// Special-value result of `a * b`, `None` when both are finite.
pub fn special_product<B: ComplexBackend>(a: &B, b: &B) -> Option<B> {
    if a.is_nan() || b.is_nan() {
        return Some(B::nan());
    }
    match (a.is_infinite(), b.is_infinite()) {
        (true, true) => Some(B::inf()),
        (true, false) if b.is_zero() => Some(B::nan()),
        (false, true) if a.is_zero() => Some(B::nan()),
        (true, false) | (false, true) => Some(B::inf()),
        (false, false) => None,
    }
}

/// Special-value result of `a / b`, `None` for finite `a` and finite nonzero `b`.
pub fn special_quotient<B: ComplexBackend>(a: &B, b: &B) -> Option<B> {
    if a.is_nan() || b.is_nan() {
        return Some(B::nan());
    }
    match (a.is_infinite(), b.is_infinite()) {
        (true, true) => Some(B::nan()),
        (true, false) => Some(B::inf()),
        (false, true) => Some(B::zero()),
        (false, false) if b.is_zero() => {
            Some(if a.is_zero() { B::nan() } else { B::inf() })
        }
        (false, false) => None,
    }
}

/// Quotient `(a_re + i·a_im) / (b_re + i·b_im)` of finite parts, `b` nonzero.
///
/// Smith's algorithm: both parts are divided through by the larger component
/// of `b`, so `b.re² + b.im²` is never formed and cannot underflow or
/// overflow. A result too large for `f64` comes out infinite or NaN and is
/// meant for [`of_finite_input`].
pub fn scaled_quotient(a_re: f64, a_im: f64, b_re: f64, b_im: f64) -> (f64, f64) {
    if b_re.abs() >= b_im.abs() {
        let ratio = b_im / b_re;
        let denom = b_re + b_im * ratio;
        ((a_re + a_im * ratio) / denom, (a_im - a_re * ratio) / denom)
    } else {
        let ratio = b_re / b_im;
        let denom = b_re * ratio + b_im;
        ((a_re * ratio + a_im) / denom, (a_im * ratio - a_re) / denom)
    }
}

/// Factory for results computed from finite operands.
///
/// A NaN component can then only come from an overflowed intermediate
/// (`∞ - ∞` or `0 · ∞`), so it maps to `inf` instead of `nan`.
pub fn of_finite_input<B: ComplexBackend>(re: f64, im: f64) -> B {
    if re.is_nan() || im.is_nan() {
        B::inf()
    } else {
        B::of(re, im)
    }
}

/// Equality on the extended plane: `nan == nan`, `inf == inf`, `-0.0 == 0.0`.
pub fn same_point<A: ComplexBackend, B: ComplexBackend>(a: &A, b: &B) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a.re() == b.re() && a.im() == b.im()
}

/// Hash consistent with [`same_point`].
pub fn hash_point<B: ComplexBackend, H: Hasher>(z: &B, state: &mut H) {
    if z.is_nan() {
        0u8.hash(state);
    } else if z.is_infinite() {
        1u8.hash(state);
    } else {
        2u8.hash(state);
        // -0.0 + 0.0 == +0.0
        (z.re() + 0.0).to_bits().hash(state);
        (z.im() + 0.0).to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn test_of_normalizes_non_finite_parts() {
        assert!(c(f64::INFINITY, 1.0).is_infinite());
        assert!(c(1.0, f64::NEG_INFINITY).is_infinite());
        assert!(c(f64::NAN, 1.0).is_nan());
        assert!(c(f64::NAN, f64::INFINITY).is_nan());
        assert_eq!(c(f64::NEG_INFINITY, 0.0).re(), f64::INFINITY);
    }

    #[test]
    fn test_predicates() {
        assert!(Complex::ZERO.is_zero());
        assert!(c(-0.0, -0.0).is_zero());
        assert!(!Complex::INF.is_nan());
        assert!(!Complex::NAN.is_infinite());
        assert!(!Complex::ONE.is_zero());
    }

    #[test]
    fn test_arg_branches() {
        assert_abs_diff_eq!(c(1.0, 1.0).arg(), PI / 4.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(c(-1.0, 1.0).arg(), 3.0 * PI / 4.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(c(-1.0, -1.0).arg(), -3.0 * PI / 4.0, epsilon = 1.0e-15);
        assert_eq!(c(-1.0, 0.0).arg(), PI);
        assert_eq!(c(-1.0, -0.0).arg(), PI);
        assert_eq!(c(0.0, 2.0).arg(), FRAC_PI_2);
        assert_eq!(c(0.0, -2.0).arg(), -FRAC_PI_2);
        assert_eq!(Complex::ZERO.arg(), 0.0);
        assert!(Complex::NAN.arg().is_nan());
        assert!(Complex::INF.arg().is_nan());
    }

    #[test]
    fn test_modulus() {
        assert_eq!(c(3.0, -4.0).modulus(), 5.0);
        assert_eq!(c(1.0e300, 0.0).modulus(), 1.0e300);
        let m = c(1.0e200, 1.0e200).modulus();
        assert!(m.is_finite());
        assert_abs_diff_eq!(m / 1.0e200, std::f64::consts::SQRT_2, epsilon = 1.0e-15);
        assert_abs_diff_eq!(c(1.0e-200, 1.0e-200).modulus() / 1.0e-200, std::f64::consts::SQRT_2, epsilon = 1.0e-15);
        assert_eq!(Complex::INF.modulus(), f64::INFINITY);
        assert!(Complex::NAN.modulus().is_nan());
        let z = c(2.0, 3.0);
        assert_eq!(z.modulus(), z.conj().modulus());
    }

    #[test]
    fn test_sum_table() {
        let finite = c(1.0, 2.0);
        assert!(Complex::INF.plus(&Complex::NAN).is_nan());
        assert!(Complex::INF.plus(&Complex::INF).is_nan());
        assert!(Complex::INF.minus(&Complex::INF).is_nan());
        assert!(Complex::INF.plus(&finite).is_infinite());
        assert!(Complex::INF.minus(&Complex::ZERO).is_infinite());
        assert!(finite.minus(&Complex::INF).is_infinite());
        assert!(Complex::ZERO.plus(&Complex::INF).is_infinite());
        assert_eq!(finite.plus(&c(0.5, -2.0)), c(1.5, 0.0));
    }

    #[test]
    fn test_product_table() {
        let finite = c(1.0, 2.0);
        assert!(Complex::NAN.times(&finite).is_nan());
        assert!(Complex::INF.times(&Complex::INF).is_infinite());
        assert!(Complex::INF.times(&finite).is_infinite());
        assert!(Complex::INF.times(&Complex::ZERO).is_nan());
        assert!(finite.times(&Complex::INF).is_infinite());
        assert!(Complex::ZERO.times(&Complex::INF).is_nan());
        assert_eq!(finite.times(&c(3.0, -1.0)), c(5.0, 5.0));
    }

    #[test]
    fn test_quotient_table() {
        let finite = c(1.0, 2.0);
        assert!(finite.divide(&Complex::NAN).is_nan());
        assert!(Complex::INF.divide(&Complex::INF).is_nan());
        assert!(Complex::INF.divide(&finite).is_infinite());
        assert!(Complex::INF.divide(&Complex::ZERO).is_infinite());
        assert_eq!(finite.divide(&Complex::INF), Complex::ZERO);
        assert_eq!(Complex::ZERO.divide(&Complex::INF), Complex::ZERO);
        assert!(finite.divide(&Complex::ZERO).is_infinite());
        assert!(Complex::ZERO.divide(&Complex::ZERO).is_nan());
        let q = c(5.0, 5.0).divide(&c(3.0, -1.0));
        assert_abs_diff_eq!(q.re(), 1.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(q.im(), 2.0, epsilon = 1.0e-15);
    }

    #[test]
    fn test_quotient_extreme_magnitudes() {
        let q = Complex::ONE.divide(&c(1.0e-200, 0.0));
        assert_abs_diff_eq!(q.re() / 1.0e200, 1.0, epsilon = 1.0e-14);
        assert_eq!(q.im(), 0.0);
        assert_eq!(c(1.0e200, 0.0).divide(&c(1.0e200, 0.0)), Complex::ONE);
        assert_eq!(c(1.0e200, 1.0e200).divide(&c(0.0, 1.0e200)), c(1.0, -1.0));
        let q = c(3.0e-300, 0.0).divide(&c(0.0, 1.0e-300));
        assert_eq!(q.re(), 0.0);
        assert_abs_diff_eq!(q.im(), -3.0, epsilon = 1.0e-14);
        assert_eq!(c(1.0e300, 1.0e300).divide(&c(1.0e-300, 0.0)), Complex::INF);
        assert_eq!(c(1.0e300, 0.0).divide(&c(1.0e-300, 1.0e-300)), Complex::INF);
    }

    #[test]
    fn test_scaled_quotient() {
        let (re, im) = scaled_quotient(1.0, 0.0, 1.0e-200, 1.0e-200);
        assert_abs_diff_eq!(re / 5.0e199, 1.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(im / -5.0e199, 1.0, epsilon = 1.0e-15);
        assert_eq!(scaled_quotient(4.0, 2.0, 2.0, 0.0), (2.0, 1.0));
        assert_eq!(scaled_quotient(4.0, 2.0, 0.0, 2.0), (1.0, -2.0));
    }

    #[test]
    fn test_overflow_maps_to_infinity() {
        let big = c(1.0e200, 1.0e200);
        assert!(big.times(&big).is_infinite());
        assert!(c(f64::MAX, 0.0).plus(&c(f64::MAX, 0.0)).is_infinite());
    }

    #[test]
    fn test_negate_and_conj_keep_sentinels() {
        assert!(Complex::NAN.negate().is_nan());
        assert!(Complex::INF.negate().is_infinite());
        assert!(Complex::INF.conj().is_infinite());
        assert_eq!(c(1.0, -2.0).negate(), c(-1.0, 2.0));
        assert_eq!(c(1.0, -2.0).conj(), c(1.0, 2.0));
        assert_eq!(c(1.0, -2.0).conj().conj(), c(1.0, -2.0));
    }

    #[test]
    fn test_zero_snap() {
        let z = c(1.0e-16, 2.0).zero_snap_default();
        assert_eq!(z, c(0.0, 2.0));
        let z = c(0.25, -0.001).zero_snap(0.01);
        assert_eq!(z, c(0.25, 0.0));
        assert!(Complex::NAN.zero_snap(1.0).is_nan());
    }

    #[test]
    fn test_same_point_and_hash() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(z: &Complex) -> u64 {
            let mut h = DefaultHasher::new();
            hash_point(z, &mut h);
            h.finish()
        }

        assert!(same_point(&c(-0.0, -0.0), &Complex::ZERO));
        assert_eq!(hash_of(&c(-0.0, -0.0)), hash_of(&Complex::ZERO));
        assert!(same_point(&Complex::NAN, &c(f64::NAN, 3.0)));
        assert_eq!(hash_of(&Complex::NAN), hash_of(&c(f64::NAN, 3.0)));
        assert!(!same_point(&Complex::NAN, &Complex::INF));
        assert!(!same_point(&Complex::ONE, &Complex::I));
    }
}
