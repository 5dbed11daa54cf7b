//! # buildin.rs
//!
//! Elementary functions on the extended complex plane.
//!
//! This module holds the closed forms of `exp`, `ln`, `sin`, `cos`, `sqrt` and
//! `pow`, generic over any [`ComplexBackend`], and the [`FunctionTable`] that
//! binds a name to an implementation for the default [`Complex`] type.
//!
//! Every function checks the undefined value and the point at infinity first.
//! Branch cuts follow the principal argument in (-π, π].

use crate::complex::Complex;
use crate::error::ParseFuncError;
use crate::functions::core::{of_finite_input, ComplexBackend};

/// `e^re · (cos(im) + i·sin(im))`; `nan` and `inf` give `nan`.
pub fn exp<B: ComplexBackend>(z: &B) -> B {
    if z.is_nan() || z.is_infinite() {
        return B::nan();
    }
    let r = z.re().exp();
    of_finite_input(r * z.im().cos(), r * z.im().sin())
}

/// Principal logarithm `ln|z| + i·arg(z)`.
///
/// The origin is a singularity and gives `nan`; `ln(inf)` is `inf`.
pub fn ln<B: ComplexBackend>(z: &B) -> B {
    if z.is_nan() || z.is_zero() {
        return B::nan();
    }
    if z.is_infinite() {
        return B::inf();
    }
    B::of(z.modulus().ln(), z.arg())
}

/// `sin(re)·cosh(im) + i·cos(re)·sinh(im)`; `nan` and `inf` give `nan`.
pub fn sin<B: ComplexBackend>(z: &B) -> B {
    if z.is_nan() || z.is_infinite() {
        return B::nan();
    }
    let (x, y) = (z.re(), z.im());
    of_finite_input(x.sin() * y.cosh(), x.cos() * y.sinh())
}

/// `cos(re)·cosh(im) - i·sin(re)·sinh(im)`; `nan` and `inf` give `nan`.
pub fn cos<B: ComplexBackend>(z: &B) -> B {
    if z.is_nan() || z.is_infinite() {
        return B::nan();
    }
    let (x, y) = (z.re(), z.im());
    of_finite_input(x.cos() * y.cosh(), -x.sin() * y.sinh())
}

/// Principal square root, the real part of the result is never negative.
pub fn sqrt<B: ComplexBackend>(z: &B) -> B {
    if z.is_nan() {
        return B::nan();
    }
    if z.is_infinite() {
        return B::inf();
    }
    if z.is_zero() {
        return B::zero();
    }
    // |re| + modulus overflows above a quarter of f64::MAX; sqrt(z) = 2·sqrt(z/4)
    let (x, y) = (z.re(), z.im());
    let (x, y, modulus, scale) = if x.abs().max(y.abs()) > f64::MAX / 4.0 {
        (x / 4.0, y / 4.0, (x / 4.0).hypot(y / 4.0), 2.0)
    } else {
        (x, y, z.modulus(), 1.0)
    };
    let t = ((x.abs() + modulus) / 2.0).sqrt();
    if x >= 0.0 {
        B::of(scale * t, scale * (y / (2.0 * t)))
    } else {
        B::of(scale * (y.abs() / (2.0 * t)), scale * 1.0_f64.copysign(y) * t)
    }
}

/// Principal power `z^w` for a complex base.
///
/// Evaluated as `|z|^w · exp(arg(z)·i·w)`. `nan` anywhere gives `nan`;
/// `0^0` is one and `0^w` is zero otherwise; an infinite operand gives `nan`.
pub fn pow<B: ComplexBackend>(z: &B, w: &B) -> B {
    if z.is_nan() || w.is_nan() {
        return B::nan();
    }
    if z.is_zero() {
        return if w.is_zero() { B::one() } else { B::zero() };
    }
    if z.is_infinite() || w.is_infinite() {
        return B::nan();
    }
    let rotation = B::of(z.arg(), 0.0).times(&B::i()).times(w).exp();
    pow_real(z.modulus(), w).times(&rotation)
}

/// Power `x^w` for a real base, evaluated as `exp(ln(x)·w)`.
///
/// A negative base has no real logarithm and gives `nan`.
pub fn pow_real<B: ComplexBackend>(x: f64, w: &B) -> B {
    if x.is_nan() || w.is_nan() || x < 0.0 {
        return B::nan();
    }
    if x == 0.0 {
        return if w.is_zero() { B::one() } else { B::zero() };
    }
    if x.is_infinite() || w.is_infinite() {
        return B::nan();
    }
    w.times(&B::of(x.ln(), 0.0)).exp()
}

/// One-argument function on the default representation.
pub type UnaryFn = fn(&Complex) -> Complex;

/// Two-argument function on the default representation.
pub type BinaryFn = fn(&Complex, &Complex) -> Complex;

macro_rules! define_functions {
    ( $( $name:ident => $arity:literal ), + $(,)? ) => {
        /// Enumeration of the replaceable elementary functions.
        #[allow(non_camel_case_types)] // To use ident as string to compare them.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum FuncKind {
            $( $name ), +
        }

        impl FuncKind {
            /// Returns a list of available function names.
            pub fn available_names() -> &'static [&'static str]
            {
                &[ $( stringify!($name) ),+ ]
            }

            /// Number of arguments the function expects.
            pub fn arity(&self) -> usize
            {
                match self {
                    $( Self::$name => $arity, )+
                }
            }
        }

        impl std::str::FromStr for FuncKind {
            type Err = ParseFuncError;

            fn from_str(s: &str) -> Result<Self, Self::Err>
            {
                match s {
                    $(
                        stringify!($name) => Ok(Self::$name),
                    )+
                    _ => Err(ParseFuncError::UnknownFunction { name: s.to_string() }),
                }
            }
        }

        impl std::fmt::Display for FuncKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let s = match self {
                    $( Self::$name => stringify!($name), )+
                };
                write!(f, "{}", s)
            }
        }
    };
}

define_functions!(
    exp  => 1,
    ln   => 1,
    sin  => 1,
    cos  => 1,
    sqrt => 1,
    pow  => 2,
);

/// The implementations behind the elementary functions of [`Complex`].
///
/// The default table holds the closed forms of this module. Single entries
/// can be replaced, e.g. to route `exp` through another library, and the
/// table installed process-wide with [`crate::config::install`].
///
/// # Examples
///
/// ```
/// use riemann_complex::{Complex, ComplexBackend, FunctionTable};
///
/// fn snapped_exp(z: &Complex) -> Complex {
///     riemann_complex::functions::buildin::exp(z).zero_snap_default()
/// }
///
/// let table = FunctionTable::default().with_exp(snapped_exp);
/// let z = Complex::new(0.0, std::f64::consts::PI);
/// assert_eq!(table.exp(&z), Complex::new(-1.0, 0.0));
/// ```
#[derive(Clone, Copy)]
pub struct FunctionTable {
    exp: UnaryFn,
    ln: UnaryFn,
    sin: UnaryFn,
    cos: UnaryFn,
    sqrt: UnaryFn,
    pow: BinaryFn,
}

impl FunctionTable {
    pub fn with_exp(mut self, func: UnaryFn) -> Self { self.exp = func; self }
    pub fn with_ln(mut self, func: UnaryFn) -> Self { self.ln = func; self }
    pub fn with_sin(mut self, func: UnaryFn) -> Self { self.sin = func; self }
    pub fn with_cos(mut self, func: UnaryFn) -> Self { self.cos = func; self }
    pub fn with_sqrt(mut self, func: UnaryFn) -> Self { self.sqrt = func; self }
    pub fn with_pow(mut self, func: BinaryFn) -> Self { self.pow = func; self }

    pub fn exp(&self, z: &Complex) -> Complex { (self.exp)(z) }
    pub fn ln(&self, z: &Complex) -> Complex { (self.ln)(z) }
    pub fn sin(&self, z: &Complex) -> Complex { (self.sin)(z) }
    pub fn cos(&self, z: &Complex) -> Complex { (self.cos)(z) }
    pub fn sqrt(&self, z: &Complex) -> Complex { (self.sqrt)(z) }
    pub fn pow(&self, z: &Complex, w: &Complex) -> Complex { (self.pow)(z, w) }

    /// Calls the function `kind` with `args`.
    ///
    /// Returns `None` if the number of arguments does not match the arity.
    pub fn apply(&self, kind: FuncKind, args: &[Complex]) -> Option<Complex>
    {
        if args.len() != kind.arity() {
            return None;
        }
        let value = match kind {
            FuncKind::exp => self.exp(&args[0]),
            FuncKind::ln => self.ln(&args[0]),
            FuncKind::sin => self.sin(&args[0]),
            FuncKind::cos => self.cos(&args[0]),
            FuncKind::sqrt => self.sqrt(&args[0]),
            FuncKind::pow => self.pow(&args[0], &args[1]),
        };
        Some(value)
    }

    /// Returns the names accepted by [`FuncKind`]'s `FromStr`.
    pub fn names() -> &'static [&'static str]
    {
        FuncKind::available_names()
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self {
            exp: exp::<Complex>,
            ln: ln::<Complex>,
            sin: sin::<Complex>,
            cos: cos::<Complex>,
            sqrt: sqrt::<Complex>,
            pow: pow::<Complex>,
        }
    }
}

// The Debug for FunctionTable can't be derived meaningfully because it only holds fn pointers.
impl std::fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTable")
            .field("names", &Self::names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{E, FRAC_1_SQRT_2, LN_2, PI};
    use std::str::FromStr;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    fn assert_close(expected: Complex, actual: Complex, eps: f64) {
        assert!(
            (expected - actual).modulus() < eps,
            "expected {}, actual {}", expected, actual
        );
    }

    #[test]
    fn test_exp() {
        assert_eq!(exp(&Complex::ZERO), Complex::ONE);
        assert_abs_diff_eq!(exp(&Complex::ONE).re(), E, epsilon = 1.0e-15);
        assert_close(c(-1.0, 0.0), exp(&c(0.0, PI)), 1.0e-12);
        assert_close(Complex::I, exp(&c(0.0, PI / 2.0)), 1.0e-12);
        assert_close(c(0.0, E * E), exp(&c(2.0, PI / 2.0)), 1.0e-12);
        assert_close(c(0.0, -1.0), exp(&c(0.0, 3.0 * PI / 2.0)), 1.0e-12);
        assert!(exp(&Complex::INF).is_nan());
        assert!(exp(&Complex::NAN).is_nan());
    }

    #[test]
    fn test_exp_overflow() {
        assert!(exp(&c(1000.0, 0.0)).is_infinite());
        assert_eq!(exp(&c(-1000.0, 1.0)), Complex::ZERO);
    }

    #[test]
    fn test_ln() {
        assert!(ln(&Complex::ZERO).is_nan());
        assert_eq!(ln(&Complex::ONE), Complex::ZERO);
        assert_close(Complex::ONE, ln(&c(E, 0.0)), 1.0e-15);
        assert_close(c(2.0, 0.0), ln(&c(E * E, 0.0)), 1.0e-15);
        assert_close(c(0.0, PI), ln(&c(-1.0, 0.0)), 1.0e-15);
        assert_close(c(0.0, PI / 2.0), ln(&Complex::I), 1.0e-15);
        assert_close(c(0.0, -PI / 2.0), ln(&c(0.0, -1.0)), 1.0e-15);
        assert!(ln(&Complex::INF).is_infinite());
        assert!(ln(&Complex::NAN).is_nan());
    }

    #[test]
    fn test_sin() {
        assert_eq!(sin(&Complex::ZERO), Complex::ZERO);
        assert_eq!(sin(&c(PI / 2.0, 0.0)), Complex::ONE);
        assert_close(c(0.0, 1.1752011936438014), sin(&Complex::I), 1.0e-14);
        assert_close(c(0.0, -1.1752011936438014), sin(&c(0.0, -1.0)), 1.0e-14);
        assert!(sin(&Complex::INF).is_nan());
        assert!(sin(&Complex::NAN).is_nan());
    }

    #[test]
    fn test_cos() {
        assert_eq!(cos(&Complex::ZERO), Complex::ONE);
        assert_close(Complex::ZERO, cos(&c(PI / 2.0, 0.0)), 1.0e-15);
        assert_eq!(cos(&c(PI, 0.0)), c(-1.0, 0.0));
        assert_close(c(1.543080634815244, 0.0), cos(&Complex::I), 1.0e-14);
        assert_close(c(1.543080634815244, 0.0), cos(&c(0.0, -1.0)), 1.0e-14);
        assert!(cos(&Complex::INF).is_nan());
        assert!(cos(&Complex::NAN).is_nan());
    }

    #[test]
    fn test_trig_overflow() {
        assert!(sin(&c(0.0, 1000.0)).is_infinite());
        assert!(cos(&c(0.0, -1000.0)).is_infinite());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(&Complex::ZERO), Complex::ZERO);
        assert_eq!(sqrt(&Complex::ONE), Complex::ONE);
        assert_eq!(sqrt(&c(4.0, 0.0)), c(2.0, 0.0));
        assert_eq!(sqrt(&c(-4.0, 0.0)), c(0.0, 2.0));
        assert_eq!(sqrt(&c(-7.0, 24.0)), c(3.0, 4.0));
        assert_close(c(FRAC_1_SQRT_2, FRAC_1_SQRT_2), sqrt(&Complex::I), 1.0e-15);
        assert_close(c(FRAC_1_SQRT_2, -FRAC_1_SQRT_2), sqrt(&c(0.0, -1.0)), 1.0e-15);
        assert!(sqrt(&Complex::INF).is_infinite());
        assert!(sqrt(&Complex::NAN).is_nan());
    }

    #[test]
    fn test_large_magnitudes() {
        let z = c(1.0e200, 1.0e200);
        let r = ln(&z);
        assert_abs_diff_eq!(r.re(), 200.0 * std::f64::consts::LN_10 + 0.5 * LN_2, epsilon = 1.0e-12);
        assert_abs_diff_eq!(r.im(), PI / 4.0, epsilon = 1.0e-15);

        let r = sqrt(&c(f64::MAX, f64::MAX));
        assert!(!r.is_infinite() && !r.is_nan());
        assert_abs_diff_eq!(r.arg(), PI / 8.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(r.modulus() / (f64::MAX.sqrt() * 2f64.sqrt().sqrt()), 1.0, epsilon = 1.0e-14);

        let r = sqrt(&c(-f64::MAX, 0.0));
        assert_eq!(r.re(), 0.0);
        assert_abs_diff_eq!(r.im() / f64::MAX.sqrt(), 1.0, epsilon = 1.0e-15);

        let r = sqrt(&c(1.0e300, -1.0e300));
        assert_abs_diff_eq!((r.times(&r).re()) / 1.0e300, 1.0, epsilon = 1.0e-14);
        assert_abs_diff_eq!((r.times(&r).im()) / 1.0e300, -1.0, epsilon = 1.0e-14);
    }

    #[test]
    fn test_sqrt_branch_cut() {
        let above = sqrt(&c(-4.0, 0.0));
        let below = sqrt(&c(-4.0, -1.0e-300));
        assert!(above.im() > 0.0);
        assert!(below.im() < 0.0);
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(&Complex::ZERO, &Complex::ZERO), Complex::ONE);
        assert_eq!(pow(&Complex::ZERO, &c(3.0, 0.0)), Complex::ZERO);
        assert_eq!(pow(&Complex::ONE, &c(3.0, 0.0)), Complex::ONE);
        assert_close(Complex::ONE, pow(&c(E, 0.0), &c(0.0, 2.0 * PI)), 1.0e-14);
        assert_close(c(-2.0, 0.0), pow(&c(E, 0.0), &c(LN_2, PI)), 1.0e-14);
        assert_close(c(0.20787957635076193, 0.0), pow(&Complex::I, &Complex::I), 1.0e-14);
        assert_close(
            c(0.12900959407446697, 0.03392409290517014),
            pow(&c(1.0, 2.0), &c(3.0, 4.0)),
            1.0e-14,
        );
    }

    #[test]
    fn test_pow_special_values() {
        assert!(pow(&Complex::NAN, &Complex::ZERO).is_nan());
        assert!(pow(&Complex::ONE, &Complex::NAN).is_nan());
        assert!(pow(&Complex::INF, &Complex::ONE).is_nan());
        assert!(pow(&c(2.0, 0.0), &Complex::INF).is_nan());
        assert_eq!(pow(&Complex::ZERO, &Complex::INF), Complex::ZERO);
    }

    #[test]
    fn test_pow_real_zeta_values() {
        let w = c(0.5, 14.134725141734693790457251983562);
        assert_close(Complex::ONE, pow_real(1.0, &w), 1.0e-12);
        assert_close(c(-1.3171414230751064, -0.5149159850108396), pow_real(2.0, &w), 1.0e-12);
        assert_close(c(-1.7042590259602113, 0.30903263975372064), pow_real(3.0, &w), 1.0e-12);
        assert_close(c(1.4697230567606336, 1.356434346522595), pow_real(4.0, &w), 1.0e-12);
        assert_close(c(-1.6241462732233494, -1.536928392338012), pow_real(5.0, &w), 1.0e-12);
        assert_close(c(-6.366647462900551, 7.711407140278745), pow_real(100.0, &w), 1.0e-12);
    }

    #[test]
    fn test_pow_real_special_values() {
        assert!(pow_real(-2.0, &Complex::ONE).is_nan());
        assert_eq!(pow_real(0.0, &Complex::ZERO), Complex::ONE);
        assert_eq!(pow_real(0.0, &c(3.0, 0.0)), Complex::ZERO);
        assert!(pow_real(f64::INFINITY, &Complex::ONE).is_nan());
        assert!(pow_real(f64::NAN, &Complex::ZERO).is_nan());
        assert!(pow_real(1.0, &Complex::NAN).is_nan());
        assert!(pow_real(2.0, &Complex::INF).is_nan());
    }

    #[test]
    fn test_func_kind_from_str() {
        assert_eq!(FuncKind::from_str("exp"), Ok(FuncKind::exp));
        assert_eq!(FuncKind::from_str("pow"), Ok(FuncKind::pow));
        assert!(FuncKind::from_str("tan").is_err());
        assert!(FuncKind::from_str("").is_err());
        assert_eq!(FuncKind::sqrt.to_string(), "sqrt");
        assert_eq!(FuncKind::pow.arity(), 2);
    }

    #[test]
    fn test_table_apply() {
        let table = FunctionTable::default();
        assert_eq!(table.apply(FuncKind::sqrt, &[c(-4.0, 0.0)]), Some(c(0.0, 2.0)));
        assert_eq!(
            table.apply(FuncKind::pow, &[Complex::ZERO, Complex::ZERO]),
            Some(Complex::ONE)
        );
        assert_eq!(table.apply(FuncKind::exp, &[]), None);
        assert_eq!(table.apply(FuncKind::pow, &[Complex::ONE]), None);
    }

    #[test]
    fn test_table_override() {
        let table = FunctionTable::default()
            .with_sin(|_z| Complex::I)
            .with_pow(|_z, _w| Complex::NAN);
        assert_eq!(table.sin(&c(3.0, 4.0)), Complex::I);
        assert!(table.pow(&Complex::ONE, &Complex::ONE).is_nan());
        assert_eq!(table.cos(&Complex::ZERO), Complex::ONE);
    }

    #[test]
    fn test_names_and_debug() {
        assert_eq!(FunctionTable::names(), &["exp", "ln", "sin", "cos", "sqrt", "pow"]);
        let debug_str = format!("{:?}", FunctionTable::default());
        assert!(debug_str.contains("FunctionTable"));
        assert!(debug_str.contains("sqrt"));
    }

    #[test]
    fn test_generic_over_backends() {
        use crate::backends::{MemoComplex, NumComplex};

        let z = NumComplex::new(-7.0, 24.0);
        assert_eq!(sqrt(&z), NumComplex::new(3.0, 4.0));
        let z = MemoComplex::new(-7.0, 24.0);
        assert_eq!(sqrt(&z), MemoComplex::new(3.0, 4.0));
        assert!(ln(&MemoComplex::zero()).is_nan());
    }
}
