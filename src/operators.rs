//! # operators.rs
//!
//! Operator overloading for complex representations.
//!
//! `impl_complex_operators!` wires a [`ComplexBackend`](crate::ComplexBackend)
//! into the standard operator traits. Each binary operator is implemented for
//! explicit operand pairs only: representation with itself (by value and by
//! reference), with `f64` and with `i32`, on either side. Real operands are
//! lifted through the factory, so an infinite `f64` becomes the point at
//! infinity. Unary `-` negates, unary `!` conjugates.
//!
//! The macro also provides the value semantics shared by all representations:
//! `PartialEq`/`Eq`/`Hash` on the extended plane, `Display`, `FromStr`,
//! `Sum` and `Product`.

#[doc(hidden)]
macro_rules! binary_operator {
    ($t:ty, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl std::ops::$trait for $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                <$t as $crate::ComplexBackend>::$op(&self, &rhs)
            }
        }

        impl<'a> std::ops::$trait<&'a $t> for &'a $t {
            type Output = $t;

            fn $method(self, rhs: &'a $t) -> $t {
                <$t as $crate::ComplexBackend>::$op(self, rhs)
            }
        }

        impl std::ops::$trait<f64> for $t {
            type Output = $t;

            fn $method(self, rhs: f64) -> $t {
                <$t as $crate::ComplexBackend>::$op(&self, &<$t as $crate::ComplexBackend>::of(rhs, 0.0))
            }
        }

        impl std::ops::$trait<$t> for f64 {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                <$t as $crate::ComplexBackend>::$op(&<$t as $crate::ComplexBackend>::of(self, 0.0), &rhs)
            }
        }

        impl std::ops::$trait<i32> for $t {
            type Output = $t;

            fn $method(self, rhs: i32) -> $t {
                std::ops::$trait::$method(self, f64::from(rhs))
            }
        }

        impl std::ops::$trait<$t> for i32 {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                std::ops::$trait::$method(f64::from(self), rhs)
            }
        }

        impl std::ops::$assign_trait for $t {
            fn $assign_method(&mut self, rhs: $t) {
                *self = <$t as $crate::ComplexBackend>::$op(self, &rhs);
            }
        }

        impl std::ops::$assign_trait<f64> for $t {
            fn $assign_method(&mut self, rhs: f64) {
                *self = <$t as $crate::ComplexBackend>::$op(self, &<$t as $crate::ComplexBackend>::of(rhs, 0.0));
            }
        }
    };
}

macro_rules! impl_complex_operators {
    ($( $t:ty ),+ $(,)?) => {
        $(
            $crate::operators::binary_operator!($t, Add, add, AddAssign, add_assign, plus);
            $crate::operators::binary_operator!($t, Sub, sub, SubAssign, sub_assign, minus);
            $crate::operators::binary_operator!($t, Mul, mul, MulAssign, mul_assign, times);
            $crate::operators::binary_operator!($t, Div, div, DivAssign, div_assign, divide);

            impl std::ops::Neg for $t {
                type Output = $t;

                fn neg(self) -> $t {
                    <$t as $crate::ComplexBackend>::negate(&self)
                }
            }

            /// `!z` is the complex conjugate.
            impl std::ops::Not for $t {
                type Output = $t;

                fn not(self) -> $t {
                    <$t as $crate::ComplexBackend>::conj(&self)
                }
            }

            impl PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    $crate::functions::core::same_point(self, other)
                }
            }

            impl Eq for $t {}

            impl std::hash::Hash for $t {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    $crate::functions::core::hash_point(self, state)
                }
            }

            impl std::fmt::Display for $t {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    $crate::format::write_complex(self, f)
                }
            }

            impl std::str::FromStr for $t {
                type Err = $crate::error::FormatError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $crate::parser::parse_with(s, &$crate::config::Grammar::default())
                }
            }

            impl std::iter::Sum for $t {
                fn sum<I: Iterator<Item = $t>>(iter: I) -> $t {
                    iter.fold(<$t as $crate::ComplexBackend>::zero(), |acc, z| {
                        <$t as $crate::ComplexBackend>::plus(&acc, &z)
                    })
                }
            }

            impl std::iter::Product for $t {
                fn product<I: Iterator<Item = $t>>(iter: I) -> $t {
                    iter.fold(<$t as $crate::ComplexBackend>::one(), |acc, z| {
                        <$t as $crate::ComplexBackend>::times(&acc, &z)
                    })
                }
            }
        )+
    };
}

pub(crate) use binary_operator;
pub(crate) use impl_complex_operators;
