//! # backends.rs
//!
//! Alternative representations of a complex number.
//!
//! Both types implement [`ComplexBackend`](crate::ComplexBackend) and obey the
//! same special-value algebra as [`Complex`](crate::Complex); they differ in
//! how the finite arithmetic is carried out.
//!
//! - [`NumComplex`]: finite arithmetic delegated to [`num_complex::Complex64`].
//! - [`MemoComplex`]: modulus and argument computed once on first use.

pub mod memo;
pub mod native;

pub use memo::MemoComplex;
pub use native::NumComplex;
