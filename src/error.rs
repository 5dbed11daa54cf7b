//! # error.rs
//!
//! Error types of the crate.
//!
//! Arithmetic never fails: undefined or unbounded results are expressed by the
//! `NAN` and `INF` values. The only fallible operations are parsing text into a
//! complex number and installing the process-wide function table.

use thiserror::Error;

/// Error returned when a string cannot be parsed as a complex number.
///
/// Every variant carries the offending input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input was empty or contained only whitespace.
    #[error("cannot parse complex number from empty string {input:?}")]
    Empty { input: String },

    /// A character that is neither a sign, a digit, a decimal point,
    /// an exponent marker nor the imaginary unit.
    #[error("unexpected character {ch:?} at {pos} in {input:?}")]
    UnexpectedChar { input: String, ch: char, pos: usize },

    /// A numeric segment that is not a valid decimal number, e.g. `1.2.3`.
    #[error("invalid number {text:?} in {input:?}")]
    InvalidNumber { input: String, text: String },

    /// The terms do not form `[sign] real [sign imaginary]` or `[sign] imaginary`.
    #[error("malformed complex number {input:?}")]
    Malformed { input: String },
}

impl FormatError {
    /// Returns the input string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Empty { input }
            | Self::UnexpectedChar { input, .. }
            | Self::InvalidNumber { input, .. }
            | Self::Malformed { input } => input,
        }
    }
}

/// Error returned when a name does not denote a function of
/// [`crate::FunctionTable`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseFuncError {
    /// The function name is not recognized.
    #[error("unknown function {name:?}")]
    UnknownFunction { name: String },
}

/// Error returned by [`crate::config::install`] and
/// [`crate::config::Grammar::with_unit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A function table was already installed, or the default table was
    /// already in use when installation was attempted.
    #[error("function table already installed")]
    AlreadyInstalled,

    /// The character is part of the number syntax and cannot mark the
    /// imaginary term.
    #[error("{unit:?} cannot be used as imaginary unit")]
    InvalidUnit { unit: char },
}
