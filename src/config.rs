//! # config.rs
//!
//! Process-wide configuration.
//!
//! Two pieces of configuration exist:
//!
//! - [`Grammar`]: options of the string parser, passed explicitly to
//!   [`parse_with`](crate::parse_with).
//! - The installed [`FunctionTable`]: the implementations behind `exp`, `ln`,
//!   `sin`, `cos`, `sqrt` and `pow` of the default [`Complex`](crate::Complex).
//!
//! The function table is set at most once, at startup and before any
//! evaluation. The first read fixes the default table; a later
//! [`install`] fails with [`ConfigError::AlreadyInstalled`]. Values computed
//! before installation are not affected.

use crate::error::ConfigError;
use crate::functions::buildin::FunctionTable;
use crate::lexer::IMAGINARY_UNIT;

use std::sync::OnceLock;
use tracing::debug;

static FUNCTIONS: OnceLock<FunctionTable> = OnceLock::new();

/// Installs `table` as the process-wide function table.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInstalled`] if a table was installed before
/// or the default table was already used.
///
/// # Examples
///
/// ```
/// use riemann_complex::{config, FunctionTable};
///
/// // at startup, before the first evaluation
/// let _ = config::install(FunctionTable::default());
/// assert!(config::install(FunctionTable::default()).is_err());
/// ```
pub fn install(table: FunctionTable) -> Result<(), ConfigError> {
    FUNCTIONS.set(table).map_err(|_| ConfigError::AlreadyInstalled)?;
    debug!(functions = ?FunctionTable::names(), "installed function table");
    Ok(())
}

/// The active function table, the default one if none was installed.
pub fn functions() -> &'static FunctionTable {
    FUNCTIONS.get_or_init(FunctionTable::default)
}

/// Options of the complex number grammar.
///
/// # Examples
///
/// ```
/// use riemann_complex::{config::Grammar, parse_with, Complex};
///
/// let grammar = Grammar::new().with_unit('j').unwrap();
/// let z: Complex = parse_with("3+4j", &grammar).unwrap();
/// assert_eq!(z, Complex::new(3.0, 4.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grammar {
    unit: char,
    case_insensitive_unit: bool,
    allow_whitespace: bool,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character marking the imaginary term.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUnit`] for characters the lexer reads as
    /// part of a number or as a separator: digits, `.`, `+`, `-`, the
    /// exponent markers `e`/`E` and whitespace.
    pub fn with_unit(mut self, unit: char) -> Result<Self, ConfigError> {
        let reserved = unit.is_ascii_digit()
            || unit.is_whitespace()
            || matches!(unit, '.' | '+' | '-' | 'e' | 'E');
        if reserved {
            return Err(ConfigError::InvalidUnit { unit });
        }
        self.unit = unit;
        Ok(self)
    }

    /// Accepts the unit in both cases, e.g. `i` and `I`.
    pub fn with_case_insensitive_unit(mut self, enabled: bool) -> Self {
        self.case_insensitive_unit = enabled;
        self
    }

    /// Ignores whitespace between and around terms.
    pub fn with_whitespace(mut self, allowed: bool) -> Self {
        self.allow_whitespace = allowed;
        self
    }

    pub fn unit(&self) -> char {
        self.unit
    }

    pub fn allows_whitespace(&self) -> bool {
        self.allow_whitespace
    }

    /// Returns true if `ch` marks the imaginary term.
    pub fn is_unit(&self, ch: char) -> bool {
        if self.case_insensitive_unit {
            ch.to_lowercase().eq(self.unit.to_lowercase())
        } else {
            ch == self.unit
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            unit: IMAGINARY_UNIT,
            case_insensitive_unit: false,
            allow_whitespace: true,
        }
    }
}
