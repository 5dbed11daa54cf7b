//! # parser.rs
//!
//! This module converts the textual representation of a complex number into a
//! value of any [`ComplexBackend`].
//!
//! Accepted forms, after folding consecutive signs into one:
//!
//! | terms | example |
//! |---|---|
//! | real or imaginary | `2.5`, `3i`, `i` |
//! | sign, value | `-2.5`, `-i` |
//! | real, sign, imaginary | `2+3i` |
//! | sign, real, sign, imaginary | `-2.0-3.0i` |
//!
//! The whole-string literals `Infinity` and `NaN` are recognized before
//! tokenization.

use crate::config::Grammar;
use crate::constants;
use crate::error::FormatError;
use crate::functions::core::ComplexBackend;
use crate::lexer::{self, LexemeKind, Lexemes};

use smallvec::SmallVec;
use tracing::trace;

/// A term after sign folding.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Term<'a> {
    Sign(f64),
    Real(&'a str),
    Imaginary(&'a str),
}

/// Parses `text` with the given grammar.
///
/// # Errors
///
/// Returns a [`FormatError`] carrying `text` if the input is empty, contains
/// an unexpected character, has a numeric segment that is not a valid number
/// or does not match one of the accepted forms.
///
/// # Examples
///
/// ```
/// use riemann_complex::{parse_with, config::Grammar, backends::NumComplex};
///
/// let z: NumComplex = parse_with("-2.0-3.0i", &Grammar::default()).unwrap();
/// assert_eq!(z, NumComplex::new(-2.0, -3.0));
/// ```
pub fn parse_with<B: ComplexBackend>(text: &str, grammar: &Grammar) -> Result<B, FormatError> {
    let parsed = parse_parts(text, grammar);
    if let Err(err) = &parsed {
        trace!(input = text, error = %err, "failed to parse complex number");
    }
    parsed.map(|(re, im)| B::of(re, im))
}

fn parse_parts(text: &str, grammar: &Grammar) -> Result<(f64, f64), FormatError> {
    let trimmed = if grammar.allows_whitespace() { text.trim() } else { text };
    if trimmed.is_empty() {
        return Err(FormatError::Empty { input: text.to_string() });
    }
    if let Some(parts) = constants::literal(trimmed) {
        return Ok(parts);
    }

    let lexemes = lexer::from(text, grammar)?;
    let terms = fold_signs(&lexemes);

    match *terms.as_slice() {
        [Term::Real(x)] => Ok((parse_number(text, x)?, 0.0)),
        [Term::Imaginary(y)] => Ok((0.0, parse_imaginary(text, y)?)),
        [Term::Sign(s), Term::Real(x)] => Ok((s * parse_number(text, x)?, 0.0)),
        [Term::Sign(s), Term::Imaginary(y)] => Ok((0.0, s * parse_imaginary(text, y)?)),
        [Term::Real(x), Term::Sign(t), Term::Imaginary(y)] => {
            Ok((parse_number(text, x)?, t * parse_imaginary(text, y)?))
        }
        [Term::Sign(s), Term::Real(x), Term::Sign(t), Term::Imaginary(y)] => {
            Ok((s * parse_number(text, x)?, t * parse_imaginary(text, y)?))
        }
        _ => Err(FormatError::Malformed { input: text.to_string() }),
    }
}

/// Folds runs of sign lexemes into a single sign, `- -` becomes `+`.
fn fold_signs(lexemes: &Lexemes) -> SmallVec<[Term<'_>; 4]> {
    let mut terms: SmallVec<[Term<'_>; 4]> = SmallVec::new();
    for lexeme in lexemes {
        let term = match lexeme.kind() {
            LexemeKind::Sign => {
                let sign = if lexeme.text() == "-" { -1.0 } else { 1.0 };
                if let Some(Term::Sign(previous)) = terms.last_mut() {
                    *previous *= sign;
                    continue;
                }
                Term::Sign(sign)
            }
            LexemeKind::Real => Term::Real(lexeme.text()),
            LexemeKind::Imaginary => Term::Imaginary(lexeme.text()),
        };
        terms.push(term);
    }
    terms
}

fn parse_number(input: &str, text: &str) -> Result<f64, FormatError> {
    text.parse::<f64>().map_err(|_| FormatError::InvalidNumber {
        input: input.to_string(),
        text: text.to_string(),
    })
}

/// Parses the magnitude of an imaginary term; the bare unit stands for 1.
fn parse_imaginary(input: &str, text: &str) -> Result<f64, FormatError> {
    let mut chars = text.chars();
    chars.next_back();
    match chars.as_str() {
        "" => Ok(1.0),
        magnitude => parse_number(input, magnitude),
    }
}
