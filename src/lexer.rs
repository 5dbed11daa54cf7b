//! lexer.rs
//!
//! This module provides the lexical analyzer (lexer) for complex number
//! literals. It splits an input string into a sequence of `Lexeme`s, each
//! representing a sign, a real number or an imaginary number together with its
//! position in the original string.
//!
//! Numbers are decimal, optionally with a fractional part and an exponent
//! (`2.5e-3`). A sign directly after the exponent marker belongs to the
//! number; any other `+` or `-` is a sign lexeme of its own. A number followed
//! by the imaginary unit, or the unit standing alone, is imaginary.

use crate::config::Grammar;
use crate::error::FormatError;

use smallvec::SmallVec;
use std::ops::Range;

/// Constant char representing an imaginary unit
pub const IMAGINARY_UNIT: char = 'i';

/// Kind of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    /// `+` or `-`.
    Sign,
    /// Number without the imaginary unit.
    Real,
    /// Number followed by the imaginary unit, or the bare unit.
    Imaginary,
}

/// Represents a single lexeme extracted from the input string.
///
/// A `Lexeme` stores a text slice, its kind and its span (start..end indices)
/// within the original input string.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    text: String,
    span: Range<usize>,
    kind: LexemeKind,
}

impl Lexeme {
    /// Create a new `Lexeme`.
    ///
    /// # Argument
    ///
    /// * `text` - The slice of text corresponding to the lexeme.
    /// * `span` - The range of the lexeme in the original input string.
    /// * `kind` - What the text stands for.
    pub fn new(text: &str, span: Range<usize>, kind: LexemeKind) -> Self {
        Self {
            text: text.to_string(),
            span,
            kind,
        }
    }

    /// Returns the text slice of the lexeme.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the kind of the lexeme.
    pub fn kind(&self) -> LexemeKind {
        self.kind
    }

    /// Returns the span index (start, end) of the lexeme in the original input string.
    pub fn span(&self) -> &Range<usize> {
        &self.span
    }
}

impl std::fmt::Display for Lexeme
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{name} [{start}, {end})", name=self.text, start=self.span.start, end=self.span.end)
    }
}

/// Type alias for a collection of lexemes.
///
/// A well-formed complex number has at most four lexemes.
pub type Lexemes = SmallVec<[Lexeme; 4]>;

type CharIter<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Parses a numeric literal starting at `start_idx`.
///
/// Supports integers, decimals, scientific notation, and the imaginary unit.
///
/// # Arguments
///
/// * `start_idx` - The starting index of the number.
/// * `chars` - The iterator over character indices, peekable.
/// * `grammar` - Decides which character is the imaginary unit.
///
/// # Returns
///
/// The ending index of the numeric literal and whether it ended with the
/// imaginary unit.
fn parse_number(start_idx: usize, chars: &mut CharIter, grammar: &Grammar) -> (usize, bool)
{
    let mut end = start_idx + 1;
    let mut seen_e = false;
    let mut after_e = false;

    while let Some(&(idx, ch)) = chars.peek() {
        if grammar.is_unit(ch) {
            // imaginary unit means the end of number token
            chars.next();
            return (idx + ch.len_utf8(), true);
        }

        let accept = match ch {
            d if d.is_ascii_digit() || d == '.' => true,
            'e' | 'E' if !seen_e => { seen_e = true; true },
            '+' | '-' if after_e => true,
            _ => false,
        };

        if !accept {
            break;
        }
        after_e = matches!(ch, 'e' | 'E');
        chars.next();
        end = idx + ch.len_utf8();
    }

    (end, false)
}

/// Splits the input string into a sequence of `Lexeme`s.
///
/// # Arguments
///
/// * `input` - The input string to lex.
/// * `grammar` - Imaginary unit and whitespace options.
///
/// # Errors
///
/// Returns [`FormatError::UnexpectedChar`] for a character that cannot start
/// a lexeme, including whitespace when the grammar forbids it.
pub fn from(input: &str, grammar: &Grammar) -> Result<Lexemes, FormatError> {
    let mut lexemes = Lexemes::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        if ch.is_whitespace() && grammar.allows_whitespace() {
            continue;
        }

        let (end_idx, kind) = match ch {
            '+' | '-' => (start_idx + 1, LexemeKind::Sign),
            '0'..='9' | '.' => match parse_number(start_idx, &mut chars, grammar) {
                (end, true) => (end, LexemeKind::Imaginary),
                (end, false) => (end, LexemeKind::Real),
            },
            unit if grammar.is_unit(unit) => (start_idx + unit.len_utf8(), LexemeKind::Imaginary),
            _ => {
                return Err(FormatError::UnexpectedChar {
                    input: input.to_string(),
                    ch,
                    pos: start_idx,
                });
            }
        };

        lexemes.push(Lexeme::new(&input[start_idx..end_idx], start_idx..end_idx, kind));
    }

    Ok(lexemes)
}
