// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while tokenizing configuration text.
//!
//! Every parse error carries a [`Position`] so that the layer rendering the
//! error can point the user at the exact character that broke the parse.

use std::fmt;
use thiserror::Error;

/// Location of a character inside the tokenized input.
///
/// `line` and `column` are 1-based, `offset` is the 0-based index of the
/// character in the whole input (counted in characters, not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

/// An invalid or unknown dialect was requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    #[error("Unknown dialect '{0}'")]
    Unknown(String),

    #[error("Invalid dialect: {0}")]
    Invalid(String),
}

/// The tokenizer could not make sense of its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// End of input was reached while still inside a quoted field.
    /// The position is the one of the opening quote.
    #[error("Unexpected end of input: quote opened at {position} is never closed")]
    UnclosedQuote { position: Position },

    /// A quote character appeared where the grammar does not allow one.
    #[error("{reason} at {position}")]
    UnallowedQuote {
        reason: &'static str,
        position: Position,
    },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnclosedQuote { position } => *position,
            ParseError::UnallowedQuote { position, .. } => *position,
        }
    }
}
