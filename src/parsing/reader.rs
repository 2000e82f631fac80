// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Streaming tokenizer turning characters into rows of fields.
//!
//! The [`Reader`] is a finite state machine fed one character at a time. It
//! yields [`Row`]s lazily and stops for good after the first error. Blank
//! lines and comment lines never produce a row.
//!
//! # States
//!
//! ```text
//! First ──char──> Inside ──delimiter──> Outside ──quote──> InsideQuoted
//!   │                                      ▲                   │  ▲
//!   └──comment──> Comment                  │                 quote quote
//!                                          └──delimiter── InsideQuotedAfterQuote
//! ```
//!
//! A quote seen inside a quoted field is ambiguous until the next character
//! arrives: another quote makes it a literal `"`, a delimiter or newline makes
//! it the closing quote.

use std::str::Chars;

use crate::errors::{ParseError, Position};
use crate::observability::messages::parsing::TokenizerStep;
use crate::observability::messages::StructuredLog;
use crate::parsing::Dialect;

/// One logical record: the fields of a (possibly multi-line) row together
/// with the 1-based line the row starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
    line: usize,
}

impl Row {
    pub fn new(fields: Vec<String>, line: usize) -> Self {
        Self { fields, line }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// The row as it would read in a whitespace separated source, used in
    /// diagnostics.
    pub fn text(&self) -> String {
        self.fields.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    First,
    Outside,
    Inside,
    InsideQuoted,
    InsideQuotedAfterQuote,
    Comment,
}

pub struct Reader<I: Iterator<Item = char>> {
    chars: I,
    dialect: Dialect,
    state: ReaderState,
    field: String,
    row: Vec<String>,
    row_line: usize,
    line: usize,
    column: usize,
    offset: usize,
    after_cr: bool,
    quote_position: Position,
    finished: bool,
}

impl<'a> Reader<Chars<'a>> {
    pub fn for_str(text: &'a str, dialect: Dialect) -> Self {
        Self::new(text.chars(), dialect)
    }
}

impl<I: Iterator<Item = char>> Reader<I> {
    pub fn new(chars: I, dialect: Dialect) -> Self {
        Self {
            chars,
            dialect,
            state: ReaderState::First,
            field: String::new(),
            row: Vec::new(),
            row_line: 1,
            line: 1,
            column: 0,
            offset: 0,
            after_cr: false,
            quote_position: Position::default(),
            finished: false,
        }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Position of the next character and bookkeeping for the one consumed.
    fn advance(&mut self, c: char) -> Position {
        let position = Position::new(self.line, self.column + 1, self.offset);
        self.offset += 1;

        match c {
            '\n' if self.after_cr => self.after_cr = false,
            '\n' | '\r' => {
                self.line += 1;
                self.column = 0;
                self.after_cr = c == '\r';
            }
            _ => {
                self.column += 1;
                self.after_cr = false;
            }
        }

        position
    }

    fn start_row(&mut self, position: Position) {
        if self.state == ReaderState::First {
            self.row_line = position.line;
        }
    }

    fn finish_field(&mut self) {
        let raw = std::mem::take(&mut self.field);
        let value = if self.state == ReaderState::InsideQuotedAfterQuote {
            raw
        } else {
            self.dialect.trim_end(&raw).to_string()
        };

        self.row.push(value);
        self.state = ReaderState::Outside;
    }

    fn emit_row(&mut self) -> Row {
        if !(self.state == ReaderState::Outside && self.dialect.delimiter_is_whitespace()) {
            self.finish_field();
        }

        self.field.clear();
        self.state = ReaderState::First;
        Row::new(std::mem::take(&mut self.row), self.row_line)
    }

    fn step(&mut self, c: char, position: Position) -> Result<Option<Row>, ParseError> {
        let is_newline = self.dialect.is_newline(c);

        match self.state {
            ReaderState::Comment => {
                if is_newline {
                    self.state = ReaderState::First;
                }
                Ok(None)
            }

            ReaderState::First | ReaderState::Outside => {
                if is_newline {
                    if self.state == ReaderState::Outside {
                        return Ok(Some(self.emit_row()));
                    }
                    return Ok(None);
                }

                if self.dialect.is_trim_left(c) {
                    return Ok(None);
                }

                if self.dialect.is_comment(c) {
                    let row = if self.state == ReaderState::Outside {
                        Some(self.emit_row())
                    } else {
                        None
                    };
                    self.state = ReaderState::Comment;
                    return Ok(row);
                }

                self.start_row(position);

                if self.dialect.is_quote(c) {
                    self.state = ReaderState::InsideQuoted;
                    self.quote_position = position;
                    return Ok(None);
                }

                if self.dialect.is_delimiter(c) {
                    self.finish_field();
                    return Ok(None);
                }

                self.field.push(c);
                self.state = ReaderState::Inside;
                Ok(None)
            }

            ReaderState::Inside => {
                if self.dialect.is_quote(c) {
                    return Err(ParseError::UnallowedQuote {
                        reason: "Quote not allowed here",
                        position,
                    });
                }

                if is_newline {
                    return Ok(Some(self.emit_row()));
                }

                if self.dialect.is_delimiter(c) {
                    self.finish_field();
                    return Ok(None);
                }

                self.field.push(c);
                Ok(None)
            }

            ReaderState::InsideQuotedAfterQuote => {
                if self.dialect.is_quote(c) {
                    self.field.push(c);
                    self.state = ReaderState::InsideQuoted;
                    return Ok(None);
                }

                if self.dialect.is_delimiter(c) {
                    self.finish_field();
                    return Ok(None);
                }

                if is_newline {
                    return Ok(Some(self.emit_row()));
                }

                if self.dialect.tolerates_trailing_after_quote() {
                    if self.dialect.is_trim_right(c) {
                        return Ok(None);
                    }

                    if self.dialect.is_comment(c) {
                        let row = self.emit_row();
                        self.state = ReaderState::Comment;
                        return Ok(Some(row));
                    }
                }

                Err(ParseError::UnallowedQuote {
                    reason: "Single quote inside quoted field",
                    position,
                })
            }

            ReaderState::InsideQuoted => {
                if self.dialect.is_quote(c) {
                    self.state = ReaderState::InsideQuotedAfterQuote;
                } else {
                    self.field.push(c);
                }
                Ok(None)
            }
        }
    }

    fn finish(&mut self) -> Option<Result<Row, ParseError>> {
        match self.state {
            ReaderState::InsideQuoted => Some(Err(ParseError::UnclosedQuote {
                position: self.quote_position,
            })),
            ReaderState::InsideQuotedAfterQuote | ReaderState::Outside | ReaderState::Inside => {
                Some(Ok(self.emit_row()))
            }
            ReaderState::First | ReaderState::Comment => None,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Reader<I> {
    type Item = Result<Row, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(c) = self.chars.next() {
            let position = self.advance(c);
            TokenizerStep {
                state: &self.state,
                ch: c,
                line: position.line,
                column: position.column,
            }
            .log();

            match self.step(c, position) {
                Ok(Some(row)) => return Some(Ok(row)),
                Ok(None) => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }

        self.finished = true;
        self.finish()
    }
}

/// Tokenize a whole string eagerly.
pub fn read_rows(text: &str, dialect: Dialect) -> Result<Vec<Row>, ParseError> {
    Reader::for_str(text, dialect).collect()
}

/// Quote a value so that the reader gives it back unchanged.
pub fn quote_field(value: &str, dialect: &Dialect) -> String {
    match dialect.quote() {
        Some(quote) => {
            let doubled: String = [quote, quote].iter().collect();
            let escaped = value.replace(quote, &doubled);
            format!("{quote}{escaped}{quote}")
        }
        None => value.to_string(),
    }
}

/// Write fields as a single line the reader parses back into the same fields.
pub fn format_row<S: AsRef<str>>(fields: &[S], dialect: &Dialect) -> String {
    let delimiter = dialect.primary_delimiter().to_string();
    fields
        .iter()
        .map(|field| quote_field(field.as_ref(), dialect))
        .collect::<Vec<_>>()
        .join(&delimiter)
}
