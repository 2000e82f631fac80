// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration parsing events.
//!
//! This module contains message types for logging events related to:
//! * Tokenizing a configuration source into rows
//! * Single tokenizer steps, for tracing the state machine
//! * Selecting a section from a sectioned configuration

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration source was tokenized and split into sections.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ConfigParsed<'a> {
    pub origin: &'a str,
    pub row_count: usize,
    pub section_count: usize,
}

impl Display for ConfigParsed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Parsed configuration '{}': {} rows in {} named sections",
            self.origin, self.row_count, self.section_count
        )
    }
}

impl StructuredLog for ConfigParsed<'_> {
    fn log(&self) {
        tracing::debug!(
            origin = self.origin,
            row_count = self.row_count,
            section_count = self.section_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "config_parsed",
            span_name = name,
            origin = self.origin,
            row_count = self.row_count,
            section_count = self.section_count,
        )
    }
}

/// Rows were selected for pipeline construction.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct SectionSelected<'a> {
    pub origin: &'a str,
    /// `None` when the whole source is used.
    pub section: Option<&'a str>,
    pub row_count: usize,
}

impl Display for SectionSelected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.section {
            Some(section) => write!(
                f,
                "Selected section [{}] of '{}': {} rows",
                section, self.origin, self.row_count
            ),
            None => write!(
                f,
                "Selected all of '{}': {} rows",
                self.origin, self.row_count
            ),
        }
    }
}

impl StructuredLog for SectionSelected<'_> {
    fn log(&self) {
        tracing::debug!(
            origin = self.origin,
            section = self.section.unwrap_or(""),
            row_count = self.row_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "section_selected",
            span_name = name,
            origin = self.origin,
            section = self.section.unwrap_or(""),
        )
    }
}

/// The tokenizer consumed one character.
///
/// # Log Level
/// `trace!` - Per-character detail, only useful when debugging a dialect
pub struct TokenizerStep<'a> {
    /// State before the character was handled, as its debug name.
    pub state: &'a dyn std::fmt::Debug,
    pub ch: char,
    pub line: usize,
    pub column: usize,
}

impl Display for TokenizerStep<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tokenizer in {:?} read {:?} at {}:{}",
            self.state, self.ch, self.line, self.column
        )
    }
}

impl StructuredLog for TokenizerStep<'_> {
    fn log(&self) {
        tracing::trace!(
            state = ?self.state,
            ch = ?self.ch,
            line = self.line,
            column = self.column,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "tokenizer_step",
            span_name = name,
            line = self.line,
            column = self.column,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_selected_display() {
        let named = SectionSelected {
            origin: "rules.conf",
            section: Some("normalization"),
            row_count: 2,
        };
        assert_eq!(
            named.to_string(),
            "Selected section [normalization] of 'rules.conf': 2 rows"
        );

        let whole = SectionSelected {
            origin: "rules.conf",
            section: None,
            row_count: 5,
        };
        assert_eq!(whole.to_string(), "Selected all of 'rules.conf': 5 rows");
    }

    #[test]
    fn test_tokenizer_step_display() {
        let step = TokenizerStep {
            state: &"Inside",
            ch: '"',
            line: 2,
            column: 7,
        };
        assert_eq!(step.to_string(), "Tokenizer in \"Inside\" read '\"' at 2:7");
    }
}
