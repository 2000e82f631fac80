// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Lexical parameters of the configuration language.
//!
//! A [`Dialect`] decides which characters delimit fields, which one quotes a
//! field, which one starts a comment and which characters are trimmed from
//! either side of a field. Two dialects ship with the crate:
//!
//! | name         | delimiter  | quote | comment | trim              |
//! |--------------|------------|-------|---------|-------------------|
//! | `default`    | `,`        | `"`   | `#`     | space, tab, CR, LF|
//! | `whitespace` | space, tab | `"`   | `#`     | space, tab, CR, LF|
//!
//! Dialects are immutable once built; use [`DialectBuilder`] for custom ones.

use std::collections::BTreeSet;

use crate::errors::DialectError;

const WHITESPACE: &str = " \t\n\r";

pub const DEFAULT_DIALECT: &str = "default";
pub const WHITESPACE_DIALECT: &str = "whitespace";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    delimiter: BTreeSet<char>,
    quote: Option<char>,
    comment: Option<char>,
    trim_left: BTreeSet<char>,
    trim_right: BTreeSet<char>,
}

impl Dialect {
    pub fn builder() -> DialectBuilder {
        DialectBuilder::default()
    }

    /// Comma separated, `"` quoted, `#` comments, whitespace trimmed.
    pub fn default_dialect() -> Self {
        Self {
            delimiter: [','].into_iter().collect(),
            quote: Some('"'),
            comment: Some('#'),
            trim_left: WHITESPACE.chars().collect(),
            trim_right: WHITESPACE.chars().collect(),
        }
    }

    /// Like the default dialect, but fields are separated by spaces and tabs.
    pub fn whitespace() -> Self {
        Self {
            delimiter: [' ', '\t'].into_iter().collect(),
            ..Self::default_dialect()
        }
    }

    /// Look up one of the built-in dialects by name.
    pub fn by_name(name: &str) -> Result<Self, DialectError> {
        match name {
            DEFAULT_DIALECT => Ok(Self::default_dialect()),
            WHITESPACE_DIALECT => Ok(Self::whitespace()),
            other => Err(DialectError::Unknown(other.to_string())),
        }
    }

    pub fn is_newline(&self, c: char) -> bool {
        c == '\n' || c == '\r'
    }

    pub fn is_trim_left(&self, c: char) -> bool {
        self.trim_left.contains(&c)
    }

    pub fn is_trim_right(&self, c: char) -> bool {
        self.trim_right.contains(&c)
    }

    pub fn is_comment(&self, c: char) -> bool {
        self.comment == Some(c)
    }

    pub fn is_quote(&self, c: char) -> bool {
        self.quote == Some(c)
    }

    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiter.contains(&c)
    }

    pub fn quote(&self) -> Option<char> {
        self.quote
    }

    pub fn comment(&self) -> Option<char> {
        self.comment
    }

    /// Any one delimiter character, used when writing rows back out.
    pub fn primary_delimiter(&self) -> char {
        self.delimiter.iter().next().copied().unwrap_or(',')
    }

    /// Every delimiter is also trimmed on the right.
    ///
    /// When this holds, a row ending right after a delimiter does not get an
    /// extra empty field (`lower case ` is two fields, not three).
    pub fn delimiter_is_whitespace(&self) -> bool {
        !self.trim_right.is_empty() && self.delimiter.is_subset(&self.trim_right)
    }

    /// Trailing trim characters and comments are tolerated directly after a
    /// closing quote only when no delimiter is also a trim character.
    pub fn tolerates_trailing_after_quote(&self) -> bool {
        self.delimiter.is_disjoint(&self.trim_right)
    }

    /// Remove trailing trim characters from a finished field.
    pub fn trim_end<'a>(&self, value: &'a str) -> &'a str {
        value.trim_end_matches(|c: char| self.trim_right.contains(&c))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::default_dialect()
    }
}

/// Builder for custom dialects.
///
/// Every parameter starts out unset, so a builder with only a delimiter yields
/// a dialect without quoting, comments or trimming.
#[derive(Debug, Clone, Default)]
pub struct DialectBuilder {
    delimiter: BTreeSet<char>,
    quote: Option<char>,
    comment: Option<char>,
    trim_left: BTreeSet<char>,
    trim_right: BTreeSet<char>,
}

impl DialectBuilder {
    pub fn delimiter(mut self, chars: &str) -> Self {
        self.delimiter = chars.chars().collect();
        self
    }

    pub fn quote(mut self, quote: Option<char>) -> Self {
        self.quote = quote;
        self
    }

    pub fn comment(mut self, comment: Option<char>) -> Self {
        self.comment = comment;
        self
    }

    pub fn trim_left(mut self, chars: &str) -> Self {
        self.trim_left = chars.chars().collect();
        self
    }

    pub fn trim_right(mut self, chars: &str) -> Self {
        self.trim_right = chars.chars().collect();
        self
    }

    /// Trim the same characters on both sides.
    pub fn trim(self, chars: &str) -> Self {
        self.trim_left(chars).trim_right(chars)
    }

    pub fn build(self) -> Result<Dialect, DialectError> {
        if self.delimiter.is_empty() {
            return Err(DialectError::Invalid(
                "at least one delimiter character is required".to_string(),
            ));
        }

        if let Some(quote) = self.quote {
            if self.delimiter.contains(&quote) {
                return Err(DialectError::Invalid(format!(
                    "quote character {:?} is also a delimiter",
                    quote
                )));
            }
        }

        if let Some(comment) = self.comment {
            if self.delimiter.contains(&comment) || self.quote == Some(comment) {
                return Err(DialectError::Invalid(format!(
                    "comment character {:?} clashes with the delimiter or quote",
                    comment
                )));
            }
        }

        Ok(Dialect {
            delimiter: self.delimiter,
            quote: self.quote,
            comment: self.comment,
            trim_left: self.trim_left,
            trim_right: self.trim_right,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dialects_by_name() {
        assert_eq!(Dialect::by_name("default").unwrap(), Dialect::default_dialect());
        assert_eq!(Dialect::by_name("whitespace").unwrap(), Dialect::whitespace());

        let err = Dialect::by_name("notknown").unwrap_err();
        assert_eq!(err, DialectError::Unknown("notknown".to_string()));
    }

    #[test]
    fn test_builtin_predicates() {
        let default = Dialect::default_dialect();
        assert!(default.is_delimiter(','));
        assert!(!default.is_delimiter(' '));
        assert!(default.is_quote('"'));
        assert!(default.is_comment('#'));
        assert!(!default.delimiter_is_whitespace());
        assert!(default.tolerates_trailing_after_quote());

        let whitespace = Dialect::whitespace();
        assert!(whitespace.is_delimiter(' '));
        assert!(whitespace.is_delimiter('\t'));
        assert!(whitespace.delimiter_is_whitespace());
        assert!(!whitespace.tolerates_trailing_after_quote());
    }

    #[test]
    fn test_builder_validation() {
        struct TestCase {
            name: &'static str,
            builder: DialectBuilder,
            valid: bool,
        }

        let test_cases = vec![
            TestCase {
                name: "delimiter only",
                builder: Dialect::builder().delimiter(";"),
                valid: true,
            },
            TestCase {
                name: "no delimiter",
                builder: Dialect::builder().quote(Some('"')),
                valid: false,
            },
            TestCase {
                name: "quote is a delimiter",
                builder: Dialect::builder().delimiter(",\"").quote(Some('"')),
                valid: false,
            },
            TestCase {
                name: "comment equals quote",
                builder: Dialect::builder()
                    .delimiter(",")
                    .quote(Some('"'))
                    .comment(Some('"')),
                valid: false,
            },
            TestCase {
                name: "full custom dialect",
                builder: Dialect::builder()
                    .delimiter("|")
                    .quote(Some('\''))
                    .comment(Some(';'))
                    .trim(" "),
                valid: true,
            },
        ];

        for test_case in test_cases {
            let result = test_case.builder.build();
            assert_eq!(
                result.is_ok(),
                test_case.valid,
                "Test case '{}': unexpected result {:?}",
                test_case.name,
                result
            );
        }
    }

    #[test]
    fn test_trim_end_only_strips_trim_chars() {
        let dialect = Dialect::default_dialect();
        assert_eq!(dialect.trim_end("some other \t"), "some other");
        assert_eq!(dialect.trim_end("  lead"), "  lead");

        let untrimmed = Dialect::builder().delimiter(";").build().unwrap();
        assert_eq!(untrimmed.trim_end("keep  "), "keep  ");
    }
}
