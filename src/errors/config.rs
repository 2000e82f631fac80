// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for building a normalization pipeline from configuration text.

use std::path::PathBuf;
use thiserror::Error;

use super::{DialectError, ParseError, RegistryError, RuleError, SourceError};

/// Section lookup failures of the sectioned reader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("Section '{0}' not found")]
    NotFound(String),

    /// A named section was requested from a source without any section markers.
    #[error("Section '{0}' requested, but the configuration has no sections")]
    NoSections(String),

    #[error("Section '{0}' is defined more than once")]
    Duplicate(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Dialect(#[from] DialectError),

    #[error("{origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("unknown rule '{name}' on line {line}: {row}")]
    UnknownRule {
        name: String,
        line: usize,
        row: String,
        #[source]
        source: RegistryError,
    },

    #[error("Rule '{rule}' on line {line}: {source}")]
    Construction {
        rule: String,
        line: usize,
        #[source]
        source: RuleError,
    },

    #[error("Including '{}' exceeds the maximum include depth of {limit}", path.display())]
    IncludeDepthExceeded { path: PathBuf, limit: usize },
}

/// Failures while loading engine settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rule_message() {
        let err = ConfigError::UnknownRule {
            name: "nope".to_string(),
            line: 4,
            row: "nope a b".to_string(),
            source: RegistryError::NotFound {
                name: "nope".to_string(),
            },
        };

        assert_eq!(err.to_string(), "unknown rule 'nope' on line 4: nope a b");
    }

    #[test]
    fn test_section_errors_are_distinct() {
        let missing = SectionError::NotFound("missing".to_string());
        let unsectioned = SectionError::NoSections("missing".to_string());

        assert_ne!(missing, unsectioned);
        assert!(unsectioned.to_string().contains("has no sections"));
    }
}
