// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while constructing a single normalization rule.

use std::path::PathBuf;
use thiserror::Error;

use super::{ConfigError, DialectError, ParseError, RegistryError, SourceError};

#[derive(Error, Debug)]
pub enum RuleError {
    /// Wrong number of positional arguments for the rule's constructor.
    #[error("Rule '{rule}' takes {} argument(s), {given} given", expected_range(*min, *max))]
    ArgumentCount {
        rule: String,
        min: usize,
        max: usize,
        given: usize,
    },

    /// The constructor asked for an argument its descriptor never declared.
    #[error("Rule '{rule}' is missing argument '{argument}'")]
    MissingArgument { rule: String, argument: String },

    #[error("Invalid value for argument '{argument}' of rule '{rule}': {reason}")]
    InvalidArgument {
        rule: String,
        argument: String,
        reason: String,
    },

    /// A rule name passed as an argument (e.g. to `file`) did not resolve.
    #[error(transparent)]
    Resolution(#[from] RegistryError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Dialect(#[from] DialectError),

    /// An auxiliary rule file could not be tokenized.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A row of an auxiliary rule file could not be turned into a rule.
    #[error("{}:{line}: {source}", path.display())]
    RuleFile {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<RuleError>,
    },

    #[error("Expected '{}' to be a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Could not find a locale file for locale '{locale}' in '{}'", path.display())]
    NoLocaleMatch { locale: String, path: PathBuf },

    /// A nested configuration include failed.
    #[error("Included configuration failed: {0}")]
    Include(#[source] Box<ConfigError>),
}

fn expected_range(min: usize, max: usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{} to {}", min, max)
    }
}
