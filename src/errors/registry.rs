// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for rule registration and rule name resolution.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The normalized alias is already taken. The existing entry is kept.
    #[error("Conflict: alias '{alias}' is already registered")]
    Conflict { alias: String },

    /// The rule type does not satisfy the rule capability contract.
    #[error("Invalid rule '{name}': {reason}")]
    InvalidRule { name: String, reason: String },

    #[error("Could not find rule '{name}'")]
    NotFound { name: String },

    /// More than one case-insensitive match inside a single namespace.
    #[error("Cannot determine which rule to use for '{name}': {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },

    /// A dotted name was requested while namespace lookups are switched off.
    #[error("Rule '{name}' refers to a namespace but external namespaces are disabled")]
    ExternalLookupDisabled { name: String },
}
