// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Namespaces resolve the last segment of dotted rule names.
//!
//! A name like `acme.text.Collapse` is looked up by asking the namespace
//! mounted at `acme.text` for the symbol `Collapse`. Built-in and externally
//! provided namespaces share the same trait, so the factory treats them alike.

use crate::errors::RegistryError;
use crate::registry::RuleType;

pub trait Namespace: Send + Sync {
    /// Dotted path the namespace is mounted at, e.g. `builtin`.
    fn path(&self) -> &str;

    fn exports(&self) -> &[RuleType];

    /// Find the export matching `symbol`.
    ///
    /// An exact-case match wins. Otherwise a single case-insensitive match is
    /// returned, and several are [`RegistryError::Ambiguous`].
    fn resolve(&self, symbol: &str) -> Result<Option<RuleType>, RegistryError> {
        let exports = self.exports();

        if let Some(exact) = exports.iter().find(|rule| rule.symbol() == symbol) {
            return Ok(Some(*exact));
        }

        let lowered = symbol.to_lowercase();
        let matches: Vec<&RuleType> = exports
            .iter()
            .filter(|rule| rule.symbol().to_lowercase() == lowered)
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(**single)),
            several => Err(RegistryError::Ambiguous {
                name: format!("{}.{}", self.path(), symbol),
                candidates: several
                    .iter()
                    .map(|rule| format!("{}.{}", self.path(), rule.symbol()))
                    .collect(),
            }),
        }
    }
}

/// A namespace with a fixed list of exports.
#[derive(Debug, Clone)]
pub struct StaticNamespace {
    path: String,
    exports: Vec<RuleType>,
}

impl StaticNamespace {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            exports: Vec::new(),
        }
    }

    pub fn export(mut self, rule: RuleType) -> Self {
        self.exports.push(rule);
        self
    }
}

impl Namespace for StaticNamespace {
    fn path(&self) -> &str {
        &self.path
    }

    fn exports(&self) -> &[RuleType] {
        &self.exports
    }
}
