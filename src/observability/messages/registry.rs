// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for rule registry events.
//!
//! This module contains message types for logging events related to:
//! * Registering rule aliases
//! * Mounting namespaces for dotted lookups
//! * Resolving rule names through namespaces
//! * Enumerating rules for tooling

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A rule type was registered under an alias.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct RuleRegistered<'a> {
    pub alias: &'a str,
    pub symbol: &'a str,
}

impl Display for RuleRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Registered rule '{}' as '{}'", self.symbol, self.alias)
    }
}

impl StructuredLog for RuleRegistered<'_> {
    fn log(&self) {
        tracing::debug!(alias = self.alias, symbol = self.symbol, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "rule_registered",
            span_name = name,
            alias = self.alias,
            symbol = self.symbol,
        )
    }
}

/// A namespace became reachable for dotted rule names.
///
/// # Log Level
/// `info!` - Important operational event
pub struct NamespaceMounted<'a> {
    pub path: &'a str,
    pub export_count: usize,
}

impl Display for NamespaceMounted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mounted namespace '{}' with {} rules",
            self.path, self.export_count
        )
    }
}

impl StructuredLog for NamespaceMounted<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            export_count = self.export_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "namespace_mounted",
            span_name = name,
            path = self.path,
            export_count = self.export_count,
        )
    }
}

/// A rule name missed the alias table and was found by scanning a namespace.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct RuleResolvedInNamespace<'a> {
    pub requested: &'a str,
    pub namespace: &'a str,
    pub symbol: &'a str,
}

impl Display for RuleResolvedInNamespace<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved '{}' to '{}.{}'",
            self.requested, self.namespace, self.symbol
        )
    }
}

impl StructuredLog for RuleResolvedInNamespace<'_> {
    fn log(&self) {
        tracing::debug!(
            requested = self.requested,
            namespace = self.namespace,
            symbol = self.symbol,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "rule_resolved",
            span_name = name,
            requested = self.requested,
            namespace = self.namespace,
        )
    }
}

/// A rule without documentation showed up while enumerating rules.
///
/// # Log Level
/// `warn!` - Degraded tooling output
pub struct RuleMissingDocs<'a> {
    pub symbol: &'a str,
}

impl Display for RuleMissingDocs<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No documentation for rule '{}'", self.symbol)
    }
}

impl StructuredLog for RuleMissingDocs<'_> {
    fn log(&self) {
        tracing::warn!(symbol = self.symbol, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("rule_missing_docs", span_name = name, symbol = self.symbol)
    }
}
