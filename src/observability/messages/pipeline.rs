// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline construction and normalization events.
//!
//! This module contains message types for logging events related to:
//! * Building a composite pipeline from configuration rows
//! * Recursive configuration includes
//! * Per-stage text changes while normalizing
//! * Rows that could not be turned into a stage

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A composite pipeline was built.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineBuilt<'a> {
    pub title: &'a str,
    pub stage_count: usize,
}

impl Display for PipelineBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built pipeline '{}' with {} stages",
            self.title, self.stage_count
        )
    }
}

impl StructuredLog for PipelineBuilt<'_> {
    fn log(&self) {
        tracing::info!(
            title = self.title,
            stage_count = self.stage_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_build",
            span_name = name,
            title = self.title,
        )
    }
}

/// A nested configuration is being included.
///
/// # Log Level
/// `info!` - Important operational event
pub struct IncludeLoading<'a> {
    pub path: &'a str,
    pub section: Option<&'a str>,
    pub depth: usize,
}

impl Display for IncludeLoading<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.section {
            Some(section) => write!(
                f,
                "Including '{}[{}]' at depth {}",
                self.path, section, self.depth
            ),
            None => write!(f, "Including '{}' at depth {}", self.path, self.depth),
        }
    }
}

impl StructuredLog for IncludeLoading<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            section = self.section.unwrap_or(""),
            depth = self.depth,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "include",
            span_name = name,
            path = self.path,
            depth = self.depth,
        )
    }
}

/// A stage changed the text it was given.
///
/// # Log Level
/// `info!` - The normalization trail users inspect
pub struct StageChanged<'a> {
    pub pipeline: &'a str,
    pub stage: &'a str,
    pub before: &'a str,
    pub after: &'a str,
}

impl Display for StageChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{} > {}]: {:?} -> {:?}",
            self.pipeline, self.stage, self.before, self.after
        )
    }
}

impl StructuredLog for StageChanged<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline = self.pipeline,
            stage = self.stage,
            before = self.before,
            after = self.after,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "stage",
            span_name = name,
            pipeline = self.pipeline,
            stage = self.stage,
        )
    }
}

/// A stage returned its input unchanged.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct StageUnchanged<'a> {
    pub pipeline: &'a str,
    pub stage: &'a str,
}

impl Display for StageUnchanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{} > {}]: no change", self.pipeline, self.stage)
    }
}

impl StructuredLog for StageUnchanged<'_> {
    fn log(&self) {
        tracing::debug!(pipeline = self.pipeline, stage = self.stage, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stage",
            span_name = name,
            pipeline = self.pipeline,
            stage = self.stage,
        )
    }
}

/// A configuration row could not be turned into a stage.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RowRejected<'a> {
    pub origin: &'a str,
    pub rule: &'a str,
    pub line: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for RowRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: rule '{}' rejected: {}",
            self.origin, self.line, self.rule, self.error
        )
    }
}

impl StructuredLog for RowRejected<'_> {
    fn log(&self) {
        tracing::error!(
            origin = self.origin,
            rule = self.rule,
            line = self.line,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "row_rejected",
            span_name = name,
            origin = self.origin,
            rule = self.rule,
            line = self.line,
        )
    }
}
