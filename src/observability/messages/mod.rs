// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] for emitting it with structured fields at the level the
//! message documents.
//!
//! # Organization
//!
//! * `parsing` - configuration parsing and section selection
//! * `registry` - rule registration, namespace mounting and lookups
//! * `pipeline` - pipeline construction and per-stage normalization

use tracing::Span;

pub mod parsing;
pub mod pipeline;
pub mod registry;

/// Emits a message as a tracing event, or wraps work in a span carrying the
/// message's fields.
pub trait StructuredLog {
    /// Emit the message at its documented level.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
