// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging of the normalizer. Each message is a small struct with
//! a `Display` implementation and structured fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::parsing` - tokenizer and sectioned reader events
//! * `messages::registry` - rule registration and resolution events
//! * `messages::pipeline` - pipeline construction and normalization events
//!
//! # Usage
//!
//! ```
//! use the_normalizer::observability::messages::{pipeline::PipelineBuilt, StructuredLog};
//!
//! PipelineBuilt { title: "rules.conf[normalization]", stage_count: 3 }.log();
//! ```

pub mod messages;
