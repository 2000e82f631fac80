// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Turning configuration rows into executable pipelines.
//!
//! ```
//! use the_normalizer::config::Settings;
//! use the_normalizer::pipeline::{PipelineBuilder, Section};
//! use the_normalizer::registry::NormalizerRegistry;
//! use the_normalizer::traits::Normalizer;
//!
//! let registry = NormalizerRegistry::builtin().unwrap();
//! let settings = Settings::default();
//! let pipeline = PipelineBuilder::new(&registry, &settings)
//!     .build_from_str("lowercase\nreplace e a", &Section::Whole)
//!     .unwrap();
//!
//! assert_eq!(pipeline.normalize("TEST"), "tast");
//! ```

mod builder;
mod composite;
mod context;

#[cfg(test)]
mod integration_tests;

pub use builder::{PipelineBuilder, Section, STRING_ORIGIN};
pub use composite::Composite;
pub use context::LoadContext;
