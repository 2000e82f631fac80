// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod parse;
mod registry;
mod rule;
mod source;

pub use config::{ConfigError, SectionError, SettingsError};
pub use parse::{DialectError, ParseError, Position};
pub use registry::RegistryError;
pub use rule::RuleError;
pub use source::SourceError;
