// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_ENCODING, DEFAULT_MAX_INCLUDE_DEPTH, DEFAULT_SECTION};
use crate::errors::{DialectError, SettingsError};
use crate::parsing::{Dialect, DEFAULT_DIALECT, WHITESPACE_DIALECT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Engine-wide settings for building pipelines.
///
/// Every field is optional in YAML and falls back to its default.
///
/// # Fields
/// * `default_encoding` - Encoding label for files that do not name one
/// * `default_section` - Section built by [`crate::pipeline::Section::Default`]
/// * `config_dialect` - Dialect of configuration files
/// * `rule_file_dialect` - Dialect of auxiliary rule files read by `file`
/// * `max_include_depth` - How deep `config` rules may nest
/// * `external_namespaces` - Whether dotted rule names may reach mounted namespaces
///
/// # Example
/// ```yaml
/// default_encoding: UTF-8
/// default_section: normalization
/// config_dialect: whitespace
/// rule_file_dialect: default
/// max_include_depth: 16
/// external_namespaces: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub default_encoding: String,
    pub default_section: String,
    pub config_dialect: String,
    pub rule_file_dialect: String,
    pub max_include_depth: usize,
    pub external_namespaces: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_encoding: DEFAULT_ENCODING.to_string(),
            default_section: DEFAULT_SECTION.to_string(),
            config_dialect: WHITESPACE_DIALECT.to_string(),
            rule_file_dialect: DEFAULT_DIALECT.to_string(),
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            external_namespaces: true,
        }
    }
}

impl Settings {
    pub fn config_dialect(&self) -> Result<Dialect, DialectError> {
        Dialect::by_name(&self.config_dialect)
    }

    pub fn rule_file_dialect(&self) -> Result<Dialect, DialectError> {
        Dialect::by_name(&self.rule_file_dialect)
    }
}

/// Load settings from a YAML file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = serde_yaml::from_str(&content)?;
    Ok(settings)
}
