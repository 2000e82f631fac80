// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::errors::RegistryError;
use crate::registry::{NormalizerRegistry, RuleType};

/// What a rule constructor can see while a pipeline is being built.
///
/// `base_dir` is the directory of the configuration currently being read, or
/// `None` for configurations given as plain text. File-backed rules resolve
/// relative paths against it. `depth` counts nested configuration includes.
#[derive(Clone, Copy)]
pub struct LoadContext<'a> {
    pub registry: &'a NormalizerRegistry,
    pub settings: &'a Settings,
    pub base_dir: Option<&'a Path>,
    pub depth: usize,
}

impl<'a> LoadContext<'a> {
    pub fn new(registry: &'a NormalizerRegistry, settings: &'a Settings) -> Self {
        Self {
            registry,
            settings,
            base_dir: None,
            depth: 0,
        }
    }

    pub fn with_base_dir(self, base_dir: Option<&'a Path>) -> Self {
        Self { base_dir, ..self }
    }

    pub fn with_depth(self, depth: usize) -> Self {
        Self { depth, ..self }
    }

    /// Resolve a path named in a configuration row.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolve a rule named by another rule's argument.
    pub fn resolve_rule(&self, name: &str) -> Result<RuleType, RegistryError> {
        self.registry.resolve_rule(name, self.settings)
    }

    /// The encoding argument of a rule, or the configured default.
    pub fn encoding<'b>(&'b self, requested: Option<&'b str>) -> &'b str {
        requested.unwrap_or(&self.settings.default_encoding)
    }
}
