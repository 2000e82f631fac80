// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rule name resolution.
//!
//! Two factories make up a [`NormalizerRegistry`]:
//!
//! * `rules` holds ordinary stages, reachable by alias or dotted namespace path
//! * `file_rules` holds stages that read auxiliary files relative to the
//!   configuration being built (`file`, `localizedfile`, `config`)
//!
//! The pipeline builder consults `file_rules` first, by alias only.

pub mod factory;
pub mod namespace;
pub mod rule;

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::Settings;
use crate::errors::RegistryError;
use crate::normalizers;

pub use factory::{RuleFactory, BUILTIN_NAMESPACE, DEFAULT_SEARCH_PATHS};
pub use namespace::{Namespace, StaticNamespace};
pub use rule::{Constructor, Rule, RuleArgs, RuleConfig, RuleType};

static GLOBAL: Lazy<Result<NormalizerRegistry, RegistryError>> =
    Lazy::new(NormalizerRegistry::builtin);

/// Where a rule name resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    Rule(RuleType),
    FileRule(RuleType),
}

impl Resolved {
    pub fn rule_type(&self) -> RuleType {
        match self {
            Resolved::Rule(rule) | Resolved::FileRule(rule) => *rule,
        }
    }

    pub fn is_file_backed(&self) -> bool {
        matches!(self, Resolved::FileRule(_))
    }
}

/// Listing of every rule for tooling.
#[derive(Debug, Clone, Serialize)]
pub struct RuleListing {
    pub rules: Vec<RuleConfig>,
    pub file_rules: Vec<RuleConfig>,
}

#[derive(Default)]
pub struct NormalizerRegistry {
    rules: RuleFactory,
    file_rules: RuleFactory,
}

impl NormalizerRegistry {
    pub fn new(rules: RuleFactory, file_rules: RuleFactory) -> Self {
        Self { rules, file_rules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every stage that ships with the crate.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut rules = RuleFactory::new();
        rules.register_namespace(Arc::new(normalizers::builtin_namespace()))?;
        for (alias, rule) in normalizers::builtin_aliases() {
            rules.register_alias(alias, rule)?;
        }

        let mut file_rules = RuleFactory::new();
        file_rules.register_namespace(Arc::new(normalizers::file_namespace()))?;

        Ok(Self::new(rules, file_rules))
    }

    /// Process-wide built-in registry, for callers at the outer edge.
    pub fn global() -> Result<&'static Self, RegistryError> {
        GLOBAL.as_ref().map_err(Clone::clone)
    }

    pub fn rules(&self) -> &RuleFactory {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleFactory {
        &mut self.rules
    }

    pub fn file_rules(&self) -> &RuleFactory {
        &self.file_rules
    }

    pub fn file_rules_mut(&mut self) -> &mut RuleFactory {
        &mut self.file_rules
    }

    /// Resolve the rule name of a configuration row.
    pub fn lookup(&self, name: &str) -> Result<Resolved, RegistryError> {
        if let Some(rule) = self.file_rules.get(name) {
            return Ok(Resolved::FileRule(rule));
        }

        self.rules.resolve(name).map(Resolved::Rule)
    }

    /// Resolve a plain rule the way configuration rows do, honouring
    /// [`Settings::external_namespaces`].
    pub fn resolve_rule(&self, name: &str, settings: &Settings) -> Result<RuleType, RegistryError> {
        self.rules.resolve_with(name, settings.external_namespaces)
    }

    /// [`lookup`](Self::lookup) honouring [`Settings::external_namespaces`].
    pub fn lookup_with(&self, name: &str, settings: &Settings) -> Result<Resolved, RegistryError> {
        if let Some(rule) = self.file_rules.get(name) {
            return Ok(Resolved::FileRule(rule));
        }

        self.resolve_rule(name, settings).map(Resolved::Rule)
    }

    pub fn listing(&self) -> RuleListing {
        RuleListing {
            rules: self.rules.rule_configs().to_vec(),
            file_rules: self.file_rules.rule_configs().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizers::Replace;

    #[test]
    fn test_builtin_registry_contents() {
        let registry = NormalizerRegistry::builtin().unwrap();

        for name in [
            "replace",
            "replacewords",
            "regex",
            "regexreplace",
            "lowercase",
            "unidecode",
            "alphanumeric",
            "alphanumericunicode",
        ] {
            assert!(registry.rules().contains(name), "{}", name);
        }

        for name in ["file", "localizedfile", "config"] {
            assert!(registry.file_rules().contains(name), "{}", name);
            assert!(!registry.rules().contains(name), "{}", name);
        }
    }

    #[test]
    fn test_lookup_prefers_file_rules() {
        let registry = NormalizerRegistry::builtin().unwrap();

        assert!(registry.lookup("File").unwrap().is_file_backed());
        assert!(!registry.lookup("Lowercase").unwrap().is_file_backed());
        assert_eq!(
            registry.lookup("builtin.Lowercase").unwrap().rule_type().symbol(),
            "Lowercase"
        );
        assert!(matches!(
            registry.lookup("doesnotexist"),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_settings_gate_external_namespaces() {
        let mut registry = NormalizerRegistry::builtin().unwrap();
        registry.rules_mut().mount(Arc::new(
            StaticNamespace::new("acme").export(RuleType::of::<Replace>()),
        ));

        let open = Settings::default();
        let closed = Settings {
            external_namespaces: false,
            ..Settings::default()
        };

        assert!(registry.resolve_rule("acme.Replace", &open).is_ok());
        assert!(matches!(
            registry.resolve_rule("acme.Replace", &closed),
            Err(RegistryError::ExternalLookupDisabled { .. })
        ));
        assert!(registry.resolve_rule("builtin.Replace", &closed).is_ok());
        assert!(registry.lookup_with("file", &closed).unwrap().is_file_backed());
    }

    #[test]
    fn test_global_registry_is_shared() {
        let first = NormalizerRegistry::global().unwrap();
        let second = NormalizerRegistry::global().unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(first.rules().contains("lowercase"));
    }

    #[test]
    fn test_listing_serializes() {
        let registry = NormalizerRegistry::builtin().unwrap();
        let json = serde_json::to_value(registry.listing()).unwrap();

        let names: Vec<&str> = json["rules"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|rule| rule["name"].as_str())
            .collect();
        assert!(names.contains(&"regexreplace"));
        assert_eq!(json["file_rules"].as_array().unwrap().len(), 3);
    }
}
