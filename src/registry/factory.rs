// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::errors::{RegistryError, RuleError};
use crate::observability::messages::registry::{
    NamespaceMounted, RuleMissingDocs, RuleRegistered, RuleResolvedInNamespace,
};
use crate::observability::messages::StructuredLog;
use crate::pipeline::LoadContext;
use crate::registry::{Namespace, RuleConfig, RuleType};
use crate::traits::Normalizer;

/// Namespace holding the rules that ship with the crate.
pub const BUILTIN_NAMESPACE: &str = "builtin";

/// Search paths tried for dotted names before any added ones: the built-in
/// namespace, then the global (empty) prefix.
pub const DEFAULT_SEARCH_PATHS: [&str; 2] = [BUILTIN_NAMESPACE, ""];

/// Maps case-insensitive rule names to rule types.
///
/// Names are first looked up in the alias table. A dotted name that misses the
/// table is split into a namespace prefix and a symbol, and the prefix is tried
/// under every search path in order. Namespaces outside `builtin` are only
/// reachable while external lookups are allowed.
pub struct RuleFactory {
    entries: HashMap<String, RuleType>,
    namespaces: HashMap<String, Arc<dyn Namespace>>,
    extra_search_paths: Vec<String>,
    allow_external: bool,
    configs: OnceCell<Vec<RuleConfig>>,
}

impl Default for RuleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleFactory {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            namespaces: HashMap::new(),
            extra_search_paths: Vec::new(),
            allow_external: true,
            configs: OnceCell::new(),
        }
    }

    /// Register a rule under its lowercased symbol.
    pub fn register(&mut self, rule: RuleType) -> Result<(), RegistryError> {
        self.register_alias(rule.symbol(), rule)
    }

    /// Register a rule under an explicit alias. An alias that is already taken
    /// is a conflict and leaves the existing entry in place.
    pub fn register_alias(&mut self, alias: &str, rule: RuleType) -> Result<(), RegistryError> {
        rule.validate()?;

        if !crate::registry::rule::is_identifier(alias) {
            return Err(RegistryError::InvalidRule {
                name: alias.to_string(),
                reason: "alias is not an identifier".to_string(),
            });
        }

        let key = alias.to_lowercase();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::Conflict { alias: key });
        }

        RuleRegistered {
            alias: &key,
            symbol: rule.symbol(),
        }
        .log();

        self.entries.insert(key, rule);
        self.configs = OnceCell::new();
        Ok(())
    }

    /// Register every export of a namespace, stopping at the first failure.
    pub fn register_namespace(&mut self, namespace: Arc<dyn Namespace>) -> Result<(), RegistryError> {
        for rule in namespace.exports() {
            self.register(*rule)?;
        }
        self.mount(namespace);
        Ok(())
    }

    /// Make a namespace reachable by dotted names without registering aliases.
    pub fn mount(&mut self, namespace: Arc<dyn Namespace>) {
        NamespaceMounted {
            path: namespace.path(),
            export_count: namespace.exports().len(),
        }
        .log();

        self.namespaces.insert(namespace.path().to_string(), namespace);
    }

    /// Mount a namespace and search it for undotted names too.
    pub fn add_search_path(&mut self, namespace: Arc<dyn Namespace>) {
        let path = namespace.path().to_string();
        self.mount(namespace);
        if !self.extra_search_paths.contains(&path) {
            self.extra_search_paths.push(path);
        }
    }

    pub fn set_allow_external(&mut self, allow: bool) {
        self.allow_external = allow;
    }

    pub fn allow_external(&self) -> bool {
        self.allow_external
    }

    /// Alias table lookup only.
    pub fn get(&self, name: &str) -> Option<RuleType> {
        self.entries.get(&name.to_lowercase()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Registered aliases, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn search_paths(&self, allow_external: bool) -> Vec<&str> {
        let mut paths: Vec<&str> = DEFAULT_SEARCH_PATHS.to_vec();
        if allow_external {
            paths.extend(self.extra_search_paths.iter().map(String::as_str));
        }
        paths
    }

    pub fn resolve(&self, name: &str) -> Result<RuleType, RegistryError> {
        self.resolve_with(name, self.allow_external)
    }

    /// Resolve with an explicit external switch, narrowed by the factory's
    /// own setting.
    ///
    /// Without external lookups only the built-in namespace and the namespaces
    /// nested under it are searched. A dotted name that finds nothing there is
    /// [`RegistryError::ExternalLookupDisabled`].
    pub fn resolve_with(&self, name: &str, allow_external: bool) -> Result<RuleType, RegistryError> {
        if let Some(rule) = self.get(name) {
            return Ok(rule);
        }

        let allow_external = allow_external && self.allow_external;
        let dotted = name.rsplit_once('.');
        let (prefix, symbol) = dotted.unwrap_or(("", name));

        for search_path in self.search_paths(allow_external) {
            let module = [search_path, prefix]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(".");

            if module.is_empty() || (!allow_external && !is_builtin_module(&module)) {
                continue;
            }

            let Some(namespace) = self.namespaces.get(&module) else {
                continue;
            };

            if let Some(rule) = namespace.resolve(symbol)? {
                RuleResolvedInNamespace {
                    requested: name,
                    namespace: &module,
                    symbol: rule.symbol(),
                }
                .log();
                return Ok(rule);
            }
        }

        if dotted.is_some() && !allow_external {
            return Err(RegistryError::ExternalLookupDisabled {
                name: name.to_string(),
            });
        }

        Err(RegistryError::NotFound {
            name: name.to_string(),
        })
    }

    /// Resolve a rule and construct it from positional arguments.
    pub fn create(
        &self,
        name: &str,
        args: Vec<String>,
        ctx: &LoadContext<'_>,
    ) -> Result<Box<dyn Normalizer>, RuleError> {
        let rule = self.resolve(name)?;
        rule.construct(args, ctx)
    }

    /// Tooling listing of every registered alias, sorted by name.
    ///
    /// Built once and cached until the next registration.
    pub fn rule_configs(&self) -> &[RuleConfig] {
        self.configs.get_or_init(|| {
            self.names()
                .into_iter()
                .filter_map(|name| self.entries.get(name).map(|rule| (name, rule)))
                .map(|(name, rule)| {
                    if rule.docs().is_empty() {
                        RuleMissingDocs {
                            symbol: rule.symbol(),
                        }
                        .log();
                    }
                    rule.config(name)
                })
                .collect()
        })
    }
}

fn is_builtin_module(module: &str) -> bool {
    module == BUILTIN_NAMESPACE
        || module
            .strip_prefix(BUILTIN_NAMESPACE)
            .is_some_and(|rest| rest.starts_with('.'))
}
