// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rule descriptors: what a registry stores for every constructible stage.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::errors::{RegistryError, RuleError};
use crate::pipeline::LoadContext;
use crate::traits::Normalizer;

/// A stage that can be built from the string arguments of a configuration row.
///
/// Arguments are positional: first every name in `REQUIRED_ARGS`, then any
/// prefix of `OPTIONAL_ARGS`. The registry checks the count before
/// `from_args` runs, so implementations only interpret the values.
pub trait Rule: Normalizer + Sized + 'static {
    const SYMBOL: &'static str;
    const DOCS: &'static str = "";
    const REQUIRED_ARGS: &'static [&'static str] = &[];
    const OPTIONAL_ARGS: &'static [&'static str] = &[];

    fn from_args(args: &mut RuleArgs, ctx: &LoadContext<'_>) -> Result<Self, RuleError>;
}

pub type Constructor =
    fn(&mut RuleArgs, &LoadContext<'_>) -> Result<Box<dyn Normalizer>, RuleError>;

fn construct<R: Rule>(
    args: &mut RuleArgs,
    ctx: &LoadContext<'_>,
) -> Result<Box<dyn Normalizer>, RuleError> {
    Ok(Box::new(R::from_args(args, ctx)?))
}

/// Positional arguments handed to a rule constructor.
#[derive(Debug)]
pub struct RuleArgs {
    rule: String,
    values: std::vec::IntoIter<String>,
}

impl RuleArgs {
    pub fn new(rule: &str, values: Vec<String>) -> Self {
        Self {
            rule: rule.to_string(),
            values: values.into_iter(),
        }
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn required(&mut self, argument: &str) -> Result<String, RuleError> {
        self.values.next().ok_or_else(|| RuleError::MissingArgument {
            rule: self.rule.clone(),
            argument: argument.to_string(),
        })
    }

    pub fn optional(&mut self) -> Option<String> {
        self.values.next()
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Build an [`RuleError::InvalidArgument`] for this rule.
    pub fn invalid(&self, argument: &str, reason: impl fmt::Display) -> RuleError {
        RuleError::InvalidArgument {
            rule: self.rule.clone(),
            argument: argument.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Registry entry describing one rule implementation.
#[derive(Clone, Copy)]
pub struct RuleType {
    symbol: &'static str,
    docs: &'static str,
    required_args: &'static [&'static str],
    optional_args: &'static [&'static str],
    constructor: Constructor,
}

impl RuleType {
    pub fn of<R: Rule>() -> Self {
        Self::new(
            R::SYMBOL,
            R::DOCS,
            R::REQUIRED_ARGS,
            R::OPTIONAL_ARGS,
            construct::<R>,
        )
    }

    /// Describe a rule by hand, for namespaces whose stages are not `Rule` types.
    pub fn new(
        symbol: &'static str,
        docs: &'static str,
        required_args: &'static [&'static str],
        optional_args: &'static [&'static str],
        constructor: Constructor,
    ) -> Self {
        Self {
            symbol,
            docs,
            required_args,
            optional_args,
            constructor,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn docs(&self) -> &'static str {
        self.docs
    }

    pub fn required_args(&self) -> &'static [&'static str] {
        self.required_args
    }

    pub fn optional_args(&self) -> &'static [&'static str] {
        self.optional_args
    }

    pub fn min_args(&self) -> usize {
        self.required_args.len()
    }

    pub fn max_args(&self) -> usize {
        self.required_args.len() + self.optional_args.len()
    }

    /// Check the descriptor against the rule contract: identifier symbol and
    /// argument names, no argument named twice.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidRule {
            name: self.symbol.to_string(),
            reason,
        };

        if !is_identifier(self.symbol) {
            return Err(invalid("symbol is not an identifier".to_string()));
        }

        let mut seen = HashSet::new();
        for argument in self.required_args.iter().chain(self.optional_args) {
            if !is_identifier(argument) {
                return Err(invalid(format!("argument '{}' is not an identifier", argument)));
            }
            if !seen.insert(*argument) {
                return Err(invalid(format!("argument '{}' is declared twice", argument)));
            }
        }

        Ok(())
    }

    pub fn construct(
        &self,
        args: Vec<String>,
        ctx: &LoadContext<'_>,
    ) -> Result<Box<dyn Normalizer>, RuleError> {
        let given = args.len();
        if given < self.min_args() || given > self.max_args() {
            return Err(RuleError::ArgumentCount {
                rule: self.symbol.to_string(),
                min: self.min_args(),
                max: self.max_args(),
                given,
            });
        }

        let mut args = RuleArgs::new(self.symbol, args);
        (self.constructor)(&mut args, ctx)
    }

    pub fn config(&self, name: &str) -> RuleConfig {
        RuleConfig {
            name: name.to_string(),
            symbol: self.symbol.to_string(),
            docs: self.docs.to_string(),
            required_args: self.required_args.iter().map(|a| a.to_string()).collect(),
            optional_args: self.optional_args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn constructor_addr(&self) -> usize {
        self.constructor as usize
    }
}

impl fmt::Debug for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleType")
            .field("symbol", &self.symbol)
            .field("required_args", &self.required_args)
            .field("optional_args", &self.optional_args)
            .finish()
    }
}

impl PartialEq for RuleType {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.constructor_addr() == other.constructor_addr()
    }
}

/// Tooling view of a registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleConfig {
    pub name: String,
    pub symbol: String,
    pub docs: String,
    pub required_args: Vec<String>,
    pub optional_args: Vec<String>,
}

pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
