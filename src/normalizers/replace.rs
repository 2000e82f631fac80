// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::RuleError;
use crate::pipeline::LoadContext;
use crate::registry::{Rule, RuleArgs};
use crate::traits::Normalizer;

/// Exact substring replacement.
pub struct Replace {
    search: String,
    replace: String,
}

impl Replace {
    pub fn new(search: &str, replace: &str) -> Self {
        Self {
            search: search.to_string(),
            replace: replace.to_string(),
        }
    }
}

impl Normalizer for Replace {
    fn normalize(&self, text: &str) -> String {
        text.replace(&self.search, &self.replace)
    }

    fn name(&self) -> &str {
        Self::SYMBOL
    }
}

impl Rule for Replace {
    const SYMBOL: &'static str = "Replace";
    const DOCS: &'static str = "Replace every occurrence of `search` with `replace` (default: remove it).";
    const REQUIRED_ARGS: &'static [&'static str] = &["search"];
    const OPTIONAL_ARGS: &'static [&'static str] = &["replace"];

    fn from_args(args: &mut RuleArgs, _ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        let search = args.required("search")?;
        let replace = args.optional().unwrap_or_default();
        Ok(Self { search, replace })
    }
}
