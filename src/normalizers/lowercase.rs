// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::RuleError;
use crate::pipeline::LoadContext;
use crate::registry::{Rule, RuleArgs};
use crate::traits::Normalizer;

/// Unicode-aware lowercasing.
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &str {
        Self::SYMBOL
    }
}

impl Rule for Lowercase {
    const SYMBOL: &'static str = "Lowercase";
    const DOCS: &'static str = "Lowercase the text.";

    fn from_args(_args: &mut RuleArgs, _ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        Ok(Self)
    }
}
