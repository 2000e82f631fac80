// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Filters dropping everything but letters and digits.

use crate::errors::RuleError;
use crate::pipeline::LoadContext;
use crate::registry::{Rule, RuleArgs};
use crate::traits::Normalizer;

/// Keeps ASCII letters and digits only.
pub struct AlphaNumeric;

impl Normalizer for AlphaNumeric {
    fn normalize(&self, text: &str) -> String {
        text.chars().filter(char::is_ascii_alphanumeric).collect()
    }

    fn name(&self) -> &str {
        Self::SYMBOL
    }
}

impl Rule for AlphaNumeric {
    const SYMBOL: &'static str = "AlphaNumeric";
    const DOCS: &'static str = "Remove everything that is not an ASCII letter or digit.";

    fn from_args(_args: &mut RuleArgs, _ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        Ok(Self)
    }
}

/// Keeps word characters of any script: letters, digits and `_`.
pub struct AlphaNumericUnicode;

impl Normalizer for AlphaNumericUnicode {
    fn normalize(&self, text: &str) -> String {
        text.chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect()
    }

    fn name(&self) -> &str {
        Self::SYMBOL
    }
}

impl Rule for AlphaNumericUnicode {
    const SYMBOL: &'static str = "AlphaNumericUnicode";
    const DOCS: &'static str = "Remove everything that is not a word character.";

    fn from_args(_args: &mut RuleArgs, _ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_filters() {
        let cases: Vec<(&dyn Normalizer, &str, &str)> = vec![
            (&AlphaNumeric, "She turned me into a newt.", "Sheturnedmeintoanewt"),
            (
                &AlphaNumeric,
                "Das, öder die Flipper-Wåld Gespütt!",
                "DasderdieFlipperWldGesptt",
            ),
            (
                &AlphaNumericUnicode,
                "Das, öder die Flipper-Wåld Gespütt!",
                "DasöderdieFlipperWåldGespütt",
            ),
            (&AlphaNumericUnicode, "snake_case, too", "snake_casetoo"),
        ];

        for (normalizer, input, expected) in cases {
            assert_eq!(normalizer.normalize(input), expected, "{}", normalizer.name());
        }
    }
}
