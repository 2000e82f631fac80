// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use deunicode::deunicode_with_tofu;
use unicode_normalization::UnicodeNormalization;

use crate::errors::RuleError;
use crate::pipeline::LoadContext;
use crate::registry::{Rule, RuleArgs};
use crate::traits::Normalizer;

/// Transliterate text to ASCII.
///
/// Styled letters and ligatures are folded with NFKC first, then every
/// character is replaced by its closest ASCII spelling. Characters without
/// one are dropped.
pub struct Unidecode;

impl Normalizer for Unidecode {
    fn normalize(&self, text: &str) -> String {
        let folded: String = text.nfkc().collect();
        deunicode_with_tofu(&folded, "")
    }

    fn name(&self) -> &str {
        Self::SYMBOL
    }
}

impl Rule for Unidecode {
    const SYMBOL: &'static str = "Unidecode";
    const DOCS: &'static str = "Transliterate characters to their closest ASCII form.";

    fn from_args(_args: &mut RuleArgs, _ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unidecode_table_driven() {
        let cases = vec![
            (
                "𝖂𝖊𝖓𝖓 𝖎𝖘𝖙 𝖉𝖆𝖘 𝕹𝖚𝖓𝖘𝖙ü𝖈𝖐 𝖌𝖎𝖙 𝖚𝖓𝖉 𝕾𝖑𝖔𝖙𝖊𝖗𝖒𝖊𝖞𝖊𝖗?",
                "Wenn ist das Nunstuck git und Slotermeyer?",
            ),
            ("Crème brûlée", "Creme brulee"),
            ("Straße", "Strasse"),
            ("Ærøskøbing", "AEroskobing"),
            ("ﬁn", "fin"),
            ("plain ascii", "plain ascii"),
            ("Привет", "Privet"),
            ("Ελληνικά", "Ellenika"),
            ("北京", "Bei Jing"),
            ("Привет Ελληνικά 北京", "Privet Ellenika Bei Jing"),
        ];

        for (input, expected) in cases {
            assert_eq!(Unidecode.normalize(input), expected, "{}", input);
        }
    }
}
