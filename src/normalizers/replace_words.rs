// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use regex::Regex as Pattern;

use crate::errors::RuleError;
use crate::pipeline::LoadContext;
use crate::registry::{Rule, RuleArgs};
use crate::traits::Normalizer;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word replacement.
///
/// The first letter of `search` matches either case, and the case found in
/// the text is carried over to the first letter of the replacement.
pub struct ReplaceWords {
    pattern: Pattern,
    replace: String,
}

impl ReplaceWords {
    pub fn new(search: &str, replace: &str) -> Result<Self, String> {
        let search = search.trim();
        let mut chars = search.chars();
        let first = chars
            .next()
            .ok_or_else(|| "search word must not be empty".to_string())?;

        let upper: String = first.to_uppercase().collect();
        let lower: String = first.to_lowercase().collect();
        let pattern = format!(
            "(?:{}|{}){}",
            regex::escape(&upper),
            regex::escape(&lower),
            regex::escape(chars.as_str())
        );

        Ok(Self {
            pattern: Pattern::new(&pattern).map_err(|e| e.to_string())?,
            replace: replace.trim().to_string(),
        })
    }

    fn replacement_for(&self, matched: &str) -> String {
        let mut replace = self.replace.chars();
        let Some(first) = replace.next() else {
            return String::new();
        };

        let matched_upper = matched.chars().next().is_some_and(char::is_uppercase);
        let first: String = if matched_upper {
            first.to_uppercase().collect()
        } else {
            first.to_lowercase().collect()
        };

        first + replace.as_str()
    }

    fn at_word_boundaries(text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    }
}

impl Normalizer for ReplaceWords {
    fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut search_from = 0;

        while let Some(found) = self.pattern.find_at(text, search_from) {
            if Self::at_word_boundaries(text, found.start(), found.end()) {
                out.push_str(&text[copied..found.start()]);
                out.push_str(&self.replacement_for(found.as_str()));
                copied = found.end();
                search_from = found.end();
            } else {
                let step = text[found.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                search_from = found.start() + step;
            }

            if search_from > text.len() {
                break;
            }
        }

        out.push_str(&text[copied..]);
        out
    }

    fn name(&self) -> &str {
        Self::SYMBOL
    }
}

impl Rule for ReplaceWords {
    const SYMBOL: &'static str = "ReplaceWords";
    const DOCS: &'static str =
        "Replace the whole word `search` with `replace`, keeping the case of its first letter.";
    const REQUIRED_ARGS: &'static [&'static str] = &["search", "replace"];

    fn from_args(args: &mut RuleArgs, _ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        let search = args.required("search")?;
        let replace = args.required("replace")?;
        Self::new(&search, &replace).map_err(|reason| args.invalid("search", reason))
    }
}
