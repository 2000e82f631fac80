// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Regular expression replacement.
//!
//! Replacement templates use backslash references: `\1` or `\g<1>` for a
//! numbered group, `\g<name>` for a named one, `\\` for a literal backslash.
//! `\n` and `\t` stand for newline and tab. A `$` is taken literally.
//!
//! No flags are set by default; inline flags such as `(?i)` or `(?ms)` in the
//! pattern switch them on.

use regex::Regex as Pattern;

use crate::errors::RuleError;
use crate::pipeline::LoadContext;
use crate::registry::{Rule, RuleArgs};
use crate::traits::Normalizer;

pub struct Regex {
    pattern: Pattern,
    replacement: String,
}

impl Regex {
    pub fn new(search: &str, replace: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Pattern::new(search)?,
            replacement: translate_template(replace),
        })
    }
}

impl Normalizer for Regex {
    fn normalize(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &str {
        Self::SYMBOL
    }
}

impl Rule for Regex {
    const SYMBOL: &'static str = "Regex";
    const DOCS: &'static str =
        "Replace matches of the regular expression `search` with `replace`; `\\1` and `\\g<name>` refer to groups.";
    const REQUIRED_ARGS: &'static [&'static str] = &["search"];
    const OPTIONAL_ARGS: &'static [&'static str] = &["replace"];

    fn from_args(args: &mut RuleArgs, _ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        let search = args.required("search")?;
        let replace = args.optional().unwrap_or_default();
        Self::new(&search, &replace).map_err(|e| args.invalid("search", e))
    }
}

/// Rewrite a backslash style template into `regex` crate syntax.
pub fn translate_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' => out.push_str("$$"),
            '\\' => match chars.peek().copied() {
                Some(d) if d.is_ascii_digit() => {
                    let mut group = String::new();
                    while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                        if group.len() == 2 {
                            break;
                        }
                        group.push(d);
                        chars.next();
                    }
                    out.push_str(&format!("${{{}}}", group));
                }
                Some('g') => {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    if lookahead.next() == Some('<') {
                        let name: String = lookahead.by_ref().take_while(|c| *c != '>').collect();
                        chars = lookahead;
                        out.push_str(&format!("${{{}}}", name));
                    } else {
                        out.push('\\');
                    }
                }
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                Some('n') => {
                    chars.next();
                    out.push('\n');
                }
                Some('t') => {
                    chars.next();
                    out.push('\t');
                }
                _ => out.push('\\'),
            },
            other => out.push(other),
        }
    }

    out
}
