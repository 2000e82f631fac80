// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rules whose arguments come from the rows of an auxiliary file.
//!
//! `file regex rules.csv` builds one `regex` stage per row of `rules.csv`,
//! using each row's fields as that stage's arguments. The file is read with
//! the rule-file dialect (comma separated by default) and its path is taken
//! relative to the configuration that names it.

use std::path::Path;

use crate::errors::RuleError;
use crate::parsing::Reader;
use crate::pipeline::{Composite, LoadContext};
use crate::registry::{Rule, RuleArgs, RuleType};
use crate::traits::Normalizer;
use crate::utils::read_text;

/// Build a composite with one `rule` stage per row of the file at `path`.
pub fn load_rule_file(
    rule: RuleType,
    path: &Path,
    encoding: &str,
    title: &str,
    ctx: &LoadContext<'_>,
) -> Result<Composite, RuleError> {
    let text = read_text(path, encoding)?;
    let dialect = ctx.settings.rule_file_dialect()?;

    let in_file = |line: usize, source: RuleError| RuleError::RuleFile {
        path: path.to_path_buf(),
        line,
        source: Box::new(source),
    };

    let mut composite = Composite::new(title);
    for row in Reader::for_str(&text, dialect) {
        let row = row.map_err(|e| in_file(e.position().line, e.into()))?;
        let line = row.line();
        let stage = rule
            .construct(row.into_fields(), ctx)
            .map_err(|e| in_file(line, e))?;
        composite.push(stage);
    }

    Ok(composite)
}

pub struct File {
    rules: Composite,
}

impl File {
    pub fn rules(&self) -> &Composite {
        &self.rules
    }
}

impl Normalizer for File {
    fn normalize(&self, text: &str) -> String {
        self.rules.normalize(text)
    }

    fn name(&self) -> &str {
        self.rules.title()
    }
}

impl Rule for File {
    const SYMBOL: &'static str = "File";
    const DOCS: &'static str =
        "Read `file` one row at a time and apply `normalizer` with each row as its arguments.";
    const REQUIRED_ARGS: &'static [&'static str] = &["normalizer", "file"];
    const OPTIONAL_ARGS: &'static [&'static str] = &["encoding"];

    fn from_args(args: &mut RuleArgs, ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        let normalizer = args.required("normalizer")?;
        let file = args.required("file")?;
        let encoding = args.optional();

        let rule = ctx.resolve_rule(&normalizer)?;
        let path = ctx.resolve_path(&file);
        let rules = load_rule_file(rule, &path, ctx.encoding(encoding.as_deref()), &file, ctx)?;

        Ok(Self { rules })
    }
}
