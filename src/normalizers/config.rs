// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::RuleError;
use crate::observability::messages::pipeline::IncludeLoading;
use crate::observability::messages::StructuredLog;
use crate::pipeline::{Composite, LoadContext, PipelineBuilder, Section};
use crate::registry::{Rule, RuleArgs};
use crate::traits::Normalizer;

/// Includes another configuration file, or one section of it.
///
/// The included pipeline is built when the rule is constructed. Relative
/// paths inside the included file resolve against that file's directory.
pub struct Config {
    pipeline: Composite,
}

impl Config {
    pub fn pipeline(&self) -> &Composite {
        &self.pipeline
    }
}

impl Normalizer for Config {
    fn normalize(&self, text: &str) -> String {
        self.pipeline.normalize(text)
    }

    fn name(&self) -> &str {
        self.pipeline.title()
    }
}

impl Rule for Config {
    const SYMBOL: &'static str = "Config";
    const DOCS: &'static str =
        "Apply the rules of another configuration `file`, from `section` (default section when empty).";
    const REQUIRED_ARGS: &'static [&'static str] = &["file"];
    const OPTIONAL_ARGS: &'static [&'static str] = &["section", "encoding"];

    fn from_args(args: &mut RuleArgs, ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        let file = args.required("file")?;
        let section = match args.optional() {
            Some(name) if !name.is_empty() => Section::Named(name),
            _ => Section::Default,
        };
        let encoding = args.optional();

        let path = ctx.resolve_path(&file);
        let section_name = match &section {
            Section::Named(name) => name.as_str(),
            _ => ctx.settings.default_section.as_str(),
        };
        let include = IncludeLoading {
            path: &file,
            section: Some(section_name),
            depth: ctx.depth + 1,
        };
        include.log();

        let pipeline = include
            .span("config_include")
            .in_scope(|| {
                PipelineBuilder::nested(ctx).build_from_file(&path, &section, encoding.as_deref())
            })
            .map_err(|e| RuleError::Include(Box::new(e)))?;

        Ok(Self { pipeline })
    }
}
