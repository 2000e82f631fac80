// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::errors::{ConfigError, RegistryError};
use crate::observability::messages::parsing::SectionSelected;
use crate::observability::messages::pipeline::{PipelineBuilt, RowRejected};
use crate::observability::messages::StructuredLog;
use crate::parsing::{Reader, Row, SectionedReader};
use crate::pipeline::{Composite, LoadContext};
use crate::registry::NormalizerRegistry;
use crate::traits::Normalizer;
use crate::utils::read_text;

/// Origin reported for configurations given as text.
pub const STRING_ORIGIN: &str = "<string>";

/// Which rows of a configuration become the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Section {
    /// The section named by [`Settings::default_section`].
    #[default]
    Default,
    Named(String),
    /// Every row, ignoring section markers.
    Whole,
}

impl Section {
    pub fn named(name: impl Into<String>) -> Self {
        Section::Named(name.into())
    }

    fn name<'a>(&'a self, settings: &'a Settings) -> Option<&'a str> {
        match self {
            Section::Default => Some(&settings.default_section),
            Section::Named(name) => Some(name),
            Section::Whole => None,
        }
    }
}

/// Builds [`Composite`] pipelines from configuration sources.
///
/// Each row becomes one stage: field 0 names the rule, the remaining fields
/// are its arguments. Rows are handled in order in a single pass.
pub struct PipelineBuilder<'a> {
    registry: &'a NormalizerRegistry,
    settings: &'a Settings,
    depth: usize,
}

impl<'a> PipelineBuilder<'a> {
    pub fn new(registry: &'a NormalizerRegistry, settings: &'a Settings) -> Self {
        Self {
            registry,
            settings,
            depth: 0,
        }
    }

    /// A builder for a configuration included from within another one.
    pub fn nested(ctx: &LoadContext<'a>) -> Self {
        Self {
            registry: ctx.registry,
            settings: ctx.settings,
            depth: ctx.depth + 1,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn build_from_str(&self, text: &str, section: &Section) -> Result<Composite, ConfigError> {
        self.build_text(text, STRING_ORIGIN, None, section)
    }

    /// Read and build a configuration file. Relative paths inside it resolve
    /// against the file's own directory.
    pub fn build_from_file(
        &self,
        path: &Path,
        section: &Section,
        encoding: Option<&str>,
    ) -> Result<Composite, ConfigError> {
        if self.depth > self.settings.max_include_depth {
            return Err(ConfigError::IncludeDepthExceeded {
                path: path.to_path_buf(),
                limit: self.settings.max_include_depth,
            });
        }

        let encoding = encoding.unwrap_or(&self.settings.default_encoding);
        let text = read_text(path, encoding)?;
        let base_dir = base_dir_of(path);

        self.build_text(&text, &path.display().to_string(), base_dir.as_deref(), section)
    }

    fn build_text(
        &self,
        text: &str,
        origin: &str,
        base_dir: Option<&Path>,
        section: &Section,
    ) -> Result<Composite, ConfigError> {
        let dialect = self.settings.config_dialect()?;
        let reader = SectionedReader::read(Reader::for_str(text, dialect), origin)?;
        self.build_from_sections(&reader, origin, base_dir, section)
    }

    pub fn build_from_sections(
        &self,
        reader: &SectionedReader,
        origin: &str,
        base_dir: Option<&Path>,
        section: &Section,
    ) -> Result<Composite, ConfigError> {
        let section_name = section.name(self.settings);
        let rows = match section_name {
            Some(name) => reader.section(name)?,
            None => reader.rows(),
        };

        SectionSelected {
            origin,
            section: section_name,
            row_count: rows.len(),
        }
        .log();

        let title = match section_name {
            Some(name) => format!("{}[{}]", origin, name),
            None => origin.to_string(),
        };

        let ctx = LoadContext::new(self.registry, self.settings)
            .with_base_dir(base_dir)
            .with_depth(self.depth);

        let mut composite = Composite::new(title);
        for row in rows.iter().filter(|row| !row.is_empty()) {
            composite.push(self.build_stage(row, origin, &ctx)?);
        }

        PipelineBuilt {
            title: composite.title(),
            stage_count: composite.len(),
        }
        .log();

        Ok(composite)
    }

    fn build_stage(
        &self,
        row: &Row,
        origin: &str,
        ctx: &LoadContext<'_>,
    ) -> Result<Box<dyn Normalizer>, ConfigError> {
        let (name, args) = match row.fields().split_first() {
            Some(split) => split,
            None => {
                return Err(ConfigError::UnknownRule {
                    name: String::new(),
                    line: row.line(),
                    row: row.text(),
                    source: RegistryError::NotFound {
                        name: String::new(),
                    },
                })
            }
        };

        let resolved = self
            .registry
            .lookup_with(name, self.settings)
            .map_err(|source| {
                RowRejected {
                    origin,
                    rule: name,
                    line: row.line(),
                    error: &source,
                }
                .log();
                ConfigError::UnknownRule {
                    name: name.clone(),
                    line: row.line(),
                    row: row.text(),
                    source,
                }
            })?;

        resolved
            .rule_type()
            .construct(args.to_vec(), ctx)
            .map_err(|source| {
                RowRejected {
                    origin,
                    rule: name,
                    line: row.line(),
                    error: &source,
                }
                .log();
                ConfigError::Construction {
                    rule: name.clone(),
                    line: row.line(),
                    source,
                }
            })
    }
}

fn base_dir_of(path: &Path) -> Option<PathBuf> {
    let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    absolute.parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::errors::SectionError;
    use crate::normalizers::Replace;
    use crate::registry::{RuleType, StaticNamespace};

    fn build(text: &str, section: Section) -> Result<Composite, ConfigError> {
        let registry = NormalizerRegistry::builtin().unwrap();
        let settings = Settings::default();
        PipelineBuilder::new(&registry, &settings).build_from_str(text, &section)
    }

    #[test]
    fn test_lowercase_then_replace() {
        let pipeline = build("lowercase\nreplace e a", Section::Whole).unwrap();

        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.normalize("test"), "tast");
        assert_eq!(pipeline.normalize("TEST"), "tast");
    }

    #[test]
    fn test_documented_example_config() {
        let config = r#"
# using a simple config file
Lowercase

# it even supports comments
# If there is a space in the argument, make sure you quote it though!
regexreplace "y t" "Y T"

      # extraneous whitespaces are ignored
   Replace   e     a
"#;
        let pipeline = build(config, Section::Whole).unwrap();

        assert_eq!(
            pipeline.normalize("He bravely turned his tail and fled"),
            "ha bravalY Turnad his tail and flad"
        );
        assert_eq!(pipeline.stage_names(), vec!["Lowercase", "Regex", "Replace"]);
    }

    #[test]
    fn test_section_selection() {
        let config = "[normalization]\nlowercase\n[other]\nreplace e a\n";

        let default = build(config, Section::Default).unwrap();
        assert_eq!(default.title(), "<string>[normalization]");
        assert_eq!(default.normalize("Test"), "test");

        let other = build(config, Section::named("other")).unwrap();
        assert_eq!(other.normalize("Test"), "Tast");

        let whole = build(config, Section::Whole).unwrap();
        assert_eq!(whole.normalize("Test"), "tast");

        let missing = build("[normalization]\nlowercase\n", Section::named("missing")).unwrap_err();
        assert!(matches!(
            missing,
            ConfigError::Section(SectionError::NotFound(ref name)) if name == "missing"
        ));
    }

    #[test]
    fn test_unknown_rule_reports_line_and_row() {
        let err = build("lowercase\n\nfrobnicate \"a b\" c\n", Section::Whole).unwrap_err();

        assert_eq!(err.to_string(), "unknown rule 'frobnicate' on line 3: frobnicate a b c");
    }

    #[test]
    fn test_construction_errors_carry_line() {
        let cases = vec![
            ("lowercase extra", 1, "lowercase"),
            ("\nreplace", 2, "replace"),
            ("lowercase\nregex \"(\"", 2, "regex"),
        ];

        for (config, expected_line, expected_rule) in cases {
            match build(config, Section::Whole) {
                Err(ConfigError::Construction { rule, line, .. }) => {
                    assert_eq!(line, expected_line, "{}", config);
                    assert_eq!(rule, expected_rule, "{}", config);
                }
                other => panic!("{:?}: unexpected {:?}", config, other.map(|p| p.len())),
            }
        }
    }

    #[test]
    fn test_dotted_names_respect_settings() {
        let mut registry = NormalizerRegistry::builtin().unwrap();
        registry.rules_mut().mount(Arc::new(
            StaticNamespace::new("acme").export(RuleType::of::<Replace>()),
        ));

        let settings = Settings::default();
        let open = PipelineBuilder::new(&registry, &settings);
        assert_eq!(
            open.build_from_str("builtin.Lowercase", &Section::Whole)
                .unwrap()
                .normalize("ABC"),
            "abc"
        );
        assert_eq!(
            open.build_from_str("acme.Replace e a", &Section::Whole)
                .unwrap()
                .normalize("test"),
            "tast"
        );

        let closed_settings = Settings {
            external_namespaces: false,
            ..Settings::default()
        };
        let closed = PipelineBuilder::new(&registry, &closed_settings);
        assert_eq!(
            closed
                .build_from_str("builtin.Lowercase", &Section::Whole)
                .unwrap()
                .normalize("ABC"),
            "abc"
        );
        let err = closed
            .build_from_str("acme.Replace e a", &Section::Whole)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownRule {
                source: RegistryError::ExternalLookupDisabled { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_parse_errors_surface() {
        let err = build("replace \"a", Section::Whole).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref origin, .. } if origin == STRING_ORIGIN));
    }

    #[test]
    fn test_include_depth_is_checked_before_reading() {
        let registry = NormalizerRegistry::builtin().unwrap();
        let settings = Settings {
            max_include_depth: 0,
            ..Settings::default()
        };
        let ctx = LoadContext::new(&registry, &settings);
        let nested = PipelineBuilder::nested(&ctx);

        let err = nested
            .build_from_file(Path::new("does-not-matter.conf"), &Section::Whole, None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::IncludeDepthExceeded { limit: 0, .. }));

        let missing = PipelineBuilder::new(&registry, &settings)
            .build_from_file(Path::new("/nonexistent/x.conf"), &Section::Whole, None)
            .unwrap_err();
        assert!(matches!(missing, ConfigError::Source(_)));
    }
}
