// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end tests building pipelines from the fixtures in `configs/` and
//! from temporary files.

use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::Settings;
use crate::errors::{ConfigError, RegistryError, RuleError, SectionError};
use crate::pipeline::{Composite, PipelineBuilder, Section};
use crate::normalizers::Replace;
use crate::registry::{NormalizerRegistry, RuleType, StaticNamespace};
use crate::traits::Normalizer;

fn build_file(path: &Path, section: Section) -> Result<Composite, ConfigError> {
    let registry = NormalizerRegistry::builtin().unwrap();
    let settings = Settings::default();
    PipelineBuilder::new(&registry, &settings).build_from_file(path, &section, None)
}

/// Every message in an error's source chain, outermost first.
fn error_chain(err: &dyn Error) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut current = err.source();
    while let Some(source) = current {
        messages.push(source.to_string());
        current = source.source();
    }
    messages
}

/// Test the default section of the shipped example configuration
#[test]
fn test_default_section_from_fixture() {
    let pipeline = build_file(Path::new("configs/normalization.conf"), Section::Default).unwrap();

    assert!(pipeline.title().ends_with("normalization.conf[normalization]"));
    assert_eq!(pipeline.len(), 3);
    assert_eq!(
        pipeline.normalize("He bravely turned his tail and fled"),
        "ha bravalY Turnad his tail and flad"
    );
}

/// Test file-backed rules, nested includes and locale selection together
#[test]
fn test_file_backed_rules_from_fixture() {
    let pipeline = build_file(Path::new("configs/normalization.conf"), Section::named("words")).unwrap();

    assert_eq!(pipeline.len(), 2);
    assert_eq!(
        pipeline.normalize("This is an Ex-Parakeet  and a heart of formica"),
        "This is an Ex Parrot and the heart of marble"
    );
}

/// Test that a missing section differs from a present one
#[test]
fn test_section_lookup_on_fixture() {
    let err = build_file(Path::new("configs/normalization.conf"), Section::named("missing")).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Section(SectionError::NotFound(ref name)) if name == "missing"
    ));

    let plain = build_file(Path::new("configs/extra.conf"), Section::named("plain")).unwrap();
    assert_eq!(plain.stage_names(), vec!["Lowercase"]);
}

/// Test that a configuration including itself stops at the depth limit
#[test]
fn test_self_include_hits_depth_limit() {
    let registry = NormalizerRegistry::builtin().unwrap();
    let settings = Settings {
        max_include_depth: 3,
        ..Settings::default()
    };

    let err = PipelineBuilder::new(&registry, &settings)
        .build_from_file(
            Path::new("configs/self_include.conf"),
            &Section::named("loop"),
            None,
        )
        .unwrap_err();

    let chain = error_chain(&err);
    assert!(
        chain
            .iter()
            .any(|message| message.contains("exceeds the maximum include depth of 3")),
        "{:#?}",
        chain
    );
}

/// Test relative paths resolve against the including file, not the working directory
#[test]
fn test_paths_resolve_relative_to_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/rules.csv"), "colour,color\n").unwrap();
    fs::write(
        dir.path().join("nested/inner.conf"),
        "[normalization]\nfile replace rules.csv\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("outer.conf"),
        "[normalization]\nconfig nested/inner.conf\nlowercase\n",
    )
    .unwrap();

    let pipeline = build_file(&dir.path().join("outer.conf"), Section::Default).unwrap();
    assert_eq!(pipeline.normalize("Colour and colour"), "colour and color");
}

/// Test that failures inside rule files report the file and line
#[test]
fn test_rule_file_errors_report_location() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.csv"), "fine,ok\n\n\"(\",x\n").unwrap();
    fs::write(dir.path().join("too_many.csv"), "a,b,c\n").unwrap();
    fs::write(dir.path().join("broken_quote.csv"), "a,\"b\n").unwrap();

    let cases = vec![
        ("lowercase\nfile regex bad.csv\n", 2, 3),
        ("file replace too_many.csv\n", 1, 1),
        ("file replace broken_quote.csv\n", 1, 1),
    ];

    for (config, config_line, file_line) in cases {
        let path = dir.path().join("rules.conf");
        fs::write(&path, config).unwrap();

        match build_file(&path, Section::Whole) {
            Err(ConfigError::Construction { line, source, .. }) => {
                assert_eq!(line, config_line, "{}", config);
                match source {
                    RuleError::RuleFile { line, .. } => assert_eq!(line, file_line, "{}", config),
                    other => panic!("{}: expected a rule file error, got {}", config, other),
                }
            }
            other => panic!("{}: unexpected {:?}", config, other.map(|p| p.len())),
        }
    }
}

/// Test that the rule named by `file` must resolve
#[test]
fn test_file_rule_with_unknown_normalizer() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rules.csv"), "a,b\n").unwrap();
    let path = dir.path().join("rules.conf");
    fs::write(&path, "file nope rules.csv\n").unwrap();

    let err = build_file(&path, Section::Whole).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Construction {
            source: RuleError::Resolution(RegistryError::NotFound { .. }),
            ..
        }
    ));
}

/// Test that file encodings are honoured
#[test]
fn test_encodings() {
    let dir = tempfile::tempdir().unwrap();

    let conf = dir.path().join("latin1.conf");
    fs::write(&conf, b"replace \xe9 e\nfile replace words.csv latin1\n").unwrap();
    fs::write(dir.path().join("words.csv"), b"caf\xe9s,cafes\n").unwrap();

    let registry = NormalizerRegistry::builtin().unwrap();
    let settings = Settings::default();
    let builder = PipelineBuilder::new(&registry, &settings);

    let pipeline = builder
        .build_from_file(&conf, &Section::Whole, Some("latin1"))
        .unwrap();
    assert_eq!(pipeline.normalize("café"), "cafe");

    let err = builder.build_from_file(&conf, &Section::Whole, None).unwrap_err();
    assert!(matches!(err, ConfigError::Source(_)));
}

/// Test locale selection failures
#[test]
fn test_localized_file_without_match() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("locale")).unwrap();
    fs::write(dir.path().join("locale/en"), "a,b\n").unwrap();
    let path = dir.path().join("rules.conf");

    let cases = vec![
        ("localizedfile replace fr locale\n", "Could not find a locale file"),
        ("localizedfile replace en missing\n", "to be a directory"),
    ];

    for (config, expected) in cases {
        fs::write(&path, config).unwrap();
        let err = build_file(&path, Section::Whole).unwrap_err();
        let chain = error_chain(&err);
        assert!(
            chain.iter().any(|message| message.contains(expected)),
            "{}: {:#?}",
            config,
            chain
        );
    }
}

/// Test that an include falls back to the default section
#[test]
fn test_config_rule_default_section() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("inner.conf"),
        "[normalization]\nreplace e a\n[other]\nlowercase\n",
    )
    .unwrap();
    let path = dir.path().join("outer.conf");

    let cases = vec![
        ("config inner.conf\n", "TEST tast"),
        ("config inner.conf \"\"\n", "TEST tast"),
        ("config inner.conf other\n", "test test"),
    ];

    for (config, expected) in cases {
        fs::write(&path, config).unwrap();
        let pipeline = build_file(&path, Section::Whole).unwrap();
        assert_eq!(pipeline.normalize("TEST test"), expected, "{}", config);
    }
}

/// Test that rules named inside `file` and `localizedfile` obey the namespace setting
#[test]
fn test_file_backed_rules_respect_external_namespaces() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rules.csv"), "e,a\n").unwrap();
    fs::create_dir(dir.path().join("locale")).unwrap();
    fs::write(dir.path().join("locale/en"), "e,a\n").unwrap();
    let path = dir.path().join("rules.conf");

    let mut registry = NormalizerRegistry::builtin().unwrap();
    registry.rules_mut().mount(Arc::new(
        StaticNamespace::new("acme").export(RuleType::of::<Replace>()),
    ));
    let open = Settings::default();
    let closed = Settings {
        external_namespaces: false,
        ..Settings::default()
    };

    let cases = vec![
        "file acme.Replace rules.csv\n",
        "localizedfile acme.Replace en locale\n",
    ];

    for config in cases {
        fs::write(&path, config).unwrap();

        let pipeline = PipelineBuilder::new(&registry, &open)
            .build_from_file(&path, &Section::Whole, None)
            .unwrap();
        assert_eq!(pipeline.normalize("test"), "tast", "{}", config);

        let err = PipelineBuilder::new(&registry, &closed)
            .build_from_file(&path, &Section::Whole, None)
            .unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::Construction {
                    source: RuleError::Resolution(RegistryError::ExternalLookupDisabled { .. }),
                    ..
                }
            ),
            "{}: {}",
            config,
            err
        );
    }
}
