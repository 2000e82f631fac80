// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{RuleError, SourceError};
use crate::pipeline::{Composite, LoadContext};
use crate::registry::{Rule, RuleArgs};
use crate::traits::Normalizer;

use super::file::load_rule_file;

/// Canonical form of a language tag: `en_us` becomes `en-US`,
/// `zh_hant_tw` becomes `zh-Hant-TW`.
pub fn standardize_tag(tag: &str) -> String {
    tag.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(index, part)| {
            let alphabetic = part.chars().all(|c| c.is_ascii_alphabetic());
            match (index, part.len()) {
                (0, _) => part.to_ascii_lowercase(),
                (_, 2) if alphabetic => part.to_ascii_uppercase(),
                (_, 4) if alphabetic => {
                    let lower = part.to_ascii_lowercase();
                    lower[..1].to_ascii_uppercase() + &lower[1..]
                }
                _ => part.to_ascii_lowercase(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn primary_language(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Pick the file in `dir` whose name best matches `locale`.
///
/// File names (without extension) are read as language tags. An exact tag
/// match wins, then a file for the bare language, then any file sharing the
/// language, in name order.
pub fn choose_locale_file(locale: &str, dir: &Path) -> Result<PathBuf, RuleError> {
    if !dir.is_dir() {
        return Err(RuleError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut candidates: Vec<(String, PathBuf)> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let stem = path.file_stem()?.to_str()?.to_string();
            Some((standardize_tag(&stem), path))
        })
        .collect();
    candidates.sort();

    let wanted = standardize_tag(locale);
    let language = primary_language(&wanted);

    let exact = candidates.iter().find(|(tag, _)| *tag == wanted);
    let bare = || candidates.iter().find(|(tag, _)| tag == language);
    let shared = || {
        candidates
            .iter()
            .find(|(tag, _)| primary_language(tag) == language)
    };

    exact
        .or_else(bare)
        .or_else(shared)
        .map(|(_, path)| path.clone())
        .ok_or_else(|| RuleError::NoLocaleMatch {
            locale: wanted.clone(),
            path: dir.to_path_buf(),
        })
}

/// A [`super::File`] rule whose file is chosen by locale.
pub struct LocalizedFile {
    rules: Composite,
}

impl Normalizer for LocalizedFile {
    fn normalize(&self, text: &str) -> String {
        self.rules.normalize(text)
    }

    fn name(&self) -> &str {
        self.rules.title()
    }
}

impl Rule for LocalizedFile {
    const SYMBOL: &'static str = "LocalizedFile";
    const DOCS: &'static str =
        "Like `file`, with the file picked from directory `path` by best match for `locale`.";
    const REQUIRED_ARGS: &'static [&'static str] = &["normalizer", "locale", "path"];
    const OPTIONAL_ARGS: &'static [&'static str] = &["encoding"];

    fn from_args(args: &mut RuleArgs, ctx: &LoadContext<'_>) -> Result<Self, RuleError> {
        let normalizer = args.required("normalizer")?;
        let locale = args.required("locale")?;
        let path = args.required("path")?;
        let encoding = args.optional();

        let rule = ctx.resolve_rule(&normalizer)?;
        let file = choose_locale_file(&locale, &ctx.resolve_path(&path))?;
        let title = file.display().to_string();
        let rules = load_rule_file(rule, &file, ctx.encoding(encoding.as_deref()), &title, ctx)?;

        Ok(Self { rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_tag() {
        let cases = vec![
            ("en_US", "en-US"),
            ("EN-us", "en-US"),
            ("zh-Hant_CN", "zh-Hant-CN"),
            ("zh_hant_tw", "zh-Hant-TW"),
            ("nl", "nl"),
            ("es-419", "es-419"),
        ];

        for (input, expected) in cases {
            assert_eq!(standardize_tag(input), expected, "{}", input);
        }
    }

    #[test]
    fn test_choose_locale_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["en_US", "en", "it", "nl_BE.csv"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("fr")).unwrap();

        let cases = vec![
            ("en_US", Some("en_US")),
            ("en_UK", Some("en")),
            ("it-IT", Some("it")),
            ("nl", Some("nl_BE.csv")),
            ("fr", None),
            ("zh-Hant_CN", None),
        ];

        for (locale, expected) in cases {
            let chosen = choose_locale_file(locale, dir.path()).ok();
            let chosen = chosen
                .as_deref()
                .and_then(Path::file_name)
                .and_then(|name| name.to_str());
            assert_eq!(chosen, expected, "{}", locale);
        }
    }

    #[test]
    fn test_missing_directory() {
        let err = choose_locale_file("fr", Path::new("/not/existing/dir")).unwrap_err();
        assert_eq!(err.to_string(), "Expected '/not/existing/dir' to be a directory");
    }
}
