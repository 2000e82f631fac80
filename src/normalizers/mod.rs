// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in transformation stages.
//!
//! | rule                  | arguments                                    |
//! |-----------------------|----------------------------------------------|
//! | `replace`             | search, \[replace\]                          |
//! | `replacewords`        | search, replace                              |
//! | `regex`               | search, \[replace\]                          |
//! | `lowercase`           |                                              |
//! | `unidecode`           |                                              |
//! | `alphanumeric`        |                                              |
//! | `alphanumericunicode` |                                              |
//! | `file`                | normalizer, file, \[encoding\]               |
//! | `localizedfile`       | normalizer, locale, path, \[encoding\]       |
//! | `config`              | file, \[section\], \[encoding\]              |

mod alphanumeric;
mod config;
mod file;
mod localized;
mod lowercase;
mod regex_replace;
mod replace;
mod replace_words;
mod unidecode;

pub use alphanumeric::{AlphaNumeric, AlphaNumericUnicode};
pub use config::Config;
pub use file::{load_rule_file, File};
pub use localized::{choose_locale_file, standardize_tag, LocalizedFile};
pub use lowercase::Lowercase;
pub use regex_replace::{translate_template, Regex};
pub use replace::Replace;
pub use replace_words::ReplaceWords;
pub use unidecode::Unidecode;

use crate::registry::{RuleType, StaticNamespace, BUILTIN_NAMESPACE};

/// Namespace of the file-backed rules.
pub const FILE_NAMESPACE: &str = "builtin.file";

/// Every plain stage, exported under [`BUILTIN_NAMESPACE`].
pub fn builtin_namespace() -> StaticNamespace {
    StaticNamespace::new(BUILTIN_NAMESPACE)
        .export(RuleType::of::<Replace>())
        .export(RuleType::of::<ReplaceWords>())
        .export(RuleType::of::<Regex>())
        .export(RuleType::of::<Lowercase>())
        .export(RuleType::of::<Unidecode>())
        .export(RuleType::of::<AlphaNumeric>())
        .export(RuleType::of::<AlphaNumericUnicode>())
}

/// Extra names for built-in stages.
pub fn builtin_aliases() -> Vec<(&'static str, RuleType)> {
    vec![("RegexReplace", RuleType::of::<Regex>())]
}

/// Stages that read files relative to the configuration naming them.
pub fn file_namespace() -> StaticNamespace {
    StaticNamespace::new(FILE_NAMESPACE)
        .export(RuleType::of::<File>())
        .export(RuleType::of::<LocalizedFile>())
        .export(RuleType::of::<Config>())
}
