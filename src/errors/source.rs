// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a configuration or auxiliary rule file.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown encoding '{0}'")]
    UnknownEncoding(String),

    #[error("'{}' is not valid {encoding}", path.display())]
    Decode { path: PathBuf, encoding: String },
}
