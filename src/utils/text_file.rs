// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::errors::SourceError;

/// Look up an encoding by its WHATWG label (`utf-8`, `latin1`, `utf-16le`, ...).
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, SourceError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| SourceError::UnknownEncoding(label.to_string()))
}

/// Read a whole text file in the given encoding.
///
/// A byte-order mark takes precedence over `encoding` and is stripped.
/// Malformed input is an error rather than being replaced.
///
/// # Example
///
/// ```rust
/// use the_normalizer::utils::read_text;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("rules.csv");
/// std::fs::write(&path, b"\xEF\xBB\xBFa,b").unwrap();
///
/// assert_eq!(read_text(&path, "latin1").unwrap(), "a,b");
/// ```
pub fn read_text<P: AsRef<Path>>(path: P, encoding: &str) -> Result<String, SourceError> {
    let path = path.as_ref();
    let encoding = encoding_for_label(encoding)?;

    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(SourceError::Decode {
            path: path.to_path_buf(),
            encoding: used.name().to_string(),
        });
    }

    Ok(text.into_owned())
}
