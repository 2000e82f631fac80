// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Groups tokenized rows into `[name]` sections.

use std::ops::Range;

use crate::errors::{ConfigError, ParseError, SectionError};
use crate::observability::messages::parsing::ConfigParsed;
use crate::observability::messages::StructuredLog;
use crate::parsing::Row;

/// Returns the section name if the row is a `[name]` marker.
///
/// A marker is a row of exactly one field made of `[`, one or more ASCII
/// letters or digits, and `]`.
pub fn section_marker(row: &Row) -> Option<&str> {
    if row.len() != 1 {
        return None;
    }

    let name = row.get(0)?.strip_prefix('[')?.strip_suffix(']')?;
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(name)
    } else {
        None
    }
}

/// Rows of one configuration source, split into sections.
///
/// Marker rows are consumed while reading and never show up in any range.
#[derive(Debug, Clone, Default)]
pub struct SectionedReader {
    rows: Vec<Row>,
    /// Rows before the first marker.
    unsectioned: Range<usize>,
    /// Named sections in order of appearance.
    sections: Vec<(String, Range<usize>)>,
}

impl SectionedReader {
    /// Drain a row iterator, attributing parse errors to `origin`.
    pub fn read<I>(rows: I, origin: &str) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Result<Row, ParseError>>,
    {
        let rows = rows
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigError::Parse {
                origin: origin.to_string(),
                source,
            })?;

        let reader = Self::from_rows(rows)?;

        ConfigParsed {
            origin,
            row_count: reader.rows.len(),
            section_count: reader.sections.len(),
        }
        .log();

        Ok(reader)
    }

    pub fn from_rows(rows: Vec<Row>) -> Result<Self, SectionError> {
        let mut kept = Vec::with_capacity(rows.len());
        let mut sections: Vec<(String, Range<usize>)> = Vec::new();
        let mut unsectioned_end = None;

        for row in rows {
            let marker = section_marker(&row).map(str::to_string);
            match marker {
                Some(name) => {
                    if sections.iter().any(|(existing, _)| *existing == name) {
                        return Err(SectionError::Duplicate(name));
                    }

                    let start = kept.len();
                    if let Some((_, previous)) = sections.last_mut() {
                        previous.end = start;
                    }
                    unsectioned_end.get_or_insert(start);
                    sections.push((name, start..start));
                }
                None => kept.push(row),
            }
        }

        let end = kept.len();
        if let Some((_, last)) = sections.last_mut() {
            last.end = end;
        }

        Ok(Self {
            unsectioned: 0..unsectioned_end.unwrap_or(end),
            rows: kept,
            sections,
        })
    }

    /// Rows of the named section.
    ///
    /// Asking a source without any markers is [`SectionError::NoSections`],
    /// asking for a name that is not there is [`SectionError::NotFound`].
    pub fn section(&self, name: &str) -> Result<&[Row], SectionError> {
        if self.sections.is_empty() {
            return Err(SectionError::NoSections(name.to_string()));
        }

        self.sections
            .iter()
            .find(|(section, _)| section == name)
            .map(|(_, range)| &self.rows[range.clone()])
            .ok_or_else(|| SectionError::NotFound(name.to_string()))
    }

    /// Rows before the first section marker.
    pub fn unsectioned(&self) -> &[Row] {
        &self.rows[self.unsectioned.clone()]
    }

    /// Every row of every section, in source order, without marker rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}
