// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration text parsing.
//!
//! Raw characters flow through three layers:
//!
//! 1. [`Dialect`] defines delimiters, quoting, comments and trimming
//! 2. [`Reader`] turns characters into [`Row`]s of fields
//! 3. [`SectionedReader`] groups rows into `[name]` sections
//!
//! ```
//! use the_normalizer::parsing::{read_rows, Dialect};
//!
//! let rows = read_rows("replace e a\nlowercase", Dialect::whitespace()).unwrap();
//! assert_eq!(rows[0].fields(), ["replace", "e", "a"]);
//! assert_eq!(rows[1].line(), 2);
//! ```

pub mod dialect;
pub mod reader;
pub mod sections;

pub use crate::errors::Position;
pub use dialect::{Dialect, DialectBuilder, DEFAULT_DIALECT, WHITESPACE_DIALECT};
pub use reader::{format_row, quote_field, read_rows, Reader, ReaderState, Row};
pub use sections::{section_marker, SectionedReader};
