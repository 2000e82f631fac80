// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod text_file;

pub use text_file::{encoding_for_label, read_text};
