// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;       // engine settings
pub mod errors;       // error handling
pub mod normalizers;  // built-in stages
pub mod observability;
pub mod parsing;      // dialects, tokenizer, sections
pub mod pipeline;     // composite + builder
pub mod registry;     // rule resolution
pub mod traits;       // the normalizer capability
pub mod utils;
