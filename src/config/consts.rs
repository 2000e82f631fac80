// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Encoding label used when neither the caller nor a rule names one.
pub const DEFAULT_ENCODING: &str = "UTF-8";
/// Section built when a configuration is loaded without naming one.
pub const DEFAULT_SECTION: &str = "normalization";
/// Nesting limit for configurations including other configurations.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 16;
