// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A single text-in, text-out transformation stage.
///
/// Stages are immutable once constructed, so a built pipeline can be shared
/// between threads and applied any number of times.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;

    /// Name used in logs, usually the rule symbol.
    fn name(&self) -> &str;
}
