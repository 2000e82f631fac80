// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::observability::messages::pipeline::{StageChanged, StageUnchanged};
use crate::observability::messages::StructuredLog;
use crate::traits::Normalizer;

/// An ordered chain of stages, applied one after the other.
///
/// An empty composite returns its input unchanged. A composite is itself a
/// [`Normalizer`], which is how included configurations nest.
pub struct Composite {
    title: String,
    stages: Vec<Box<dyn Normalizer>>,
}

impl Composite {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stages: Vec::new(),
        }
    }

    pub fn from_stages(title: impl Into<String>, stages: Vec<Box<dyn Normalizer>>) -> Self {
        Self {
            title: title.into(),
            stages,
        }
    }

    pub(crate) fn push(&mut self, stage: Box<dyn Normalizer>) {
        self.stages.push(stage);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }
}

impl Normalizer for Composite {
    fn normalize(&self, text: &str) -> String {
        let mut current = text.to_string();

        for stage in &self.stages {
            let next = stage.normalize(&current);
            if next == current {
                StageUnchanged {
                    pipeline: &self.title,
                    stage: stage.name(),
                }
                .log();
            } else {
                StageChanged {
                    pipeline: &self.title,
                    stage: stage.name(),
                    before: &current,
                    after: &next,
                }
                .log();
            }
            current = next;
        }

        current
    }

    fn name(&self) -> &str {
        &self.title
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("title", &self.title)
            .field("stages", &self.stage_names())
            .finish()
    }
}
