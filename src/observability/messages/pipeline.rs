// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline construction and eager/lazy orchestration.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline built and split into eager and lazy partitions.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineBuilt {
    pub task_count: usize,
    pub eager_count: usize,
    pub lazy_count: usize,
}

impl Display for PipelineBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built pipeline with {} tasks ({} eager, {} lazy)",
            self.task_count, self.eager_count, self.lazy_count
        )
    }
}

impl StructuredLog for PipelineBuilt {
    fn log(&self) {
        tracing::info!(
            task_count = self.task_count,
            eager_count = self.eager_count,
            lazy_count = self.lazy_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            task_count = self.task_count,
            eager_count = self.eager_count,
            lazy_count = self.lazy_count,
        )
    }
}

/// An eager-capable task was placed in the lazy partition because it comes
/// after a non-eager task.
///
/// # Log Level
/// `debug!` - Informational, the pipeline still runs the task
///
/// # Example
/// ```
/// use taskpipe::observability::messages::pipeline::EagerTaskDemoted;
///
/// let msg = EagerTaskDemoted {
///     task_id: "model",
///     function: "mean_model",
/// };
///
/// assert!(msg.to_string().contains("mean_model"));
/// ```
pub struct EagerTaskDemoted<'a> {
    pub task_id: &'a str,
    pub function: &'a str,
}

impl Display for EagerTaskDemoted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Not able to compute eager function \"{}\" (task '{}') on all inputs at once because it came after non-eager tasks",
            self.function, self.task_id
        )
    }
}

impl StructuredLog for EagerTaskDemoted<'_> {
    fn log(&self) {
        tracing::debug!(
            task_id = self.task_id,
            function = self.function,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "eager_task_demoted",
            span_name = name,
            task_id = self.task_id,
            function = self.function,
        )
    }
}

/// An eager task's record outputs are present but some data outputs are not.
///
/// # Log Level
/// `warn!` - Stale or partial eager results, eager compute will be triggered
pub struct EagerOutputMissing<'a> {
    pub task_id: &'a str,
    pub function: &'a str,
    pub missing: &'a [String],
}

impl Display for EagerOutputMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Eager task {} ({}) has missing output: [{}]",
            self.task_id,
            self.function,
            self.missing.join(", ")
        )
    }
}

impl StructuredLog for EagerOutputMissing<'_> {
    fn log(&self) {
        tracing::warn!(
            task_id = self.task_id,
            function = self.function,
            missing = ?self.missing,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "eager_output_missing",
            span_name = name,
            task_id = self.task_id,
            function = self.function,
            missing = ?self.missing,
        )
    }
}

/// `run` is executing the eager partition before the lazy one.
///
/// # Log Level
/// `warn!` - Eager results were expected but not found
pub struct EagerComputeTriggered {
    pub eager_task_count: usize,
}

impl Display for EagerComputeTriggered {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Triggering eager compute for {} tasks",
            self.eager_task_count
        )
    }
}

impl StructuredLog for EagerComputeTriggered {
    fn log(&self) {
        tracing::warn!(eager_task_count = self.eager_task_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "eager_compute",
            span_name = name,
            eager_task_count = self.eager_task_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_output_lists_every_key() {
        let missing = vec!["ndvi".to_string(), "evi".to_string()];
        let msg = EagerOutputMissing {
            task_id: "model",
            function: "mean_model",
            missing: &missing,
        };

        assert_eq!(
            msg.to_string(),
            "Eager task model (mean_model) has missing output: [ndvi, evi]"
        );
    }

    #[test]
    fn pipeline_built_counts() {
        let msg = PipelineBuilt {
            task_count: 3,
            eager_count: 1,
            lazy_count: 2,
        };
        assert_eq!(msg.to_string(), "Built pipeline with 3 tasks (1 eager, 2 lazy)");
    }
}
