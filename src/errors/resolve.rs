// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::store::Namespace;
use thiserror::Error;

/// Errors that can occur while turning a configuration into an ordered task list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// Two tasks share the same id
    #[error("Duplicate task ID: '{task_id}'")]
    DuplicateTaskId { task_id: String },

    /// More than one task declares the same output
    #[error("Output '{namespace}.{key}' is produced by more than one task: {}", .producers.join(", "))]
    DuplicateOutput {
        namespace: Namespace,
        key: String,
        producers: Vec<String>,
    },

    /// A requirement is neither produced by a task nor present in the pipe
    #[error("Task '{task_id}' requires '{namespace}.{key}' which is not produced by any task or present in the pipe")]
    UnresolvedDependency {
        task_id: String,
        namespace: Namespace,
        key: String,
    },

    /// Tasks that could not be ordered because they wait on each other
    #[error("Cyclic dependency detected between tasks: {}", .tasks.join(", "))]
    CyclicDependency { tasks: Vec<String> },
}
