// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::TaskError;
use crate::store::Namespace;
use thiserror::Error;

/// Errors raised by a graph executor while running a task list.
///
/// The pipeline never retries or suppresses these; they reach the caller of
/// `run`/`run_eager` unchanged.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A task's requirement was not in the pipe when the task was due to run
    #[error("Task '{task_id}' cannot run: input '{namespace}.{key}' is missing")]
    MissingInput {
        task_id: String,
        namespace: Namespace,
        key: String,
    },

    /// A task finished without producing one of its declared outputs
    #[error("Task '{task_id}' did not produce declared output '{namespace}.{key}'")]
    MissingOutput {
        task_id: String,
        namespace: Namespace,
        key: String,
    },

    #[error("Task '{task_id}' ({function}) failed: {source}")]
    TaskFailed {
        task_id: String,
        function: String,
        #[source]
        source: TaskError,
    },

    #[error("Internal executor error: {message}")]
    Internal { message: String },
}
