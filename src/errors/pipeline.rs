// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors that abort pipeline construction.

use crate::errors::ResolveError;
use thiserror::Error;

/// A task identifier that is not in the task registry
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown pipeline task '{task}'")]
pub struct UnknownTaskError {
    pub task: String,
}

/// Errors that can occur while building a pipeline.
///
/// Construction either succeeds completely or fails with one of these; no
/// partial pipeline is ever returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    UnknownTask(#[from] UnknownTaskError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The resolver returned a task id that the configuration does not define
    #[error("Resolver returned task '{task_id}' which is not in the configuration")]
    UnconfiguredTask { task_id: String },
}
