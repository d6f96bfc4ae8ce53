// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for graph executor lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Execution started with specified strategy.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use taskpipe::observability::messages::executor::ExecutionStarted;
///
/// let msg = ExecutionStarted {
///     strategy: "sequential",
///     task_count: 5,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ExecutionStarted<'a> {
    pub strategy: &'a str,
    pub task_count: usize,
}

impl Display for ExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting execution with {} strategy: {} tasks",
            self.strategy, self.task_count
        )
    }
}

impl StructuredLog for ExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            strategy = self.strategy,
            task_count = self.task_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "execution",
            span_name = name,
            strategy = self.strategy,
            task_count = self.task_count,
        )
    }
}

/// Execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ExecutionCompleted<'a> {
    pub strategy: &'a str,
    pub task_count: usize,
    pub duration: std::time::Duration,
}

impl Display for ExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Execution completed with {} strategy: {} tasks in {:?}",
            self.strategy, self.task_count, self.duration
        )
    }
}

impl StructuredLog for ExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            strategy = self.strategy,
            task_count = self.task_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "execution_completed",
            span_name = name,
            strategy = self.strategy,
            task_count = self.task_count,
            duration = ?self.duration,
        )
    }
}

/// Execution failed with error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ExecutionFailed<'a> {
    pub strategy: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Execution failed with {} strategy: {}",
            self.strategy, self.error
        )
    }
}

impl StructuredLog for ExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            strategy = self.strategy,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "execution_failed",
            span_name = name,
            strategy = self.strategy,
            error = %self.error,
        )
    }
}

/// A single task is about to run.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct TaskStarted<'a> {
    pub task_id: &'a str,
    pub function: &'a str,
    pub is_grouped: bool,
}

impl Display for TaskStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Running task '{}' ({})", self.task_id, self.function)
    }
}

impl StructuredLog for TaskStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            task_id = self.task_id,
            function = self.function,
            is_grouped = self.is_grouped,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "task",
            span_name = name,
            task_id = self.task_id,
            function = self.function,
            is_grouped = self.is_grouped,
        )
    }
}

/// Dependency levels computed by the level executor.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct LevelComputationCompleted {
    pub level_count: usize,
    pub task_count: usize,
}

impl Display for LevelComputationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Computed {} levels for {} tasks",
            self.level_count, self.task_count
        )
    }
}

impl StructuredLog for LevelComputationCompleted {
    fn log(&self) {
        tracing::debug!(
            level_count = self.level_count,
            task_count = self.task_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "level_computation",
            span_name = name,
            level_count = self.level_count,
            task_count = self.task_count,
        )
    }
}
