// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dependency resolution.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Task left out because all of its outputs already exist and overwriting
/// is disabled.
///
/// # Log Level
/// `info!` - Important operational event
pub struct TaskSkipped<'a> {
    pub task_id: &'a str,
}

impl Display for TaskSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping task '{}': outputs already present and overwrite is disabled",
            self.task_id
        )
    }
}

impl StructuredLog for TaskSkipped<'_> {
    fn log(&self) {
        tracing::info!(task_id = self.task_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("task_skipped", span_name = name, task_id = self.task_id)
    }
}

/// Resolution produced an execution order.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct OrderResolved {
    pub configured: usize,
    pub scheduled: usize,
    pub overwrite: bool,
}

impl Display for OrderResolved {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved {} of {} configured tasks (overwrite={})",
            self.scheduled, self.configured, self.overwrite
        )
    }
}

impl StructuredLog for OrderResolved {
    fn log(&self) {
        tracing::debug!(
            configured = self.configured,
            scheduled = self.scheduled,
            overwrite = self.overwrite,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "order_resolved",
            span_name = name,
            configured = self.configured,
            scheduled = self.scheduled,
            overwrite = self.overwrite,
        )
    }
}
