// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

use crate::engine::invoke::invoke_checked;
use crate::errors::ExecutionError;
use crate::observability::messages::executor::{ExecutionCompleted, ExecutionFailed, ExecutionStarted};
use crate::observability::messages::StructuredLog;
use crate::pipeline::Task;
use crate::store::Pipe;
use crate::traits::GraphExecutor;

const STRATEGY: &str = "sequential";

/// Executor that runs tasks one at a time, in list order.
///
/// Each task sees every output produced by the tasks before it. This is the
/// default strategy and the simplest to reason about.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn new() -> Self {
        Self
    }

    fn run_all(tasks: &[Arc<Task>], mut pipe: Pipe) -> Result<Pipe, ExecutionError> {
        for task in tasks {
            let produced = invoke_checked(task, &pipe)?;
            pipe.merge(produced);
        }
        Ok(pipe)
    }
}

#[async_trait]
impl GraphExecutor for SequentialExecutor {
    async fn execute(&self, tasks: &[Arc<Task>], pipe: Pipe) -> Result<Pipe, ExecutionError> {
        if tasks.is_empty() {
            return Ok(pipe);
        }

        ExecutionStarted {
            strategy: STRATEGY,
            task_count: tasks.len(),
        }
        .log();
        let start = Instant::now();

        match Self::run_all(tasks, pipe) {
            Ok(pipe) => {
                ExecutionCompleted {
                    strategy: STRATEGY,
                    task_count: tasks.len(),
                    duration: start.elapsed(),
                }
                .log();
                Ok(pipe)
            }
            Err(e) => {
                ExecutionFailed {
                    strategy: STRATEGY,
                    error: &e,
                }
                .log();
                Err(e)
            }
        }
    }

    fn name(&self) -> &'static str {
        STRATEGY
    }
}
