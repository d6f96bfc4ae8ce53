// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::Instrument;

use crate::config::consts::FALLBACK_MAX_CONCURRENCY;
use crate::engine::invoke::invoke_checked;
use crate::errors::ExecutionError;
use crate::observability::messages::executor::{
    ExecutionCompleted, ExecutionFailed, ExecutionStarted, LevelComputationCompleted,
};
use crate::observability::messages::StructuredLog;
use crate::pipeline::Task;
use crate::store::{Namespace, Pipe};
use crate::traits::GraphExecutor;

const STRATEGY: &str = "level";

/// Level-by-Level executor that runs independent tasks concurrently.
///
/// The ordered task list is grouped into dependency levels, and every task
/// in a level runs on tokio's blocking pool against the same snapshot of the
/// pipe. Outputs are merged in list order once the whole level finishes, so
/// the result matches what [`SequentialExecutor`](crate::engine::SequentialExecutor)
/// would produce.
///
/// ## Level assignment
///
/// A task goes one level below the deepest earlier task whose outputs it
/// requires. It also never goes above an earlier task that reads or writes a
/// key it overwrites, so readers always see the value they would have seen in
/// list order and the last writer in the list wins.
///
/// ## Concurrency control
///
/// A `tokio::sync::Semaphore` caps how many tasks of a level run at once.
pub struct LevelByLevelExecutor {
    /// Maximum number of concurrent task executions within a level
    max_concurrency: usize,
}

impl LevelByLevelExecutor {
    /// Create a new Level-by-Level executor with the specified concurrency limit
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1), // Ensure at least 1
        }
    }

    /// Create a new Level-by-Level executor with one slot per available CPU
    pub fn with_default_concurrency() -> Self {
        let concurrency = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(FALLBACK_MAX_CONCURRENCY);
        Self::new(concurrency)
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Group task indices into levels, preserving list order within a level.
    fn compute_levels(tasks: &[Arc<Task>]) -> Vec<Vec<usize>> {
        let mut level_of: Vec<usize> = Vec::with_capacity(tasks.len());
        let mut last_writer: HashMap<(Namespace, &str), usize> = HashMap::new();
        let mut last_reader: HashMap<(Namespace, &str), usize> = HashMap::new();

        for (idx, task) in tasks.iter().enumerate() {
            let after_producers = task
                .requires()
                .iter()
                .filter_map(|k| last_writer.get(&k).map(|&w| level_of[w] + 1))
                .max()
                .unwrap_or(0);
            let not_before_readers = task
                .outputs()
                .iter()
                .flat_map(|k| [last_reader.get(&k), last_writer.get(&k)])
                .flatten()
                .map(|&i| level_of[i])
                .max()
                .unwrap_or(0);
            level_of.push(after_producers.max(not_before_readers));

            for key in task.requires().iter() {
                let entry = last_reader.entry(key).or_insert(idx);
                if level_of[*entry] <= level_of[idx] {
                    *entry = idx;
                }
            }
            for key in task.outputs().iter() {
                last_writer.insert(key, idx);
            }
        }

        let depth = level_of.iter().max().map_or(0, |&d| d + 1);
        let mut levels = vec![Vec::new(); depth];
        for (idx, level) in level_of.into_iter().enumerate() {
            levels[level].push(idx);
        }
        levels
    }

    /// Run one level against a snapshot of the pipe and merge the outputs in list order.
    async fn execute_level(
        &self,
        level: &[usize],
        tasks: &[Arc<Task>],
        mut pipe: Pipe,
    ) -> Result<Pipe, ExecutionError> {
        let snapshot = Arc::new(pipe.clone());
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut handles = Vec::with_capacity(level.len());

        for &idx in level {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| ExecutionError::Internal {
                    message: format!(
                        "Failed to acquire semaphore permit for task '{}': {}",
                        tasks[idx].id(),
                        e
                    ),
                })?;

            let task = Arc::clone(&tasks[idx]);
            let snapshot = Arc::clone(&snapshot);
            handles.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                invoke_checked(&task, &snapshot)
            }));
        }

        // Every task in the level finishes before anything is merged or reported
        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await.map_err(|join_error| ExecutionError::Internal {
                message: format!("Task join error: {}", join_error),
            }));
        }

        for result in results {
            pipe.merge(result??);
        }

        Ok(pipe)
    }

    async fn run_levels(&self, tasks: &[Arc<Task>], mut pipe: Pipe) -> Result<Pipe, ExecutionError> {
        let levels = Self::compute_levels(tasks);
        LevelComputationCompleted {
            level_count: levels.len(),
            task_count: tasks.len(),
        }
        .log();

        for level in &levels {
            pipe = self.execute_level(level, tasks, pipe).await?;
        }
        Ok(pipe)
    }
}

impl Default for LevelByLevelExecutor {
    fn default() -> Self {
        Self::with_default_concurrency()
    }
}

#[async_trait]
impl GraphExecutor for LevelByLevelExecutor {
    async fn execute(&self, tasks: &[Arc<Task>], pipe: Pipe) -> Result<Pipe, ExecutionError> {
        if tasks.is_empty() {
            return Ok(pipe);
        }

        let started = ExecutionStarted {
            strategy: STRATEGY,
            task_count: tasks.len(),
        };
        started.log();
        let span = started.span("level_by_level");
        let start = Instant::now();

        match self.run_levels(tasks, pipe).instrument(span).await {
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
