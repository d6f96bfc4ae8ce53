// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory fake executor for orchestration tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::ExecutionError;
use crate::pipeline::Task;
use crate::store::Pipe;
use crate::traits::GraphExecutor;
use serde_json::json;

/// One `execute` call as seen by [`RecordingExecutor`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub task_ids: Vec<String>,
    pub received: Pipe,
}

/// Executor that records every call and fakes task outputs.
///
/// Instead of invoking callables it writes the task id as the value of each
/// declared output, so tests can follow which store each call received.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<RecordedCall>>,
    fail: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An executor whose every call fails
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphExecutor for RecordingExecutor {
    async fn execute(&self, tasks: &[Arc<Task>], mut pipe: Pipe) -> Result<Pipe, ExecutionError> {
        self.calls.lock().unwrap().push(RecordedCall {
            task_ids: tasks.iter().map(|t| t.id().to_string()).collect(),
            received: pipe.clone(),
        });

        if self.fail {
            return Err(ExecutionError::Internal {
                message: "simulated executor failure".into(),
            });
        }

        for task in tasks {
            for (namespace, key) in task.outputs().iter() {
                pipe.insert(namespace, key, json!(task.id()));
            }
        }
        Ok(pipe)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
