use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::ExecutionError;
use crate::pipeline::Task;
use crate::store::Pipe;

#[async_trait]
pub trait GraphExecutor: Send + Sync {
    /// Execute an ordered task list against a pipe.
    ///
    /// - `tasks`: tasks in dependency order, each bound to its parameters
    /// - `pipe`: the store to read inputs from
    ///
    /// Returns the pipe with every task's declared outputs merged in. Values
    /// already present and not overwritten by a task are preserved. An empty
    /// task list returns the pipe unchanged.
    async fn execute(&self, tasks: &[Arc<Task>], pipe: Pipe) -> Result<Pipe, ExecutionError>;

    /// Short strategy name used in diagnostics
    fn name(&self) -> &'static str;
}
