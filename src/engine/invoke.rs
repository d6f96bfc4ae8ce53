// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ExecutionError;
use crate::observability::messages::executor::TaskStarted;
use crate::observability::messages::StructuredLog;
use crate::pipeline::Task;
use crate::store::Pipe;

/// Run one task against a pipe, enforcing its declared contract.
///
/// Every required key must be present before the call, and every declared
/// output must be in what the callable returns. The returned pipe holds only
/// the task's own outputs; the caller merges them.
pub(crate) fn invoke_checked(task: &Task, pipe: &Pipe) -> Result<Pipe, ExecutionError> {
    if let Some((namespace, key)) = task.requires().iter().find(|(ns, key)| !pipe.contains(*ns, key)) {
        return Err(ExecutionError::MissingInput {
            task_id: task.id().to_string(),
            namespace,
            key: key.to_string(),
        });
    }

    let started = TaskStarted {
        task_id: task.id(),
        function: task.name(),
        is_grouped: task.is_grouped(),
    };
    started.log();
    let _entered = started.span("invoke").entered();

    let produced = task.invoke(pipe).map_err(|source| ExecutionError::TaskFailed {
        task_id: task.id().to_string(),
        function: task.name().to_string(),
        source,
    })?;

    if let Some((namespace, key)) = task.outputs().iter().find(|(ns, key)| !produced.contains(*ns, key)) {
        return Err(ExecutionError::MissingOutput {
            task_id: task.id().to_string(),
            namespace,
            key: key.to_string(),
        });
    }

    Ok(produced)
}
