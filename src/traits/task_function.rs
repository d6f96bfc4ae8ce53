use crate::errors::TaskError;
use crate::pipeline::TaskSpec;
use crate::store::Pipe;

/// A registered callable implementing one kind of pipeline step.
///
/// Receives the current pipe plus the task's bound spec (declared keys and
/// parameters) and returns only the values it produced. Merging them into
/// the store is the executor's job.
pub trait TaskFunction: Send + Sync {
    fn call(&self, pipe: &Pipe, spec: &TaskSpec<'_>) -> Result<Pipe, TaskError>;
}

impl<F> TaskFunction for F
where
    F: Fn(&Pipe, &TaskSpec<'_>) -> Result<Pipe, TaskError> + Send + Sync,
{
    fn call(&self, pipe: &Pipe, spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
        self(pipe, spec)
    }
}
