// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::config::{DependencyResolver, PipelineConfig, TaskRegistry};
use crate::engine::ExecutorFactory;
use crate::errors::{ExecutionError, PipelineError};
use crate::observability::messages::pipeline::{EagerComputeTriggered, PipelineBuilt};
use crate::observability::messages::StructuredLog;
use crate::pipeline::{check_eager_outputs, split_eager, Task};
use crate::store::Pipe;
use crate::traits::{GraphExecutor, Resolver};

/// An ordered task list split into eager and lazy partitions.
///
/// Built once, then never mutated: `run` and `run_eager` only thread the
/// caller's pipe through the graph executor. Independent pipes can be run
/// through the same pipeline concurrently.
///
/// # Examples
///
/// ```
/// use taskpipe::config::{PipelineConfig, TaskRegistry};
/// use taskpipe::pipeline::Pipeline;
/// use taskpipe::store::Pipe;
///
/// let pipe = Pipe::new();
/// let registry = TaskRegistry::builtin();
/// let pipeline = Pipeline::from_config(PipelineConfig::default(), &pipe, true, &registry).unwrap();
/// assert!(pipeline.eager_tasks().is_empty());
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let result = rt.block_on(pipeline.run(pipe.clone(), true)).unwrap();
/// assert_eq!(result, pipe);
/// ```
pub struct Pipeline {
    tasks: Vec<Arc<Task>>,
    config: PipelineConfig,
    eager_tasks: Vec<Arc<Task>>,
    lazy_tasks: Vec<Arc<Task>>,
    executor: Arc<dyn GraphExecutor>,
}

impl Pipeline {
    /// Wrap an already ordered task list, using the executor the config selects
    pub fn new(tasks: Vec<Task>, config: PipelineConfig) -> Self {
        let executor = ExecutorFactory::from_config(&config);
        let tasks: Vec<Arc<Task>> = tasks.into_iter().map(Arc::new).collect();
        let (eager_tasks, lazy_tasks) = split_eager(&tasks);

        PipelineBuilt {
            task_count: tasks.len(),
            eager_count: eager_tasks.len(),
            lazy_count: lazy_tasks.len(),
        }
        .log();

        Self {
            tasks,
            config,
            eager_tasks,
            lazy_tasks,
            executor,
        }
    }

    /// Build a pipeline from a configuration and the data it will run on.
    ///
    /// * `config` - Task definitions and executor settings
    /// * `pipe` - Data already available; satisfies requirements no task produces
    /// * `overwrite` - Schedule tasks even when all their outputs already exist
    /// * `registry` - Callables the configured task identifiers resolve against
    pub fn from_config(
        config: PipelineConfig,
        pipe: &Pipe,
        overwrite: bool,
        registry: &TaskRegistry,
    ) -> Result<Self, PipelineError> {
        Self::from_config_with(config, pipe, overwrite, registry, &DependencyResolver::new())
    }

    /// Same as [`from_config`](Self::from_config) with a caller-supplied resolver
    pub fn from_config_with(
        config: PipelineConfig,
        pipe: &Pipe,
        overwrite: bool,
        registry: &TaskRegistry,
        resolver: &dyn Resolver,
    ) -> Result<Self, PipelineError> {
        let order = resolver.resolve(&config, pipe, overwrite)?;

        let tasks = order
            .iter()
            .map(|task_id| {
                let task_config = config
                    .task(task_id)
                    .ok_or_else(|| PipelineError::UnconfiguredTask {
                        task_id: task_id.clone(),
                    })?;
                Ok(Task::from_config(task_config, registry)?)
            })
            .collect::<Result<Vec<_>, PipelineError>>()?;

        Ok(Self::new(tasks, config))
    }

    /// Replace the graph executor, e.g. with an in-memory fake
    pub fn with_executor(mut self, executor: Arc<dyn GraphExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn tasks(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn eager_tasks(&self) -> &[Arc<Task>] {
        &self.eager_tasks
    }

    pub fn lazy_tasks(&self) -> &[Arc<Task>] {
        &self.lazy_tasks
    }

    pub fn executor(&self) -> &dyn GraphExecutor {
        self.executor.as_ref()
    }

    /// Run the eager partition unconditionally and return the merged pipe
    pub async fn run_eager(&self, pipe: Pipe) -> Result<Pipe, ExecutionError> {
        self.executor.execute(&self.eager_tasks, pipe).await
    }

    /// Run the pipeline.
    ///
    /// With `check_eager`, the eager partition runs first only when the pipe
    /// does not already look like it holds eager results (see
    /// [`check_eager_outputs`]), and the lazy partition then receives its
    /// output. Without it, eager results are assumed present and only the
    /// lazy partition runs. Either way the eager partition runs at most once.
    pub async fn run(&self, pipe: Pipe, check_eager: bool) -> Result<Pipe, ExecutionError> {
        let mut pipe = pipe;

        if check_eager && !check_eager_outputs(&self.eager_tasks, &pipe).is_satisfied() {
            EagerComputeTriggered {
                eager_task_count: self.eager_tasks.len(),
            }
            .log();
            pipe = self.run_eager(pipe).await?;
        }

        self.executor.execute(&self.lazy_tasks, pipe).await
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = |tasks: &[Arc<Task>]| tasks.iter().map(|t| t.id().to_string()).collect::<Vec<_>>();
        f.debug_struct("Pipeline")
            .field("eager_tasks", &ids(&self.eager_tasks))
            .field("lazy_tasks", &ids(&self.lazy_tasks))
            .field("executor", &self.executor.name())
            .finish()
    }
}
