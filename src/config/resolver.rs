//! Dependency resolution: configuration + pipe contents to an ordered task list.
//!
//! Resolution runs as a short pipeline of checks, each of which must pass
//! before the next one is meaningful:
//!
//! 1. **Uniqueness**: task ids are unique
//! 2. **Single producer**: no two tasks declare the same output
//! 3. **Skip satisfied** (only when `overwrite` is false): tasks whose
//!    declared outputs are all present in the pipe are dropped
//! 4. **Reference validation**: every requirement is produced by a scheduled
//!    task or already present in the pipe
//! 5. **Ordering**: Kahn's algorithm over producer → consumer edges, with
//!    ties broken by configuration order so the result is deterministic
//!
//! A requirement that is both present in the pipe and produced by a
//! scheduled task creates an edge: the task recomputes it, and its consumers
//! wait for the new value.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::config::{PipelineConfig, TaskConfig};
use crate::errors::ResolveError;
use crate::observability::messages::resolver::{OrderResolved, TaskSkipped};
use crate::observability::messages::StructuredLog;
use crate::store::{Namespace, Pipe};
use crate::traits::Resolver;

/// Default resolver ordering tasks by their declared requirements and outputs
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyResolver;

impl DependencyResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for DependencyResolver {
    fn resolve(
        &self,
        config: &PipelineConfig,
        pipe: &Pipe,
        overwrite: bool,
    ) -> Result<Vec<String>, ResolveError> {
        validate_unique_task_ids(&config.tasks)?;
        validate_single_producer(&config.tasks)?;

        let scheduled: Vec<&TaskConfig> = config
            .tasks
            .iter()
            .filter(|task| overwrite || !outputs_satisfied(task, pipe))
            .collect();

        for task in config.tasks.iter().filter(|t| !scheduled.iter().any(|s| s.id == t.id)) {
            TaskSkipped { task_id: &task.id }.log();
        }

        let order = topological_order(&scheduled, pipe)?;

        OrderResolved {
            configured: config.tasks.len(),
            scheduled: order.len(),
            overwrite,
        }
        .log();

        Ok(order)
    }
}

/// True if the task declares outputs and all of them already exist
fn outputs_satisfied(task: &TaskConfig, pipe: &Pipe) -> bool {
    !task.output.is_empty() && task.output.iter().all(|(ns, key)| pipe.contains(ns, key))
}

fn validate_unique_task_ids(tasks: &[TaskConfig]) -> Result<(), ResolveError> {
    let mut seen = HashSet::new();
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(ResolveError::DuplicateTaskId {
                task_id: task.id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_single_producer(tasks: &[TaskConfig]) -> Result<(), ResolveError> {
    let mut producers: HashMap<(Namespace, &str), &str> = HashMap::new();
    for task in tasks {
        for (ns, key) in task.output.iter() {
            if let Some(first) = producers.insert((ns, key), task.id.as_str()) {
                return Err(ResolveError::DuplicateOutput {
                    namespace: ns,
                    key: key.to_string(),
                    producers: vec![first.to_string(), task.id.clone()],
                });
            }
        }
    }
    Ok(())
}

/// Order the scheduled tasks with Kahn's algorithm.
///
/// Edges run from a producer to every task requiring one of its outputs.
/// Among ready tasks, the one declared first in the configuration always
/// goes next, including tasks released after others became ready.
fn topological_order(tasks: &[&TaskConfig], pipe: &Pipe) -> Result<Vec<String>, ResolveError> {
    let producer_of: HashMap<(Namespace, &str), usize> = tasks
        .iter()
        .enumerate()
        .flat_map(|(idx, task)| task.output.iter().map(move |out| (out, idx)))
        .collect();

    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
    let mut in_degree = vec![0usize; tasks.len()];

    for (idx, task) in tasks.iter().enumerate() {
        let mut upstream = HashSet::new();
        for (ns, key) in task.require.iter() {
            match producer_of.get(&(ns, key)) {
                Some(&producer) => {
                    upstream.insert(producer);
                }
                None if pipe.contains(ns, key) => {}
                None => {
                    return Err(ResolveError::UnresolvedDependency {
                        task_id: task.id.clone(),
                        namespace: ns,
                        key: key.to_string(),
                    })
                }
            }
        }
        for producer in upstream {
            dependents[producer].push(idx);
            in_degree[idx] += 1;
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = (0..tasks.len())
        .filter(|&i| in_degree[i] == 0)
        .map(Reverse)
        .collect();
    let mut order = Vec::with_capacity(tasks.len());

    while let Some(Reverse(idx)) = ready.pop() {
        order.push(tasks[idx].id.clone());

        for &dependent in &dependents[idx] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                ready.push(Reverse(dependent));
            }
        }
    }

    if order.len() != tasks.len() {
        let stuck = (0..tasks.len())
            .filter(|&i| in_degree[i] > 0)
            .map(|i| tasks[i].id.clone())
            .collect();
        return Err(ResolveError::CyclicDependency { tasks: stuck });
    }

    Ok(order)
}
