// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::{KeySpec, RegistryEntry, TaskConfig, TaskRegistry};
use crate::errors::{TaskError, UnknownTaskError};
use crate::store::{Namespace, Pipe};
use crate::traits::TaskFunction;

/// Everything a callable is bound with when it runs.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec<'a> {
    pub task_id: &'a str,
    pub requires: &'a KeySpec,
    pub outputs: &'a KeySpec,
    pub parameters: &'a HashMap<String, Value>,
}

impl<'a> TaskSpec<'a> {
    /// Numeric parameter, or `default` when it is not configured
    pub fn parameter_f64(&self, name: &str, default: f64) -> Result<f64, TaskError> {
        match self.parameters.get(name) {
            None => Ok(default),
            Some(value) => value.as_f64().ok_or_else(|| TaskError::InvalidParameter {
                name: name.to_string(),
                reason: format!("expected a number, got {}", value),
            }),
        }
    }

    /// The `index`-th required key of a namespace, for callables that need
    /// at least `arity` of them
    pub fn required_key(&self, namespace: Namespace, index: usize, arity: usize) -> Result<&'a str, TaskError> {
        fixed_arity_key(self.requires, namespace, index, arity)
    }

    /// The `index`-th output key of a namespace, for callables that produce
    /// at least `arity` of them
    pub fn output_key(&self, namespace: Namespace, index: usize, arity: usize) -> Result<&'a str, TaskError> {
        fixed_arity_key(self.outputs, namespace, index, arity)
    }
}

fn fixed_arity_key(spec: &KeySpec, namespace: Namespace, index: usize, arity: usize) -> Result<&str, TaskError> {
    let keys = spec.keys(namespace);
    match keys.get(index) {
        Some(key) if keys.len() >= arity => Ok(key.as_str()),
        _ => Err(TaskError::SpecMismatch {
            namespace,
            expected: arity,
            declared: keys.len(),
        }),
    }
}

/// One configured pipeline step: a registered callable plus its declared
/// requirements, outputs and parameters.
///
/// Tasks are immutable once built and perform no I/O on their own; a graph
/// executor decides when to [`invoke`](Task::invoke) them.
#[derive(Clone)]
pub struct Task {
    id: String,
    name: String,
    requires: KeySpec,
    outputs: KeySpec,
    parameters: HashMap<String, Value>,
    function: Arc<dyn TaskFunction>,
    is_eager: bool,
    is_grouped: bool,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entry: &RegistryEntry,
        requires: KeySpec,
        outputs: KeySpec,
        parameters: HashMap<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            requires,
            outputs,
            parameters,
            function: Arc::clone(&entry.function),
            is_eager: entry.flags.is_eager,
            is_grouped: entry.flags.is_grouped,
        }
    }

    /// Build a task from its configuration, resolving the callable in the registry.
    ///
    /// Registry lookup is the only validation done here. Requirements and
    /// outputs are checked by the resolver.
    pub fn from_config(config: &TaskConfig, registry: &TaskRegistry) -> Result<Self, UnknownTaskError> {
        let entry = registry.get(&config.task)?;
        Ok(Self::new(
            config.id.clone(),
            config.task.clone(),
            entry,
            config.require.clone(),
            config.output.clone(),
            config.config.clone(),
        ))
    }

    /// Configured step name, unique within a pipeline
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier of the registered callable
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requires(&self) -> &KeySpec {
        &self.requires
    }

    pub fn outputs(&self) -> &KeySpec {
        &self.outputs
    }

    pub fn parameters(&self) -> &HashMap<String, Value> {
        &self.parameters
    }

    pub fn is_eager(&self) -> bool {
        self.is_eager
    }

    pub fn is_grouped(&self) -> bool {
        self.is_grouped
    }

    pub fn require_data(&self) -> &[String] {
        self.requires.keys(Namespace::Data)
    }

    pub fn require_record(&self) -> &[String] {
        self.requires.keys(Namespace::Record)
    }

    pub fn output_data(&self) -> &[String] {
        self.outputs.keys(Namespace::Data)
    }

    pub fn output_record(&self) -> &[String] {
        self.outputs.keys(Namespace::Record)
    }

    pub fn spec(&self) -> TaskSpec<'_> {
        TaskSpec {
            task_id: &self.id,
            requires: &self.requires,
            outputs: &self.outputs,
            parameters: &self.parameters,
        }
    }

    /// Call the bound callable, returning only the values it produced
    pub fn invoke(&self, pipe: &Pipe) -> Result<Pipe, TaskError> {
        self.function.call(pipe, &self.spec())
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("requires", &self.requires)
            .field("outputs", &self.outputs)
            .field("is_eager", &self.is_eager)
            .field("is_grouped", &self.is_grouped)
            .finish_non_exhaustive()
    }
}
