// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::observability::messages::pipeline::EagerOutputMissing;
use crate::observability::messages::StructuredLog;
use crate::pipeline::Task;
use crate::store::{Namespace, Pipe};

/// Outcome of checking a pipe for eager results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EagerStatus {
    /// Eager results can be assumed present; the eager partition may be skipped
    Satisfied,
    /// The first eager task found with partial results
    Unsatisfied { task_id: String, missing: Vec<String> },
}

impl EagerStatus {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, EagerStatus::Satisfied)
    }
}

/// Check whether a pipe looks like it already holds the eager tasks' results.
///
/// A task fails the check only when all of its record outputs are present
/// while at least one data output is missing. Missing record outputs never
/// fail it, so a pipe holding no eager outputs at all is satisfied. The
/// first failing task is logged with every missing key and ends the check.
///
/// # Examples
///
/// ```
/// use taskpipe::pipeline::{check_eager_outputs, EagerStatus};
/// use taskpipe::store::Pipe;
///
/// assert_eq!(check_eager_outputs(&[], &Pipe::new()), EagerStatus::Satisfied);
/// ```
pub fn check_eager_outputs(tasks: &[Arc<Task>], pipe: &Pipe) -> EagerStatus {
    for task in tasks {
        let has_data = task.outputs().presence(Namespace::Data, pipe);
        let has_record = task.outputs().presence(Namespace::Record, pipe);

        if !has_data.iter().all(|&has| has) && has_record.iter().all(|&has| has) {
            let missing: Vec<String> = task
                .output_data()
                .iter()
                .zip(&has_data)
                .chain(task.output_record().iter().zip(&has_record))
                .filter(|(_, &has)| !has)
                .map(|(key, _)| key.clone())
                .collect();

            EagerOutputMissing {
                task_id: task.id(),
                function: task.name(),
                missing: &missing,
            }
            .log();

            return EagerStatus::Unsatisfied {
                task_id: task.id().to_string(),
                missing,
            };
        }
    }

    EagerStatus::Satisfied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KeySpec, TaskFlags, TaskRegistry};
    use crate::errors::TaskError;
    use crate::pipeline::TaskSpec;
    use serde_json::json;
    use std::collections::HashMap;

    fn noop(_pipe: &Pipe, _spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
        Ok(Pipe::new())
    }

    fn eager_task(id: &str, data: &[&str], record: &[&str]) -> Arc<Task> {
        let mut registry = TaskRegistry::new();
        registry.register("noop", noop, TaskFlags::EAGER);
        let outputs = KeySpec::new(
            data.iter().map(|s| s.to_string()).collect(),
            record.iter().map(|s| s.to_string()).collect(),
        );
        Arc::new(Task::new(
            id,
            "noop",
            registry.get("noop").unwrap(),
            KeySpec::default(),
            outputs,
            HashMap::new(),
        ))
    }

    fn pipe(data: &[&str], record: &[&str]) -> Pipe {
        let mut pipe = Pipe::new();
        for key in data {
            pipe.insert(Namespace::Data, *key, json!(1));
        }
        for key in record {
            pipe.insert(Namespace::Record, *key, json!(1));
        }
        pipe
    }

    #[test]
    fn record_present_data_missing_is_unsatisfied() {
        let tasks = vec![eager_task("fit", &["ndvi"], &["model"])];

        let status = check_eager_outputs(&tasks, &pipe(&[], &["model"]));
        assert_eq!(
            status,
            EagerStatus::Unsatisfied {
                task_id: "fit".into(),
                missing: vec!["ndvi".into()],
            }
        );
    }

    #[test]
    fn nothing_present_is_satisfied() {
        let tasks = vec![eager_task("fit", &["ndvi"], &["model"])];
        assert!(check_eager_outputs(&tasks, &pipe(&[], &[])).is_satisfied());
    }

    #[test]
    fn everything_present_is_satisfied() {
        let tasks = vec![eager_task("fit", &["ndvi"], &["model"])];
        assert!(check_eager_outputs(&tasks, &pipe(&["ndvi"], &["model"])).is_satisfied());
    }

    #[test]
    fn data_present_record_missing_is_satisfied() {
        let tasks = vec![eager_task("fit", &["ndvi"], &["model"])];
        assert!(check_eager_outputs(&tasks, &pipe(&["ndvi"], &[])).is_satisfied());
    }

    #[test]
    fn no_record_outputs_and_data_missing_is_unsatisfied() {
        let tasks = vec![eager_task("fit", &["a", "b"], &[])];

        let status = check_eager_outputs(&tasks, &pipe(&["b"], &[]));
        assert_eq!(
            status,
            EagerStatus::Unsatisfied {
                task_id: "fit".into(),
                missing: vec!["a".into()],
            }
        );
    }

    #[test]
    fn task_without_outputs_is_satisfied() {
        let tasks = vec![eager_task("sink", &[], &[])];
        assert!(check_eager_outputs(&tasks, &Pipe::new()).is_satisfied());
    }

    #[test]
    fn first_failing_task_short_circuits() {
        let tasks = vec![
            eager_task("ok", &["x"], &["mx"]),
            eager_task("first_bad", &["y"], &["my"]),
            eager_task("second_bad", &["z"], &["mz"]),
        ];

        let status = check_eager_outputs(&tasks, &pipe(&["x"], &["mx", "my", "mz"]));
        assert_eq!(
            status,
            EagerStatus::Unsatisfied {
                task_id: "first_bad".into(),
                missing: vec!["y".into()],
            }
        );
    }
}
