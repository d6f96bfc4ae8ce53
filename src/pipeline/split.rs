// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::observability::messages::pipeline::EagerTaskDemoted;
use crate::observability::messages::StructuredLog;
use crate::pipeline::Task;

/// Partition an ordered task list into an eager prefix and a lazy remainder.
///
/// Eagerness is positional: the first non-eager task halts the eager
/// partition for good, and every later task is lazy even when its callable
/// is eager-capable. Each such demoted task is logged at debug level.
/// Relative order is preserved in both halves, and every task lands in
/// exactly one of them.
///
/// # Examples
///
/// ```
/// use taskpipe::pipeline::split_eager;
///
/// let (eager, lazy) = split_eager(&[]);
/// assert!(eager.is_empty() && lazy.is_empty());
/// ```
pub fn split_eager(tasks: &[Arc<Task>]) -> (Vec<Arc<Task>>, Vec<Arc<Task>>) {
    let mut halt_eager = false;
    let mut eager = Vec::new();
    let mut lazy = Vec::new();

    for task in tasks {
        if task.is_eager() && !halt_eager {
            eager.push(Arc::clone(task));
            continue;
        }

        if task.is_eager() {
            EagerTaskDemoted {
                task_id: task.id(),
                function: task.name(),
            }
            .log();
        } else {
            halt_eager = true;
        }
        lazy.push(Arc::clone(task));
    }

    (eager, lazy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KeySpec, TaskFlags, TaskRegistry};
    use crate::errors::TaskError;
    use crate::pipeline::TaskSpec;
    use crate::store::Pipe;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;

    /// Log sink shared between the subscriber and the test
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Split `pattern` with a debug-level subscriber installed, returning the log text
    fn split_logged(pattern: &str) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let input = tasks(pattern);
        tracing::subscriber::with_default(subscriber, || split_eager(&input));

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn noop(_pipe: &Pipe, _spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
        Ok(Pipe::new())
    }

    /// Build tasks from a pattern such as "EEL": E = eager-capable, L = lazy
    fn tasks(pattern: &str) -> Vec<Arc<Task>> {
        let mut registry = TaskRegistry::new();
        registry.register("eager", noop, TaskFlags::EAGER);
        registry.register("lazy", noop, TaskFlags::LAZY);

        pattern
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let name = if c == 'E' { "eager" } else { "lazy" };
                let entry = registry.get(name).unwrap();
                Arc::new(Task::new(
                    format!("t{}", i),
                    name,
                    entry,
                    KeySpec::default(),
                    KeySpec::default(),
                    HashMap::new(),
                ))
            })
            .collect()
    }

    fn ids(tasks: &[Arc<Task>]) -> Vec<&str> {
        tasks.iter().map(|t| t.id()).collect()
    }

    #[test]
    fn empty_list() {
        let (eager, lazy) = split_eager(&[]);
        assert!(eager.is_empty());
        assert!(lazy.is_empty());
    }

    #[test]
    fn all_eager() {
        let (eager, lazy) = split_eager(&tasks("EEE"));
        assert_eq!(ids(&eager), vec!["t0", "t1", "t2"]);
        assert!(lazy.is_empty());
    }

    #[test]
    fn none_eager() {
        let (eager, lazy) = split_eager(&tasks("LLL"));
        assert!(eager.is_empty());
        assert_eq!(ids(&lazy), vec!["t0", "t1", "t2"]);
    }

    #[test]
    fn eager_after_lazy_is_demoted() {
        let (eager, lazy) = split_eager(&tasks("ELE"));
        assert_eq!(ids(&eager), vec!["t0"]);
        assert_eq!(ids(&lazy), vec!["t1", "t2"]);
    }

    #[test]
    fn halt_is_irreversible() {
        let (eager, lazy) = split_eager(&tasks("EELEEL"));
        assert_eq!(ids(&eager), vec!["t0", "t1"]);
        assert_eq!(ids(&lazy), vec!["t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn leading_lazy_halts_everything() {
        let (eager, lazy) = split_eager(&tasks("LEE"));
        assert!(eager.is_empty());
        assert_eq!(ids(&lazy), vec!["t0", "t1", "t2"]);
    }

    #[test]
    fn partitions_preserve_order_and_membership() {
        for pattern in ["", "E", "L", "EL", "LE", "ELLE", "EELEL", "LLEEL", "EEEELE"] {
            let input = tasks(pattern);
            let (eager, lazy) = split_eager(&input);

            let mut joined = ids(&eager);
            joined.extend(ids(&lazy));
            assert_eq!(joined, ids(&input), "pattern {pattern}");

            if let Some(first_lazy) = pattern.find('L') {
                assert_eq!(eager.len(), first_lazy, "pattern {pattern}");
            } else {
                assert_eq!(eager.len(), pattern.len(), "pattern {pattern}");
            }
        }
    }

    #[test]
    fn demoted_tasks_are_logged() {
        let logs = split_logged("ELEE");

        assert_eq!(logs.matches("Not able to compute eager function").count(), 2);
        assert!(logs.contains("task 't2'"));
        assert!(logs.contains("task 't3'"));
        assert!(!logs.contains("task 't0'"));
    }

    #[test]
    fn no_diagnostics_without_eager_tasks() {
        assert!(split_logged("LLL").is_empty());
        assert!(split_logged("EEL").is_empty());
    }
}
