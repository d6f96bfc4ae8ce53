use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::backends::local;
use crate::errors::UnknownTaskError;
use crate::traits::TaskFunction;

/// Static capabilities of a registered callable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFlags {
    /// Output can be computed once over the whole input collection
    pub is_eager: bool,
    /// Operates on segment groupings rather than flat per-record data
    pub is_grouped: bool,
}

impl TaskFlags {
    pub const LAZY: TaskFlags = TaskFlags {
        is_eager: false,
        is_grouped: false,
    };
    pub const EAGER: TaskFlags = TaskFlags {
        is_eager: true,
        is_grouped: false,
    };
    pub const GROUPED: TaskFlags = TaskFlags {
        is_eager: false,
        is_grouped: true,
    };
}

/// A callable plus the flags the pipeline reads off it.
#[derive(Clone)]
pub struct RegistryEntry {
    pub function: Arc<dyn TaskFunction>,
    pub flags: TaskFlags,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Registry mapping task identifiers to their callables.
///
/// The registry is an explicit value built at startup and handed to pipeline
/// construction, so tests can register their own callables. Identifiers are
/// the single source of truth: eager and grouped capabilities are stored on
/// the entry, never inferred from the callable itself.
///
/// # Examples
///
/// ```
/// use taskpipe::config::{TaskFlags, TaskRegistry};
/// use taskpipe::errors::TaskError;
/// use taskpipe::pipeline::TaskSpec;
/// use taskpipe::store::Pipe;
///
/// fn noop(_pipe: &Pipe, _spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
///     Ok(Pipe::new())
/// }
///
/// let mut registry = TaskRegistry::new();
/// registry.register("noop", noop, TaskFlags::EAGER);
///
/// assert!(registry.get("noop").unwrap().flags.is_eager);
/// assert!(registry.get("missing").is_err());
/// ```
#[derive(Clone, Default)]
pub struct TaskRegistry(HashMap<String, RegistryEntry>);

impl TaskRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Registry holding the built-in local tasks
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        local::register_builtin(&mut registry);
        registry
    }

    /// Register a callable under an identifier, replacing any previous entry
    pub fn register<F>(&mut self, identifier: impl Into<String>, function: F, flags: TaskFlags)
    where
        F: TaskFunction + 'static,
    {
        self.0.insert(
            identifier.into(),
            RegistryEntry {
                function: Arc::new(function),
                flags,
            },
        );
    }

    /// Resolve an identifier
    pub fn get(&self, identifier: &str) -> Result<&RegistryEntry, UnknownTaskError> {
        self.0.get(identifier).ok_or_else(|| UnknownTaskError {
            task: identifier.to_string(),
        })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.0.contains_key(identifier)
    }

    /// All registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.0.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl fmt::Debug for TaskRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRegistry")
            .field("task_count", &self.0.len())
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TaskError;
    use crate::pipeline::TaskSpec;
    use crate::store::Pipe;

    fn noop(_pipe: &Pipe, _spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
        Ok(Pipe::new())
    }

    #[test]
    fn builtin_registry_flags() {
        let registry = TaskRegistry::builtin();

        assert_eq!(
            registry.identifiers(),
            vec!["mean_model", "norm_diff", "scale", "threshold_segments"]
        );
        assert!(registry.get("mean_model").unwrap().flags.is_eager);
        assert!(!registry.get("norm_diff").unwrap().flags.is_eager);
        assert!(registry.get("threshold_segments").unwrap().flags.is_grouped);
        assert!(!registry.get("scale").unwrap().flags.is_grouped);
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let registry = TaskRegistry::new();
        let err = registry.get("nope").unwrap_err();
        assert_eq!(err.task, "nope");
        assert_eq!(err.to_string(), "Unknown pipeline task 'nope'");
    }

    #[test]
    fn register_replaces_existing_entry() {
        let mut registry = TaskRegistry::new();
        registry.register("noop", noop, TaskFlags::LAZY);
        registry.register("noop", noop, TaskFlags::EAGER);

        assert!(registry.contains("noop"));
        assert!(registry.get("noop").unwrap().flags.is_eager);
        assert_eq!(registry.identifiers().len(), 1);
    }
}
