// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::KeySpec;
use crate::errors::ConfigError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main configuration structure for a task pipeline.
///
/// Lists every task the pipeline may run, along with the executor strategy
/// used to run them. It is typically loaded from a YAML or TOML file. The
/// order of `tasks` only matters as a tie-breaker: the resolver orders tasks
/// by their declared requirements and outputs.
///
/// # Fields
/// * `strategy` - The graph executor to use (optional, defaults to sequential)
/// * `executor_options` - Executor-specific configuration options (optional)
/// * `tasks` - Task definitions, one per pipeline step
///
/// # Example
/// ```yaml
/// strategy: level
/// executor_options:
///   max_concurrency: 4
/// tasks:
///   - id: ndvi
///     task: norm_diff
///     require: { data: [nir, red] }
///     output: { data: [ndvi] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub executor_options: ExecutorOptions,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

impl PipelineConfig {
    /// Look up a task definition by its id
    pub fn task(&self, id: &str) -> Option<&TaskConfig> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// Graph executor used to run task lists.
///
/// # Variants
/// * `Sequential` - Runs tasks one after another in resolved order
/// * `Level` - Runs independent tasks of the same dependency level concurrently
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Sequential,
    Level,
}

/// Executor-specific configuration options.
///
/// # Fields
/// * `max_concurrency` - Maximum number of tasks run at once by the level executor (optional)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutorOptions {
    pub max_concurrency: Option<usize>,
}

/// Configuration for a single task in the pipeline.
///
/// # Fields
/// * `id` - Unique name of this step within the pipeline
/// * `task` - Identifier of the registered callable that implements it
/// * `require` - Keys the task reads
/// * `output` - Keys the task produces
/// * `config` - Task-specific parameters passed to the callable
///
/// # Example
/// ```yaml
/// id: "evi_scaled"
/// task: scale
/// require: { data: [evi] }
/// output: { data: [evi_scaled] }
/// config: { scale: 0.0001 }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub id: String,
    pub task: String,
    #[serde(default)]
    pub require: KeySpec,
    #[serde(default)]
    pub output: KeySpec,
    #[serde(default)]
    pub config: HashMap<String, Value>,
}

/// Load a config from a YAML or TOML file, chosen by extension
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&read_config(path)?)?),
        Some("toml") => Ok(toml::from_str(&read_config(path)?)?),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml;
    use std::io::Write;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
tasks:
  - id: ndvi
    task: norm_diff
    require: { data: [nir, red] }
    output: { data: [ndvi] }
  - id: model
    task: mean_model
    require: { data: [ndvi] }
    output: { record: [model] }
"#;

        let cfg: PipelineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.strategy, Strategy::Sequential);
        assert_eq!(cfg.tasks.len(), 2);
        assert_eq!(cfg.tasks[0].require.data, vec!["nir", "red"]);
        assert_eq!(cfg.tasks[1].output.record, vec!["model"]);
        assert!(cfg.tasks[1].output.data.is_empty());
        assert!(cfg.tasks[0].config.is_empty());
    }

    #[test]
    fn parse_task_parameters() {
        let yaml = r#"
strategy: level
executor_options:
  max_concurrency: 2
tasks:
  - id: scaled
    task: scale
    require: { data: [x] }
    output: { data: [y] }
    config:
      scale: 0.5
      offset: 10
"#;

        let cfg: PipelineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.strategy, Strategy::Level);
        assert_eq!(cfg.executor_options.max_concurrency, Some(2));
        let task = cfg.task("scaled").unwrap();
        assert_eq!(task.config.len(), 2);
        assert_eq!(task.config["scale"], serde_json::json!(0.5));
    }

    #[test]
    fn load_yaml_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "tasks:\n  - id: a\n    task: scale\n    require: {{ data: [x] }}\n    output: {{ data: [y] }}"
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.tasks[0].id, "a");
    }

    #[test]
    fn load_toml_from_file() {
        let toml = r#"
strategy = "level"

[[tasks]]
id = "ndvi"
task = "norm_diff"
require = { data = ["nir", "red"] }
output = { data = ["ndvi"] }
"#;
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.strategy, Strategy::Level);
        assert_eq!(cfg.tasks[0].output.data, vec!["ndvi"]);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = load_config("/nonexistent/pipeline.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
