// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use taskpipe::config::{load_config, TaskRegistry};
use taskpipe::pipeline::Pipeline;
use taskpipe::store::Pipe;

const USAGE: &str = "Usage: taskpipe <config.(yaml|toml)> <pipe.json> [--no-overwrite] [--skip-eager-check] [--eager] [--eager-only]";

/// Which partitions a run executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunMode {
    /// Eager partition only when the pipe lacks its results, then lazy
    Checked,
    /// Lazy partition only
    LazyOnly,
    /// Eager partition unconditionally, then lazy
    EagerFirst,
    /// Eager partition only
    EagerOnly,
}

#[derive(Debug)]
struct Args {
    config_path: String,
    pipe_path: String,
    overwrite: bool,
    mode: RunMode,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut positional = Vec::new();
    let mut overwrite = true;
    let mut mode = RunMode::Checked;

    for arg in args {
        match arg.as_str() {
            "--no-overwrite" => overwrite = false,
            "--skip-eager-check" => mode = RunMode::LazyOnly,
            "--eager" => mode = RunMode::EagerFirst,
            "--eager-only" => mode = RunMode::EagerOnly,
            flag if flag.starts_with("--") => bail!("Unknown flag '{}'\n{}", flag, USAGE),
            path => positional.push(path.to_string()),
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([config_path, pipe_path]) => Ok(Args {
            config_path,
            pipe_path,
            overwrite,
            mode,
        }),
        Err(_) => bail!(USAGE),
    }
}

fn read_pipe(path: &str) -> Result<Pipe> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read pipe file '{}'", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse pipe file '{}'", path))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let config = load_config(&args.config_path)?;
    let pipe = read_pipe(&args.pipe_path)?;
    let registry = TaskRegistry::builtin();

    let pipeline = Pipeline::from_config(config, &pipe, args.overwrite, &registry)
        .with_context(|| format!("Failed to build pipeline from '{}'", args.config_path))?;

    tracing::info!(
        executor = pipeline.executor().name(),
        eager = pipeline.eager_tasks().len(),
        lazy = pipeline.lazy_tasks().len(),
        mode = ?args.mode,
        "Running pipeline"
    );

    let start = Instant::now();
    let result = match args.mode {
        RunMode::Checked => pipeline.run(pipe, true).await?,
        RunMode::LazyOnly => pipeline.run(pipe, false).await?,
        RunMode::EagerFirst => {
            let pipe = pipeline.run_eager(pipe).await?;
            pipeline.run(pipe, false).await?
        }
        RunMode::EagerOnly => pipeline.run_eager(pipe).await?,
    };
    tracing::info!(duration = ?start.elapsed(), "Pipeline finished");

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
