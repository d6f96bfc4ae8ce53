// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod pipeline;
mod resolve;
mod task;

pub use config::ConfigError;
pub use execution::ExecutionError;
pub use pipeline::{PipelineError, UnknownTaskError};
pub use resolve::ResolveError;
pub use task::TaskError;
