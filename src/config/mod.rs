// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod key_spec;
mod loader;
mod registry;
mod resolver;

pub mod consts;

pub use key_spec::KeySpec;
pub use loader::{load_config, ExecutorOptions, PipelineConfig, Strategy, TaskConfig};
pub use registry::{RegistryEntry, TaskFlags, TaskRegistry};
pub use resolver::DependencyResolver;
