// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // built-in task callables
pub mod config;     // config + resolver
pub mod engine;     // graph executors
pub mod errors;     // error handling
pub mod observability;
pub mod pipeline;   // task model, eager/lazy split, orchestration
pub mod store;      // the "pipe" data store
pub mod traits;     // unified abstractions
