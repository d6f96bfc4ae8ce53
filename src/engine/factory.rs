// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{PipelineConfig, Strategy};
use crate::engine::level_by_level::LevelByLevelExecutor;
use crate::engine::sequential::SequentialExecutor;
use crate::traits::GraphExecutor;

/// Factory for creating graph executors from configuration
pub struct ExecutorFactory;

impl ExecutorFactory {
    /// Create a graph executor based on the configuration strategy
    pub fn from_config(cfg: &PipelineConfig) -> Arc<dyn GraphExecutor> {
        match cfg.strategy {
            Strategy::Sequential => Arc::new(SequentialExecutor::new()),
            Strategy::Level => match cfg.executor_options.max_concurrency {
                Some(max_concurrency) => Arc::new(LevelByLevelExecutor::new(max_concurrency)),
                None => Arc::new(LevelByLevelExecutor::with_default_concurrency()),
            },
        }
    }
}
