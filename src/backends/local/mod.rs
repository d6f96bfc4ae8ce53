// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod mean_model;
mod norm_diff;
mod scale;
mod series;
mod threshold_segments;

pub use mean_model::mean_model;
pub use norm_diff::norm_diff;
pub use scale::scale;
pub use threshold_segments::threshold_segments;

use crate::config::{TaskFlags, TaskRegistry};

/// Register every built-in local callable under its identifier
pub fn register_builtin(registry: &mut TaskRegistry) {
    registry.register("norm_diff", norm_diff, TaskFlags::LAZY);
    registry.register("scale", scale, TaskFlags::LAZY);
    registry.register("mean_model", mean_model, TaskFlags::EAGER);
    registry.register("threshold_segments", threshold_segments, TaskFlags::GROUPED);
}
