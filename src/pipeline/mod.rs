// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Task model and two-phase pipeline orchestration.
//!
//! A [`Pipeline`] holds tasks in resolved order and splits them once, at
//! construction, into an eager prefix (computed once over the whole input
//! collection) and a lazy remainder. [`Pipeline::run`] only runs the eager
//! partition when the pipe does not already look like it holds its results.

mod check;
mod orchestration;
mod split;
mod task;


pub use check::{check_eager_outputs, EagerStatus};
pub use orchestration::Pipeline;
pub use split::split_eager;
pub use task::{Task, TaskSpec};
