// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Task callable implementations.
//!
//! ## Local Backend
//! In-process Rust callables operating on numeric series stored in the pipe:
//! - **Per-observation transforms**: normalized difference, linear scaling
//! - **Whole-collection models**: summary statistics computed eagerly
//! - **Segment grouping**: contiguous runs above a threshold
//!
//! Every callable is registered by identifier in
//! [`TaskRegistry::builtin`](crate::config::TaskRegistry::builtin).

pub mod local;
