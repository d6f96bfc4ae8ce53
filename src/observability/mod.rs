// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for diagnostic and
//! operational logging. Message types follow a struct-based pattern with a
//! `Display` implementation so that:
//!
//! * Log text lives in one place instead of being scattered as format strings
//! * Each message carries its fields as structured `tracing` fields
//! * Log levels are decided once, next to the message
//!
//! # Usage
//!
//! ```rust
//! use taskpipe::observability::messages::StructuredLog;
//! use taskpipe::observability::messages::pipeline::EagerComputeTriggered;
//!
//! let msg = EagerComputeTriggered { eager_task_count: 2 };
//!
//! msg.log();
//! ```

pub mod messages;
