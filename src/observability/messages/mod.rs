// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `pipeline` - Eager/lazy split and orchestration decisions
//! * `resolver` - Dependency resolution outcomes
//! * `executor` - Graph executor lifecycle events

pub mod executor;
pub mod pipeline;
pub mod resolver;

use tracing::Span;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event
    fn log(&self);

    /// Build a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
