// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::store::Namespace;
use thiserror::Error;

/// Failures reported by a task callable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    #[error("missing value '{namespace}.{key}'")]
    MissingValue { namespace: Namespace, key: String },

    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The callable needs more keys than the task declared
    #[error("expected {expected} '{namespace}' keys, task declares {declared}")]
    SpecMismatch {
        namespace: Namespace,
        expected: usize,
        declared: usize,
    },
}
