// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The data store threaded through pipeline execution.
//!
//! A [`Pipe`] tracks named values in two namespaces, `data` and `record`.
//! The pipeline core only reads key presence from it; executors merge task
//! outputs into it and hand back the updated store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// One of the two classes of values tracked by a [`Pipe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Data,
    Record,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::Data, Namespace::Record];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Data => "data",
            Namespace::Record => "record",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externally owned store of available values, keyed per namespace.
///
/// Merging is additive: entries from the incoming pipe are inserted, and on
/// a key collision the incoming value replaces the existing one. Nothing is
/// ever removed.
///
/// # Example
/// ```
/// use taskpipe::store::{Namespace, Pipe};
/// use serde_json::json;
///
/// let mut pipe = Pipe::new();
/// pipe.insert(Namespace::Data, "red", json!([0.1, 0.2]));
///
/// assert!(pipe.contains(Namespace::Data, "red"));
/// assert!(!pipe.contains(Namespace::Record, "red"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    #[serde(default)]
    pub data: HashMap<String, Value>,
    #[serde(default)]
    pub record: HashMap<String, Value>,
}

impl Pipe {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self, namespace: Namespace) -> &HashMap<String, Value> {
        match namespace {
            Namespace::Data => &self.data,
            Namespace::Record => &self.record,
        }
    }

    fn namespace_mut(&mut self, namespace: Namespace) -> &mut HashMap<String, Value> {
        match namespace {
            Namespace::Data => &mut self.data,
            Namespace::Record => &mut self.record,
        }
    }

    pub fn contains(&self, namespace: Namespace, key: &str) -> bool {
        self.namespace(namespace).contains_key(key)
    }

    pub fn get(&self, namespace: Namespace, key: &str) -> Option<&Value> {
        self.namespace(namespace).get(key)
    }

    pub fn insert(&mut self, namespace: Namespace, key: impl Into<String>, value: Value) {
        self.namespace_mut(namespace).insert(key.into(), value);
    }

    /// Keys present in a namespace, in no particular order.
    pub fn keys(&self, namespace: Namespace) -> impl Iterator<Item = &String> {
        self.namespace(namespace).keys()
    }

    /// Merge another pipe into this one.
    pub fn merge(&mut self, other: Pipe) {
        self.data.extend(other.data);
        self.record.extend(other.record);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.record.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len() + self.record.len()
    }
}
