//! Depth-first traversal of structured values.
//!
//! A structured value is a `serde_json::Value` built with `preserve_order`, so
//! objects keep their insertion order through a transform.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// Fields whose values are copied unrecursed when transforming.
pub const DEFAULT_EXCLUDED_FIELDS: &[&str] = &["id", "parentId", "delFlag"];

#[derive(Debug, Clone)]
pub struct TreeWalker {
    excluded_fields: HashSet<String>,
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_FIELDS.iter().copied())
    }
}

impl TreeWalker {
    pub fn new<I, S>(excluded_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_fields: excluded_fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, field: &str) -> bool {
        self.excluded_fields.contains(field)
    }

    /// Rebuild `value`, replacing every text leaf with `leaf(text)`.
    ///
    /// Excluded fields keep their value as-is, whatever its shape. Non-text
    /// scalars pass through unchanged.
    pub fn transform<F>(&self, value: Value, leaf: &mut F) -> Value
    where
        F: FnMut(&str) -> String,
    {
        match value {
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (field, val) in map {
                    let val = if self.is_excluded(&field) {
                        val
                    } else {
                        self.transform(val, leaf)
                    };
                    out.insert(field, val);
                }
                Value::Object(out)
            }
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.transform(item, leaf))
                    .collect(),
            ),
            Value::String(text) => Value::String(leaf(&text)),
            other => other,
        }
    }

    /// Call `leaf` for every text leaf, excluded fields included.
    pub fn visit<F>(&self, value: &Value, leaf: &mut F)
    where
        F: FnMut(&str),
    {
        match value {
            Value::Object(map) => {
                for val in map.values() {
                    self.visit(val, leaf);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.visit(item, leaf);
                }
            }
            Value::String(text) => leaf(text),
            Value::Number(_) | Value::Bool(_) | Value::Null => {}
        }
    }

    /// Number of text leaves [`TreeWalker::transform`] would pass to its closure.
    pub fn transformable_leaf_count(&self, value: &Value) -> usize {
        match value {
            Value::Object(map) => map
                .iter()
                .filter(|(field, _)| !self.is_excluded(field))
                .map(|(_, val)| self.transformable_leaf_count(val))
                .sum(),
            Value::Array(items) => items
                .iter()
                .map(|item| self.transformable_leaf_count(item))
                .sum(),
            Value::String(_) => 1,
            Value::Number(_) | Value::Bool(_) | Value::Null => 0,
        }
    }
}
