// crates/shared-kernel/src/value_objects/key_value.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named key extracted for one grouping dimension, e.g. `Country=USA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValue<K> {
    #[serde(rename = "key")]
    name: String,
    value: K,
}

impl<K> KeyValue<K> {
    #[inline]
    pub fn new(name: impl Into<String>, value: K) -> Self {
        Self { name: name.into(), value }
    }

    /// Label of the grouping dimension.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &K {
        &self.value
    }

    #[inline]
    pub fn into_parts(self) -> (String, K) {
        (self.name, self.value)
    }
}

impl<N, K> From<(N, K)> for KeyValue<K>
where
    N: Into<String>,
{
    fn from((name, value): (N, K)) -> Self {
        Self::new(name, value)
    }
}

impl<K: fmt::Display> fmt::Display for KeyValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
