// crates/domain/src/model/group.rs
use std::fmt;

use multigroup_shared_kernel::{GroupingError, GroupingResult, KeyValue};
use serde::{Deserialize, Serialize};

/// One leaf of a multi-level grouping: the chain of key values that selected
/// it (outermost first) and the items that matched all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group<K, T> {
    keys: Vec<KeyValue<K>>,
    items: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn new(keys: Vec<KeyValue<K>>, items: Vec<T>) -> Self {
        Self { keys, items }
    }

    pub fn keys(&self) -> &[KeyValue<K>] {
        &self.keys
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn into_parts(self) -> (Vec<KeyValue<K>>, Vec<T>) {
        (self.keys, self.items)
    }

    /// Number of items in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of grouping dimensions labelling this group.
    #[inline]
    pub fn depth(&self) -> usize {
        self.keys.len()
    }

    /// Key values only, outermost dimension first.
    pub fn values(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys.iter().map(KeyValue::value)
    }

    /// Returns the first key whose dimension name equals `name`.
    ///
    /// Dimension names are not required to be unique; later duplicates are
    /// never reached.
    pub fn get_key_value(&self, name: &str) -> GroupingResult<&KeyValue<K>> {
        self.keys
            .iter()
            .find(|kv| kv.name() == name)
            .ok_or_else(|| GroupingError::key_value_not_found(name))
    }
}

impl<K: fmt::Display, T> fmt::Display for Group<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, kv) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kv}")?;
        }
        let noun = if self.items.len() == 1 { "item" } else { "items" };
        write!(f, "] ({} {noun})", self.items.len())
    }
}
