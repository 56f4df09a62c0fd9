// crates/domain/src/ext.rs
use std::hash::Hash;

use multigroup_shared_kernel::GroupingResult;

use crate::{
    grouping::{by, try_by},
    iteratee::Iteratee,
    model::Group,
};

/// Method-call form of [`by`] and [`try_by`] for any iterable.
pub trait GroupByExt: IntoIterator + Sized {
    /// # Panics
    ///
    /// Panics when `iteratees` is empty.
    fn group_by_keys<K>(self, iteratees: &[&dyn Iteratee<Self::Item, K>]) -> Vec<Group<K, Self::Item>>
    where
        K: Eq + Hash + Clone,
    {
        by(self, iteratees)
    }

    fn try_group_by_keys<K>(self, iteratees: &[&dyn Iteratee<Self::Item, K>]) -> GroupingResult<Vec<Group<K, Self::Item>>>
    where
        K: Eq + Hash + Clone,
    {
        try_by(self, iteratees)
    }
}

impl<I: IntoIterator> GroupByExt for I {}

#[cfg(test)]
mod tests {
    use multigroup_shared_kernel::{GroupingError, KeyValue};

    use super::*;

    #[test]
    fn borrowed_items_can_be_grouped() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let by_initial = |w: &&str| ("Initial", w.chars().next());

        let groups: Vec<Group<Option<char>, &str>> = words.iter().copied().group_by_keys(&[&by_initial]);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].keys(), &[KeyValue::new("Initial", Some('b'))]);
        assert_eq!(groups[1].items(), &["banana", "blueberry"]);
    }

    #[test]
    fn try_form_reports_missing_iteratees() {
        let result = vec![1u8, 2, 3].try_group_by_keys::<u8>(&[]);
        assert_eq!(result.unwrap_err(), GroupingError::NoIterateesProvided);
    }
}
