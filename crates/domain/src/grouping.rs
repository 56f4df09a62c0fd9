// crates/domain/src/grouping.rs
use std::{
    collections::{HashMap, hash_map::Entry},
    hash::Hash,
};

use multigroup_shared_kernel::{GroupingError, GroupingResult, KeyValue};
use tracing::{debug, trace};

use crate::{iteratee::Iteratee, model::Group};

/// Groups `items` by every iteratee in turn and flattens the resulting tree.
///
/// Groups come out depth-first in first-encounter order: all groups under the
/// first key value seen by the outermost iteratee, then the second, and so on.
/// Items keep their input order inside each group.
///
/// # Panics
///
/// Panics when `iteratees` is empty. Use [`try_by`] to get an error instead.
pub fn by<I, K>(items: I, iteratees: &[&dyn Iteratee<I::Item, K>]) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
{
    match try_by(items, iteratees) {
        Ok(groups) => groups,
        Err(err) => panic!("{err}"),
    }
}

/// Checked variant of [`by`]: an empty iteratee list yields
/// [`GroupingError::NoIterateesProvided`].
pub fn try_by<I, K>(items: I, iteratees: &[&dyn Iteratee<I::Item, K>]) -> GroupingResult<Vec<Group<K, I::Item>>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
{
    Grouper::new(iteratees).map(|grouper| grouper.group(items))
}

/// A validated, reusable list of grouping dimensions.
pub struct Grouper<'a, T, K> {
    iteratees: Vec<&'a dyn Iteratee<T, K>>,
}

impl<'a, T, K> Grouper<'a, T, K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(iteratees: &[&'a dyn Iteratee<T, K>]) -> GroupingResult<Self> {
        if iteratees.is_empty() {
            return Err(GroupingError::NoIterateesProvided);
        }
        Ok(Self { iteratees: iteratees.to_vec() })
    }

    /// Number of dimensions every produced group is labelled with.
    pub fn depth(&self) -> usize {
        self.iteratees.len()
    }

    pub fn group<I>(&self, items: I) -> Vec<Group<K, T>>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let item_count = items.len();

        let mut groups = Vec::new();
        let mut path = Vec::with_capacity(self.iteratees.len());
        group_level(items, &self.iteratees, &mut path, &mut groups);

        debug!(items = item_count, dimensions = self.iteratees.len(), groups = groups.len(), "grouped items");
        groups
    }
}

struct Bucket<K, T> {
    name: String,
    key: K,
    items: Vec<T>,
}

// `path` holds the labels of the enclosing buckets; once no iteratee is left
// the bucket becomes a group labelled with the whole path.
fn group_level<T, K>(
    items: Vec<T>,
    iteratees: &[&dyn Iteratee<T, K>],
    path: &mut Vec<KeyValue<K>>,
    out: &mut Vec<Group<K, T>>,
) where
    K: Eq + Hash + Clone,
{
    let Some((first, rest)) = iteratees.split_first() else {
        out.push(Group::new(path.clone(), items));
        return;
    };

    let buckets = partition(items, *first);
    trace!(depth = path.len(), buckets = buckets.len(), "partitioned level");

    for bucket in buckets {
        path.push(KeyValue::new(bucket.name, bucket.key));
        group_level(bucket.items, rest, path, out);
        path.pop();
    }
}

/// Stable partition by extracted key, buckets in first-encounter order.
///
/// A bucket is labelled with the name reported for its last item.
fn partition<T, K>(items: Vec<T>, iteratee: &dyn Iteratee<T, K>) -> Vec<Bucket<K, T>>
where
    K: Eq + Hash + Clone,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut buckets: Vec<Bucket<K, T>> = Vec::new();

    for item in items {
        let (name, key) = iteratee.extract(&item).into_parts();
        match slots.entry(key) {
            Entry::Occupied(slot) => {
                let bucket = &mut buckets[*slot.get()];
                bucket.name = name;
                bucket.items.push(item);
            }
            Entry::Vacant(slot) => {
                let key = slot.key().clone();
                slot.insert(buckets.len());
                buckets.push(Bucket { name, key, items: vec![item] });
            }
        }
    }
    buckets
}
