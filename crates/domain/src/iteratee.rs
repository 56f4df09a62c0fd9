// crates/domain/src/iteratee.rs
use multigroup_shared_kernel::KeyValue;

/// Extracts the named key of one grouping dimension from an item.
///
/// Every `Fn(&T) -> (N, K)` with `N: Into<String>` is an iteratee, so plain
/// closures such as `|p: &Person| ("Country", p.country.clone())` can be
/// passed straight to the grouping functions. [`Dimension`] covers the common
/// case where the name is fixed and only the key varies.
pub trait Iteratee<T, K> {
    fn extract(&self, item: &T) -> KeyValue<K>;
}

impl<T, K, N, F> Iteratee<T, K> for F
where
    F: Fn(&T) -> (N, K),
    N: Into<String>,
{
    fn extract(&self, item: &T) -> KeyValue<K> {
        let (name, key) = self(item);
        KeyValue::new(name, key)
    }
}

/// An iteratee with a fixed dimension name.
#[derive(Debug, Clone)]
pub struct Dimension<F> {
    name: String,
    key_fn: F,
}

impl<F> Dimension<F> {
    pub fn new(name: impl Into<String>, key_fn: F) -> Self {
        Self { name: name.into(), key_fn }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T, K, F> Iteratee<T, K> for Dimension<F>
where
    F: Fn(&T) -> K,
{
    fn extract(&self, item: &T) -> KeyValue<K> {
        KeyValue::new(self.name.clone(), (self.key_fn)(item))
    }
}
