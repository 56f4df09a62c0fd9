//! # Domain
//!
//! Multi-level grouping of in-memory records.
//!
//! - [`grouping`]: the recursive, order-preserving grouping algorithm
//! - [`model`]: the [`Group`] records it produces
//! - [`iteratee`]: key extractors, one per grouping dimension
//! - [`ext`]: method-call sugar over any iterable

#![allow(clippy::multiple_crate_versions)]

pub mod ext;
pub mod grouping;
pub mod iteratee;
pub mod model;

pub use ext::GroupByExt;
pub use grouping::{Grouper, by, try_by};
pub use iteratee::{Dimension, Iteratee};
pub use model::Group;
