//! Order-preserving multi-level grouping.
//!
//! ```
//! use multigroup::{Group, by};
//!
//! #[derive(Debug)]
//! struct Order {
//!     region: &'static str,
//!     drink: &'static str,
//! }
//!
//! let orders = vec![
//!     Order { region: "north", drink: "tea" },
//!     Order { region: "south", drink: "tea" },
//!     Order { region: "north", drink: "coffee" },
//!     Order { region: "north", drink: "tea" },
//! ];
//! let by_region = |o: &Order| ("Region", o.region);
//! let by_drink = |o: &Order| ("Drink", o.drink);
//!
//! let groups: Vec<Group<&str, Order>> = by(orders, &[&by_region, &by_drink]);
//!
//! let labels: Vec<String> = groups.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     labels,
//!     [
//!         "[Region=north, Drink=tea] (2 items)",
//!         "[Region=north, Drink=coffee] (1 item)",
//!         "[Region=south, Drink=tea] (1 item)",
//!     ]
//! );
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use multigroup_domain::{Dimension, Group, GroupByExt, Grouper, Iteratee, by, try_by};
pub use multigroup_shared_kernel::{ErrorContext, GroupingError, GroupingResult, KeyValue, MultigroupError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
