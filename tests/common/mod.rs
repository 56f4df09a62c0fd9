// tests/common/mod.rs
//! Common test utilities

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
