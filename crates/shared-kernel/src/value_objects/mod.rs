// crates/shared-kernel/src/value_objects/mod.rs
pub mod key_value;

pub use key_value::KeyValue;
