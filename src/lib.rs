//! Sundry - generic data utilities over a small dynamic value model
//!
//! This crate re-exports the workspace layers for convenient access.
//! For detailed documentation, see the individual crates.
//!
//! # Architecture
//!
//! ```text
//! sundry_combinator — call-once and debounce function wrappers
//! sundry_ops        — sort, map, group-by, structural equality, text
//! sundry_foundation — core types (Value, Sequence, Mapping, Error)
//! ```

pub use sundry_combinator as combinator;
pub use sundry_foundation as foundation;
pub use sundry_ops as ops;
