//! Type-dispatching operations over sundry values.
//!
//! Every operation takes a [`Value`](sundry_foundation::Value), classifies
//! it, and either computes over the accepted shapes or refuses with a typed
//! invalid-argument error:
//! - [`order`] - comparator sorting and reversal
//! - [`transform`] - element-wise map and group-by partitioning
//! - [`equality`] - recursive structural comparison
//! - [`text`] - case and whitespace transforms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod equality;
pub mod order;
pub mod text;
pub mod transform;

pub use equality::structurally_equal;
pub use order::{reverse, sort, sort_by};
pub use text::{camelize, capitalize, trim};
pub use transform::{group_by, map};
