//! Call-once and debounce function wrappers.
//!
//! Both wrappers own their invocation state as explicit private fields:
//! - [`Once`] - runs its function on the first call only
//! - [`Debounce`] - postpones its function until a quiet period has
//!   elapsed, keeping only the most recent call's arguments
//!
//! Everything here is single-threaded and caller-driven; no wrapper owns
//! a thread or reads a clock of its own.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod debounce;
pub mod once;

pub use debounce::{Debounce, debounce};
pub use once::{Once, once};
