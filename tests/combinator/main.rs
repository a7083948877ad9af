//! Integration tests for the combinator layer.
//!
//! Tests for the call-once and debounce wrappers.
