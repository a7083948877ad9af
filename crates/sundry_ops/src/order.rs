//! Ordering operations over sequences.

use std::cmp::Ordering;

use sundry_foundation::{Error, Result, Value};
use tracing::trace;

/// Sorts a sequence into ascending order.
///
/// Returns a new sorted sequence; the input is unchanged. The sort is
/// stable. The default order is defined for mutually comparable scalars;
/// a pair of incomparable kinds never swaps, so such elements keep their
/// relative positions.
///
/// # Errors
///
/// Returns an invalid-argument error if `value` is not a sequence.
pub fn sort(value: &Value) -> Result<Value> {
    sort_by(value, |a, b| a.partial_cmp(b) == Some(Ordering::Greater))
}

/// Sorts a sequence by a caller-supplied ordering predicate.
///
/// `after(a, b)` must return true iff `a` sorts strictly after `b`. Each
/// adjacent pair is ordered by exactly that truth value; the reversed
/// relation is never consulted.
///
/// # Errors
///
/// Returns an invalid-argument error if `value` is not a sequence.
pub fn sort_by<F>(value: &Value, mut after: F) -> Result<Value>
where
    F: FnMut(&Value, &Value) -> bool,
{
    let Value::Seq(seq) = value else {
        trace!(actual = %value.kind(), "sort refused input");
        return Err(Error::invalid_argument("sequence", value.kind()));
    };

    let mut items: Vec<Value> = seq.iter().cloned().collect();
    let count = items.len();
    // Adjacent-exchange sort; the swap decision is the predicate alone.
    for pass in 0..count.saturating_sub(1) {
        for j in 0..count - 1 - pass {
            if after(&items[j], &items[j + 1]) {
                items.swap(j, j + 1);
            }
        }
    }
    Ok(Value::Seq(items.into_iter().collect()))
}

/// Reverses a sequence's element order.
///
/// Returns a new reversed sequence; the input is unchanged.
///
/// # Errors
///
/// Returns an invalid-argument error if `value` is not a sequence.
pub fn reverse(value: &Value) -> Result<Value> {
    let Value::Seq(seq) = value else {
        trace!(actual = %value.kind(), "reverse refused input");
        return Err(Error::invalid_argument("sequence", value.kind()));
    };

    let mut items: Vec<Value> = seq.iter().cloned().collect();
    items.reverse();
    Ok(Value::Seq(items.into_iter().collect()))
}
