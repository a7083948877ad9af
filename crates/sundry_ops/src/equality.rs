//! Recursive structural comparison.

use sundry_foundation::Value;

/// Compares two values for deep structural sameness.
///
/// Two sequences are equal when their lengths match and their elements
/// are structurally equal index by index. Two mappings are equal when
/// their key counts match and every key of the first is present in the
/// second with a structurally equal value. A sequence never equals a
/// mapping, and a container never equals a scalar. Scalars compare by
/// strict value equality with no cross-kind coercion: `Int(1)` equals
/// neither `Text("1")` nor `Float(1.0)`.
///
/// Total: every pair of inputs resolves to a boolean. Values are
/// immutable trees - a value cannot contain itself - so the recursion
/// terminates on all inputs.
#[must_use]
pub fn structurally_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Seq(left), Value::Seq(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(x, y)| structurally_equal(x, y))
        }
        (Value::Map(left), Value::Map(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, x)| match right.get(key) {
                    Some(y) => structurally_equal(x, y),
                    None => false,
                })
        }
        (Value::Seq(_) | Value::Map(_), _) | (_, Value::Seq(_) | Value::Map(_)) => false,
        (x, y) => x == y,
    }
}
