//! Element-wise transforms over sequences and mappings.

use sundry_foundation::{Error, Mapping, Result, Sequence, Value};
use tracing::trace;

/// Applies `iterator` to every element, producing a container of the same
/// shape.
///
/// A sequence maps to a sequence of identical length with order preserved;
/// a mapping maps to a mapping with the identical key set and each value
/// replaced by `iterator(value)`. The iterator runs exactly once per
/// element, and the input container is never mutated.
///
/// # Errors
///
/// Returns an invalid-argument error if `container` is neither a sequence
/// nor a mapping, or if it is a sequence containing textual elements.
/// Text-bearing sequences are refused wholesale, before the iterator runs.
pub fn map<F>(container: &Value, mut iterator: F) -> Result<Value>
where
    F: FnMut(&Value) -> Value,
{
    match container {
        Value::Seq(seq) => {
            reject_textual_elements(seq)?;
            let next: Sequence = seq.iter().map(|element| iterator(element)).collect();
            Ok(Value::Seq(next))
        }
        Value::Map(mapping) => {
            let next: Mapping = mapping
                .iter()
                .map(|(key, value)| (key.clone(), iterator(value)))
                .collect();
            Ok(Value::Map(next))
        }
        other => {
            trace!(actual = %other.kind(), "map refused input");
            Err(Error::invalid_argument("sequence or mapping", other.kind()))
        }
    }
}

/// Partitions a sequence into buckets keyed by `iterator`'s result.
///
/// Every element lands in exactly one bucket; bucket contents preserve the
/// input order; keys compare by value equality. Buckets that would be
/// empty are absent from the result.
///
/// # Errors
///
/// Returns an invalid-argument error if `sequence` is not a sequence, or
/// if it contains textual elements.
pub fn group_by<F>(sequence: &Value, mut iterator: F) -> Result<Value>
where
    F: FnMut(&Value) -> Value,
{
    let Value::Seq(seq) = sequence else {
        trace!(actual = %sequence.kind(), "group_by refused input");
        return Err(Error::invalid_argument("sequence", sequence.kind()));
    };
    reject_textual_elements(seq)?;

    let mut buckets = Mapping::new();
    for element in seq.iter() {
        let key = iterator(element);
        let bucket = match buckets.get(&key) {
            Some(Value::Seq(existing)) => existing.push_back(element.clone()),
            _ => Sequence::new().push_back(element.clone()),
        };
        buckets = buckets.insert(key, Value::Seq(bucket));
    }
    trace!(buckets = buckets.len(), "grouped sequence");
    Ok(Value::Map(buckets))
}

/// Sequences containing text are refused by the element-wise transforms.
fn reject_textual_elements(seq: &Sequence) -> Result<()> {
    match seq.iter().find(|element| element.is_textual()) {
        Some(element) => Err(Error::invalid_argument(
            "sequence without textual elements",
            element.kind(),
        )),
        None => Ok(()),
    }
}
