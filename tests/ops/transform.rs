//! Integration tests for map and group-by.

use sundry_foundation::{ErrorKind, Kind, Mapping, Sequence, Value};
use sundry_ops::{group_by, map};

fn seq_of(values: &[i64]) -> Value {
    Value::Seq(values.iter().copied().map(Value::Int).collect())
}

// =============================================================================
// map
// =============================================================================

#[test]
fn map_transforms_each_sequence_element() {
    let result = map(&seq_of(&[10, 20, 30]), |v| {
        Value::Int(v.as_int().unwrap() - 1)
    })
    .unwrap();
    assert_eq!(result, seq_of(&[9, 19, 29]));
}

#[test]
fn map_over_empty_containers() {
    assert_eq!(
        map(&Value::Seq(Sequence::new()), Clone::clone).unwrap(),
        Value::Seq(Sequence::new())
    );
    assert_eq!(
        map(&Value::Map(Mapping::new()), Clone::clone).unwrap(),
        Value::Map(Mapping::new())
    );
}

#[test]
fn map_mapping_replaces_values_only() {
    let input = Value::Map(
        Mapping::new()
            .insert(Value::from("x"), Value::Int(1))
            .insert(Value::from("y"), Value::Int(2)),
    );
    let result = map(&input, |v| Value::Int(-v.as_int().unwrap())).unwrap();

    let Value::Map(out) = result else {
        panic!("expected mapping");
    };
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(&Value::from("x")), Some(&Value::Int(-1)));
    assert_eq!(out.get(&Value::from("y")), Some(&Value::Int(-2)));
}

#[test]
fn map_mapping_may_hold_textual_values() {
    // The textual-element restriction applies to sequences only.
    let input = Value::Map(Mapping::new().insert(Value::from("k"), Value::from("v")));
    let result = map(&input, Clone::clone).unwrap();
    assert_eq!(result, input);
}

#[test]
fn map_reports_invalid_argument_for_nil() {
    let err = map(&Value::Nil, Clone::clone).unwrap_err();
    let ErrorKind::InvalidArgument { actual, .. } = err.kind;
    assert_eq!(actual, Kind::Nil);
}

#[test]
fn map_refuses_sequences_with_textual_elements() {
    let input = Value::Seq(
        [Value::Int(1), Value::from("two")].into_iter().collect(),
    );
    let err = map(&input, Clone::clone).unwrap_err();
    let ErrorKind::InvalidArgument { actual, .. } = err.kind;
    assert_eq!(actual, Kind::Text);
}

#[test]
fn map_does_not_mutate_the_input() {
    let input = seq_of(&[1, 2, 3]);
    let _ = map(&input, |_| Value::Int(0)).unwrap();
    assert_eq!(input, seq_of(&[1, 2, 3]));
}

// =============================================================================
// group_by
// =============================================================================

#[test]
fn group_by_floors_into_buckets() {
    let input = Value::Seq(
        [
            Value::Float(1.1),
            Value::Float(1.2),
            Value::Float(2.1),
            Value::Float(2.3),
        ]
        .into_iter()
        .collect(),
    );
    #[allow(clippy::cast_possible_truncation)]
    let result = group_by(&input, |v| {
        Value::Int(v.as_number().unwrap().floor() as i64)
    })
    .unwrap();

    let Value::Map(buckets) = result else {
        panic!("expected mapping");
    };
    assert_eq!(buckets.len(), 2);

    let ones = buckets.get(&Value::Int(1)).unwrap().as_sequence().unwrap();
    assert_eq!(ones.get(0), Some(&Value::Float(1.1)));
    assert_eq!(ones.get(1), Some(&Value::Float(1.2)));

    let twos = buckets.get(&Value::Int(2)).unwrap().as_sequence().unwrap();
    assert_eq!(twos.get(0), Some(&Value::Float(2.1)));
    assert_eq!(twos.get(1), Some(&Value::Float(2.3)));
}

#[test]
fn group_by_every_element_lands_in_its_own_bucket() {
    let input = seq_of(&[1, 2, 3, 4, 5, 6]);
    let result = group_by(&input, |v| Value::Int(v.as_int().unwrap() % 3)).unwrap();

    let Value::Map(buckets) = result else {
        panic!("expected mapping");
    };
    for (key, bucket) in buckets.iter() {
        for element in bucket.as_sequence().unwrap().iter() {
            assert_eq!(&Value::Int(element.as_int().unwrap() % 3), key);
        }
    }
    let total: usize = buckets
        .values()
        .map(|b| b.as_sequence().unwrap().len())
        .sum();
    assert_eq!(total, 6);
}

#[test]
fn group_by_keys_compare_by_value() {
    // Two elements deriving equal keys share one bucket.
    let input = seq_of(&[10, 20]);
    let result = group_by(&input, |_| Value::from("all")).unwrap();
    let Value::Map(buckets) = result else {
        panic!("expected mapping");
    };
    assert_eq!(buckets.len(), 1);
    assert_eq!(
        buckets
            .get(&Value::from("all"))
            .unwrap()
            .as_sequence()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn group_by_empty_sequence_yields_empty_mapping() {
    let result = group_by(&Value::Seq(Sequence::new()), Clone::clone).unwrap();
    assert_eq!(result, Value::Map(Mapping::new()));
}

#[test]
fn group_by_reports_invalid_argument() {
    assert!(group_by(&Value::Nil, Clone::clone).is_err());
    assert!(group_by(&Value::Map(Mapping::new()), Clone::clone).is_err());

    let with_text = Value::Seq([Value::from("t")].into_iter().collect());
    assert!(group_by(&with_text, Clone::clone).is_err());
}
