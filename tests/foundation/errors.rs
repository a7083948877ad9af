//! Integration tests for the error type.

use sundry_foundation::{Error, ErrorKind, Kind};

#[test]
fn invalid_argument_message_names_both_sides() {
    let err = Error::invalid_argument("sequence", Kind::Mapping);
    let msg = format!("{err}");
    assert!(msg.contains("invalid argument"));
    assert!(msg.contains("sequence"));
    assert!(msg.contains("mapping"));
}

#[test]
fn errors_are_matchable_without_message_parsing() {
    let err = Error::invalid_argument("text", Kind::Int);
    match err.kind {
        ErrorKind::InvalidArgument { expected, actual } => {
            assert_eq!(expected, "text");
            assert_eq!(actual, Kind::Int);
        }
    }
}

#[test]
fn errors_compare_by_value() {
    assert_eq!(
        Error::invalid_argument("sequence", Kind::Nil),
        Error::invalid_argument("sequence", Kind::Nil)
    );
    assert_ne!(
        Error::invalid_argument("sequence", Kind::Nil),
        Error::invalid_argument("sequence", Kind::Text)
    );
}
