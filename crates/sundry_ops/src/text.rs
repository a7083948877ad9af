//! Case and whitespace transforms over textual values.

use sundry_foundation::{Error, Result, Value};

/// Uppercases the first letter of a textual value, lowercasing the rest.
///
/// # Errors
///
/// Returns an invalid-argument error if `value` is not textual.
pub fn capitalize(value: &Value) -> Result<Value> {
    let Value::Text(text) = value else {
        return Err(Error::invalid_argument("text", value.kind()));
    };
    Ok(Value::from(capitalize_str(text)))
}

/// Joins a phrase, or a sequence of words, into one capitalized compound
/// word.
///
/// Textual input is split on spaces; sequence input is walked element by
/// element, recursing into nested sequences. Non-alphanumeric characters
/// are stripped from each word before it is capitalized.
///
/// # Errors
///
/// Returns an invalid-argument error if the input, or any sequence
/// element, is neither textual nor a sequence.
pub fn camelize(value: &Value) -> Result<Value> {
    let mut out = String::new();
    camelize_into(value, &mut out)?;
    Ok(Value::from(out))
}

/// Removes every space character from a textual value, interior spaces
/// included.
///
/// # Errors
///
/// Returns an invalid-argument error if `value` is not textual.
pub fn trim(value: &Value) -> Result<Value> {
    let Value::Text(text) = value else {
        return Err(Error::invalid_argument("text", value.kind()));
    };
    let stripped: String = text.chars().filter(|c| *c != ' ').collect();
    Ok(Value::from(stripped))
}

fn capitalize_str(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn camelize_into(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Text(text) => {
            for word in text.split(' ') {
                let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
                out.push_str(&capitalize_str(&cleaned));
            }
            Ok(())
        }
        Value::Seq(seq) => {
            for element in seq.iter() {
                camelize_into(element, out)?;
            }
            Ok(())
        }
        other => Err(Error::invalid_argument("text or sequence", other.kind())),
    }
}
