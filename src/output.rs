//! Flattening a secret payload into `key|value` lines.
//!
//! The payload must be a JSON object. Each top-level entry becomes one line;
//! nothing is escaped, so keys or values containing `|` or newlines produce
//! ambiguous output.

use std::borrow::Cow;
use std::io::Write;

use serde_json::{Map, Value};

use crate::error::{Result, RetrieveError};

/// Top-level entries of a parsed secret payload.
pub type OutputRecord = Map<String, Value>;

/// Parse a secret payload, requiring a JSON object.
///
/// # Examples
/// ```
/// use retrieve_secret::output::parse_payload;
///
/// let record = parse_payload(r#"{"A":"1","B":"2"}"#).unwrap();
/// assert_eq!(record.len(), 2);
/// assert!(parse_payload(r#"["A"]"#).is_err());
/// ```
pub fn parse_payload(payload: &str) -> Result<OutputRecord> {
    match serde_json::from_str::<Value>(payload)? {
        Value::Object(map) => Ok(map),
        other => Err(RetrieveError::NotAnObject(kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Plain text form of a value: strings unquoted, everything else as compact JSON.
pub fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Write one `key|value` line per entry.
pub fn write_lines<W: Write>(record: &OutputRecord, out: &mut W) -> Result<()> {
    for (key, value) in record {
        writeln!(out, "{}|{}", key, render_value(value))?;
    }
    out.flush()?;
    Ok(())
}
