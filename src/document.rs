use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use tracing::debug;

use crate::error::{NormalizeError, SchemaError};

/// Top-level key holding the nation -> override object that gets sorted.
pub const MAPPING_OVERRIDE_KEY: &str = "mapping_override";

const INDENT: &[u8] = b"  ";

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn parse_document(text: impl AsRef<[u8]>) -> serde_json::Result<Value> {
    serde_json::from_slice(text.as_ref())
}

/// Reorders the entries of `map` by key. Keys compare by code point, so the
/// result matches a plain string sort.
pub fn sort_object(map: &mut Map<String, Value>) {
    map.sort_keys();
}

/// Sorts the mapping override of `document` in place and returns how many
/// entries it holds. Everything else in the document is left as is,
/// including where `mapping_override` sits among the top-level keys.
pub fn normalize_document(document: &mut Value) -> Result<usize, SchemaError> {
    let root = match document {
        Value::Object(map) => map,
        other => {
            return Err(SchemaError::RootNotObject {
                found: json_type(other),
            });
        }
    };
    let overrides = root
        .get_mut(MAPPING_OVERRIDE_KEY)
        .ok_or(SchemaError::MissingKey {
            key: MAPPING_OVERRIDE_KEY,
        })?;
    let overrides = match overrides {
        Value::Object(map) => map,
        other => {
            return Err(SchemaError::NotAnObject {
                key: MAPPING_OVERRIDE_KEY,
                found: json_type(other),
            });
        }
    };
    sort_object(overrides);
    Ok(overrides.len())
}

/// Two-space indented JSON with non-ASCII characters written as is.
/// No trailing newline.
pub fn to_pretty_json(value: &Value) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Parses `text`, sorts its mapping override and renders the result.
pub fn normalize(text: impl AsRef<[u8]>) -> Result<String, NormalizeError> {
    let mut document = parse_document(text).map_err(NormalizeError::ParseText)?;
    let entries = normalize_document(&mut document)?;
    debug!(entries, "Sorted {}", MAPPING_OVERRIDE_KEY);
    to_pretty_json(&document).map_err(NormalizeError::Serialize)
}
