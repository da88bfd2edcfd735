//! Edits to JSON documents inside a generated project: the mock data store
//! (`mock/server.json`) and the package manifest (`package.json`).
//!
//! Documents are parsed into a `serde_json::Value`, changed in place, and
//! serialized back with two-space indentation. Key order is preserved, so
//! untouched entries keep their position in the file.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::{entities::fixture::FixtureRecord, error::DomainError};

fn parse_object(source: &str) -> Result<Map<String, Value>, DomainError> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| DomainError::MalformedDocument {
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::MalformedDocument {
            reason: format!("expected a JSON object, found {}", kind_of(&other)),
        }),
    }
}

fn render(map: Map<String, Value>) -> Result<String, DomainError> {
    serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| {
        DomainError::MalformedDocument {
            reason: e.to_string(),
        }
    })
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

/// Set `store[key] = records`.
///
/// Last write wins: an existing collection under `key` is replaced, not
/// merged, and keeps its position among the other keys.
pub fn upsert_collection(
    source: &str,
    key: &str,
    records: &[FixtureRecord],
) -> Result<String, DomainError> {
    let mut store = parse_object(source)?;
    let records = serde_json::to_value(records).map_err(|e| DomainError::MalformedDocument {
        reason: e.to_string(),
    })?;
    store.insert(key.to_string(), records);
    render(store)
}

/// Merge `scripts` into the manifest's `scripts` object.
///
/// Existing script names are kept; same-named entries are overwritten. A
/// manifest without a `scripts` object gets one.
pub fn merge_scripts(
    source: &str,
    scripts: &BTreeMap<String, String>,
) -> Result<String, DomainError> {
    let mut manifest = parse_object(source)?;

    let entry = manifest
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    let existing = entry
        .as_object_mut()
        .ok_or_else(|| DomainError::MalformedDocument {
            reason: "\"scripts\" is not an object".into(),
        })?;

    for (name, command) in scripts {
        existing.insert(name.clone(), Value::String(command.clone()));
    }

    render(manifest)
}
