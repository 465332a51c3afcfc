//! Binding configuration extraction
//!
//! A function's `events` list declares its Azure bindings as free-form
//! mappings: a binding type key (`http`, `queue`, ...), an optional
//! `direction`, and optional settings nested under the fixed
//! `x-azure-settings` key. This module selects the binding for a requested
//! direction and normalizes it into the shape the artifact generator
//! consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed key under which a binding entry nests its settings object.
pub const BINDING_SETTINGS_KEY: &str = "x-azure-settings";

/// Data-flow direction of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

/// Select and normalize the function's inbound binding, if any.
pub fn incoming_binding_config(events: &[Value]) -> Option<Value> {
    binding_config(events, Direction::In)
}

/// Select and normalize the function's outbound binding, if any.
pub fn outgoing_binding_config(events: &[Value]) -> Option<Value> {
    binding_config(events, Direction::Out)
}

/// Select the first binding entry matching `direction` and normalize it.
///
/// Returns `None` when no entry of the requested direction exists; callers
/// must check. Entries that are not mappings never match.
fn binding_config(events: &[Value], direction: Direction) -> Option<Value> {
    events
        .iter()
        .filter_map(Value::as_object)
        .find(|entry| binding_direction(entry) == direction)
        .map(normalize_binding)
}

/// Read an entry's direction, defaulting to `in` when absent.
///
/// HTTP triggers commonly omit the field, so an outbound binding must be
/// explicit.
fn binding_direction(entry: &Map<String, Value>) -> Direction {
    let declared = entry
        .get(BINDING_SETTINGS_KEY)
        .and_then(|settings| settings.get("direction"))
        .or_else(|| entry.get("direction"))
        .and_then(Value::as_str);

    match declared {
        Some("out") => Direction::Out,
        _ => Direction::In,
    }
}

/// The binding's declared `name` (the invocation parameter it surfaces as),
/// read from the nested settings object or the entry itself.
pub fn binding_name(event: &Value) -> Option<&str> {
    let entry = event.as_object()?;
    entry
        .get(BINDING_SETTINGS_KEY)
        .and_then(|settings| settings.get("name"))
        .or_else(|| entry.get("name"))
        .and_then(Value::as_str)
}

/// Normalize a selected binding entry.
///
/// With a nested settings object, the result keeps the settings verbatim
/// under `x-azure-settings` and simplifies the binding type key to a bare
/// `true` flag. Without one, the result is the entry's own fields with
/// `direction` removed.
fn normalize_binding(entry: &Map<String, Value>) -> Value {
    if let Some(settings) = entry.get(BINDING_SETTINGS_KEY) {
        let mut result = Map::new();
        if let Some(kind) = binding_type(entry) {
            result.insert(kind.to_string(), Value::Bool(true));
        }
        result.insert(BINDING_SETTINGS_KEY.to_string(), settings.clone());
        return Value::Object(result);
    }

    let mut result = entry.clone();
    result.remove("direction");
    Value::Object(result)
}

/// The entry's binding type key, i.e. the first key that is not a reserved
/// field.
fn binding_type(entry: &Map<String, Value>) -> Option<&str> {
    entry
        .keys()
        .map(String::as_str)
        .find(|key| *key != BINDING_SETTINGS_KEY && *key != "direction")
}
