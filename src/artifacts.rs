//! Deployment artifact rendering
//!
//! Renders the per-function `function.json` document the Azure Functions
//! host reads: the script file to load, the export to invoke, and the
//! normalized binding list.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::bindings::{incoming_binding_config, outgoing_binding_config};
use crate::error::Result;
use crate::metadata::FunctionMetadata;

/// File name of the per-function binding document.
pub const FUNCTION_JSON: &str = "function.json";

/// Render a function's `function.json` from its resolved metadata and
/// declared binding entries.
///
/// The inbound binding and, when declared, the outbound binding are
/// selected and normalized; functions without an inbound binding produce an
/// empty binding list (the host rejects those at deploy time, not here).
pub fn function_document(metadata: &FunctionMetadata, events: &[Value]) -> Value {
    let bindings: Vec<Value> = [
        incoming_binding_config(events),
        outgoing_binding_config(events),
    ]
    .into_iter()
    .flatten()
    .collect();

    json!({
        "scriptFile": script_file(metadata),
        "entryPoint": metadata.entry_point,
        "bindings": bindings,
    })
}

/// Write a function's document under `<root>/<function_name>/function.json`,
/// creating the folder if needed.
pub fn write_function_document(
    root: &Path,
    function_name: &str,
    document: &Value,
) -> Result<PathBuf> {
    let folder = root.join(function_name);
    std::fs::create_dir_all(&folder)?;

    let path = folder.join(FUNCTION_JSON);
    let content = serde_json::to_string_pretty(document)?;
    std::fs::write(&path, content)?;
    Ok(path)
}

/// The handler path in the forward-slash form `function.json` expects,
/// regardless of the host OS separator.
fn script_file(metadata: &FunctionMetadata) -> String {
    let parts: Vec<String> = metadata
        .handler_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
