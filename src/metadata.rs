//! Handler metadata resolution
//!
//! Maps a function's declared handler string (`<relativePath>.<entryPoint>`)
//! to the source file the worker loads and the export it invokes. The file
//! path is resolved against the service root with a preference for the
//! function's own folder, and separators are normalized for the host OS.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use crate::bindings::binding_name;
use crate::config::FunctionConfig;
use crate::error::{AdapterError, Result};

/// Source file extension appended to the handler path stem (Node worker
/// convention of the source ecosystem).
const HANDLER_EXT: &str = "js";

/// Where a function's code lives and which export to invoke.
///
/// Derived per function definition, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionMetadata {
    /// Exported symbol the runtime invokes.
    pub entry_point: String,
    /// Handler source file, relative to the service root, in the host OS
    /// separator convention.
    pub handler_path: PathBuf,
    /// Declared binding names in declaration order; these are the invocation
    /// parameters the runtime passes to the entry point.
    pub params: Vec<String>,
}

/// Resolve a function's handler string into [`FunctionMetadata`].
///
/// The entry point is the substring after the last `.`; the part before it
/// is the source file stem. If `<service_root>/<function_name>/<file>`
/// exists the handler is taken from the function's own folder, otherwise it
/// resolves relative to the service root (which also covers arbitrary paths
/// outside function folders).
pub fn function_metadata(
    function_name: &str,
    function: &FunctionConfig,
    service_root: &Path,
) -> Result<FunctionMetadata> {
    let (stem, entry_point) = function
        .handler
        .rsplit_once('.')
        .filter(|(stem, entry)| !stem.is_empty() && !entry.is_empty())
        .ok_or_else(|| AdapterError::MalformedHandler(function.handler.clone()))?;

    let file = format!("{}.{}", normalize_separators(stem), HANDLER_EXT);

    let handler_path = if service_root.join(function_name).join(&file).exists() {
        debug!(
            function = function_name,
            file = %file,
            "Handler resolved inside function folder"
        );
        PathBuf::from(function_name).join(&file)
    } else {
        debug!(
            function = function_name,
            file = %file,
            "Handler resolved relative to service root"
        );
        PathBuf::from(&file)
    };

    let params = function
        .events
        .iter()
        .filter_map(|event| binding_name(event).map(str::to_string))
        .collect();

    Ok(FunctionMetadata {
        entry_point: entry_point.to_string(),
        handler_path,
        params,
    })
}

/// Rewrite both `/` and `\` to the host OS separator.
fn normalize_separators(path: &str) -> String {
    path.replace(['/', '\\'], &MAIN_SEPARATOR.to_string())
}
