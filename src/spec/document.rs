//! Raw spec document loading
//!
//! Spec documents arrive as JSON from the transport layer, or as YAML when
//! authored by operators. Both parse into the same untyped
//! [`serde_json::Value`] tree that the resolver walks.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, spec_file_not_found, spec_file_read_failed};

/// Parse a spec document from a JSON string
pub fn from_json(json: &str) -> Result<Value> {
    let document: Value = serde_json::from_str(json)?;
    Ok(document)
}

/// Parse a spec document from a YAML string
pub fn from_yaml(yaml: &str) -> Result<Value> {
    let document: Value = serde_yaml::from_str(yaml)?;
    Ok(document)
}

/// Load a spec document from a file
///
/// Files with a `.json` extension parse as JSON; everything else parses as
/// YAML.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or does not
/// parse as a document.
pub fn load(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(spec_file_not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| spec_file_read_failed(path.display().to_string(), e.to_string()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json(&content),
        _ => from_yaml(&content),
    }
}
