use std::path::Path;

use tracing::debug;

use crate::conversion_error::{ConversionError, InputLoadError};
use crate::types::TerraformOutputs;

/// Reads the JSON written by `terraform output -json`.
pub fn load_outputs(path: &Path) -> Result<TerraformOutputs, ConversionError> {
    debug!("Loading Terraform output from {}", path.display());

    let text = std::fs::read_to_string(path).map_err(InputLoadError::from)?;

    parse_outputs(&text)
}

/// Syntax errors are load failures. A well-formed document whose recognized
/// outputs are `null`, lack a `value` or carry the wrong shape is reported
/// separately.
pub fn parse_outputs(text: &str) -> Result<TerraformOutputs, ConversionError> {
    let document: serde_json::Value = serde_json::from_str(text).map_err(InputLoadError::from)?;

    serde_json::from_value(document).map_err(ConversionError::UnexpectedStructure)
}
