use std::path::Path;

use tracing::debug;

use crate::conversion_error::{ConversionError, OutputWriteError};
use crate::types::Inventory;

pub const INVENTORY_HEADER: &str = "---\n# Generated from Terraform output\n\n";

pub fn render_inventory(inventory: &Inventory) -> Result<String, super::RenderError> {
    let body = serde_yaml::to_string(inventory)?;

    Ok(format!("{INVENTORY_HEADER}{body}"))
}

/// Renders `inventory` and writes it to `path`, creating missing parent
/// directories. Nothing is touched on disk if rendering fails.
pub fn write_inventory(inventory: &Inventory, path: &Path) -> Result<(), ConversionError> {
    let rendered = render_inventory(inventory).map_err(OutputWriteError::from)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring directory {} exists", parent.display());
        std::fs::create_dir_all(parent).map_err(OutputWriteError::from)?;
    }

    std::fs::write(path, rendered).map_err(OutputWriteError::from)?;

    Ok(())
}
