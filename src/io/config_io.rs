use std::fs;
use std::path::Path;

use crate::io::workspace_io::WorkspaceError;
use crate::model::config::PlannerConfig;

/// Read the planner config, returning both the parsed config and the raw
/// toml_edit Document for round-trip-safe editing.
pub fn read_config(
    data_dir: &Path,
) -> Result<(PlannerConfig, toml_edit::DocumentMut), WorkspaceError> {
    let config_path = data_dir.join("config.toml");
    let config_text = fs::read_to_string(&config_path).map_err(|e| WorkspaceError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: PlannerConfig = toml::from_str(&config_text)?;
    let doc: toml_edit::DocumentMut = config_text.parse().map_err(|_: toml_edit::TomlError| {
        WorkspaceError::ConfigParseError(toml::from_str::<PlannerConfig>("").unwrap_err())
    })?;
    Ok((config, doc))
}

/// Write the config document back to disk, preserving formatting.
pub fn write_config(data_dir: &Path, doc: &toml_edit::DocumentMut) -> Result<(), WorkspaceError> {
    let config_path = data_dir.join("config.toml");
    fs::write(&config_path, doc.to_string())?;
    Ok(())
}

/// Append a cover image URL to the gallery in the config document
pub fn add_gallery_image(doc: &mut toml_edit::DocumentMut, url: &str) {
    if !doc.contains_key("gallery") {
        doc["gallery"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    if doc["gallery"].get("images").is_none() {
        doc["gallery"]["images"] = toml_edit::value(toml_edit::Array::new());
    }
    if let Some(images) = doc["gallery"]["images"].as_array_mut() {
        images.push(url);
    }
}
