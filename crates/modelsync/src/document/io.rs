//! Configuration and catalog file I/O.
//!
//! A failed load aborts before any mutation; the save goes through a temp
//! file in the target directory so the prior document survives a failed
//! write intact.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use super::types::ChatConfig;

/// Load the chat configuration YAML.
pub fn load_config(path: &Path) -> anyhow::Result<ChatConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading configuration {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("parsing configuration {}", path.display()))
}

/// Load the catalog export: a JSON array of identifier and sentinel strings.
pub fn load_catalog_source(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog export {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog export {}", path.display()))
}

/// Persist the configuration as one discrete write: serialize to a temp file
/// next to the target, then move it into place.
pub fn save_config(path: &Path, config: &ChatConfig) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(config).context("serializing configuration")?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(yaml.as_bytes())
        .context("writing configuration")?;
    tmp.persist(path)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}
