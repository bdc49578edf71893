use crate::error::{Result, ScoutError};
use crate::types::config::ScoringConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "scout.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".scout/local.toml";

/// Loads and validates the weight table at `path`, layering the local
/// override file that sits next to it when one exists.
pub fn load_config(path: &Path, overlay: Option<&Path>) -> Result<ScoringConfig> {
    let local = overlay
        .map(Path::to_path_buf)
        .or_else(|| default_local_path(path).filter(|local| local.exists()));
    load_config_with_overlay(path, local.as_deref())
}

fn default_local_path(path: &Path) -> Option<PathBuf> {
    path.parent().map(|dir| dir.join(DEFAULT_LOCAL_FILE))
}

pub(crate) fn load_config_with_overlay(
    path: &Path,
    overlay: Option<&Path>,
) -> Result<ScoringConfig> {
    if !path.exists() {
        return Err(ScoutError::ConfigNotFound(path.display().to_string()));
    }

    let mut merged = Value::Table(Map::new());
    merge_toml(&mut merged, read_toml_value(path)?);
    if let Some(overlay_path) = overlay {
        if !overlay_path.exists() {
            return Err(ScoutError::ConfigNotFound(overlay_path.display().to_string()));
        }
        tracing::debug!(path = %overlay_path.display(), "applying config overlay");
        merge_toml(&mut merged, read_toml_value(overlay_path)?);
    }

    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoutError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    tracing::info!(
        path = %path.display(),
        red_flags = cfg.red_flags.len(),
        "loaded scoring config"
    );
    Ok(cfg)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoutError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
