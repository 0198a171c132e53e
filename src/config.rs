use crate::error::{Result, ScoreError};
use crate::types::config::ScoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "pkgscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".pkgscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/pkgscore/config.toml";

pub fn load_config(root: &Path) -> Result<Option<ScoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ScoreConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let candidates = [
        global_path.map(Path::to_path_buf),
        Some(repo_path),
        Some(root.join(DEFAULT_LOCAL_FILE)),
    ];
    let mut layers = Vec::new();
    let mut merged = Value::Table(Map::new());
    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        let value = read_toml_value(&path)?;
        merge_toml(&mut merged, value.clone());
        layers.push((path, value));
    }

    parse_layer(merged).map(Some).map_err(|reason| {
        let location = blame_layer(&layers)
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| {
                layers
                    .iter()
                    .map(|(path, _)| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(" + ")
            });
        ScoreError::ConfigParse(format!("{location}: {reason}"))
    })
}

fn parse_layer(value: Value) -> std::result::Result<ScoreConfig, String> {
    let cfg: ScoreConfig = value
        .try_into()
        .map_err(|e: toml::de::Error| e.to_string())?;
    cfg.validate().map_err(|e| match e {
        ScoreError::ConfigParse(reason) => reason,
        other => other.to_string(),
    })?;
    Ok(cfg)
}

/// The latest layer that is invalid on its own; later layers win the merge.
fn blame_layer(layers: &[(PathBuf, Value)]) -> Option<&Path> {
    layers
        .iter()
        .rev()
        .find(|(_, value)| parse_layer(value.clone()).is_err())
        .map(|(path, _)| path.as_path())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
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
