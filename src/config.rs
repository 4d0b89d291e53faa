use crate::error::{CadRiskError, Result};
use crate::types::config::CadRiskConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "cadrisk.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".cadrisk/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cadrisk/config.toml";

/// Loads global, project and local config in that order; later files win.
/// With no files present the built-in rule applies.
pub fn load_config(root: &Path) -> Result<CadRiskConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<CadRiskConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: CadRiskConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CadRiskError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CadRiskError::ConfigParse(format!("{}: {}", path.display(), e)))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::rule::ScoringRule;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_files_yield_default_rule() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.rule(), ScoringRule::default());
        assert!(cfg.enforce_ranges());
    }

    #[test]
    fn merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
threshold = 6

[scoring.weights]
smoking = 2
male = 2
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring.weights]
smoking = 4
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".cadrisk")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[validation]
enforce_ranges = false
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");
        let rule = cfg.rule();

        assert_eq!(rule.threshold, 6);
        assert_eq!(rule.weights.smoking, 4);
        assert_eq!(rule.weights.male, 2);
        assert!(!cfg.enforce_ranges());
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[scoring\nthreshold = ")
            .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(matches!(err, CadRiskError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn unknown_weight_key_is_rejected_on_load() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[scoring.weights]\nbmi = 1\n",
        )
        .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("validate should fail");
        assert!(err.to_string().contains("unknown key"));
    }
}
