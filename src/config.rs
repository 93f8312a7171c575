use crate::error::{RecheckError, Result};
use crate::types::config::RecheckConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "recheck.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".recheck/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/recheck/config.toml";

pub fn load_config(root: &Path) -> Result<Option<RecheckConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Layers global, project and local files. Returns `None` when none exist.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<RecheckConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    if !found {
        return Ok(None);
    }

    let cfg: RecheckConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RecheckError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RecheckError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Deep-merges `overlay` into `base`; overlay values win. Layers are applied
/// global, then project, then local, so `.recheck/local.toml` overrides
/// `recheck.toml`, which overrides the global file.
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
    use crate::types::config::DetailSetting;
    use crate::types::language::Language;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[branding]
company = "Global Co"
contact_email = "global@example.com"

[report]
detail = "detailed"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[report]
language = "zh-hans"

[branding]
company = "Repo Co"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".recheck")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
language = "zh-hant"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.language(), Language::TraditionalChinese);
        assert_eq!(cfg.detail(), DetailSetting::Detailed);
        assert_eq!(cfg.company(), "Repo Co");
        assert_eq!(cfg.contact_email(), "global@example.com");
    }

    #[test]
    fn local_file_overrides_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[report]\ndetail = \"detailed\"\n\n[branding]\ncompany = \"Repo Co\"\n",
        )
        .expect("repo config should write");
        fs::create_dir_all(root.path().join(".recheck")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            "[report]\ndetail = \"summary\"\n",
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .expect("merged config should exist");
        assert_eq!(cfg.detail(), DetailSetting::Summary);
        assert_eq!(cfg.company(), "Repo Co");
    }

    #[test]
    fn load_config_reports_parse_errors_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[report\n")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn load_config_rejects_unknown_language() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nlanguage = \"fr\"\n",
        )
        .expect("config should write");

        assert!(load_config_with_global(root.path(), None).is_err());
    }
}
