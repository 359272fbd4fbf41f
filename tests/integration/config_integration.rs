//! Integration tests for layered configuration

use super::test_utils::with_xdg_env;
use design_modifiers::config::{global_config_path, CatalogConfig, ConfigLoader};
use design_modifiers::preferences::Theme;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_catalog_config(catalog: &TempDir, name: &str, body: &str) {
    let dir = catalog.path().join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn test_defaults_without_any_files() {
    let env_dir = TempDir::new().unwrap();
    let catalog = TempDir::new().unwrap();
    with_xdg_env(&env_dir, || {
        let config = ConfigLoader::load(catalog.path()).unwrap();
        assert_eq!(config, CatalogConfig::default());
    });
}

#[test]
fn test_catalog_file_overrides_global_file() {
    let env_dir = TempDir::new().unwrap();
    let catalog = TempDir::new().unwrap();
    with_xdg_env(&env_dir, || {
        let global = global_config_path().unwrap();
        assert!(global.starts_with(env_dir.path()));
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(
            &global,
            r#"
clusters = ["concept"]

[display]
system_theme = "dark"

[source]
timeout_secs = 10
"#,
        )
        .unwrap();
        write_catalog_config(
            &catalog,
            "config.toml",
            r#"
[source]
timeout_secs = 20
root = "public"
"#,
        );

        let config = ConfigLoader::load(catalog.path()).unwrap();
        assert_eq!(config.clusters, vec!["concept"]);
        assert_eq!(config.display.system_theme, Theme::Dark);
        assert_eq!(config.source.timeout_secs, 20);
        assert_eq!(config.source.root, Some(PathBuf::from("public")));
    });
}

#[test]
fn test_env_specific_file_and_environment_overlay() {
    let env_dir = TempDir::new().unwrap();
    let catalog = TempDir::new().unwrap();
    with_xdg_env(&env_dir, || {
        write_catalog_config(
            &catalog,
            "config.toml",
            "[navigation]\nprefetch_previews = true\n",
        );
        write_catalog_config(
            &catalog,
            "offline.toml",
            "[navigation]\nprefetch_previews = false\n",
        );
        std::env::set_var("MODIFIERS_ENV", "offline");
        std::env::set_var("MODIFIERS__SOURCE__TIMEOUT_SECS", "7");

        let config = ConfigLoader::load(catalog.path()).unwrap();
        assert!(!config.navigation.prefetch_previews);
        assert_eq!(config.source.timeout_secs, 7);
    });
}

#[test]
fn test_invalid_config_fails_validation() {
    let env_dir = TempDir::new().unwrap();
    let catalog = TempDir::new().unwrap();
    with_xdg_env(&env_dir, || {
        write_catalog_config(
            &catalog,
            "config.toml",
            r#"
[source]
root = "public"
base_url = "http://localhost:5173"
timeout_secs = 0
"#,
        );
        let config = ConfigLoader::load(catalog.path()).unwrap();
        let err = config.validated().unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    });
}
