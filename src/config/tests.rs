//! Tests for the config module

use super::loader::{load_with_warnings, suggest_key, with_overrides_from};
use super::types::*;
use crate::error::TilerError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn load(path: &std::path::Path) -> crate::error::TilerResult<Config> {
    load_with_warnings(path).map(|(config, _)| config)
}

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.tools.warp.0, vec!["gdalwarp"]);
    assert_eq!(config.tools.overviews.0, vec!["gdaladdo"]);
    assert_eq!(config.tools.tiler.0, vec!["gdal2tiles.py", "gdal2tiles"]);
    assert_eq!(config.reproject.warp_memory_mb, 2048);
    assert_eq!(config.tiling.processes, 8);
    assert!(config.publish.staged);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[tools]
warp = "/opt/gdal/bin/gdalwarp"
tiler = ["gdal2tiles"]

[reproject]
warp_memory_mb = 4096

[tiling]
processes = 4

[publish]
staged = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.tools.warp.0, vec!["/opt/gdal/bin/gdalwarp"]);
    assert_eq!(config.tools.overviews.0, vec!["gdaladdo"]);
    assert_eq!(config.tools.tiler.0, vec!["gdal2tiles"]);
    assert_eq!(config.reproject.warp_memory_mb, 4096);
    assert_eq!(config.tiling.processes, 4);
    assert!(!config.publish.staged);
}

#[test]
fn test_config_partial_sections_keep_defaults() {
    let config: Config = toml::from_str("[tiling]\n").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_tools_requirements_follow_config() {
    let config: Config = toml::from_str("[tools]\ntiler = \"gdal2tiles\"\n").unwrap();
    let requirements = config.tools.requirements();

    assert_eq!(requirements.tiler.candidates, vec!["gdal2tiles"]);
    assert_eq!(requirements.warp.candidates, vec!["gdalwarp"]);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[tiling]\nproceses = 2\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.tiling.processes, 8);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "proceses");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("processes"));
    assert!(warnings[0].to_string().contains("did you mean 'processes'?"));
}

#[test]
fn test_load_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[tiling\nprocesses = 2\n").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, TilerError::InvalidConfig { .. }));
}

#[test]
fn test_load_rejects_zero_processes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[tiling]\nprocesses = 0\n").unwrap();

    match load(&path).unwrap_err() {
        TilerError::InvalidConfig { message, .. } => assert!(message.contains("processes")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_rejects_empty_tool_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[tools]\ntiler = []\n").unwrap();

    assert!(load(&path).is_err());
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let (config, warnings) = Config::load_or_default(dir.path()).unwrap();

    assert_eq!(config.tools, ToolsConfig::default());
    assert!(warnings.is_empty());
}

#[test]
fn test_load_or_default_reads_project_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "[reproject]\nwarp_memory_mb = 512\n").unwrap();

    let (config, _) = Config::load_or_default(dir.path()).unwrap();
    assert_eq!(config.tools, ToolsConfig::default());
    assert_eq!(config.reproject.warp_memory_mb, 512);
}

#[test]
fn test_env_overrides_apply() {
    let config = with_overrides_from(
        Config::default(),
        env(&[
            ("TILEBAKE_WARP_MEMORY_MB", "1024"),
            ("TILEBAKE_PROCESSES", "2"),
            ("TILEBAKE_STAGED_PUBLISH", "0"),
        ]),
    );

    assert_eq!(config.reproject.warp_memory_mb, 1024);
    assert_eq!(config.tiling.processes, 2);
    assert!(!config.publish.staged);
}

#[test]
fn test_env_overrides_ignore_invalid_numbers() {
    let config = with_overrides_from(
        Config::default(),
        env(&[
            ("TILEBAKE_PROCESSES", "many"),
            ("TILEBAKE_WARP_MEMORY_MB", "0"),
        ]),
    );

    assert_eq!(config.tiling.processes, 8);
    assert_eq!(config.reproject.warp_memory_mb, 2048);
}

#[test]
fn test_env_staged_publish_values() {
    let cases = [
        ("false", false),
        ("FALSE", false),
        ("0", false),
        ("1", true),
        ("yes", true),
    ];
    for (value, expected) in cases {
        let mut base = Config::default();
        base.publish.staged = !expected;
        let config = with_overrides_from(base, env(&[("TILEBAKE_STAGED_PUBLISH", value)]));
        assert_eq!(config.publish.staged, expected, "value {value}");
    }
}

#[test]
fn test_suggest_key() {
    assert_eq!(suggest_key("stagd").as_deref(), Some("staged"));
    assert_eq!(suggest_key("tilr").as_deref(), Some("tiler"));
    assert_eq!(suggest_key("completely_unrelated"), None);
}
