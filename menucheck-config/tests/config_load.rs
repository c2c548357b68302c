use menucheck_config::{
    CaptureConfigLoader, DEFAULT_OUTPUT_PATH, DEFAULT_TOGGLE_SELECTOR, DEFAULT_USER_AGENT,
};
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn defaults_match_the_original_constants() {
    let config = CaptureConfigLoader::new().load().expect("load defaults");

    assert_eq!(config.webdriver_url, "http://localhost:9515");
    assert_eq!(config.target_url, "http://localhost:3000");
    assert_eq!(config.selector, DEFAULT_TOGGLE_SELECTOR);
    assert_eq!(config.selector, r#"button[aria-label="Abrir menú"]"#);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.viewport.width, 390);
    assert_eq!(config.viewport.height, 844);
    assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert!(config.headless);
    assert_eq!(config.settle.delay_ms, 1000);
    assert!(config.settle.wait_for.is_none());
}

#[test]
#[serial]
fn file_overrides_defaults_field_by_field() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
target_url: "http://localhost:4321"
output_path: "shots/menu-open.png"
viewport:
  width: 414
  height: 896
settle:
  wait_for: "nav[data-state='open']"
"#;
    let p = write_yaml(&tmp, "menucheck.yaml", file_yaml);

    let config = CaptureConfigLoader::new()
        .with_file(p)
        .load()
        .expect("load capture config");

    assert_eq!(config.target_url, "http://localhost:4321");
    assert_eq!(config.output_path, PathBuf::from("shots/menu-open.png"));
    assert_eq!(config.viewport.width, 414);
    assert_eq!(config.viewport.height, 896);
    assert_eq!(
        config.settle.wait_for.as_deref(),
        Some("nav[data-state='open']")
    );
    // Untouched fields keep their defaults.
    assert_eq!(config.selector, DEFAULT_TOGGLE_SELECTOR);
    assert_eq!(config.settle.delay_ms, 1000);
}

#[test]
#[serial]
fn missing_optional_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();

    let config = CaptureConfigLoader::new()
        .with_file_if_present(tmp.path().join("nonexistent.yaml"))
        .load()
        .expect("optional file may be absent");

    assert_eq!(config.target_url, "http://localhost:3000");
}

#[test]
#[serial]
fn missing_required_file_is_an_error() {
    let tmp = TempDir::new().unwrap();

    let result = CaptureConfigLoader::new()
        .with_file(tmp.path().join("nonexistent.yaml"))
        .load();

    assert!(result.is_err());
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "menucheck.yaml", "target_url: \"http://localhost:4321\"\n");

    temp_env::with_var("MENUCHECK_TARGET_URL", Some("http://localhost:9999"), || {
        let config = CaptureConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load with env override");

        assert_eq!(config.target_url, "http://localhost:9999");
    });
}

#[test]
#[serial]
fn env_placeholders_in_file_values_are_expanded() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(
        &tmp,
        "menucheck.yaml",
        "output_path: \"${SHOT_DIR}/menu.png\"\n",
    );

    temp_env::with_var("SHOT_DIR", Some("/tmp/artifacts"), || {
        let config = CaptureConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load with placeholder");

        assert_eq!(config.output_path, PathBuf::from("/tmp/artifacts/menu.png"));
    });
}
