//! Typed capture configuration with YAML + environment overlays.
//!
//! Every knob defaults to the values the tool has always used, so a run with
//! no `menucheck.yaml` and no `MENUCHECK_*` variables behaves identically to
//! the hardcoded original. Environment values support `${VAR}` placeholders,
//! expanded recursively up to a fixed depth.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Chromedriver's default listen address.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
/// The local dev server under inspection.
pub const DEFAULT_TARGET_URL: &str = "http://localhost:3000";
/// The mobile navigation toggle, located by its accessibility label.
pub const DEFAULT_TOGGLE_SELECTOR: &str = r#"button[aria-label="Abrir menú"]"#;
/// iPhone-class user agent presented to the page. Kept byte-for-byte from the
/// recorded runs, malformed `Safari/04.1` tail included.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.3 Mobile/15E148 Safari/04.1";
/// Screenshot artifact path, overwritten on each run.
pub const DEFAULT_OUTPUT_PATH: &str = "mobile_menu_fixed.png";

/// Everything one capture run needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// WebDriver endpoint to attach to (a running Chromedriver).
    pub webdriver_url: String,
    /// Page to open before touching the menu.
    pub target_url: String,
    /// CSS selector for the menu toggle.
    pub selector: String,
    /// User agent presented by the emulated device.
    pub user_agent: String,
    pub viewport: Viewport,
    /// Where the PNG lands; an existing file is overwritten.
    pub output_path: PathBuf,
    pub headless: bool,
    pub settle: SettleConfig,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.into(),
            target_url: DEFAULT_TARGET_URL.into(),
            selector: DEFAULT_TOGGLE_SELECTOR.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            viewport: Viewport::default(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
            headless: true,
            settle: SettleConfig::default(),
        }
    }
}

/// Emulated device metrics. Defaults are the iPhone 12.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Feeds Chrome's `deviceMetrics.pixelRatio`.
    pub device_scale_factor: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 390,
            height: 844,
            device_scale_factor: 3.0,
        }
    }
}

/// How long to let the menu's open transition finish before the screenshot.
///
/// `wait_for: Some(selector)` waits for that element instead of sleeping,
/// which is the sturdier option when the opened menu exposes a stable
/// selector. The plain delay is kept as the default for parity with the
/// original behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    pub wait_for: Option<String>,
    pub delay_ms: u64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            wait_for: None,
            delay_ms: 1000,
        }
    }
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (optional YAML + env overrides).
pub struct CaptureConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for CaptureConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureConfigLoader {
    /// Start from pure defaults plus `MENUCHECK_` env overrides.
    ///
    /// ```
    /// use menucheck_config::{CaptureConfigLoader, DEFAULT_TARGET_URL};
    ///
    /// let cfg = CaptureConfigLoader::new().load().expect("defaults load");
    /// assert_eq!(cfg.target_url, DEFAULT_TARGET_URL);
    /// assert_eq!(cfg.viewport.width, 390);
    /// assert_eq!(cfg.settle.delay_ms, 1000);
    /// ```
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("MENUCHECK").separator("__"));
        Self { builder }
    }

    /// Attach a config file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a config file that may not exist. The binary uses this for
    /// `menucheck.yaml` so a bare invocation still runs on defaults.
    pub fn with_file_if_present<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests to merge inline YAML snippets.
    ///
    /// ```
    /// use menucheck_config::CaptureConfigLoader;
    ///
    /// let cfg = CaptureConfigLoader::new()
    ///     .with_yaml_str("target_url: \"http://localhost:5173\"\nsettle:\n  delay_ms: 250")
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.target_url, "http://localhost:5173");
    /// assert_eq!(cfg.settle.delay_ms, 250);
    /// // Untouched fields keep their defaults.
    /// assert_eq!(cfg.viewport.height, 844);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// Goes through `serde_json::Value` first so `${VAR}` placeholders can be
    /// expanded before the strongly typed structs materialise.
    pub fn load(self) -> Result<CaptureConfig, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: CaptureConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}
