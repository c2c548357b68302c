use menucheck_config::CaptureConfig;
use serde_json::json;
use std::collections::HashMap;
use webdriver::capabilities::Capabilities;

/// Device identity presented to the page: metrics plus user agent.
#[derive(Debug, Clone)]
pub struct MobileProfile {
    pub width: u32,
    pub height: u32,
    pub device_scale_factor: f64,
    pub user_agent: String,
}

impl From<&CaptureConfig> for MobileProfile {
    fn from(config: &CaptureConfig) -> Self {
        Self {
            width: config.viewport.width,
            height: config.viewport.height,
            device_scale_factor: config.viewport.device_scale_factor,
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Chrome command-line arguments for an unattended session.
pub fn build_browser_arguments(headless: bool) -> Vec<String> {
    let mut args = vec![
        "--disable-dev-shm-usage".to_string(),
        "--no-sandbox".to_string(),
    ];
    if headless {
        args.push("--headless=new".to_string());
        args.push("--disable-gpu".to_string());
    }
    args
}

/// Build WebDriver capabilities with Chromedriver mobile emulation.
///
/// Viewport and user agent go through `mobileEmulation` rather than window
/// sizing so the page sees touch-class metrics and the configured UA without
/// any post-connect fixups.
pub fn build_capabilities(profile: &MobileProfile, headless: bool) -> Capabilities {
    let mut caps = Capabilities::new();
    let mut chrome_opts = HashMap::new();

    chrome_opts.insert(
        "args".to_string(),
        json!(build_browser_arguments(headless)),
    );
    chrome_opts.insert(
        "mobileEmulation".to_string(),
        json!({
            "deviceMetrics": {
                "width": profile.width,
                "height": profile.height,
                "pixelRatio": profile.device_scale_factor,
            },
            "userAgent": profile.user_agent,
        }),
    );

    caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));
    caps
}
