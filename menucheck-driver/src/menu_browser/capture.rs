use crate::menu_browser::{capabilities::MobileProfile, driver::MenuDriver, page::MenuPage};
use anyhow::Result;
use async_trait::async_trait;
use menucheck_common::MenucheckError;
use menucheck_config::{CaptureConfig, SettleConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// What a finished run leaves behind.
#[derive(Debug, Clone)]
pub struct CaptureReport {
    pub artifact: PathBuf,
    pub bytes_written: usize,
}

/// The page operations the capture sequence performs, as a seam.
///
/// [`MenuPage`] is the real implementation; tests drive the sequence with a
/// recording mock to pin the click → settle → screenshot ordering without a
/// browser.
#[async_trait]
pub trait MenuSurface {
    /// Wait for the menu toggle and click it.
    async fn open_menu(&mut self, selector: &str) -> Result<()>;
    /// Block until an element matching `selector` is present.
    async fn wait_for_element(&mut self, selector: &str) -> Result<()>;
    /// Capture the current viewport as PNG bytes.
    async fn screenshot(&mut self) -> Result<Vec<u8>>;
}

#[async_trait]
impl MenuSurface for MenuPage {
    async fn open_menu(&mut self, selector: &str) -> Result<()> {
        MenuPage::click(self, selector).await
    }

    async fn wait_for_element(&mut self, selector: &str) -> Result<()> {
        MenuPage::wait_for_element(self, selector).await
    }

    async fn screenshot(&mut self) -> Result<Vec<u8>> {
        MenuPage::screenshot(self).await
    }
}

/// Execute one capture run end to end.
///
/// Strict order: session, navigate, toggle, settle, screenshot, artifact.
/// The WebDriver session is released on every exit path; a failed close on
/// the error path is swallowed so the classified capture error is what the
/// caller sees.
pub async fn run_capture(config: &CaptureConfig) -> menucheck_common::Result<CaptureReport> {
    let profile = MobileProfile::from(config);
    let mut driver = MenuDriver::connect(&config.webdriver_url, &profile, config.headless)
        .await
        .map_err(MenucheckError::Session)?;

    let result = drive_capture(&mut driver, config).await;
    let _ = driver.close().await;
    result
}

async fn drive_capture(
    driver: &mut MenuDriver,
    config: &CaptureConfig,
) -> menucheck_common::Result<CaptureReport> {
    let mut page = driver
        .goto(&config.target_url)
        .await
        .map_err(|source| MenucheckError::Navigation {
            url: config.target_url.clone(),
            source,
        })?;

    let png = capture_menu(&mut page, config).await?;
    let bytes_written = write_artifact(&config.output_path, &png).await?;
    info!(
        target: "capture.artifact",
        path = %config.output_path.display(),
        bytes = bytes_written,
        "artifact written"
    );

    Ok(CaptureReport {
        artifact: config.output_path.clone(),
        bytes_written,
    })
}

/// Click the toggle, let the transition settle, and return the screenshot.
///
/// Generic over [`MenuSurface`] so the ordering is testable; the screenshot
/// is taken strictly after both the click and the settle step.
pub async fn capture_menu<S: MenuSurface + Send>(
    surface: &mut S,
    config: &CaptureConfig,
) -> menucheck_common::Result<Vec<u8>> {
    info!(target: "capture.toggle", selector = %config.selector, "clicking menu toggle");
    surface
        .open_menu(&config.selector)
        .await
        .map_err(|source| MenucheckError::Toggle {
            selector: config.selector.clone(),
            source,
        })?;

    settle(surface, &config.settle).await?;

    info!(target: "capture.screenshot", "capturing viewport");
    surface
        .screenshot()
        .await
        .map_err(MenucheckError::Screenshot)
}

async fn settle<S: MenuSurface + Send + ?Sized>(
    surface: &mut S,
    settle: &SettleConfig,
) -> menucheck_common::Result<()> {
    match &settle.wait_for {
        Some(selector) => {
            info!(target: "capture.settle", %selector, "waiting for opened-menu element");
            surface
                .wait_for_element(selector)
                .await
                .map_err(|source| MenucheckError::Settle {
                    selector: selector.clone(),
                    source,
                })
        }
        None => {
            // Parity fallback: no completion signal to observe, so outwait
            // the animation.
            info!(target: "capture.settle", delay_ms = settle.delay_ms, "fixed settle delay");
            sleep(Duration::from_millis(settle.delay_ms)).await;
            Ok(())
        }
    }
}

/// Write the PNG bytes to `path`, replacing any previous artifact.
pub async fn write_artifact(path: &Path, bytes: &[u8]) -> menucheck_common::Result<usize> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| MenucheckError::Artifact {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes.len())
}
