use anyhow::Result;
use fantoccini::{Client, Locator};
use tracing::info;

/// High-level page wrapper for the handful of interactions a capture needs.
pub struct MenuPage {
    pub(crate) client: Client,
}

impl MenuPage {
    /// Construct a page wrapper around an existing WebDriver client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Navigate to `url`, suspending until the driver reports the load done.
    pub async fn goto(&mut self, url: &str) -> Result<()> {
        info!(target: "capture.navigate", %url, "navigating");
        self.client.goto(url).await.map_err(anyhow::Error::from)
    }

    /// Wait for the element matching `selector` and click it.
    pub async fn click(&self, selector: &str) -> Result<()> {
        let element = self
            .client
            .wait()
            .for_element(Locator::Css(selector))
            .await?;
        element.click().await?;
        Ok(())
    }

    /// Block until an element matching `selector` is present.
    pub async fn wait_for_element(&self, selector: &str) -> Result<()> {
        self.client
            .wait()
            .for_element(Locator::Css(selector))
            .await?;
        Ok(())
    }

    /// Capture the current viewport as PNG bytes.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        self.client.screenshot().await.map_err(anyhow::Error::from)
    }
}
