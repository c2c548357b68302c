use crate::menu_browser::{
    capabilities::{build_capabilities, MobileProfile},
    page::MenuPage,
};
use anyhow::Result;
use fantoccini::{Client, ClientBuilder};
use tracing::info;

/// Thin wrapper around a `fantoccini` WebDriver client configured for
/// mobile emulation.
pub struct MenuDriver {
    pub client: Client,
}

impl MenuDriver {
    /// Create a new driver connected to a running WebDriver service.
    ///
    /// Default deployment: Chromedriver on `http://localhost:9515`. The
    /// browser process itself is the service's to manage; we only hold the
    /// session.
    pub async fn connect(
        webdriver_url: &str,
        profile: &MobileProfile,
        headless: bool,
    ) -> Result<Self> {
        let caps = build_capabilities(profile, headless);

        info!(
            target: "capture.session",
            %webdriver_url,
            width = profile.width,
            height = profile.height,
            "establishing WebDriver session"
        );
        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;

        Ok(Self { client })
    }

    /// Navigate to `url` and return a [`MenuPage`] for further interaction.
    pub async fn goto(&mut self, url: &str) -> Result<MenuPage> {
        let mut page = MenuPage::new(self.client.clone());
        page.goto(url).await?;
        Ok(page)
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}
