//! Browser layer for the mobile menu capture.
//!
//! Everything the tool does against the browser lives here:
//!
//! - [`menu_browser::capabilities`]: mobile-emulation WebDriver capabilities
//! - [`menu_browser::driver::MenuDriver`]: WebDriver client wrapper
//! - [`menu_browser::page::MenuPage`]: navigation, click, wait, screenshot
//! - [`menu_browser::capture`]: the one-shot capture flow and its trait seam
pub mod menu_browser;
