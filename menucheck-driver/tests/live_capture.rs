//! End-to-end tests against a real Chromedriver.
//!
//! All tests here are `#[ignore]`d: they need a Chromedriver listening on
//! `http://localhost:9515` and, for the happy path, the dev server on
//! `http://localhost:3000` serving a page with the mobile menu toggle.
//!
//! Run with: `cargo test -p menucheck-driver -- --ignored`

use menucheck_common::MenucheckError;
use menucheck_config::CaptureConfig;
use menucheck_driver::menu_browser::capture::run_capture;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[tokio::test]
#[ignore = "requires chromedriver on :9515 and the dev server on :3000"]
async fn happy_path_produces_a_png_and_overwrites_on_rerun() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = CaptureConfig::default();
    config.output_path = tmp.path().join("mobile_menu_fixed.png");

    let first = run_capture(&config).await.expect("first capture");
    let first_bytes = std::fs::read(&first.artifact).unwrap();
    assert!(first_bytes.len() > PNG_MAGIC.len());
    assert_eq!(&first_bytes[..PNG_MAGIC.len()], PNG_MAGIC);

    // Second run must overwrite, not error or append.
    let second = run_capture(&config).await.expect("second capture");
    assert_eq!(second.artifact, first.artifact);
    let second_bytes = std::fs::read(&second.artifact).unwrap();
    assert_eq!(&second_bytes[..PNG_MAGIC.len()], PNG_MAGIC);
}

#[tokio::test]
#[ignore = "requires chromedriver on :9515"]
async fn unreachable_target_fails_at_navigation_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = CaptureConfig::default();
    // Nothing should be listening here.
    config.target_url = "http://localhost:59999".into();
    config.output_path = tmp.path().join("mobile_menu_fixed.png");

    let err = run_capture(&config).await.unwrap_err();

    assert!(matches!(err, MenucheckError::Navigation { .. }));
    assert!(!config.output_path.exists());
}

#[tokio::test]
#[ignore = "requires chromedriver on :9515; waits out the 30s element timeout"]
async fn missing_toggle_fails_at_the_selector_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = CaptureConfig::default();
    // A page that loads fine but has no menu toggle.
    config.target_url = "data:text/html,<html><body><p>no menu here</p></body></html>".into();
    config.output_path = tmp.path().join("mobile_menu_fixed.png");
    config.settle.delay_ms = 0;

    let err = run_capture(&config).await.unwrap_err();

    assert!(matches!(err, MenucheckError::Toggle { .. }));
    assert!(!config.output_path.exists());
}

#[tokio::test]
#[ignore = "fails fast when no chromedriver is listening"]
async fn unreachable_webdriver_fails_at_session_establishment() {
    let mut config = CaptureConfig::default();
    config.webdriver_url = "http://localhost:59998".into();

    let err = run_capture(&config).await.unwrap_err();

    assert!(matches!(err, MenucheckError::Session(_)));
}
