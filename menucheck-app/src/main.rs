use anyhow::Result;
use menucheck_common::observability::{init_logging, LogOptions};
use menucheck_common::MenucheckError;
use menucheck_config::{CaptureConfig, CaptureConfigLoader};
use menucheck_driver::menu_browser::capture::run_capture;
use std::path::Path;
use tracing::info;

/// Load the capture configuration, classifying loader failures.
fn load_config<P: AsRef<Path>>(path: P) -> menucheck_common::Result<CaptureConfig> {
    CaptureConfigLoader::new()
        .with_file_if_present(path)
        .load()
        .map_err(|e| MenucheckError::Config(e.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1) Load config: defaults, then menucheck.yaml if present, then env.
    let config = load_config("menucheck.yaml")?;

    init_logging(LogOptions::default())?;

    info!(
        url = %config.target_url,
        selector = %config.selector,
        output = %config.output_path.display(),
        "starting mobile menu capture"
    );

    let report = run_capture(&config).await?;

    info!(
        artifact = %report.artifact.display(),
        bytes = report.bytes_written,
        "capture complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_config_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();

        let config = load_config(tmp.path().join("menucheck.yaml")).expect("defaults load");

        assert_eq!(config.target_url, "http://localhost:3000");
    }

    #[test]
    fn malformed_config_file_is_classified_as_a_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("menucheck.yaml");
        // Wrong shape: settle must be a mapping.
        std::fs::write(&path, "settle: \"not a mapping\"\n").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(matches!(err, MenucheckError::Config(_)));
    }
}
