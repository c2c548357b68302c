//! Common types shared across the menucheck crates.
//!
//! The capture flow has no recovery path: every failure is fatal and the only
//! thing the rest of the workspace needs is to know *where* the run died.
//! [`MenucheckError`] names those failure points; [`observability`] centralises
//! `tracing` setup for the binary and integration tests.

use std::path::PathBuf;

pub mod observability;

/// Fatal failure points of a capture run, in the order they can occur.
///
/// Each variant wraps the underlying library error so the original
/// diagnostic stays in the chain; nothing here is retried or recovered.
#[derive(thiserror::Error, Debug)]
pub enum MenucheckError {
    /// The WebDriver service refused or failed to establish a session.
    #[error("could not establish a WebDriver session: {0}")]
    Session(#[source] anyhow::Error),

    /// Navigation to the target URL failed or timed out.
    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// The menu toggle never matched within the library's wait.
    #[error("menu toggle not found for selector {selector:?}: {source}")]
    Toggle {
        selector: String,
        #[source]
        source: anyhow::Error,
    },

    /// The post-click condition wait failed (element-wait mode only).
    #[error("settle wait failed for selector {selector:?}: {source}")]
    Settle {
        selector: String,
        #[source]
        source: anyhow::Error,
    },

    /// The screenshot command itself failed.
    #[error("screenshot capture failed: {0}")]
    Screenshot(#[source] anyhow::Error),

    /// The artifact could not be written to disk.
    #[error("could not write artifact {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration was incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenient alias for results that use [`MenucheckError`].
pub type Result<T> = std::result::Result<T, MenucheckError>;
