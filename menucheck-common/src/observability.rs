//! Shared `tracing` initialisation.
//!
//! Call [`init_logging`] once near process start. The tool is run
//! interactively, so events always go to `stderr`; a daily-rolling file sink
//! can be enabled on top of that. Repeated calls are no-ops and hand back the
//! originally resolved log directory.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Options passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Logical name of the component (used for file names and the default
    /// log directory).
    pub app_name: &'static str,
    /// Whether to mirror events into a daily-rolling file in addition to
    /// `stderr`.
    pub file_sink: bool,
    /// Explicit log directory. If `None`, `MENUCHECK_LOG_DIR` is consulted,
    /// then `~/.local/share/<app_name>`.
    pub log_dir: Option<PathBuf>,
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            app_name: "menucheck",
            file_sink: false,
            log_dir: None,
            default_filter: "info",
        }
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Returns the log directory when a file sink was requested, `None` for
/// stderr-only setups.
pub fn init_logging(options: LogOptions) -> anyhow::Result<Option<PathBuf>> {
    if let Some(dir) = LOG_DIR.get() {
        return Ok(dir.clone());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_filter));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let resolved_dir = if options.file_sink {
        let dir = resolve_log_dir(options.app_name, options.log_dir.as_deref());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

        let appender = rolling::daily(&dir, format!("{}.log", options.app_name));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()
            .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;
        Some(dir)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;
        None
    };

    let _ = LOG_DIR.set(resolved_dir.clone());
    Ok(resolved_dir)
}

fn resolve_log_dir(app_name: &str, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return expand_home(dir);
    }

    if let Ok(env_dir) = std::env::var("MENUCHECK_LOG_DIR") {
        return expand_home(Path::new(&env_dir));
    }

    default_data_dir(app_name)
}

fn expand_home(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}

fn default_data_dir(app_name: &str) -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(app_name)
    } else {
        PathBuf::from(".").join(app_name)
    }
}
