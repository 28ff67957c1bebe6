//! Tracing subscriber setup.
//!
//! The filter comes from `ARGO_TEMPLATES_LOG` using `EnvFilter` syntax and
//! defaults to `warn`. Plain commands log to stderr; the terminal UI owns the
//! screen, so it logs to a file in the data directory instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, TemplateError};

pub const LOG_ENV: &str = "ARGO_TEMPLATES_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Default log file used while the terminal UI is running
pub fn default_log_file() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("io", "argoproj", "argo-templates").ok_or_else(
        || TemplateError::Config("could not determine a home directory".to_string()),
    )?;
    Ok(dirs.data_dir().join("argo-templates.log"))
}

/// Install the global subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    if let Err(e) = installed {
        // Already installed, e.g. by a test harness
        tracing::debug!(error = %e, "tracing subscriber already set");
    }
    Ok(())
}
