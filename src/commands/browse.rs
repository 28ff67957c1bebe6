//! `browse` command: the interactive template browser

use std::sync::Arc;

use iocraft::prelude::*;

use super::{connect, resolve_namespace};
use crate::config::Config;
use crate::error::{Result, TemplateError};
use crate::location::{History, ListLocation, MemoryHistory, Route};
use crate::logging::{self, LogTarget};
use crate::tui::TemplatesApp;

/// Starting location: an explicit one, else the listing for the namespace
fn initial_location(location: Option<&str>, namespace: &str) -> Result<String> {
    let location = match location {
        Some(location) => location.trim().trim_start_matches('/').to_string(),
        None => ListLocation::new(namespace, false).to_path(),
    };
    Route::parse(&location)?;
    Ok(location)
}

/// Open the browser at `location` (or the namespace listing)
pub async fn cmd_browse(location: Option<&str>, namespace: Option<&str>) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        return Err(TemplateError::Other(
            "browse needs an interactive terminal; use `list` or `show` instead".to_string(),
        ));
    }

    let config = Config::load()?;
    let namespace = resolve_namespace(namespace, &config);
    let location = initial_location(location, &namespace)?;

    // The TUI owns the terminal, so logs go to a file
    logging::init(LogTarget::File(logging::default_log_file()?))?;
    tracing::info!(location = %location, "starting browser");

    let service = connect(&config)?;
    let history: Arc<dyn History> = Arc::new(MemoryHistory::new(location));

    element!(TemplatesApp(service: Some(service), history: Some(history)))
        .fullscreen()
        .await
        .map_err(|e| TemplateError::Other(format!("TUI error: {e}")))
}
