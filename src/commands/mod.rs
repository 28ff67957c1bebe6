//! Command implementations behind the CLI subcommands.
//!
//! Every command that prints data takes an `output_json` flag; the text form
//! is colored for terminals, the JSON form is stable for scripts.

mod browse;
mod config;
mod create;
mod ls;
mod show;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::cmd_create;
pub use ls::cmd_list;
pub use show::{ShowFormat, cmd_show};

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::remote::{ArgoClient, TemplateService};

/// Print a JSON value, pretty-printed
pub(crate) fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Namespace from the flag, falling back to the configured default
pub(crate) fn resolve_namespace(flag: Option<&str>, config: &Config) -> String {
    match flag.map(str::trim) {
        Some(ns) => ns.to_string(),
        None => config.namespace(),
    }
}

/// Template service for the loaded configuration
pub(crate) fn connect(config: &Config) -> Result<Arc<dyn TemplateService>> {
    Ok(Arc::new(ArgoClient::from_config(config)?))
}
