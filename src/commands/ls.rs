//! `list` command: print the templates of a namespace

use jiff::Timestamp;
use owo_colors::OwoColorize;
use serde_json::json;

use super::{connect, print_json, resolve_namespace};
use crate::config::Config;
use crate::display::format_summary_table;
use crate::error::Result;

/// List workflow templates in `namespace` (all namespaces when empty)
pub async fn cmd_list(namespace: Option<&str>, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let namespace = resolve_namespace(namespace, &config);
    let service = connect(&config)?;

    let templates = service.list(&namespace).await?;
    tracing::debug!(namespace = %namespace, count = templates.len(), "listed templates");

    if output_json {
        return print_json(&json!(templates));
    }

    if templates.is_empty() {
        let scope = if namespace.is_empty() {
            "any namespace".to_string()
        } else {
            format!("namespace '{namespace}'")
        };
        println!("{}", format!("No workflow templates in {scope}").dimmed());
        return Ok(());
    }

    println!("{}", format_summary_table(&templates, Timestamp::now()));
    Ok(())
}
