//! Configuration commands.
//!
//! - `config show`: display the effective configuration
//! - `config get`: print one value
//! - `config set`: change one value and save

use owo_colors::OwoColorize;
use secrecy::ExposeSecret;
use serde_json::json;

use super::print_json;
use crate::config::{Config, VALID_KEYS};
use crate::error::{Result, TemplateError};

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

fn is_sensitive(key: &str) -> bool {
    key == "server.token"
}

/// Reject unknown keys, suggesting dot notation for `server_url` style input
fn validate_config_key(key: &str) -> Result<&str> {
    if VALID_KEYS.contains(&key) {
        return Ok(key);
    }
    if let Some(rest) = key.strip_prefix("server_") {
        return Err(TemplateError::Config(format!(
            "invalid config key '{key}'. Use dot notation: 'server.{rest}'"
        )));
    }
    Err(TemplateError::Config(format!(
        "invalid config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    )))
}

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let config_file = Config::config_path()?;
    let token = config.token();
    let namespace = config.namespace();

    if output_json {
        return print_json(&json!({
            "server": {
                "url": config.server_url(),
                "token_configured": token.is_some(),
                "insecure_skip_verify": config.server.insecure_skip_verify,
            },
            "default_namespace": namespace,
            "request_timeout": config.request_timeout,
            "config_file": config_file.to_string_lossy(),
        }));
    }

    println!("{}\n", "Configuration:".cyan().bold());
    println!("{}:", "server".cyan());
    println!("  url: {}", config.server_url());
    match &token {
        Some(token) => println!("  token: {}", mask_sensitive_value(token.expose_secret())),
        None => println!("  token: {}", "not set".dimmed()),
    }
    println!("  insecure_skip_verify: {}", config.server.insecure_skip_verify);
    if namespace.is_empty() {
        println!("{}: {}", "default_namespace".cyan(), "all namespaces".dimmed());
    } else {
        println!("{}: {}", "default_namespace".cyan(), namespace);
    }
    println!("{}: {}s", "request_timeout".cyan(), config.request_timeout);
    println!("\n{} {}", "Config file:".dimmed(), config_file.display());

    Ok(())
}

/// Print one configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let key = validate_config_key(key)?;
    let config = Config::load()?;
    let value = config.get(key)?;

    let shown = match (&value, is_sensitive(key)) {
        (Some(v), true) => Some(mask_sensitive_value(v)),
        (v, _) => v.clone(),
    };

    if output_json {
        return print_json(&json!({ "key": key, "value": shown }));
    }

    match shown {
        Some(v) => println!("{v}"),
        None => println!("{}", "not set".dimmed()),
    }
    Ok(())
}

/// Set one configuration value and save
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let key = validate_config_key(key)?;
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::info!(key, "configuration updated");

    let shown = if is_sensitive(key) {
        mask_sensitive_value(value)
    } else {
        value.to_string()
    };

    if output_json {
        return print_json(&json!({ "key": key, "value": shown, "action": "set" }));
    }

    println!("Set {} = {}", key.cyan(), shown);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_sensitive_value() {
        assert_eq!(mask_sensitive_value("Bearer-abcdef"), "Be...ef");
        assert_eq!(mask_sensitive_value("abcd"), "****");
        assert_eq!(mask_sensitive_value(""), "****");
    }

    #[test]
    fn test_validate_config_key() {
        assert!(validate_config_key("server.url").is_ok());
        assert!(validate_config_key("default_namespace").is_ok());

        let err = validate_config_key("server_url").unwrap_err().to_string();
        assert!(err.contains("server.url"));

        let err = validate_config_key("colour").unwrap_err().to_string();
        assert!(err.contains("request_timeout"));
    }
}
