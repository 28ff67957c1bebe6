//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or the file named by `ARGO_TEMPLATES_CONFIG`) and includes:
//! - Argo Server URL and bearer token
//! - TLS verification toggle
//! - Default namespace for listings
//! - Request timeout
//!
//! `ARGO_SERVER`, `ARGO_TOKEN` and `ARGO_NAMESPACE` override the file, the
//! same variables the argo CLI reads.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};

pub const CONFIG_PATH_ENV: &str = "ARGO_TEMPLATES_CONFIG";
pub const SERVER_ENV: &str = "ARGO_SERVER";
pub const TOKEN_ENV: &str = "ARGO_TOKEN";
pub const NAMESPACE_ENV: &str = "ARGO_NAMESPACE";

const DEFAULT_SERVER_URL: &str = "https://localhost:2746";

/// Keys accepted by `config get` / `config set`
pub const VALID_KEYS: &[&str] = &[
    "server.url",
    "server.token",
    "server.insecure_skip_verify",
    "default_namespace",
    "request_timeout",
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Argo Server connection
    #[serde(default)]
    pub server: ServerConfig,

    /// Namespace used when none is given (empty = all namespaces)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            default_namespace: None,
            request_timeout: default_request_timeout(),
        }
    }
}

/// Argo Server connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the Argo Server
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Accept self-signed certificates
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            token: None,
            insecure_skip_verify: false,
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .finish()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        let dirs = directories::ProjectDirs::from("io", "argoproj", "argo-templates").ok_or_else(
            || TemplateError::Config("could not determine a home directory".to_string()),
        )?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            TemplateError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                TemplateError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            TemplateError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Owner read/write only; the file may hold a token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(path, permissions)?;
        }

        Ok(())
    }

    /// Server URL from environment or config, without a trailing slash
    pub fn server_url(&self) -> String {
        let url = env_override(SERVER_ENV).unwrap_or_else(|| self.server.url.clone());
        url.trim_end_matches('/').to_string()
    }

    /// Bearer token from environment or config
    pub fn token(&self) -> Option<SecretString> {
        env_override(TOKEN_ENV)
            .or_else(|| self.server.token.clone())
            .map(SecretString::from)
    }

    /// Namespace used when the user gives none
    pub fn namespace(&self) -> String {
        env_override(NAMESPACE_ENV)
            .or_else(|| self.default_namespace.clone())
            .unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Read a value by dotted key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "server.url" => Some(self.server.url.clone()),
            "server.token" => self.server.token.clone(),
            "server.insecure_skip_verify" => Some(self.server.insecure_skip_verify.to_string()),
            "default_namespace" => self.default_namespace.clone(),
            "request_timeout" => Some(self.request_timeout.to_string()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server.url" => {
                let parsed = url::Url::parse(value).map_err(|e| {
                    TemplateError::Config(format!("invalid server URL '{value}': {e}"))
                })?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(TemplateError::Config(format!(
                        "server URL must use http or https, got '{}'",
                        parsed.scheme()
                    )));
                }
                self.server.url = value.trim_end_matches('/').to_string();
            }
            "server.token" => self.server.token = non_empty(value),
            "server.insecure_skip_verify" => {
                self.server.insecure_skip_verify = value.parse().map_err(|_| {
                    TemplateError::Config(format!("expected true or false, got '{value}'"))
                })?;
            }
            "default_namespace" => self.default_namespace = non_empty(value),
            "request_timeout" => {
                let secs: u64 = value.parse().map_err(|_| {
                    TemplateError::Config(format!("expected a number of seconds, got '{value}'"))
                })?;
                if secs == 0 {
                    return Err(TemplateError::Config(
                        "request_timeout must be greater than zero".to_string(),
                    ));
                }
                self.request_timeout = secs;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn env_override(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn unknown_key(key: &str) -> TemplateError {
    TemplateError::Config(format!(
        "unknown config key '{key}', valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}
