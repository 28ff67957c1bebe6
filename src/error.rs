use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("workflow template '{0}' not found")]
    TemplateNotFound(String),

    #[error("invalid template name '{0}': {1}")]
    InvalidName(String, String),

    #[error("invalid location '{0}': {1}")]
    InvalidLocation(String, String),

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
