//! Workflow template data types.
//!
//! `WorkflowTemplate` mirrors the Argo resource closely enough to round-trip
//! through the Argo Server API; the `spec` body is kept as opaque JSON.
//! `TemplateSummary` is the listing row the page controller works with.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};

pub const API_VERSION: &str = "argoproj.io/v1alpha1";
pub const KIND: &str = "WorkflowTemplate";

/// Kubernetes object names are DNS-1123 subdomains.
const MAX_NAME_LEN: usize = 253;

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("valid name regex")
});

/// Object metadata subset used by this tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// A full workflow template resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTemplate {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: serde_json::Value,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    KIND.to_string()
}

impl WorkflowTemplate {
    /// Identity of this template
    pub fn identity(&self) -> TemplateIdentity {
        TemplateIdentity::new(&self.metadata.namespace, &self.metadata.name)
    }

    /// Listing row for this template
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            name: self.metadata.name.clone(),
            namespace: self.metadata.namespace.clone(),
            creation_timestamp: self.metadata.creation_timestamp.clone(),
        }
    }

    /// Parse a manifest from YAML or JSON text.
    ///
    /// JSON is a subset of YAML, so a single YAML parse covers both.
    pub fn from_manifest(content: &str) -> Result<Self> {
        let template: WorkflowTemplate = serde_yaml_ng::from_str(content)?;
        if template.kind != KIND {
            return Err(TemplateError::InvalidManifest(format!(
                "expected kind {KIND}, found {}",
                template.kind
            )));
        }
        validate_name(&template.metadata.name)?;
        Ok(template)
    }
}

/// Namespace + name pair identifying a template
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateIdentity {
    pub namespace: String,
    pub name: String,
}

impl TemplateIdentity {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse "namespace/name"
    pub fn parse(s: &str) -> Result<Self> {
        let (namespace, name) = s.trim().split_once('/').ok_or_else(|| {
            TemplateError::InvalidName(s.to_string(), "expected <namespace>/<name>".to_string())
        })?;
        if namespace.is_empty() || name.is_empty() {
            return Err(TemplateError::InvalidName(
                s.to_string(),
                "namespace and name cannot be empty".to_string(),
            ));
        }
        Ok(Self::new(namespace, name))
    }
}

impl fmt::Display for TemplateIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// One row of a template listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub name: String,
    pub namespace: String,
    pub creation_timestamp: Option<String>,
}

impl TemplateSummary {
    /// Identity key, unique within a listing
    pub fn key(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }

    pub fn identity(&self) -> TemplateIdentity {
        TemplateIdentity::new(&self.namespace, &self.name)
    }
}

/// Validate a template name as a DNS-1123 subdomain
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TemplateError::InvalidName(
            name.to_string(),
            "name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(TemplateError::InvalidName(
            name.to_string(),
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    if !NAME_RE.is_match(name) {
        return Err(TemplateError::InvalidName(
            name.to_string(),
            "must consist of lower case alphanumeric characters, '-' or '.', and start and end with an alphanumeric character".to_string(),
        ));
    }
    Ok(())
}
