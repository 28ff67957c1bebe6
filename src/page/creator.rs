//! Workflow template creation form.
//!
//! The form collects a name, target namespace, container image and entrypoint
//! arguments, builds a single-step `WorkflowTemplate` and submits it. Errors
//! stay with the form; only a successful creation is reported to the page.

use serde_json::json;

use crate::error::{Result, TemplateError};
use crate::remote::TemplateService;
use crate::types::{API_VERSION, KIND, ObjectMeta, TemplateIdentity, WorkflowTemplate, validate_name};

pub const DEFAULT_IMAGE: &str = "argoproj/argosay:v2";
pub const ENTRYPOINT: &str = "main";

/// Focusable fields of the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatorField {
    #[default]
    Name,
    Namespace,
    Image,
    Args,
}

impl CreatorField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            CreatorField::Name => CreatorField::Namespace,
            CreatorField::Namespace => CreatorField::Image,
            CreatorField::Image => CreatorField::Args,
            CreatorField::Args => CreatorField::Name,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            CreatorField::Name => CreatorField::Args,
            CreatorField::Namespace => CreatorField::Name,
            CreatorField::Image => CreatorField::Namespace,
            CreatorField::Args => CreatorField::Image,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CreatorField::Name => "Name",
            CreatorField::Namespace => "Namespace",
            CreatorField::Image => "Image",
            CreatorField::Args => "Args",
        }
    }
}

/// Values entered into the creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorForm {
    pub name: String,
    pub namespace: String,
    pub image: String,
    /// Whitespace-separated container arguments
    pub args: String,
}

impl CreatorForm {
    /// Blank form defaulting to the page's namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            namespace: namespace.into(),
            image: DEFAULT_IMAGE.to_string(),
            args: String::new(),
        }
    }

    pub fn value(&self, field: CreatorField) -> &str {
        match field {
            CreatorField::Name => &self.name,
            CreatorField::Namespace => &self.namespace,
            CreatorField::Image => &self.image,
            CreatorField::Args => &self.args,
        }
    }

    pub fn set_value(&mut self, field: CreatorField, value: String) {
        match field {
            CreatorField::Name => self.name = value,
            CreatorField::Namespace => self.namespace = value,
            CreatorField::Image => self.image = value,
            CreatorField::Args => self.args = value,
        }
    }

    /// Validate the form and build the manifest to submit
    pub fn build(&self) -> Result<WorkflowTemplate> {
        let name = self.name.trim();
        validate_name(name)?;

        let namespace = self.namespace.trim();
        if namespace.is_empty() {
            return Err(TemplateError::InvalidManifest(
                "a namespace is required to create a template".to_string(),
            ));
        }

        let image = self.image.trim();
        if image.is_empty() {
            return Err(TemplateError::InvalidManifest(
                "a container image is required".to_string(),
            ));
        }

        let mut container = json!({ "image": image });
        let args: Vec<&str> = self.args.split_whitespace().collect();
        if !args.is_empty() {
            container["args"] = json!(args);
        }

        Ok(WorkflowTemplate {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: ObjectMeta {
                name: name.to_string(),
                namespace: namespace.to_string(),
                ..Default::default()
            },
            spec: json!({
                "entrypoint": ENTRYPOINT,
                "templates": [{ "name": ENTRYPOINT, "container": container }],
            }),
        })
    }
}

/// Build and submit the form, returning the created template's identity.
///
/// The server may fill in or normalise metadata; its answer wins, falling
/// back to the submitted values for anything it leaves blank.
pub async fn submit(service: &dyn TemplateService, form: &CreatorForm) -> Result<TemplateIdentity> {
    let template = form.build()?;
    let submitted = template.identity();

    let created = service.create(&submitted.namespace, template).await?;
    let identity = TemplateIdentity::new(
        non_empty_or(created.metadata.namespace, submitted.namespace),
        non_empty_or(created.metadata.name, submitted.name),
    );
    tracing::info!(template = %identity, "template created");
    Ok(identity)
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() { fallback } else { value }
}
