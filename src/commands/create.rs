//! `create` command: submit a workflow template manifest

use std::io::Read;
use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{connect, print_json};
use crate::config::Config;
use crate::display::format_identity_colored;
use crate::error::{Result, TemplateError};
use crate::location::detail_path;
use crate::types::WorkflowTemplate;

/// Read a manifest from `path`, or from stdin when it is `-`
fn read_manifest(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Pick the target namespace: flag, then manifest, then configured default
fn target_namespace(
    template: &WorkflowTemplate,
    flag: Option<&str>,
    configured: &str,
) -> Result<String> {
    let namespace = flag
        .map(str::trim)
        .filter(|ns| !ns.is_empty())
        .or_else(|| Some(template.metadata.namespace.trim()).filter(|ns| !ns.is_empty()))
        .unwrap_or(configured.trim());

    if namespace.is_empty() {
        return Err(TemplateError::InvalidManifest(
            "no namespace given; pass --namespace or set metadata.namespace".to_string(),
        ));
    }
    Ok(namespace.to_string())
}

/// Create the template described by the manifest at `file`
pub async fn cmd_create(file: &Path, namespace: Option<&str>, output_json: bool) -> Result<()> {
    let content = read_manifest(file)?;
    let mut template = WorkflowTemplate::from_manifest(&content)?;

    let config = Config::load()?;
    let namespace = target_namespace(&template, namespace, &config.namespace())?;
    template.metadata.namespace = namespace.clone();

    let service = connect(&config)?;
    let created = service.create(&namespace, template).await?;
    let identity = created.identity();
    tracing::info!(template = %identity, "template created");

    if output_json {
        return print_json(&json!({
            "namespace": identity.namespace,
            "name": identity.name,
            "location": detail_path(&identity),
            "action": "created",
        }));
    }

    println!(
        "{} {}",
        "Created".green(),
        format_identity_colored(&identity.namespace, &identity.name)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(namespace: &str) -> WorkflowTemplate {
        WorkflowTemplate::from_manifest(&format!(
            "apiVersion: argoproj.io/v1alpha1\nkind: WorkflowTemplate\nmetadata:\n  name: etl-1\n  namespace: \"{namespace}\"\nspec: {{}}\n"
        ))
        .unwrap()
    }

    #[test]
    fn test_flag_overrides_manifest() {
        assert_eq!(
            target_namespace(&manifest("dev"), Some("prod"), "argo").unwrap(),
            "prod"
        );
    }

    #[test]
    fn test_manifest_overrides_config() {
        assert_eq!(target_namespace(&manifest("dev"), None, "argo").unwrap(), "dev");
    }

    #[test]
    fn test_config_is_last_resort() {
        assert_eq!(target_namespace(&manifest(""), Some(" "), "argo").unwrap(), "argo");
    }

    #[test]
    fn test_missing_namespace_is_an_error() {
        let err = target_namespace(&manifest(""), None, "").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidManifest(_)));
    }

    #[test]
    fn test_read_manifest_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("etl.yaml");
        std::fs::write(&path, "kind: WorkflowTemplate\n").unwrap();
        assert_eq!(read_manifest(&path).unwrap(), "kind: WorkflowTemplate\n");
    }
}
