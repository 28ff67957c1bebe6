//! `show` command: print one template

use owo_colors::OwoColorize;

use super::{connect, print_json};
use crate::config::Config;
use crate::display::{format_date_for_display, format_field, format_identity_colored};
use crate::error::Result;
use crate::location::detail_path;
use crate::tui::templates::manifest_lines;
use crate::types::TemplateIdentity;

/// Output format for `show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    /// Metadata summary followed by the manifest
    #[default]
    Text,
    Json,
    Yaml,
}

/// Show the template named `namespace/name`
pub async fn cmd_show(target: &str, format: ShowFormat) -> Result<()> {
    let identity = TemplateIdentity::parse(target)?;
    let config = Config::load()?;
    let service = connect(&config)?;

    let template = service.get(&identity.namespace, &identity.name).await?;

    match format {
        ShowFormat::Json => print_json(&serde_json::to_value(&template)?),
        ShowFormat::Yaml => {
            print!("{}", serde_yaml_ng::to_string(&template)?);
            Ok(())
        }
        ShowFormat::Text => {
            let meta = &template.metadata;
            println!("{}", format_identity_colored(&meta.namespace, &meta.name).bold());
            println!("{}", format_field("Location", &detail_path(&identity)));
            if let Some(created) = &meta.creation_timestamp {
                println!("{}", format_field("Created", &format_date_for_display(created)));
            }
            if let Some(uid) = &meta.uid {
                println!("{}", format_field("UID", uid));
            }
            if !meta.labels.is_empty() {
                let labels: Vec<String> =
                    meta.labels.iter().map(|(k, v)| format!("{k}={v}")).collect();
                println!("{}", format_field("Labels", &labels.join(", ")));
            }
            println!();
            for line in manifest_lines(&template)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}
