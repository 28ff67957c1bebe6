use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

use crate::commands::ShowFormat;

#[derive(Parser)]
#[command(name = "argo-templates")]
#[command(about = "Browse and create Argo Workflows workflow templates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List workflow templates
    #[command(visible_alias = "ls")]
    List {
        /// Namespace to list (empty string for all namespaces)
        #[arg(short, long)]
        namespace: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a workflow template
    Show {
        /// Template as namespace/name
        template: String,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Create a workflow template from a manifest file
    #[command(visible_alias = "c")]
    Create {
        /// Manifest file (YAML or JSON), or - for stdin
        file: PathBuf,

        /// Namespace (overrides metadata.namespace)
        #[arg(short, long)]
        namespace: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive browser
    #[command(visible_alias = "b")]
    Browse {
        /// Location to open, e.g. workflow-templates/prod?sidePanel=true
        location: Option<String>,

        /// Namespace to list when no location is given
        #[arg(short, long, conflicts_with = "location")]
        namespace: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (e.g. server.url)
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (e.g. server.url)
        key: String,

        /// Value to set
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// The browser writes logs to a file instead of stderr
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Browse { .. })
    }

    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_create, cmd_list,
            cmd_show,
        };

        match self {
            Commands::List { namespace, json } => cmd_list(namespace.as_deref(), json).await,
            Commands::Show {
                template,
                json,
                yaml,
            } => {
                let format = match (json, yaml) {
                    (true, _) => ShowFormat::Json,
                    (_, true) => ShowFormat::Yaml,
                    _ => ShowFormat::Text,
                };
                cmd_show(&template, format).await
            }
            Commands::Create {
                file,
                namespace,
                json,
            } => cmd_create(&file, namespace.as_deref(), json).await,
            Commands::Browse {
                location,
                namespace,
            } => cmd_browse(location.as_deref(), namespace.as_deref()).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "argo-templates", &mut io::stdout());
}
