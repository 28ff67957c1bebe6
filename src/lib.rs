pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod location;
pub mod logging;
pub mod page;
pub mod remote;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{Result, TemplateError};
pub use location::{History, ListLocation, MemoryHistory, Route};
pub use page::TemplateListController;
pub use remote::{ArgoClient, TemplateService};
pub use types::{TemplateIdentity, TemplateSummary, WorkflowTemplate};
