//! Remote workflow template service.
//!
//! The page controller and the CLI only see the `TemplateService` trait;
//! `ArgoClient` implements it against the Argo Server REST API.

pub mod argo;
pub mod error;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{TemplateSummary, WorkflowTemplate};

pub use argo::ArgoClient;

/// Listing, creation and lookup of workflow templates
#[async_trait]
pub trait TemplateService: Send + Sync {
    /// List templates in `namespace`, or in all namespaces when it is empty.
    ///
    /// Rows come back in server order.
    async fn list(&self, namespace: &str) -> Result<Vec<TemplateSummary>>;

    /// Create a template in `namespace`, returning the stored resource
    async fn create(&self, namespace: &str, template: WorkflowTemplate)
    -> Result<WorkflowTemplate>;

    /// Fetch one template
    async fn get(&self, namespace: &str, name: &str) -> Result<WorkflowTemplate>;
}
