//! In-memory `TemplateService` for driving the page controller in tests.
//!
//! Listing calls either answer immediately from a canned response or, when
//! the service is gated, park until the test releases them. Gating lets a
//! test resolve calls in any order it likes.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};

use argo_templates::error::{Result, TemplateError};
use argo_templates::remote::TemplateService;
use argo_templates::types::{TemplateSummary, WorkflowTemplate};

type ListReply = std::result::Result<Vec<TemplateSummary>, String>;

struct Parked {
    namespace: String,
    reply: oneshot::Sender<ListReply>,
}

pub struct FakeTemplateService {
    gated: bool,
    lists: Mutex<HashMap<String, ListReply>>,
    parked: Mutex<Vec<Parked>>,
    list_calls: Mutex<Vec<String>>,
    call_count: watch::Sender<usize>,
    created: Mutex<Vec<WorkflowTemplate>>,
    create_error: Mutex<Option<String>>,
}

impl FakeTemplateService {
    /// Answers listing calls immediately (empty unless configured)
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Parks listing calls until `release` is called for their namespace
    pub fn gated() -> Self {
        Self::build(true)
    }

    fn build(gated: bool) -> Self {
        let (call_count, _) = watch::channel(0);
        Self {
            gated,
            lists: Mutex::new(HashMap::new()),
            parked: Mutex::new(Vec::new()),
            list_calls: Mutex::new(Vec::new()),
            call_count,
            created: Mutex::new(Vec::new()),
            create_error: Mutex::new(None),
        }
    }

    /// Canned templates for a namespace
    pub fn with_templates(self, namespace: &str, templates: Vec<TemplateSummary>) -> Self {
        self.lists.lock().insert(namespace.to_string(), Ok(templates));
        self
    }

    /// Canned failure for a namespace
    pub fn with_list_error(self, namespace: &str, message: &str) -> Self {
        self.lists
            .lock()
            .insert(namespace.to_string(), Err(message.to_string()));
        self
    }

    /// Make every creation fail with `message`
    pub fn with_create_error(self, message: &str) -> Self {
        *self.create_error.lock() = Some(message.to_string());
        self
    }

    /// Namespaces of every listing call, in call order
    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().clone()
    }

    pub fn created(&self) -> Vec<WorkflowTemplate> {
        self.created.lock().clone()
    }

    /// Wait until at least `count` listing calls have started
    pub async fn wait_for_calls(&self, count: usize) {
        let mut rx = self.call_count.subscribe();
        rx.wait_for(|n| *n >= count)
            .await
            .expect("call counter closed");
    }

    /// Resolve the oldest parked call for `namespace`
    pub fn release(&self, namespace: &str, reply: ListReply) {
        let mut parked = self.parked.lock();
        let index = parked
            .iter()
            .position(|p| p.namespace == namespace)
            .unwrap_or_else(|| panic!("no parked listing call for '{namespace}'"));
        let call = parked.remove(index);
        let _ = call.reply.send(reply);
    }
}

impl Default for FakeTemplateService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateService for FakeTemplateService {
    async fn list(&self, namespace: &str) -> Result<Vec<TemplateSummary>> {
        self.list_calls.lock().push(namespace.to_string());

        let reply = if self.gated {
            let (tx, rx) = oneshot::channel();
            self.parked.lock().push(Parked {
                namespace: namespace.to_string(),
                reply: tx,
            });
            self.call_count.send_modify(|n| *n += 1);
            rx.await
                .map_err(|_| TemplateError::Other("listing call dropped".to_string()))?
        } else {
            self.call_count.send_modify(|n| *n += 1);
            self.lists
                .lock()
                .get(namespace)
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        };

        reply.map_err(TemplateError::Other)
    }

    async fn create(
        &self,
        namespace: &str,
        mut template: WorkflowTemplate,
    ) -> Result<WorkflowTemplate> {
        if let Some(message) = self.create_error.lock().clone() {
            return Err(TemplateError::Api {
                status: 409,
                message,
            });
        }
        template.metadata.namespace = namespace.to_string();
        template.metadata.uid = Some("0b5a1d3e-uid".to_string());
        template.metadata.creation_timestamp = Some("2024-06-01T12:00:00Z".to_string());
        self.created.lock().push(template.clone());
        Ok(template)
    }

    async fn get(&self, namespace: &str, name: &str) -> Result<WorkflowTemplate> {
        self.created
            .lock()
            .iter()
            .find(|t| t.metadata.namespace == namespace && t.metadata.name == name)
            .cloned()
            .ok_or_else(|| TemplateError::TemplateNotFound(format!("{namespace}/{name}")))
    }
}

/// A listing row with a fixed creation time
pub fn summary(namespace: &str, name: &str) -> TemplateSummary {
    TemplateSummary {
        name: name.to_string(),
        namespace: namespace.to_string(),
        creation_timestamp: Some("2024-05-01T12:00:00Z".to_string()),
    }
}
