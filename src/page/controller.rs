//! Page controller for the workflow template listing.
//!
//! Owns the `PageState` and the two collaborators it drives: the template
//! service for listing calls and the history for location writes. All state
//! changes go through here so the location always mirrors
//! `(namespace, panel visibility)` and listing results land in
//! namespace-change order.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::location::{History, ListLocation, detail_path};
use crate::remote::TemplateService;
use crate::types::TemplateIdentity;

use super::state::{FetchApplied, FetchRequest, PageState};

pub struct TemplateListController {
    state: Mutex<PageState>,
    service: Arc<dyn TemplateService>,
    history: Arc<dyn History>,
    revision: watch::Sender<u64>,
}

impl TemplateListController {
    /// Mount the page at the history's current location.
    ///
    /// Seeds the filter and panel from the location, pushes the canonical
    /// location if the current one is not already canonical, and returns the
    /// initial listing call for the caller to run.
    pub fn mount(
        service: Arc<dyn TemplateService>,
        history: Arc<dyn History>,
    ) -> Result<(Arc<Self>, FetchRequest)> {
        let current = history.current();
        let location = ListLocation::parse(&current)?;

        let mut state = PageState::seed(&location);
        if location.to_path() == current {
            state.mark_synced();
        }
        let request = state.issue_fetch();

        tracing::debug!(
            location = %current,
            namespace = %location.namespace,
            side_panel = location.side_panel,
            "mounted template list"
        );

        let (revision, _) = watch::channel(0);
        let controller = Arc::new(Self {
            state: Mutex::new(state),
            service,
            history,
            revision,
        });
        controller.update(|_| ());
        Ok((controller, request))
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> PageState {
        self.state.lock().clone()
    }

    /// Receive a new revision number after every state change
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Mutate state, then sync the location and notify subscribers.
    ///
    /// The history write happens under the state lock so pushes are ordered
    /// exactly like the state changes that caused them.
    fn update<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        let mut state = self.state.lock();
        let result = f(&mut state);
        if let Some(path) = state.take_location_update() {
            tracing::debug!(%path, "syncing location");
            self.history.push(&path);
        }
        drop(state);
        self.revision.send_modify(|r| *r += 1);
        result
    }

    /// Change the namespace filter, returning the listing call to run if it changed
    pub fn set_namespace(&self, namespace: &str) -> Option<FetchRequest> {
        let request = self.update(|state| state.set_namespace(namespace));
        if let Some(request) = &request {
            tracing::info!(
                namespace = %request.namespace,
                generation = request.generation,
                "namespace filter changed"
            );
        }
        request
    }

    /// Run a listing call and apply its result if it is still the latest
    pub async fn fetch(&self, request: FetchRequest) -> FetchApplied {
        tracing::debug!(
            namespace = %request.namespace,
            generation = request.generation,
            "listing workflow templates"
        );
        let outcome = self.service.list(&request.namespace).await;
        if let Err(error) = &outcome {
            tracing::warn!(namespace = %request.namespace, %error, "listing failed");
        }

        let applied = self.update(|state| state.apply_fetch(&request, outcome));
        if applied == FetchApplied::Stale {
            tracing::debug!(
                namespace = %request.namespace,
                generation = request.generation,
                "dropped stale listing result"
            );
        }
        applied
    }

    /// Run a listing call in the background
    pub fn spawn_fetch(self: &Arc<Self>, request: FetchRequest) -> JoinHandle<FetchApplied> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.fetch(request).await })
    }

    pub fn open_panel(&self) {
        self.update(PageState::open_panel);
    }

    pub fn close_panel(&self) {
        self.update(PageState::close_panel);
    }

    /// Creation succeeded: close the panel, then navigate to the new template.
    ///
    /// Returns the detail path navigated to.
    pub fn template_created(&self, identity: &TemplateIdentity) -> String {
        self.close_panel();
        let path = detail_path(identity);
        tracing::info!(template = %identity, %path, "opening created template");
        self.history.goto(&path);
        path
    }

    /// Navigate to the detail page of the row under the cursor
    pub fn open_selected(&self) -> Option<String> {
        let identity = self.state.lock().selected()?.identity();
        let path = detail_path(&identity);
        self.history.goto(&path);
        Some(path)
    }

    /// Apply a cursor movement
    pub fn navigate(&self, f: impl FnOnce(&mut PageState)) {
        self.update(f);
    }
}
