//! Pure state of the template listing page.
//!
//! Every transition is a plain method on `PageState` so the rules for
//! location sync, fetch ordering and panel visibility can be tested without
//! any I/O. `TemplateListController` wraps this with the services.

use std::sync::Arc;

use crate::error::{Result, TemplateError};
use crate::location::ListLocation;
use crate::tui::navigation::ListCursor;
use crate::types::TemplateSummary;

/// Namespace filter; empty means all namespaces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub namespace: String,
}

/// Creation side panel visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub visible: bool,
}

/// Outcome of the most recently applied listing call
#[derive(Debug, Clone, Default)]
pub enum FetchResult {
    /// No listing call has completed yet
    #[default]
    NotFetched,
    Success(Vec<TemplateSummary>),
    Failure(Arc<TemplateError>),
}

impl FetchResult {
    pub fn templates(&self) -> Option<&[TemplateSummary]> {
        match self {
            FetchResult::Success(templates) => Some(templates.as_slice()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&TemplateError> {
        match self {
            FetchResult::Failure(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// A listing call that has been issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonically increasing per page; only the latest is applied
    pub generation: u64,
    pub namespace: String,
}

/// Whether a completed call changed the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    Applied,
    /// A newer request was issued before this one resolved
    Stale,
}

/// Full page state
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub filter: FilterState,
    pub panel: PanelState,
    pub fetch: FetchResult,
    /// Latest issued request, until it resolves
    pub in_flight: Option<FetchRequest>,
    /// Selected row and scroll window of the listing
    pub cursor: ListCursor,
    generation: u64,
    /// Location last written to (or read from) history
    synced: Option<ListLocation>,
}

impl PageState {
    /// Seed filter and panel state from the mounted location
    pub fn seed(location: &ListLocation) -> Self {
        Self {
            filter: FilterState {
                namespace: location.namespace.clone(),
            },
            panel: PanelState {
                visible: location.side_panel,
            },
            ..Default::default()
        }
    }

    /// The location this state maps to
    pub fn location(&self) -> ListLocation {
        ListLocation::new(self.filter.namespace.clone(), self.panel.visible)
    }

    /// Record that history already shows the current location
    pub fn mark_synced(&mut self) {
        self.synced = Some(self.location());
    }

    /// Location to push if the `(namespace, panel)` pair changed since the last sync
    pub fn take_location_update(&mut self) -> Option<String> {
        let location = self.location();
        if self.synced.as_ref() == Some(&location) {
            return None;
        }
        let path = location.to_path();
        self.synced = Some(location);
        Some(path)
    }

    /// Issue a listing call for the current namespace
    pub fn issue_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        let request = FetchRequest {
            generation: self.generation,
            namespace: self.filter.namespace.clone(),
        };
        self.in_flight = Some(request.clone());
        request
    }

    /// Change the namespace filter.
    ///
    /// Returns the listing call to run, or `None` when the value is unchanged.
    /// The current result is left in place until that call resolves.
    pub fn set_namespace(&mut self, namespace: &str) -> Option<FetchRequest> {
        let namespace = namespace.trim();
        if self.filter.namespace == namespace {
            return None;
        }
        self.filter.namespace = namespace.to_string();
        Some(self.issue_fetch())
    }

    /// Apply a completed listing call unless a newer one was issued
    pub fn apply_fetch(
        &mut self,
        request: &FetchRequest,
        outcome: Result<Vec<TemplateSummary>>,
    ) -> FetchApplied {
        if request.generation != self.generation {
            return FetchApplied::Stale;
        }

        self.in_flight = None;
        self.fetch = match outcome {
            Ok(templates) => FetchResult::Success(templates),
            Err(error) => FetchResult::Failure(Arc::new(error)),
        };
        self.cursor.top();
        FetchApplied::Applied
    }

    /// Show the creation panel; returns whether anything changed
    pub fn open_panel(&mut self) -> bool {
        let changed = !self.panel.visible;
        self.panel.visible = true;
        changed
    }

    /// Hide the creation panel; returns whether anything changed
    pub fn close_panel(&mut self) -> bool {
        let changed = self.panel.visible;
        self.panel.visible = false;
        changed
    }

    /// Rows currently shown, empty unless the last call succeeded
    pub fn templates(&self) -> &[TemplateSummary] {
        self.fetch.templates().unwrap_or_default()
    }

    /// Row under the cursor
    pub fn selected(&self) -> Option<&TemplateSummary> {
        self.templates().get(self.cursor.selected)
    }

    pub fn move_down(&mut self, list_height: usize) {
        let count = self.templates().len();
        self.cursor.down(count, list_height);
    }

    pub fn move_up(&mut self) {
        self.cursor.up();
    }

    pub fn move_to_top(&mut self) {
        self.cursor.top();
    }

    pub fn move_to_bottom(&mut self, list_height: usize) {
        let count = self.templates().len();
        self.cursor.bottom(count, list_height);
    }

    pub fn page_down(&mut self, list_height: usize) {
        let count = self.templates().len();
        self.cursor.page_down(count, list_height);
    }

    pub fn page_up(&mut self, list_height: usize) {
        self.cursor.page_up(list_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str) -> TemplateSummary {
        TemplateSummary {
            name: name.to_string(),
            namespace: "prod".to_string(),
            creation_timestamp: None,
        }
    }

    #[test]
    fn test_seed_from_location() {
        let state = PageState::seed(&ListLocation::new("prod", true));
        assert_eq!(state.filter.namespace, "prod");
        assert!(state.panel.visible);
        assert!(matches!(state.fetch, FetchResult::NotFetched));
    }

    #[test]
    fn test_location_update_once_per_change() {
        let mut state = PageState::seed(&ListLocation::new("prod", false));
        state.mark_synced();
        assert_eq!(state.take_location_update(), None);

        state.open_panel();
        assert_eq!(
            state.take_location_update().as_deref(),
            Some("workflow-templates/prod?sidePanel=true")
        );
        assert_eq!(state.take_location_update(), None);

        // Toggling back and forth between syncs still ends on the synced pair
        state.close_panel();
        state.open_panel();
        assert_eq!(state.take_location_update(), None);
    }

    #[test]
    fn test_set_same_namespace_issues_nothing() {
        let mut state = PageState::seed(&ListLocation::new("prod", false));
        assert_eq!(state.set_namespace("prod"), None);
        assert_eq!(state.set_namespace(" prod "), None);
    }

    #[test]
    fn test_namespace_change_keeps_previous_result_until_resolved() {
        let mut state = PageState::seed(&ListLocation::new("prod", false));
        let first = state.issue_fetch();
        state.apply_fetch(&first, Ok(vec![summary("a")]));

        let second = state.set_namespace("dev").unwrap();
        assert_eq!(second.namespace, "dev");
        assert_eq!(state.templates().len(), 1);
        assert_eq!(state.in_flight, Some(second.clone()));

        assert_eq!(state.apply_fetch(&second, Ok(vec![])), FetchApplied::Applied);
        assert!(state.templates().is_empty());
        assert_eq!(state.in_flight, None);
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut state = PageState::seed(&ListLocation::new("x", false));
        let a = state.issue_fetch();
        let b = state.set_namespace("y").unwrap();

        assert_eq!(state.apply_fetch(&b, Ok(vec![summary("from-y")])), FetchApplied::Applied);
        assert_eq!(state.apply_fetch(&a, Ok(vec![summary("from-x")])), FetchApplied::Stale);
        assert_eq!(state.templates()[0].name, "from-y");
    }

    #[test]
    fn test_stale_result_dropped_while_newer_pending() {
        let mut state = PageState::seed(&ListLocation::new("x", false));
        let a = state.issue_fetch();
        let b = state.set_namespace("y").unwrap();

        assert_eq!(state.apply_fetch(&a, Ok(vec![summary("from-x")])), FetchApplied::Stale);
        assert!(matches!(state.fetch, FetchResult::NotFetched));
        assert_eq!(state.in_flight, Some(b));
    }

    #[test]
    fn test_failure_discards_previous_rows() {
        let mut state = PageState::seed(&ListLocation::new("prod", false));
        let first = state.issue_fetch();
        state.apply_fetch(&first, Ok(vec![summary("a")]));

        let second = state.issue_fetch();
        state.apply_fetch(&second, Err(TemplateError::Other("boom".to_string())));
        assert!(state.templates().is_empty());
        assert_eq!(state.fetch.error().unwrap().to_string(), "boom");

        let third = state.issue_fetch();
        state.apply_fetch(&third, Ok(vec![summary("b")]));
        assert!(state.fetch.error().is_none());
    }

    #[test]
    fn test_panel_transitions_report_change() {
        let mut state = PageState::default();
        assert!(state.open_panel());
        assert!(!state.open_panel());
        assert!(state.close_panel());
        assert!(!state.close_panel());
    }

    #[test]
    fn test_selection_resets_on_applied_fetch() {
        let mut state = PageState::default();
        let first = state.issue_fetch();
        state.apply_fetch(&first, Ok(vec![summary("a"), summary("b"), summary("c")]));
        state.move_down(10);
        state.move_down(10);
        assert_eq!(state.selected().unwrap().name, "c");
        state.move_down(10);
        assert_eq!(state.cursor.selected, 2);

        let second = state.issue_fetch();
        state.apply_fetch(&second, Ok(vec![summary("d")]));
        assert_eq!(state.cursor.selected, 0);
        assert_eq!(state.selected().unwrap().name, "d");
    }
}
