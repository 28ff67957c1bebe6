//! Render decision for the template listing page.
//!
//! `compute_page_view_model` turns a `PageState` into everything the screen
//! needs, so what is shown for each fetch outcome can be tested without the
//! iocraft framework.

use jiff::Timestamp;

use crate::display::format_age;
use crate::location::detail_path;
use crate::types::TemplateSummary;

use super::state::{FetchResult, PageState};

/// What the page body shows; exactly one applies at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderDecision {
    /// No listing call has completed yet
    #[default]
    Loading,
    /// The last call succeeded with no templates
    Empty,
    /// Rows in server order
    List(Vec<TemplateRow>),
    /// The last call failed; holds the error message
    Error(String),
}

/// A rendered listing row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRow {
    pub name: String,
    pub namespace: String,
    /// Age since creation, e.g. `3d`
    pub age: String,
    /// Location of the template's detail page
    pub link: String,
}

impl TemplateRow {
    fn from_summary(summary: &TemplateSummary, now: Timestamp) -> Self {
        Self {
            name: summary.name.clone(),
            namespace: summary.namespace.clone(),
            age: format_age(summary.creation_timestamp.as_deref(), now),
            link: detail_path(&summary.identity()),
        }
    }
}

/// Everything the listing screen renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    pub body: RenderDecision,
    /// Namespace filter as shown in the filter box
    pub namespace: String,
    /// Canonical location of the page
    pub location: String,
    pub panel_visible: bool,
    /// A listing call newer than the shown result is outstanding
    pub refreshing: bool,
    pub selected_index: usize,
    pub scroll_offset: usize,
}

impl PageViewModel {
    /// Number of rows in the body, zero unless it is a list
    pub fn row_count(&self) -> usize {
        match &self.body {
            RenderDecision::List(rows) => rows.len(),
            _ => 0,
        }
    }
}

/// Decide what the body shows for a fetch outcome
pub fn render_decision(fetch: &FetchResult, now: Timestamp) -> RenderDecision {
    match fetch {
        FetchResult::NotFetched => RenderDecision::Loading,
        FetchResult::Success(templates) if templates.is_empty() => RenderDecision::Empty,
        FetchResult::Success(templates) => RenderDecision::List(
            templates
                .iter()
                .map(|t| TemplateRow::from_summary(t, now))
                .collect(),
        ),
        FetchResult::Failure(error) => RenderDecision::Error(error.to_string()),
    }
}

pub fn compute_page_view_model(state: &PageState, now: Timestamp) -> PageViewModel {
    let body = render_decision(&state.fetch, now);
    // The initial load is already shown as Loading
    let refreshing = state.in_flight.is_some() && !matches!(body, RenderDecision::Loading);

    PageViewModel {
        body,
        namespace: state.filter.namespace.clone(),
        location: state.location().to_path(),
        panel_visible: state.panel.visible,
        refreshing,
        selected_index: state.cursor.selected,
        scroll_offset: state.cursor.offset,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::TemplateError;
    use crate::location::ListLocation;

    fn now() -> Timestamp {
        "2024-01-10T00:00:00Z".parse().unwrap()
    }

    fn summary(name: &str, created: Option<&str>) -> TemplateSummary {
        TemplateSummary {
            name: name.to_string(),
            namespace: "prod".to_string(),
            creation_timestamp: created.map(str::to_string),
        }
    }

    #[test]
    fn test_not_fetched_is_loading() {
        assert_eq!(
            render_decision(&FetchResult::NotFetched, now()),
            RenderDecision::Loading
        );
    }

    #[test]
    fn test_empty_success_is_zero_state() {
        assert_eq!(
            render_decision(&FetchResult::Success(vec![]), now()),
            RenderDecision::Empty
        );
    }

    #[test]
    fn test_failure_carries_message() {
        let fetch = FetchResult::Failure(Arc::new(TemplateError::Other("boom".to_string())));
        match render_decision(&fetch, now()) {
            RenderDecision::Error(message) => assert!(message.contains("boom")),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_rows_keep_server_order_and_link_to_detail() {
        let fetch = FetchResult::Success(vec![
            summary("zeta", Some("2024-01-07T00:00:00Z")),
            summary("alpha", None),
        ]);
        let RenderDecision::List(rows) = render_decision(&fetch, now()) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].name, "zeta");
        assert_eq!(rows[0].age, "3d");
        assert_eq!(rows[0].link, "workflow-templates/prod/zeta");
        assert_eq!(rows[1].name, "alpha");
        assert_eq!(rows[1].age, "-");
    }

    #[test]
    fn test_refreshing_only_after_first_result() {
        let mut state = PageState::seed(&ListLocation::new("prod", true));
        let first = state.issue_fetch();
        let model = compute_page_view_model(&state, now());
        assert_eq!(model.body, RenderDecision::Loading);
        assert!(!model.refreshing);
        assert_eq!(model.location, "workflow-templates/prod?sidePanel=true");

        state.apply_fetch(&first, Ok(vec![summary("a", None)]));
        state.set_namespace("dev");
        let model = compute_page_view_model(&state, now());
        assert!(model.refreshing);
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.namespace, "dev");
    }
}
