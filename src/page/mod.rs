//! Workflow template listing page.
//!
//! - `state` - pure page state and its transitions
//! - `controller` - drives the state against the template service and history
//! - `view_model` - what the screen renders for a given state
//! - `creator` - the creation form collaborator

pub mod controller;
pub mod creator;
pub mod state;
pub mod view_model;

pub use controller::TemplateListController;
pub use creator::{CreatorField, CreatorForm};
pub use state::{FetchApplied, FetchRequest, FetchResult, FilterState, PageState, PanelState};
pub use view_model::{PageViewModel, RenderDecision, TemplateRow, compute_page_view_model};
