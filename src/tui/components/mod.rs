//! Shared TUI components
//!
//! Reusable pieces for the template listing and detail screens.

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod namespace_filter;
pub mod side_panel;
pub mod template_list;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, creator_shortcuts, detail_shortcuts, filter_shortcuts,
    list_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use namespace_filter::{NamespaceFilter, NamespaceFilterProps};
pub use side_panel::{SidePanel, SidePanelProps};
pub use template_list::{TemplateList, TemplateListProps};
