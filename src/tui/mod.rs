//! TUI module for interactive terminal interfaces
//!
//! - `templates` - workflow template listing, creation panel and detail view
//! - `components` - shared building blocks
//! - `navigation` - list cursor shared with the page state

pub mod components;
pub mod navigation;
pub mod templates;
pub mod theme;

pub use templates::{TemplatesApp, TemplatesAppProps};
pub use theme::Theme;
