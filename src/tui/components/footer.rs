//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Enter", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Create")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the listing
pub fn list_shortcuts(has_rows: bool) -> Vec<Shortcut> {
    let mut shortcuts = vec![Shortcut::new("n", "Create"), Shortcut::new("/", "Namespace")];
    if has_rows {
        shortcuts.push(Shortcut::new("j/k", "Navigate"));
        shortcuts.push(Shortcut::new("g/G", "Top/Bottom"));
        shortcuts.push(Shortcut::new("Enter", "Open"));
    }
    shortcuts.push(Shortcut::new("q", "Quit"));
    shortcuts
}

/// Shortcuts while the namespace filter is being edited
pub fn filter_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Apply"),
        Shortcut::new("Esc", "Cancel"),
    ]
}

/// Shortcuts for the creation panel
pub fn creator_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Tab", "Next Field"),
        Shortcut::new("S-Tab", "Prev Field"),
        Shortcut::new("Enter", "Create"),
        Shortcut::new("Esc", "Close"),
    ]
}

/// Shortcuts for the detail screen
pub fn detail_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Scroll"),
        Shortcut::new("g/G", "Top/Bottom"),
        Shortcut::new("Esc", "Back"),
        Shortcut::new("q", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shortcuts_hide_row_keys_without_rows() {
        let empty = list_shortcuts(false);
        assert!(empty.iter().all(|s| s.key != "Enter"));
        assert!(empty.iter().any(|s| s.key == "n"));

        let full = list_shortcuts(true);
        assert!(full.iter().any(|s| s.key == "Enter"));
    }
}
