//! Empty state component
//!
//! Fills the listing body while nothing is loaded yet, when the namespace
//! holds no templates, or when the listing call failed.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Waiting for the first listing call
    #[default]
    Loading,
    /// Listing succeeded with no templates
    NoTemplates,
    /// Listing call failed
    Error,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Namespace filter in effect; empty for all namespaces
    pub namespace: String,
    /// Error message (for Error)
    pub message: Option<String>,
}

fn scope(namespace: &str) -> String {
    if namespace.is_empty() {
        "any namespace".to_string()
    } else {
        format!("namespace \"{namespace}\"")
    }
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => (
            "~",
            "Loading".to_string(),
            format!("Loading workflow templates in {}...", scope(&props.namespace)),
            String::new(),
        ),
        EmptyStateKind::NoTemplates => (
            "i",
            "No Workflow Templates".to_string(),
            format!(
                "There are no workflow templates in {}. Workflow templates are \
                 reusable definitions that workflows and cron workflows can refer to.",
                scope(&props.namespace)
            ),
            "Press 'n' to create one, or '/' to look in another namespace.".to_string(),
        ),
        EmptyStateKind::Error => (
            "!",
            "Failed to load workflow templates".to_string(),
            props.message.clone().unwrap_or_default(),
            "Press '/' to change the namespace and try again.".to_string(),
        ),
    };

    let accent = if props.kind == EmptyStateKind::Error {
        theme.error
    } else {
        theme.border
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: accent,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: accent, weight: Weight::Bold)
            }

            Text(
                content: title,
                color: if props.kind == EmptyStateKind::Error { theme.error } else { theme.text },
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 70) {
                Text(content: message, color: theme.text_dimmed)
            }

            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(content: hint, color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_kind_default() {
        assert_eq!(EmptyStateKind::default(), EmptyStateKind::Loading);
    }

    #[test]
    fn test_scope_wording() {
        assert_eq!(scope(""), "any namespace");
        assert_eq!(scope("prod"), "namespace \"prod\"");
    }
}
