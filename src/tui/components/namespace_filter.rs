//! Namespace filter input
//!
//! One-line input holding the namespace the listing is scoped to. While
//! unfocused it shows the applied namespace; while focused it edits a draft
//! that only takes effect when the page applies it.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the NamespaceFilter component
#[derive(Default, Props)]
pub struct NamespaceFilterProps {
    /// Draft value being edited
    pub draft: Option<State<String>>,
    /// Namespace currently applied to the listing
    pub applied: String,
    pub has_focus: bool,
}

#[component]
pub fn NamespaceFilter(props: &NamespaceFilterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;

    let input: AnyElement<'static> = match props.draft {
        Some(mut draft) if has_focus => element! {
            TextInput(
                value: draft.to_string(),
                has_focus: true,
                on_change: move |new_value| draft.set(new_value),
                color: theme.text,
            )
        }
        .into_any(),
        _ if props.applied.is_empty() => element! {
            Text(content: "(all namespaces)", color: theme.text_dimmed)
        }
        .into_any(),
        _ => element! {
            Text(content: props.applied.clone(), color: theme.text)
        }
        .into_any(),
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(margin_right: 1) {
                Text(
                    content: "Namespace:",
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }
            View(flex_grow: 1.0) {
                #(Some(input))
            }
        }
    }
}
