//! Template listing body
//!
//! Dispatches on the page's `RenderDecision`: loading, zero-state and error
//! bodies use `EmptyState`; rows render as a table of name, namespace, age
//! and detail link.

use iocraft::prelude::*;

use crate::page::{RenderDecision, TemplateRow};
use crate::tui::theme::theme;

use super::empty_state::{EmptyState, EmptyStateKind};

const NAME_WIDTH: usize = 36;
const NAMESPACE_WIDTH: usize = 20;
const AGE_WIDTH: usize = 8;

/// Props for the TemplateList component
#[derive(Props)]
pub struct TemplateListProps {
    pub body: RenderDecision,
    /// Namespace filter, for the empty-state wording
    pub namespace: String,
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Rows that fit in the pane
    pub visible_rows: usize,
}

impl Default for TemplateListProps {
    fn default() -> Self {
        Self {
            body: RenderDecision::Loading,
            namespace: String::new(),
            selected_index: 0,
            scroll_offset: 0,
            visible_rows: 0,
        }
    }
}

fn fit(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let truncated: String = value.chars().take(width.saturating_sub(3)).collect();
        format!("{truncated}...")
    } else {
        format!("{value:<width$}")
    }
}

#[component]
pub fn TemplateList(props: &TemplateListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let body: AnyElement<'static> = match &props.body {
        RenderDecision::Loading => element! {
            EmptyState(kind: EmptyStateKind::Loading, namespace: props.namespace.clone())
        }
        .into_any(),
        RenderDecision::Empty => element! {
            EmptyState(kind: EmptyStateKind::NoTemplates, namespace: props.namespace.clone())
        }
        .into_any(),
        RenderDecision::Error(message) => element! {
            EmptyState(
                kind: EmptyStateKind::Error,
                namespace: props.namespace.clone(),
                message: Some(message.clone()),
            )
        }
        .into_any(),
        RenderDecision::List(rows) => render_rows(
            rows,
            props.selected_index,
            props.scroll_offset,
            props.visible_rows,
        ),
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
        ) {
            #(Some(body))
        }
    }
}

fn render_rows(
    rows: &[TemplateRow],
    selected_index: usize,
    scroll_offset: usize,
    visible_rows: usize,
) -> AnyElement<'static> {
    let theme = theme();
    let visible: Vec<(usize, TemplateRow)> = rows
        .iter()
        .cloned()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .collect();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
        ) {
            View(height: 1, width: 100pct, padding_left: 3) {
                Text(
                    content: format!(
                        "{} {} {} {}",
                        fit("NAME", NAME_WIDTH),
                        fit("NAMESPACE", NAMESPACE_WIDTH),
                        fit("CREATED", AGE_WIDTH),
                        "LINK"
                    ),
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }
            #(visible.into_iter().map(|(index, row)| {
                let is_selected = index == selected_index;
                element! {
                    View(
                        height: 1,
                        width: 100pct,
                        padding_left: 1,
                        background_color: if is_selected { Some(theme.selected_background) } else { None },
                    ) {
                        Text(
                            content: if is_selected { "> " } else { "  " },
                            color: theme.highlight,
                        )
                        Text(
                            content: format!("{} ", fit(&row.name, NAME_WIDTH)),
                            color: theme.name,
                            weight: if is_selected { Weight::Bold } else { Weight::Normal },
                        )
                        Text(
                            content: format!("{} ", fit(&row.namespace, NAMESPACE_WIDTH)),
                            color: theme.namespace,
                        )
                        Text(
                            content: format!("{} ", fit(&row.age, AGE_WIDTH)),
                            color: theme.age,
                        )
                        Text(content: row.link.clone(), color: theme.text_dimmed)
                    }
                }
            }))
        }
    }
    .into_any()
}
