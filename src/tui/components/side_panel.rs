//! Sliding side panel component
//!
//! Covers the right-hand part of the screen on top of the page content, with
//! a title row, a content area and an optional footer line.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Default share of the terminal width taken by the panel
pub const DEFAULT_PANEL_WIDTH: u32 = 60;

/// Props for the SidePanel component
#[derive(Default, Props)]
pub struct SidePanelProps<'a> {
    /// Panel width as a percentage of the screen
    pub width_percent: Option<u32>,
    pub title: Option<String>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Panel anchored to the right edge, drawn over the page
///
/// # Example
///
/// ```ignore
/// element! {
///     SidePanel(title: Some("New Workflow Template".to_string())) {
///         Text(content: "form goes here")
///     }
/// }
/// ```
#[component]
pub fn SidePanel<'a>(props: &mut SidePanelProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let width = props.width_percent.unwrap_or(DEFAULT_PANEL_WIDTH).min(100);
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::FlexEnd,
        ) {
            View(
                width: Size::Percent(width as f32),
                height: 100pct,
                background_color: theme.background,
                border_style: BorderStyle::Double,
                border_color: theme.border_focused,
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                #(title.map(|title| element! {
                    View(
                        width: 100pct,
                        padding_bottom: 1,
                        border_edges: Edges::Bottom,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                        flex_direction: FlexDirection::Row,
                    ) {
                        Text(content: title, color: theme.name, weight: Weight::Bold)
                        View(flex_grow: 1.0)
                        Text(content: "Esc to close", color: theme.text_dimmed)
                    }
                }))

                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::Hidden,
                ) {
                    #(std::mem::take(&mut props.children))
                }

                #(footer.map(|footer| element! {
                    View(
                        width: 100pct,
                        padding_top: 1,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: footer, color: theme.text_dimmed)
                    }
                }))
            }
        }
    }
}
