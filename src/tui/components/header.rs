//! App header bar component
//!
//! Displays the screen title, the current location and an optional row count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Title (defaults to "Workflow Templates")
    pub title: Option<String>,

    /// Current location, shown after the title
    pub location: Option<String>,

    /// Number of templates listed
    pub template_count: Option<usize>,

    /// Whether a newer listing call is outstanding
    pub refreshing: bool,
}

/// App header bar showing title and template count
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = props
        .title
        .clone()
        .unwrap_or_else(|| "Workflow Templates".to_string());
    let left_text = match &props.location {
        Some(location) => format!("{title} - {location}"),
        None => title,
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(props.refreshing.then(|| element! {
                    Text(content: "refreshing...", color: theme.refreshing)
                }))

                #(props.template_count.map(|count| element! {
                    Text(
                        content: format!("{} templates", count),
                        color: theme.text,
                    )
                }))
            }
        }
    }
}
