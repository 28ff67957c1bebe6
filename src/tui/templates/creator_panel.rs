//! Creation side panel
//!
//! Renders the `CreatorForm` inside a `SidePanel`. The form keeps its own
//! error: a failed submission leaves the panel open with the message shown
//! under the fields.

use iocraft::prelude::*;

use crate::page::{CreatorField, CreatorForm};
use crate::tui::components::SidePanel;
use crate::tui::theme::theme;

const FIELDS: [CreatorField; 4] = [
    CreatorField::Name,
    CreatorField::Namespace,
    CreatorField::Image,
    CreatorField::Args,
];

/// Everything the panel shows between renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorState {
    pub form: CreatorForm,
    pub focus: CreatorField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl CreatorState {
    /// Fresh form for the given page namespace
    pub fn new(namespace: &str) -> Self {
        Self {
            form: CreatorForm::new(namespace),
            focus: CreatorField::default(),
            error: None,
            submitting: false,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Start a submission; `None` while one is already running
    pub fn begin_submit(&mut self) -> Option<CreatorForm> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.form.clone())
    }

    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}

/// Props for the CreatorPanel component
#[derive(Default, Props)]
pub struct CreatorPanelProps {
    pub state: Option<State<CreatorState>>,
}

#[component]
pub fn CreatorPanel(props: &CreatorPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(state) = props.state else {
        return element! { View() }.into_any();
    };
    let current = state.read().clone();

    let footer = if current.submitting {
        "Creating...".to_string()
    } else {
        "[Tab] Next field  [Enter] Create  [Esc] Close".to_string()
    };

    element! {
        SidePanel(
            title: Some("New Workflow Template".to_string()),
            footer_text: Some(footer),
        ) {
            #(FIELDS.iter().map(|&field| {
                let focused = current.focus == field && !current.submitting;
                let value = current.form.value(field).to_string();
                let mut state = state;
                element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Column,
                        margin_top: 1,
                    ) {
                        Text(
                            content: field.label(),
                            color: if focused { theme.border_focused } else { theme.text_dimmed },
                            weight: Weight::Bold,
                        )
                        View(
                            width: 100pct,
                            height: 3,
                            border_style: BorderStyle::Round,
                            border_color: if focused { theme.border_focused } else { theme.border },
                            padding_left: 1,
                            padding_right: 1,
                        ) {
                            TextInput(
                                value,
                                has_focus: focused,
                                on_change: move |new_value: String| {
                                    state.write().form.set_value(field, new_value);
                                },
                                color: Some(theme.text),
                                cursor_color: Some(theme.highlight),
                            )
                        }
                    }
                }
            }))

            #(current.error.clone().map(|error| element! {
                View(width: 100pct, margin_top: 1) {
                    Text(content: error, color: theme.error)
                }
            }))
        }
    }
    .into_any()
}
