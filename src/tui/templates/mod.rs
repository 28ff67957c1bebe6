//! Workflow template screens
//!
//! `TemplatesApp` follows the shared history and shows the screen for the
//! current route: the listing for `workflow-templates/{namespace}` or the
//! detail view for `workflow-templates/{namespace}/{name}`.

mod creator_panel;
mod detail_screen;
pub mod keymap;
mod list_screen;

use std::sync::Arc;

use iocraft::prelude::*;

use crate::location::{History, Route};
use crate::remote::TemplateService;
use crate::tui::components::{EmptyState, EmptyStateKind, Header};

pub use creator_panel::{CreatorPanel, CreatorState};
pub use detail_screen::{TemplateDetailScreen, manifest_lines};
pub use list_screen::TemplateListScreen;

/// Props for the TemplatesApp component
#[derive(Default, Props)]
pub struct TemplatesAppProps {
    pub service: Option<Arc<dyn TemplateService>>,
    pub history: Option<Arc<dyn History>>,
}

#[component]
pub fn TemplatesApp<'a>(props: &TemplatesAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let initial = props
        .history
        .as_ref()
        .map(|h| h.current())
        .unwrap_or_default();
    let mut location = hooks.use_state(move || initial);

    hooks.use_future({
        let history = props.history.clone();
        async move {
            let Some(history) = history else {
                return;
            };
            let mut changes = history.subscribe();
            while changes.changed().await.is_ok() {
                let current = changes.borrow_and_update().clone();
                location.set(current);
            }
        }
    });

    let current = location.to_string();
    let route = Route::parse(&current);

    // Only an unroutable location leaves keys to this component
    let mut should_exit = hooks.use_state(|| false);
    let unroutable = route.is_err();
    hooks.use_terminal_events(move |event| {
        if let TerminalEvent::Key(KeyEvent { kind, .. }) = event
            && kind != KeyEventKind::Release
            && unroutable
        {
            should_exit.set(true);
        }
    });
    if should_exit.get() {
        system.exit();
    }

    match route {
        Ok(Route::List(_)) => element! {
            View(width, height) {
                TemplateListScreen(service: props.service.clone(), history: props.history.clone())
            }
        }
        .into_any(),
        Ok(Route::Detail(identity)) => element! {
            View(width, height) {
                TemplateDetailScreen(
                    service: props.service.clone(),
                    history: props.history.clone(),
                    identity: Some(identity),
                )
            }
        }
        .into_any(),
        Err(e) => element! {
            View(width, height, flex_direction: FlexDirection::Column) {
                Header(location: Some(current.clone()))
                EmptyState(kind: EmptyStateKind::Error, message: Some(e.to_string()))
            }
        }
        .into_any(),
    }
}
