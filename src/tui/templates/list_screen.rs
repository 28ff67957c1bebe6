//! Workflow template listing screen
//!
//! Mounts a `TemplateListController` at the current location and renders its
//! state: header, namespace filter, listing body, footer and, while the panel
//! is visible, the creation side panel. The controller notifies through a
//! revision channel; this component re-renders on every revision.

#![allow(clippy::redundant_closure)]

use std::sync::Arc;

use iocraft::prelude::*;
use jiff::Timestamp;

use crate::location::History;
use crate::page::creator;
use crate::page::{FetchRequest, RenderDecision, TemplateListController, compute_page_view_model};
use crate::remote::TemplateService;
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, Header, NamespaceFilter, TemplateList, creator_shortcuts,
    filter_shortcuts, list_shortcuts,
};
use crate::tui::theme::theme;

use super::creator_panel::{CreatorPanel, CreatorState};
use super::keymap::{InputSnapshot, PageAction, key_to_action};

/// Rows taken by header, filter, borders, column titles and footer
const CHROME_ROWS: u16 = 6;

type Mounted = std::result::Result<(Arc<TemplateListController>, FetchRequest), String>;

/// Props for the TemplateListScreen component
#[derive(Default, Props)]
pub struct TemplateListScreenProps {
    pub service: Option<Arc<dyn TemplateService>>,
    pub history: Option<Arc<dyn History>>,
}

#[component]
pub fn TemplateListScreen<'a>(
    props: &TemplateListScreenProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let service = props.service.clone();
    let history = props.history.clone();

    let mounted: State<Option<Mounted>> = hooks.use_state({
        let service = service.clone();
        let history = history.clone();
        move || match (service, history) {
            (Some(service), Some(history)) => Some(
                TemplateListController::mount(service, history).map_err(|e| e.to_string()),
            ),
            _ => None,
        }
    });
    let mounted_value = mounted.read().clone();
    let controller = match &mounted_value {
        Some(Ok((controller, _))) => Some(controller.clone()),
        _ => None,
    };

    let mut revision = hooks.use_state(|| 0u64);
    let mut should_exit = hooks.use_state(|| false);
    let mut filter_focused = hooks.use_state(|| false);
    let mut filter_draft = hooks.use_state(String::new);

    let initial_namespace = controller
        .as_ref()
        .map(|c| c.snapshot().filter.namespace)
        .unwrap_or_default();
    let mut creator_state = hooks.use_state(move || CreatorState::new(&initial_namespace));

    // Initial listing call, then re-render on every controller change
    hooks.use_future({
        let mounted = mounted_value.clone();
        async move {
            let Some(Ok((controller, request))) = mounted else {
                return;
            };
            let mut changes = controller.subscribe();
            controller.spawn_fetch(request);
            while changes.changed().await.is_ok() {
                revision.set(*changes.borrow_and_update());
            }
        }
    });

    let fetch_handler: Handler<FetchRequest> = hooks.use_async_handler({
        let controller = controller.clone();
        move |request: FetchRequest| {
            let controller = controller.clone();
            async move {
                if let Some(controller) = controller {
                    controller.fetch(request).await;
                }
            }
        }
    });

    let create_handler: Handler<creator::CreatorForm> = hooks.use_async_handler({
        let controller = controller.clone();
        let service = service.clone();
        move |form: creator::CreatorForm| {
            let controller = controller.clone();
            let service = service.clone();
            let mut creator_state = creator_state;
            async move {
                let (Some(controller), Some(service)) = (controller, service) else {
                    return;
                };
                match creator::submit(service.as_ref(), &form).await {
                    Ok(identity) => {
                        creator_state.write().submitting = false;
                        controller.template_created(&identity);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "template creation failed");
                        creator_state.write().fail(e.to_string());
                    }
                }
            }
        }
    });

    let list_height = height.saturating_sub(CHROME_ROWS).max(1) as usize;

    let Some(controller) = controller else {
        let message = match mounted_value {
            Some(Err(message)) => message,
            _ => "no template service configured".to_string(),
        };
        hooks.use_terminal_events(move |event| {
            if let TerminalEvent::Key(KeyEvent { kind, .. }) = event
                && kind != KeyEventKind::Release
            {
                should_exit.set(true);
            }
        });
        if should_exit.get() {
            system.exit();
        }
        return element! {
            View(width, height, flex_direction: FlexDirection::Column) {
                Header(title: Some("Workflow Templates".to_string()))
                EmptyState(kind: EmptyStateKind::Error, message: Some(message))
            }
        };
    };

    let model = compute_page_view_model(&controller.snapshot(), Timestamp::now());

    hooks.use_terminal_events({
        let controller = controller.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let snapshot = InputSnapshot {
                    panel_visible: controller.snapshot().panel.visible,
                    filter_focused: filter_focused.get(),
                };
                let Some(action) = key_to_action(code, modifiers, &snapshot) else {
                    return;
                };

                match action {
                    PageAction::MoveDown => controller.navigate(|s| s.move_down(list_height)),
                    PageAction::MoveUp => controller.navigate(|s| s.move_up()),
                    PageAction::GoToTop => controller.navigate(|s| s.move_to_top()),
                    PageAction::GoToBottom => {
                        controller.navigate(|s| s.move_to_bottom(list_height))
                    }
                    PageAction::PageDown => controller.navigate(|s| s.page_down(list_height)),
                    PageAction::PageUp => controller.navigate(|s| s.page_up(list_height)),
                    PageAction::OpenDetail => {
                        controller.open_selected();
                    }
                    PageAction::FocusFilter => {
                        filter_draft.set(controller.snapshot().filter.namespace);
                        filter_focused.set(true);
                    }
                    PageAction::ApplyFilter => {
                        filter_focused.set(false);
                        if let Some(request) = controller.set_namespace(&filter_draft.to_string()) {
                            fetch_handler(request);
                        }
                    }
                    PageAction::CancelFilter => filter_focused.set(false),
                    PageAction::OpenPanel => {
                        let namespace = controller.snapshot().filter.namespace;
                        creator_state.set(CreatorState::new(&namespace));
                        controller.open_panel();
                    }
                    PageAction::ClosePanel => {
                        if !creator_state.read().submitting {
                            controller.close_panel();
                        }
                    }
                    PageAction::NextField => creator_state.write().next_field(),
                    PageAction::PrevField => creator_state.write().prev_field(),
                    PageAction::Submit => {
                        let form = creator_state.write().begin_submit();
                        if let Some(form) = form {
                            create_handler(form);
                        }
                    }
                    PageAction::Quit => should_exit.set(true),
                    PageAction::Consumed => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let shortcuts = if model.panel_visible {
        creator_shortcuts()
    } else if filter_focused.get() {
        filter_shortcuts()
    } else {
        list_shortcuts(model.row_count() > 0)
    };
    let template_count = match &model.body {
        RenderDecision::List(rows) => Some(rows.len()),
        RenderDecision::Empty => Some(0),
        _ => None,
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                location: Some(model.location.clone()),
                template_count,
                refreshing: model.refreshing,
            )

            NamespaceFilter(
                draft: Some(filter_draft),
                applied: model.namespace.clone(),
                has_focus: filter_focused.get(),
            )

            TemplateList(
                body: model.body.clone(),
                namespace: model.namespace.clone(),
                selected_index: model.selected_index,
                scroll_offset: model.scroll_offset,
                visible_rows: list_height,
            )

            Footer(shortcuts)

            #(model.panel_visible.then(|| element! {
                CreatorPanel(state: Some(creator_state))
            }))
        }
    }
}
