//! Workflow template detail screen
//!
//! Shown for `workflow-templates/{namespace}/{name}`. Loads the template once
//! on mount and renders its metadata followed by the full manifest as YAML.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::error::Result;
use crate::location::{History, ListLocation, detail_path};
use crate::remote::TemplateService;
use crate::tui::components::{Footer, Header, detail_shortcuts};
use crate::tui::theme::theme;
use crate::types::{TemplateIdentity, WorkflowTemplate};

use super::keymap::{DetailAction, detail_key_to_action};

/// Rows taken by header, metadata block, borders and footer
const CHROME_ROWS: u16 = 9;

#[derive(Debug, Clone, Default)]
enum DetailLoad {
    #[default]
    Loading,
    Loaded {
        template: Box<WorkflowTemplate>,
        lines: Vec<String>,
    },
    Failed(String),
}

/// Manifest rendered as YAML, one entry per line
pub fn manifest_lines(template: &WorkflowTemplate) -> Result<Vec<String>> {
    let yaml = serde_yaml_ng::to_string(template)?;
    Ok(yaml.lines().map(str::to_string).collect())
}

/// Props for the TemplateDetailScreen component
#[derive(Default, Props)]
pub struct TemplateDetailScreenProps {
    pub service: Option<Arc<dyn TemplateService>>,
    pub history: Option<Arc<dyn History>>,
    pub identity: Option<TemplateIdentity>,
}

#[component]
pub fn TemplateDetailScreen<'a>(
    props: &TemplateDetailScreenProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let identity = props.identity.clone().unwrap_or_else(|| TemplateIdentity::new("", ""));
    let mut load = hooks.use_state(DetailLoad::default);
    let mut scroll = hooks.use_state(|| 0usize);
    let mut should_exit = hooks.use_state(|| false);

    hooks.use_future({
        let service = props.service.clone();
        let identity = identity.clone();
        async move {
            let Some(service) = service else {
                load.set(DetailLoad::Failed("no template service configured".to_string()));
                return;
            };
            let result = service
                .get(&identity.namespace, &identity.name)
                .await
                .and_then(|template| {
                    let lines = manifest_lines(&template)?;
                    Ok(DetailLoad::Loaded {
                        template: Box::new(template),
                        lines,
                    })
                });
            match result {
                Ok(loaded) => load.set(loaded),
                Err(e) => {
                    tracing::warn!(template = %identity, error = %e, "failed to load template");
                    load.set(DetailLoad::Failed(e.to_string()));
                }
            }
        }
    });

    let body_height = height.saturating_sub(CHROME_ROWS).max(1) as usize;
    let line_count = match &*load.read() {
        DetailLoad::Loaded { lines, .. } => lines.len(),
        _ => 0,
    };
    let max_scroll = line_count.saturating_sub(body_height);

    hooks.use_terminal_events({
        let history = props.history.clone();
        let namespace = identity.namespace.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                match detail_key_to_action(code, modifiers) {
                    Some(DetailAction::ScrollDown) => scroll.set((scroll.get() + 1).min(max_scroll)),
                    Some(DetailAction::ScrollUp) => scroll.set(scroll.get().saturating_sub(1)),
                    Some(DetailAction::ScrollToTop) => scroll.set(0),
                    Some(DetailAction::ScrollToBottom) => scroll.set(max_scroll),
                    Some(DetailAction::Back) => {
                        if let Some(history) = &history {
                            history.goto(&ListLocation::new(namespace.clone(), false).to_path());
                        }
                    }
                    Some(DetailAction::Quit) => should_exit.set(true),
                    None => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let offset = scroll.get();
    let body: AnyElement<'static> = match &*load.read() {
        DetailLoad::Loading => element! {
            Text(content: format!("Loading {identity}..."), color: theme.text_dimmed)
        }
        .into_any(),
        DetailLoad::Failed(message) => element! {
            Text(content: format!("Failed to load {identity}: {message}"), color: theme.error)
        }
        .into_any(),
        DetailLoad::Loaded { template, lines } => {
            let meta = &template.metadata;
            let created = meta.creation_timestamp.clone().unwrap_or_else(|| "-".to_string());
            let uid = meta.uid.clone().unwrap_or_else(|| "-".to_string());
            let visible: Vec<String> = lines.iter().skip(offset).take(body_height).cloned().collect();
            element! {
                View(width: 100pct, height: 100pct, flex_direction: FlexDirection::Column) {
                    View(flex_direction: FlexDirection::Column, flex_shrink: 0.0, margin_bottom: 1) {
                        Text(content: format!("Name:      {}", meta.name), color: theme.name, weight: Weight::Bold)
                        Text(content: format!("Namespace: {}", meta.namespace), color: theme.text)
                        Text(content: format!("Created:   {created}"), color: theme.text_dimmed)
                        Text(content: format!("UID:       {uid}"), color: theme.text_dimmed)
                    }
                    View(
                        flex_grow: 1.0,
                        width: 100pct,
                        flex_direction: FlexDirection::Column,
                        border_style: BorderStyle::Round,
                        border_color: theme.border,
                        padding_left: 1,
                        overflow: Overflow::Hidden,
                    ) {
                        #(visible.into_iter().map(|line| element! {
                            Text(content: line, color: theme.text)
                        }))
                    }
                }
            }
            .into_any()
        }
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                title: Some("Workflow Template".to_string()),
                location: Some(detail_path(&identity)),
            )
            View(flex_grow: 1.0, width: 100pct, padding: 1, flex_direction: FlexDirection::Column) {
                #(Some(body))
            }
            Footer(shortcuts: detail_shortcuts())
        }
    }
}
