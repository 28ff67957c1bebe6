//! Key-to-action mapping for the template screens
//!
//! Pure functions from `(KeyCode, KeyModifiers)` plus a snapshot of which
//! inputs are active to a single high-level action, so every binding can be
//! tested without iocraft.

use iocraft::prelude::{KeyCode, KeyModifiers};

/// Actions on the listing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,
    OpenDetail,

    // Namespace filter
    FocusFilter,
    ApplyFilter,
    CancelFilter,

    // Creation panel
    OpenPanel,
    ClosePanel,
    NextField,
    PrevField,
    Submit,

    Quit,

    /// Key was recognised but requires no further action (absorb it).
    Consumed,
}

/// Actions on the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Back,
    Quit,
}

/// Which inputs currently own the keyboard
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub panel_visible: bool,
    pub filter_focused: bool,
}

/// Map a key on the listing screen.
///
/// Returns `None` for keys the focused text input should receive.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &InputSnapshot,
) -> Option<PageAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(PageAction::Quit),
            _ => None,
        };
    }

    if state.panel_visible {
        return panel_key(code);
    }

    if state.filter_focused {
        return filter_key(code);
    }

    normal_key(code)
}

fn panel_key(code: KeyCode) -> Option<PageAction> {
    match code {
        KeyCode::Esc => Some(PageAction::ClosePanel),
        KeyCode::Tab | KeyCode::Down => Some(PageAction::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(PageAction::PrevField),
        KeyCode::Enter => Some(PageAction::Submit),
        _ => None,
    }
}

fn filter_key(code: KeyCode) -> Option<PageAction> {
    match code {
        KeyCode::Enter => Some(PageAction::ApplyFilter),
        KeyCode::Esc => Some(PageAction::CancelFilter),
        _ => None,
    }
}

fn normal_key(code: KeyCode) -> Option<PageAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(PageAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(PageAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(PageAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(PageAction::GoToBottom),
        KeyCode::PageUp => Some(PageAction::PageUp),
        KeyCode::PageDown => Some(PageAction::PageDown),
        KeyCode::Enter => Some(PageAction::OpenDetail),
        KeyCode::Char('/') => Some(PageAction::FocusFilter),
        KeyCode::Char('n') => Some(PageAction::OpenPanel),
        KeyCode::Char('q') | KeyCode::Esc => Some(PageAction::Quit),
        _ => Some(PageAction::Consumed),
    }
}

/// Map a key on the detail screen
pub fn detail_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<DetailAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(DetailAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(DetailAction::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(DetailAction::ScrollUp),
        KeyCode::Char('g') | KeyCode::Home => Some(DetailAction::ScrollToTop),
        KeyCode::Char('G') | KeyCode::End => Some(DetailAction::ScrollToBottom),
        KeyCode::Esc | KeyCode::Backspace => Some(DetailAction::Back),
        KeyCode::Char('q') => Some(DetailAction::Quit),
        _ => None,
    }
}
