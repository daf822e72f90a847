//! Input dispatch layer for Elm Architecture (TEA) pattern.
//!
//! Maps key events to messages based on the active modal.

use super::{App, Message};
use crate::data::{GroupKey, SortKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map key events to messages based on current app mode.
pub fn dispatch(app: &App, key: KeyEvent) -> Message {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Message::Quit;
    }

    if app.show_add_ticket() {
        dispatch_add_ticket(key)
    } else if app.show_display_menu() {
        dispatch_display_menu(key)
    } else if app.show_help() {
        dispatch_help(key)
    } else {
        dispatch_normal_mode(key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode-specific dispatch functions
// ─────────────────────────────────────────────────────────────────────────────

/// Handle keys on the board.
pub fn dispatch_normal_mode(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Char('h') | KeyCode::Left => Message::PrevColumn,
        KeyCode::Char('l') | KeyCode::Right => Message::NextColumn,
        KeyCode::Char('k') | KeyCode::Up => Message::MoveUp,
        KeyCode::Char('j') | KeyCode::Down => Message::MoveDown,
        KeyCode::Char('d') => Message::ToggleDisplayMenu,
        KeyCode::Char('a') | KeyCode::Char('+') => Message::OpenAddTicket,
        KeyCode::Char('?') => Message::ToggleHelp,
        _ => Message::None,
    }
}

/// Handle keys in the display menu: 1-3 pick grouping, 4-5 pick ordering.
pub fn dispatch_display_menu(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('1') => Message::SetGroupBy(GroupKey::Status),
        KeyCode::Char('2') => Message::SetGroupBy(GroupKey::User),
        KeyCode::Char('3') => Message::SetGroupBy(GroupKey::Priority),
        KeyCode::Char('4') => Message::SetSortBy(SortKey::Priority),
        KeyCode::Char('5') => Message::SetSortBy(SortKey::Title),
        KeyCode::Esc | KeyCode::Char('d') | KeyCode::Char('q') => Message::CloseModal,
        _ => Message::None,
    }
}

/// Handle keys in the add-ticket form.
///
/// Characters always go to the form; the title field ignores them when it
/// is not focused.
pub fn dispatch_add_ticket(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc => Message::CloseModal,
        KeyCode::Enter => Message::SubmitDraft,
        KeyCode::Tab | KeyCode::Down => Message::NextField,
        KeyCode::BackTab | KeyCode::Up => Message::PrevField,
        KeyCode::Left => Message::CycleOption(-1),
        KeyCode::Right => Message::CycleOption(1),
        KeyCode::Backspace => Message::DraftBackspace,
        KeyCode::Char(c) => Message::DraftInput(c),
        _ => Message::None,
    }
}

/// Handle keys in the help popup.
pub fn dispatch_help(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Message::CloseModal,
        _ => Message::None,
    }
}
