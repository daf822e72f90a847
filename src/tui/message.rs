//! Message enum for Elm Architecture (TEA) pattern.
//!
//! Every user action is a message; `App::update()` is the only place state
//! changes in response to input.

use crate::data::{GroupKey, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Board navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the column to the left
    PrevColumn,
    /// Select the column to the right
    NextColumn,
    /// Move card selection up by one
    MoveUp,
    /// Move card selection down by one
    MoveDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modal toggles
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle help popup
    ToggleHelp,
    /// Toggle the display (grouping/ordering) menu
    ToggleDisplayMenu,
    /// Open the add-ticket form
    OpenAddTicket,
    /// Close whatever modal is open
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Display menu
    // ─────────────────────────────────────────────────────────────────────────
    SetGroupBy(GroupKey),
    SetSortBy(SortKey),

    // ─────────────────────────────────────────────────────────────────────────
    // Add-ticket form
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the next form field
    NextField,
    /// Focus the previous form field
    PrevField,
    /// Type into the title field
    DraftInput(char),
    /// Delete the last title character
    DraftBackspace,
    /// Step a select field by delta (positive = next option)
    CycleOption(i32),
    /// Validate and append the draft
    SubmitDraft,

    // ─────────────────────────────────────────────────────────────────────────
    // No-op
    // ─────────────────────────────────────────────────────────────────────────
    /// No operation (for unhandled keys)
    None,
}
