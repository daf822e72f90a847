//! TUI rendering module.
//!
//! - `layout` - Layout calculations and text utilities
//! - `board` - Header and kanban columns
//! - `status` - Priority styling, status bar and help popup
//! - `menus` - Display (grouping/ordering) menu
//! - `modals` - Add-ticket form

mod board;
pub mod layout;
mod menus;
mod modals;
mod status;

use crate::tui::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function - renders the entire TUI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    board::draw_header(f, app, chunks[0]);
    board::draw_board(f, app, chunks[1]);
    status::draw_status_bar(f, app, chunks[2]);

    // Overlays
    if app.show_help() {
        status::draw_help_popup(f);
    }

    if app.show_display_menu() {
        menus::draw_display_menu(f, app);
    }

    if app.show_add_ticket() {
        modals::draw_add_ticket(f, app);
    }
}
