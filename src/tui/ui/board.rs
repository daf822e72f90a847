//! Header and kanban column rendering.

use super::layout::{fit_lines_to_area, truncate_str, visible_columns};
use super::status::priority_config;
use crate::data::Bucket;
use crate::tui::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let border_style = if app.show_display_menu() {
        Style::default().fg(Color::Magenta)
    } else if app.is_loading {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(" ☰ Display ", Style::default().fg(Color::Magenta)),
        Span::styled("(d)  ", dim),
        Span::styled("Grouping: ", dim),
        Span::styled(app.view.group_by().label(), value),
        Span::styled("  Ordering: ", dim),
        Span::styled(app.view.sort_by().label(), value),
    ]);

    let block = Block::default()
        .title(" Ticketboard ")
        .borders(Borders::ALL)
        .border_style(border_style);

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let columns = app.columns();

    if columns.is_empty() {
        let text = if app.is_loading {
            "Loading tickets..."
        } else {
            "No tickets. Press 'a' to add one."
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let (first, count) = visible_columns(columns.len(), app.selected_column, area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area);

    for (offset, bucket) in columns.iter().skip(first).take(count).enumerate() {
        let col_idx = first + offset;
        let selected_row = (col_idx == app.selected_column).then_some(app.selected_row);
        draw_column(f, bucket, selected_row, chunks[offset]);
    }
}

fn draw_column(f: &mut Frame, bucket: &Bucket<'_>, selected_row: Option<usize>, area: Rect) {
    let is_active = selected_row.is_some();
    let border_style = if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", bucket.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", bucket.tickets.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    let width = inner.width as usize;

    let id_style = Style::default().fg(Color::DarkGray);
    let title_style = Style::default().fg(Color::White);
    let tag_style = Style::default().fg(Color::Gray);
    let selected_bg = Color::Rgb(40, 40, 60);

    let mut lines: Vec<Line> = Vec::new();
    // Keep the selected card on screen: each card is 4 lines
    let per_card = 4usize;
    let capacity = (inner.height as usize / per_card).max(1);
    let skip = selected_row
        .map(|row| (row + 1).saturating_sub(capacity))
        .unwrap_or(0);

    for (row, ticket) in bucket.tickets.iter().enumerate().skip(skip) {
        let is_selected = selected_row == Some(row);
        let bg = |style: Style| {
            if is_selected {
                style.bg(selected_bg)
            } else {
                style
            }
        };

        let prio = priority_config(ticket.priority);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", prio.icon), bg(prio.style)),
            Span::styled(ticket.id.clone(), bg(id_style)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(" {}", truncate_str(&ticket.title, width.saturating_sub(1))),
            bg(title_style.add_modifier(Modifier::BOLD)),
        )));
        let tags = if ticket.tag.is_empty() {
            String::new()
        } else {
            format!(" ● {}", ticket.tag.join("  ● "))
        };
        lines.push(Line::from(Span::styled(
            truncate_str(&tags, width),
            bg(tag_style),
        )));
        lines.push(Line::from(""));
    }

    let lines = fit_lines_to_area(lines, inner, 0);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
