//! Priority styling, status bar and help popup.

use super::layout::{fit_lines_to_area, popup_rect};
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Icon and style for a priority value.
pub struct PriorityConfig {
    pub icon: &'static str,
    pub style: Style,
}

pub fn priority_config(priority: i64) -> PriorityConfig {
    match priority {
        4 => PriorityConfig {
            icon: "⚠!",
            style: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        },
        3 => PriorityConfig {
            icon: "▮▮▮",
            style: Style::default().fg(Color::Yellow),
        },
        2 => PriorityConfig {
            icon: "▮▮╌",
            style: Style::default().fg(Color::Cyan),
        },
        1 => PriorityConfig {
            icon: "▮╌╌",
            style: Style::default().fg(Color::Blue),
        },
        0 => PriorityConfig {
            icon: "╌╌╌",
            style: Style::default().fg(Color::DarkGray),
        },
        _ => PriorityConfig {
            icon: "???",
            style: Style::default().fg(Color::Magenta),
        },
    }
}

pub fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);

    let line = if let Some(err) = &app.error_message {
        Line::from(Span::styled(
            format!(" {}", err),
            Style::default().fg(Color::Red),
        ))
    } else if app.is_loading {
        Line::from(Span::styled(
            format!(" {} Loading tickets...", app.spinner_char()),
            Style::default().fg(Color::Cyan),
        ))
    } else {
        let mut spans = vec![Span::styled(
            format!(
                " {} tickets · {} users",
                app.store.len(),
                app.store.users().len()
            ),
            dim,
        )];
        if let Some(msg) = &app.status_message {
            spans.push(Span::styled(
                format!(" · {}", msg),
                Style::default().fg(Color::Green),
            ));
        }
        spans.push(Span::styled(
            "  d: display  a: add  h/l j/k: move  ?: help  q: quit",
            dim,
        ));
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line), area);
}

pub fn draw_help_popup(f: &mut Frame) {
    let area = popup_rect(50, 60, 44, 16, f.area());
    f.render_widget(Clear, area);

    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let bindings = [
        ("h / ←", "Previous column"),
        ("l / →", "Next column"),
        ("k / ↑", "Previous card"),
        ("j / ↓", "Next card"),
        ("d", "Display options (grouping, ordering)"),
        ("a / +", "Add ticket"),
        ("?", "Toggle this help"),
        ("q / Ctrl-c", "Quit"),
    ];

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, desc) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), key_style),
            Span::styled(desc, text_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Esc: Close", dim_style)));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);

    f.render_widget(Paragraph::new(lines).block(block), area);
}
