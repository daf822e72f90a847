//! Display menu - grouping and ordering selection.

use super::layout::{fit_lines_to_area, popup_rect};
use crate::data::{GroupKey, SortKey};
use crate::tui::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_display_menu(f: &mut Frame, app: &App) {
    let area = popup_rect(40, 45, 34, 14, f.area());

    f.render_widget(Clear, area);

    let active_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![Line::from(""), Line::from(Span::styled("  GROUPING", header_style))];

    let current_group = app.view.group_by();
    for (idx, key) in GroupKey::all().enumerate() {
        lines.push(option_line(
            idx + 1,
            key.label(),
            key == current_group,
            active_style,
            dim_style,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  ORDERING", header_style)));

    let current_sort = app.view.sort_by();
    let offset = GroupKey::all().count();
    for (idx, key) in SortKey::all().enumerate() {
        lines.push(option_line(
            offset + idx + 1,
            key.label(),
            key == current_sort,
            active_style,
            dim_style,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press 1-5 to select | Esc: Close",
        dim_style,
    )));

    let block = Block::default()
        .title(" Display ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, area);
}

fn option_line(
    number: usize,
    label: &'static str,
    is_selected: bool,
    active_style: Style,
    dim_style: Style,
) -> Line<'static> {
    let marker = if is_selected { "●" } else { "○" };
    let text_style = if is_selected { active_style } else { dim_style };

    Line::from(vec![
        Span::styled(
            format!("  {} ", marker),
            if is_selected {
                Style::default().fg(Color::Green)
            } else {
                dim_style
            },
        ),
        Span::styled(format!("[{}] ", number), text_style),
        Span::styled(label, text_style),
    ])
}
