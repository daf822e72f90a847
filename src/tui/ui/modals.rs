//! Add-ticket modal.

use super::layout::{fit_lines_to_area, popup_rect};
use super::status::priority_config;
use crate::data::priority_name;
use crate::tui::{App, DraftField};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_add_ticket(f: &mut Frame, app: &App) {
    let area = popup_rect(50, 50, 46, 14, f.area());

    f.render_widget(Clear, area);

    let label_style = Style::default().fg(Color::Cyan);
    let focused_label_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let form = &app.form;
    let mut lines: Vec<Line> = vec![Line::from("")];

    for field in DraftField::ALL {
        let focused = form.focus == field;
        let value: Vec<Span> = match field {
            DraftField::Title => {
                let mut spans = vec![if form.draft.title.is_empty() && !focused {
                    Span::styled("Ticket Title", dim_style)
                } else {
                    Span::styled(form.draft.title.clone(), value_style)
                }];
                if focused {
                    spans.push(Span::styled("▏", focused_label_style));
                }
                spans
            }
            DraftField::Priority => {
                let parsed = form.draft.priority.parse::<i64>().ok();
                let cfg = priority_config(parsed.unwrap_or(-1));
                let name = parsed.and_then(priority_name).unwrap_or("?");
                select_spans(
                    vec![
                        Span::styled(format!("{} ", cfg.icon), cfg.style),
                        Span::styled(name.to_string(), value_style),
                    ],
                    focused,
                    dim_style,
                )
            }
            DraftField::Status => select_spans(
                vec![Span::styled(form.draft.status.clone(), value_style)],
                focused,
                dim_style,
            ),
            DraftField::Assignee => {
                let name = app
                    .store
                    .users()
                    .iter()
                    .find(|u| u.id == form.draft.user_id)
                    .map(|u| Span::styled(u.name.clone(), value_style))
                    .unwrap_or_else(|| Span::styled("Select User", dim_style));
                select_spans(vec![name], focused, dim_style)
            }
        };

        let mut spans = vec![Span::styled(
            format!("  {} {:<9}", if focused { "›" } else { " " }, field.label()),
            if focused { focused_label_style } else { label_style },
        )];
        spans.extend(value);
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {}", err),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Tab: Next field | ←/→: Change | Enter: Add | Esc: Cancel",
        dim_style,
    )));

    let block = Block::default()
        .title(" Add New Ticket ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Wrap a select value in arrows while it has focus.
fn select_spans<'a>(value: Vec<Span<'a>>, focused: bool, dim_style: Style) -> Vec<Span<'a>> {
    if !focused {
        return value;
    }
    let mut spans = vec![Span::styled("◀ ", dim_style)];
    spans.extend(value);
    spans.push(Span::styled(" ▶", dim_style));
    spans
}
