//! Layout calculations and text utilities for the TUI.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest a board column is allowed to get before columns scroll
pub const MIN_COLUMN_WIDTH: u16 = 24;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut a string to at most `max_width` cells without splitting a wide char.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Truncate with a trailing "..." when the text does not fit.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if display_width(s) <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return truncate_to_width(s, max_len);
    }
    let truncated = truncate_to_width(s, max_len.saturating_sub(3));
    format!("{truncated}...")
}

/// Fit a Line to a maximum width by truncating spans.
pub fn fit_line_to_width(line: Line<'_>, max_width: usize) -> Line<'_> {
    let Line {
        spans,
        alignment,
        style,
    } = line;
    let mut out: Vec<Span<'_>> = Vec::new();
    let mut used = 0usize;

    for span in spans {
        if used >= max_width {
            break;
        }
        let content = span.content.as_ref();
        let span_width = display_width(content);
        if used + span_width <= max_width {
            used += span_width;
            out.push(span);
        } else {
            let remaining = max_width.saturating_sub(used);
            let truncated = truncate_to_width(content, remaining);
            if !truncated.is_empty() {
                out.push(Span::styled(truncated, span.style));
            }
            break;
        }
    }

    Line {
        spans: out,
        alignment,
        style,
    }
}

/// Fit lines to an area, replacing the overflow with an ellipsis line and
/// keeping the last `keep_bottom` lines (footers) visible.
pub fn fit_lines_to_area<'a>(lines: Vec<Line<'a>>, inner: Rect, keep_bottom: usize) -> Vec<Line<'a>> {
    let width = inner.width as usize;
    let height = inner.height as usize;
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let mut fitted: Vec<Line<'a>> = lines
        .into_iter()
        .map(|line| fit_line_to_width(line, width))
        .collect();

    if fitted.len() <= height {
        return fitted;
    }

    let keep_bottom = keep_bottom.min(height);
    let top_space = height.saturating_sub(keep_bottom);
    let mut out: Vec<Line<'a>> = Vec::with_capacity(height);

    if top_space > 0 {
        let top_take = top_space.saturating_sub(1);
        if top_take > 0 {
            out.extend(fitted.drain(..top_take));
        }
        out.push(ellipsis_line());
    }

    if keep_bottom > 0 {
        let start = fitted.len().saturating_sub(keep_bottom);
        out.extend(fitted.drain(start..));
    }

    out
}

fn ellipsis_line() -> Line<'static> {
    Line::from(Span::styled("  …", Style::default().fg(Color::DarkGray)))
}

/// Calculate a centered popup rectangle within a container.
pub fn popup_rect(percent_x: u16, percent_y: u16, min_width: u16, min_height: u16, r: Rect) -> Rect {
    let max_width = r.width.saturating_sub(2).max(1);
    let max_height = r.height.saturating_sub(2).max(1);

    let target_width = (r.width.saturating_mul(percent_x) / 100).max(min_width);
    let target_height = (r.height.saturating_mul(percent_y) / 100).max(min_height);

    let width = target_width.min(max_width);
    let height = target_height.min(max_height);

    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Which columns fit on screen: returns `(first, count)` so that the
/// selected column is always visible.
pub fn visible_columns(total: usize, selected: usize, area_width: u16) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let fit = ((area_width / MIN_COLUMN_WIDTH).max(1) as usize).min(total);
    let selected = selected.min(total - 1);
    let first = if selected < fit { 0 } else { selected + 1 - fit };
    (first, fit)
}
