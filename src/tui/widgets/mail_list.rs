//! Scrolling table of received messages.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n;
use crate::model::message::format_timestamp;
use crate::tui::app::{App, PanelFocus};
use crate::tui::theme::current_theme;

/// Marker drawn in front of the active row.
pub const ACTIVE_MARKER: &str = ">";

/// Render the message list, or the list placeholder when there is nothing to list.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = current_theme();

    let border_style = if app.focus == PanelFocus::MailList {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(i18n::tui_messages_title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(text) = app.inbox.list().placeholder() {
        app.list_rows_area = Rect::default();
        let style = if matches!(app.inbox.list(), crate::inbox::ListPane::Error) {
            theme.error
        } else {
            theme.placeholder
        };
        frame.render_widget(Paragraph::new(format!(" {text}")).style(style), inner);
        return;
    }

    if inner.height < 2 {
        return;
    }

    // Header row takes 1 line, rest is data
    let viewport_height = (inner.height as usize).saturating_sub(1);
    app.list_viewport_height = viewport_height;
    app.list_rows_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
    app.ensure_selected_visible();

    // Column widths
    let mark_w = 1u16;
    let sample = format_timestamp(&chrono::Utc::now(), &app.date_format);
    let date_w = (UnicodeWidthStr::width(sample.as_str()) as u16).clamp(8, 32);
    let from_w = 28u16.min(inner.width / 4);
    let fixed = mark_w + date_w + from_w + 3; // column spacing
    let subject_w = inner.width.saturating_sub(fixed);

    let constraints = [
        Constraint::Length(mark_w),
        Constraint::Length(date_w),
        Constraint::Length(from_w),
        Constraint::Min(subject_w),
    ];

    let header = Row::new(vec![
        String::new(),
        i18n::tui_col_date().to_string(),
        i18n::tui_col_from().to_string(),
        i18n::tui_col_subject().to_string(),
    ])
    .style(theme.list_header);

    let summaries = app.inbox.list().summaries();
    let start = app.list_scroll_offset.min(summaries.len());
    let end = (start + viewport_height).min(summaries.len());

    let rows: Vec<Row> = summaries[start..end]
        .iter()
        .map(|summary| {
            let active = app.inbox.is_active(summary);
            let marker = if active { ACTIVE_MARKER } else { " " };
            let date = format_timestamp(&summary.timestamp, &app.date_format);
            let style = if active {
                theme.list_active
            } else {
                theme.list_normal
            };

            Row::new(vec![
                marker.to_string(),
                truncate_str(&date, date_w as usize),
                truncate_str(&summary.from, from_w as usize),
                truncate_str(summary.title(), subject_w as usize),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(1);

    frame.render_widget(table, inner);
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return s.chars().take(max_width).collect();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width + 3 > max_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("...");
    result
}
