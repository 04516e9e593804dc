//! Top header bar showing the server, message count and last sync.

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::i18n;
use crate::tui::app::App;
use crate::tui::theme::current_theme;

/// Render the top header bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let synced = match app.inbox.last_synced() {
        Some(ts) => format!(
            "{} {}",
            i18n::tui_synced(),
            ts.with_timezone(&Local).format("%H:%M:%S")
        ),
        None => i18n::tui_not_synced().to_string(),
    };

    let mut spans = vec![
        Span::styled(format!(" {}", i18n::app_name()), theme.header_bar),
        Span::styled(format!(" | {}", app.server_url), theme.header_bar),
        Span::styled(
            format!(" | {} {}", app.visible_count(), i18n::tui_messages_count()),
            theme.header_bar,
        ),
        Span::styled(format!(" | {synced}"), theme.header_bar),
    ];

    // Right-aligned help hint
    let left_len: usize = spans.iter().map(|s| s.content.width()).sum();
    let right_text = i18n::tui_help_hint();
    let total = area.width as usize;
    if total > left_len + right_text.width() {
        let padding = total - left_len - right_text.width();
        spans.push(Span::styled(" ".repeat(padding), theme.header_bar));
    }
    spans.push(Span::styled(right_text, theme.header_bar));

    let bar = Paragraph::new(Line::from(spans)).style(theme.header_bar);
    frame.render_widget(bar, area);
}
