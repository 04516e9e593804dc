//! Bottom status bar showing transient messages or context-sensitive keyboard hints.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::i18n;
use crate::tui::app::{App, PanelFocus};
use crate::tui::theme::current_theme;

/// Version string shown at the right edge of the status bar.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the status bar at the bottom with context-sensitive hints and version.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let version_text = format!("v{VERSION} ");
    let version_width = version_text.len() as u16;

    // Split: hints (flexible) | version (fixed)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(version_width)])
        .split(area);

    // Left side: hints or status message
    let content = match &app.status_message {
        Some((msg, _)) if !app.inbox.is_confirming_clear() => {
            Line::from(Span::styled(format!(" {msg}"), theme.status_bar))
        }
        _ => {
            let mut spans = Vec::new();
            for (i, (key, desc)) in build_hints(app).iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" ", theme.status_bar));
                }
                spans.push(Span::styled(format!(" {key}"), theme.key_hint));
                spans.push(Span::styled(format!(":{desc}"), theme.status_bar));
            }
            Line::from(spans)
        }
    };

    let bar = Paragraph::new(content).style(theme.status_bar);
    frame.render_widget(bar, chunks[0]);

    // Right side: version
    let version = Paragraph::new(Line::from(Span::styled(version_text, theme.border)))
        .alignment(Alignment::Right)
        .style(theme.status_bar);
    frame.render_widget(version, chunks[1]);
}

/// Return context-sensitive hint pairs (key, description) for the active panel.
fn build_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.inbox.is_confirming_clear() {
        return vec![
            ("y", i18n::tui_hint_confirm()),
            ("n/Esc", i18n::tui_hint_cancel()),
        ];
    }

    match app.focus {
        PanelFocus::MailList => vec![
            ("j/k", i18n::tui_hint_nav()),
            ("Enter", i18n::tui_hint_open()),
            ("r", i18n::tui_hint_refresh()),
            ("D", i18n::tui_hint_clear()),
            ("Tab", i18n::tui_hint_panel()),
            ("?", i18n::tui_hint_help()),
            ("q", i18n::tui_hint_quit()),
        ],
        PanelFocus::MailView => vec![
            ("j/k", i18n::tui_hint_scroll()),
            ("Esc", i18n::tui_hint_back()),
            ("r", i18n::tui_hint_refresh()),
            ("D", i18n::tui_hint_clear()),
            ("Tab", i18n::tui_hint_panel()),
            ("?", i18n::tui_hint_help()),
            ("q", i18n::tui_hint_quit()),
        ],
    }
}
