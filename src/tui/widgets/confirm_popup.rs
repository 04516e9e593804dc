//! Clear-all confirmation prompt.

use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::help_popup::centered_rect_exact;
use crate::i18n;
use crate::tui::app::App;
use crate::tui::theme::current_theme;

/// Render the prompt centered on screen.
pub fn render(frame: &mut Frame, _app: &App) {
    let theme = current_theme();
    let screen = frame.area();

    let question = i18n::confirm_clear();
    let width = (question.width() as u16 + 6).min(screen.width.saturating_sub(2));
    let area = centered_rect_exact(width, 6, screen);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.popup_warning)
        .title(i18n::tui_confirm_title())
        .style(theme.popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(question, theme.popup_warning)),
        Line::from(""),
        Line::from(Span::styled(i18n::tui_confirm_keys(), theme.key_hint)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
