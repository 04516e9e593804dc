//! Message view: header block and body of the selected message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::i18n;
use crate::inbox::ContentPane;
use crate::model::message::{format_timestamp, render_markup};
use crate::model::{BodyView, MessageDetail};
use crate::tui::app::{App, PanelFocus};
use crate::tui::theme::{current_theme, Theme};

/// Columns a tab advances to in preformatted bodies.
const TAB_WIDTH: usize = 8;

/// Render the message view panel.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = current_theme();

    let border_style = if app.focus == PanelFocus::MailView {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(i18n::tui_message_title());

    let inner = block.inner(area);
    app.message_view_height = inner.height as usize;
    frame.render_widget(block, area);

    let detail = match app.inbox.content() {
        ContentPane::Message(detail) => detail,
        pane => {
            let style = if matches!(pane, ContentPane::Error) {
                theme.error
            } else {
                theme.placeholder
            };
            let text = pane.placeholder().unwrap_or_default();
            frame.render_widget(Paragraph::new(format!(" {text}")).style(style), inner);
            return;
        }
    };

    let lines = build_lines(detail, &app.date_format, inner.width as usize, &theme);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    // Clamp against rows after wrapping, not source lines
    let rows = paragraph.line_count(inner.width);
    let max_scroll = rows.saturating_sub(inner.height as usize);
    let scroll = app.message_scroll_offset.min(max_scroll);
    app.message_scroll_offset = scroll;

    let paragraph = paragraph.scroll((scroll.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(paragraph, inner);
}

/// Header block, separator and body for one message.
fn build_lines(
    detail: &MessageDetail,
    date_format: &str,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(detail.title().to_string(), theme.message_title)),
        Line::from(""),
        Line::from(vec![
            Span::styled(i18n::tui_header_from(), theme.message_header_label),
            Span::styled(detail.from.clone(), theme.message_header_value),
        ]),
        Line::from(vec![
            Span::styled(i18n::tui_header_to(), theme.message_header_label),
            Span::styled(detail.recipients_line(), theme.message_header_value),
        ]),
        Line::from(vec![
            Span::styled(i18n::tui_header_date(), theme.message_header_label),
            Span::styled(
                format_timestamp(&detail.timestamp, date_format),
                theme.message_header_value,
            ),
        ]),
        Line::from(Span::styled("\u{2500}".repeat(width), theme.border)),
    ];

    match detail.body_view() {
        BodyView::Preformatted(text) => {
            for line in text.lines() {
                lines.push(style_body_line(&expand_tabs(line), theme));
            }
        }
        BodyView::Markup(markup) => {
            let rendered = render_markup(markup, width);
            for line in rendered.lines() {
                lines.push(style_body_line(line, theme));
            }
        }
    }

    lines
}

/// Replace tabs with spaces up to the next tab stop.
fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}

/// Style a single body line, highlighting URLs.
fn style_body_line(line: &str, theme: &Theme) -> Line<'static> {
    let mut starts: Vec<usize> = line
        .match_indices("http://")
        .chain(line.match_indices("https://"))
        .map(|(i, _)| i)
        .collect();
    starts.sort_unstable();

    let mut spans = Vec::new();
    let mut last_end = 0;
    for start in starts {
        if start < last_end {
            continue;
        }
        if start > last_end {
            spans.push(Span::styled(
                line[last_end..start].to_string(),
                theme.message_body,
            ));
        }
        let rest = &line[start..];
        let len = rest
            .find(|c: char| c.is_whitespace() || matches!(c, '>' | ')' | '"' | ']'))
            .unwrap_or(rest.len());
        spans.push(Span::styled(rest[..len].to_string(), theme.url));
        last_end = start + len;
    }

    if last_end < line.len() {
        spans.push(Span::styled(
            line[last_end..].to_string(),
            theme.message_body,
        ));
    }

    if spans.is_empty() {
        Line::from(Span::styled(String::new(), theme.message_body))
    } else {
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::config::Config;
    use crate::inbox::test_support::{detail, network_error};
    use crate::inbox::{Request, Response};
    use crate::error::Result;

    fn app_showing(result: Result<MessageDetail>) -> App {
        let mut app = App::new(&Config::default());
        app.inbox.select("1");
        let seq = match app.take_requests().as_slice() {
            [Request::Detail { seq, .. }] => *seq,
            other => panic!("unexpected {other:?}"),
        };
        app.apply(Response::Detail {
            id: "1".to_string(),
            seq,
            result,
        });
        app
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, app, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_preformatted_body_shown_literally() {
        let mut d = detail("1", "hello\n<b>not bold</b>");
        d.subject = None;
        let mut app = app_showing(Ok(d));
        let text = draw(&mut app);
        assert!(text.contains("(No subject)"));
        assert!(text.contains("hello"));
        assert!(text.contains("<b>not bold</b>"));
        assert!(text.contains("z@w.com"));
    }

    #[test]
    fn test_markup_body_is_rendered() {
        let mut d = detail("1", "<p>Hello <b>there</b></p>");
        d.html = true;
        let mut app = app_showing(Ok(d));
        let text = draw(&mut app);
        assert!(text.contains("there"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_error_placeholder() {
        let mut app = app_showing(Err(network_error()));
        assert!(draw(&mut app).contains("Error loading email content"));
    }

    #[test]
    fn test_idle_placeholder() {
        let mut app = App::new(&Config::default());
        assert!(draw(&mut app).contains("No message selected"));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app_showing(Ok(detail("1", "short")));
        app.message_scroll_offset = 500;
        draw(&mut app);
        assert_eq!(app.message_scroll_offset, 0);
    }

    #[test]
    fn test_scroll_reaches_end_of_wrapped_body() {
        // One source line that wraps to many rows in a 78-column panel.
        let body = "word ".repeat(400);
        let mut app = app_showing(Ok(detail("1", body.trim_end())));
        app.message_scroll_offset = usize::MAX;
        draw(&mut app);

        // 6 header lines + 1 body line unwrapped would allow no scrolling at all.
        assert!(app.message_scroll_offset > 0);
        let max = app.message_scroll_offset;
        app.message_scroll_offset = max + 1;
        draw(&mut app);
        assert_eq!(app.message_scroll_offset, max);
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("a\tb"), "a       b");
        assert_eq!(expand_tabs("\tx"), "        x");
        assert_eq!(expand_tabs("plain"), "plain");
    }

    #[test]
    fn test_style_body_line_marks_urls() {
        let theme = current_theme();
        let line = style_body_line("see https://a.io and http://b.io.", &theme);
        let urls: Vec<String> = line
            .spans
            .iter()
            .filter(|s| s.style == theme.url)
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(urls, vec!["https://a.io", "http://b.io."]);
    }
}
