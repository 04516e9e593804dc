//! Help popup showing keyboard shortcuts in multi-column layout.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::mail_list::truncate_str;
use crate::i18n;
use crate::tui::app::App;
use crate::tui::theme::{current_theme, Theme};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A single shortcut entry.
struct Shortcut {
    key: &'static str,
    desc: &'static str,
}

/// Render the help popup centered on screen with multi-column shortcuts.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = current_theme();
    let screen = frame.area();

    let popup_width = (screen.width * 78 / 100).min(screen.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(2) as usize; // borders

    let cols = if inner_width >= 90 {
        3
    } else if inner_width >= 56 {
        2
    } else {
        1
    };
    let col_width = inner_width / cols;
    let sep_width = inner_width.saturating_sub(2);

    let lines = build_lines(app, cols, col_width, sep_width, &theme);

    // Size popup to fit content: lines + 2 (borders) + 1 (bottom padding)
    let content_height = lines.len() as u16 + 1;
    let popup_height = (content_height + 2).min(screen.height.saturating_sub(2));

    let area = centered_rect_exact(popup_width, popup_height, screen);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.popup_title)
        .title(i18n::tui_help_title())
        .style(theme.popup);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Build all the help content lines.
fn build_lines(
    app: &App,
    cols: usize,
    col_width: usize,
    sep_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(vec![
            Span::styled(format!("  {}", i18n::app_name()), theme.popup_title),
            Span::styled(format!("  v{VERSION}"), theme.help_dim),
        ]),
        Line::from(Span::styled(
            format!("  {}", i18n::tui_help_description()),
            theme.help_dim,
        )),
        Line::from(Span::styled(
            format!("  {}", app.server_url),
            theme.help_dim,
        )),
        Line::from(""),
    ];

    add_section_header(&mut lines, i18n::tui_help_navigation(), theme, sep_width);
    add_shortcuts_columns(
        &mut lines,
        &[
            Shortcut {
                key: "j / k",
                desc: i18n::tui_help_next_prev(),
            },
            Shortcut {
                key: "g / G",
                desc: i18n::tui_help_first_last(),
            },
            Shortcut {
                key: "Click",
                desc: i18n::tui_help_click(),
            },
            Shortcut {
                key: "PgDn/Up",
                desc: i18n::tui_help_page_scroll(),
            },
            Shortcut {
                key: "Enter",
                desc: i18n::tui_help_open_message(),
            },
            Shortcut {
                key: "Tab",
                desc: i18n::tui_help_cycle_panel(),
            },
            Shortcut {
                key: "Esc",
                desc: i18n::tui_help_back_close(),
            },
        ],
        cols,
        col_width,
        theme,
    );
    lines.push(Line::from(""));

    add_section_header(&mut lines, i18n::tui_help_actions(), theme, sep_width);
    add_shortcuts_columns(
        &mut lines,
        &[
            Shortcut {
                key: "r",
                desc: i18n::tui_help_refresh(),
            },
            Shortcut {
                key: "D",
                desc: i18n::tui_help_clear_all(),
            },
            Shortcut {
                key: "1/2/3",
                desc: i18n::tui_help_layout_mode(),
            },
            Shortcut {
                key: "?",
                desc: i18n::tui_help_this_help(),
            },
            Shortcut {
                key: "q",
                desc: i18n::tui_help_quit(),
            },
            Shortcut {
                key: "Ctrl-C",
                desc: i18n::tui_help_force_quit(),
            },
        ],
        cols,
        col_width,
        theme,
    );

    lines
}

/// Add a section header with a trailing separator line.
fn add_section_header(lines: &mut Vec<Line<'static>>, title: &str, theme: &Theme, width: usize) {
    let remaining = width.saturating_sub(title.width() + 4);
    lines.push(Line::from(vec![
        Span::styled(format!("  {title} "), theme.help_section),
        Span::styled("\u{2500}".repeat(remaining), theme.help_dim),
    ]));
}

/// Lay out shortcuts in N columns per row.
fn add_shortcuts_columns(
    lines: &mut Vec<Line<'static>>,
    shortcuts: &[Shortcut],
    cols: usize,
    col_width: usize,
    theme: &Theme,
) {
    let key_w: usize = 8;

    for row in shortcuts.chunks(cols) {
        let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];

        for s in row {
            let padded_key = format!("{:>width$}", s.key, width = key_w);
            let desc = truncate_str(s.desc, col_width.saturating_sub(key_w + 3));
            let padding = col_width.saturating_sub(key_w + 1 + desc.width()).max(1);

            spans.push(Span::styled(padded_key, theme.key_hint));
            spans.push(Span::styled(format!(" {desc}"), theme.popup));
            spans.push(Span::raw(" ".repeat(padding)));
        }

        lines.push(Line::from(spans));
    }
}

/// Calculate a centered rectangle with exact dimensions, clamped to screen.
pub(crate) fn centered_rect_exact(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
