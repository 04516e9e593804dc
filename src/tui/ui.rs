//! Main render function that dispatches to widgets.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use super::app::{App, LayoutMode};
use super::widgets;

/// Render the entire TUI frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Vertical layout: header (1) + content (flex) + status (1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header bar
            Constraint::Min(5),    // content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    widgets::header_bar::render(frame, app, vertical[0]);

    let content_area = vertical[1];
    match app.layout {
        LayoutMode::ListOnly => {
            widgets::mail_list::render(frame, app, content_area);
        }
        LayoutMode::HorizontalSplit => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(content_area);
            widgets::mail_list::render(frame, app, split[0]);
            widgets::mail_view::render(frame, app, split[1]);
        }
        LayoutMode::VerticalSplit => {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(content_area);
            widgets::mail_list::render(frame, app, split[0]);
            widgets::mail_view::render(frame, app, split[1]);
        }
    }

    widgets::status_bar::render(frame, app, vertical[2]);

    // Popups (rendered on top of everything)
    if app.show_help {
        widgets::help_popup::render(frame, app);
    }
    if app.inbox.is_confirming_clear() {
        widgets::confirm_popup::render(frame, app);
    }
}
