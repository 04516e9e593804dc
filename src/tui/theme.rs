//! Color theme definitions for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// A complete color theme for the TUI.
pub struct Theme {
    pub header_bar: Style,
    pub status_bar: Style,
    pub list_active: Style,
    pub list_header: Style,
    pub list_normal: Style,
    pub message_title: Style,
    pub message_header_label: Style,
    pub message_header_value: Style,
    pub message_body: Style,
    pub url: Style,
    pub placeholder: Style,
    pub error: Style,
    pub border: Style,
    pub border_focused: Style,
    pub popup: Style,
    pub popup_title: Style,
    pub popup_warning: Style,
    pub key_hint: Style,
    pub help_section: Style,
    pub help_dim: Style,
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(200, 200, 220))
                .bg(Color::Rgb(30, 30, 46)),
            status_bar: Style::default()
                .fg(Color::Rgb(150, 150, 170))
                .bg(Color::Rgb(30, 30, 46)),
            list_active: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 100))
                .add_modifier(Modifier::BOLD),
            list_header: Style::default()
                .fg(Color::Rgb(180, 180, 200))
                .bg(Color::Rgb(40, 40, 60))
                .add_modifier(Modifier::BOLD),
            list_normal: Style::default().fg(Color::Rgb(200, 200, 220)),
            message_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            message_header_label: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            message_header_value: Style::default().fg(Color::Rgb(220, 220, 230)),
            message_body: Style::default().fg(Color::Rgb(220, 220, 230)),
            url: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
            placeholder: Style::default()
                .fg(Color::Rgb(130, 130, 150))
                .add_modifier(Modifier::ITALIC),
            error: Style::default().fg(Color::Rgb(240, 110, 110)),
            border: Style::default().fg(Color::Rgb(80, 80, 100)),
            border_focused: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            popup: Style::default()
                .fg(Color::Rgb(220, 220, 230))
                .bg(Color::Rgb(20, 20, 35)),
            popup_title: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            popup_warning: Style::default()
                .fg(Color::Rgb(240, 110, 110))
                .add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            help_section: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            help_dim: Style::default().fg(Color::Rgb(110, 110, 130)),
        }
    }
}

/// Return the active theme.
pub fn current_theme() -> Theme {
    Theme::dark()
}
