//! Keyboard and mouse event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::{App, LayoutMode, PanelFocus};

/// Process a key event and update the application state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Ctrl+C always quits, even with a popup open
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Ok(());
    }

    // ── Popup handling (captures all keys) ────────────────
    if app.inbox.is_confirming_clear() {
        return handle_confirm_popup(app, key);
    }

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => app.show_help = false,
            _ => {}
        }
        return Ok(());
    }

    // ── Always-available shortcuts ────────────────────────
    match key.code {
        KeyCode::Char('?') => {
            app.show_help = true;
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                PanelFocus::MailList if app.layout != LayoutMode::ListOnly => PanelFocus::MailView,
                _ => PanelFocus::MailList,
            };
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.layout = LayoutMode::ListOnly;
            app.focus = PanelFocus::MailList;
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.layout = LayoutMode::HorizontalSplit;
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.layout = LayoutMode::VerticalSplit;
            return Ok(());
        }
        KeyCode::Char('r') => {
            app.refresh_now();
            return Ok(());
        }
        KeyCode::Char('D') => {
            app.inbox.request_clear();
            return Ok(());
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return Ok(());
        }
        _ => {}
    }

    // ── Panel-specific shortcuts ──────────────────────────
    match app.focus {
        PanelFocus::MailList => handle_mail_list_keys(app, key),
        PanelFocus::MailView => handle_mail_view_keys(app, key),
    }
    Ok(())
}

/// Left clicks on the list select the row under the cursor.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.show_help || app.inbox.is_confirming_clear() {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click_list(mouse.column, mouse.row),
        MouseEventKind::ScrollDown if app.focus == PanelFocus::MailView => {
            app.message_scroll_offset += 3;
        }
        MouseEventKind::ScrollUp if app.focus == PanelFocus::MailView => {
            app.message_scroll_offset = app.message_scroll_offset.saturating_sub(3);
        }
        _ => {}
    }
}

/// Key handling while the clear-all prompt is open.
fn handle_confirm_popup(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.inbox.decline_clear(),
        _ => {}
    }
    Ok(())
}

/// Key handling when the mail list panel has focus.
fn handle_mail_list_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1),
        KeyCode::Char('g') | KeyCode::Home => app.select_message(0),
        KeyCode::Char('G') | KeyCode::End => {
            let last = app.visible_count().saturating_sub(1);
            app.select_message(last);
        }
        KeyCode::PageDown => {
            let page = app.list_viewport_height.max(1) as isize;
            app.move_selection(page);
        }
        KeyCode::PageUp => {
            let page = app.list_viewport_height.max(1) as isize;
            app.move_selection(-page);
        }
        KeyCode::Enter => {
            if app.layout == LayoutMode::ListOnly {
                app.layout = LayoutMode::HorizontalSplit;
            }
            app.focus = PanelFocus::MailView;
        }
        _ => {}
    }
}

/// Key handling when the message view panel has focus.
fn handle_mail_view_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.message_scroll_offset += 1;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.message_scroll_offset = app.message_scroll_offset.saturating_sub(1);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            let page = app.message_view_height.max(1);
            app.message_scroll_offset += page;
        }
        KeyCode::PageUp => {
            let page = app.message_view_height.max(1);
            app.message_scroll_offset = app.message_scroll_offset.saturating_sub(page);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.message_scroll_offset = 0;
        }
        KeyCode::Esc => {
            app.focus = PanelFocus::MailList;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;
    use crate::config::Config;
    use crate::inbox::test_support::summary;
    use crate::inbox::{Request, Response};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(&Config::default());
        app.mount(Instant::now());
        for request in app.take_requests() {
            if let Request::ListSummaries { seq } = request {
                app.apply(Response::Summaries {
                    seq,
                    result: Ok(vec![summary("a", None), summary("b", None)]),
                });
            }
        }
        app.take_requests();
        app
    }

    #[test]
    fn test_down_selects_next_message() {
        let mut app = loaded_app();
        handle_key_event(&mut app, press(KeyCode::Down)).unwrap();
        assert_eq!(app.inbox.selected_id(), Some("b"));
        assert!(matches!(
            app.take_requests().as_slice(),
            [Request::Detail { id, .. }] if id == "b"
        ));
    }

    #[test]
    fn test_clear_prompt_declined() {
        let mut app = loaded_app();
        handle_key_event(&mut app, press(KeyCode::Char('D'))).unwrap();
        assert!(app.inbox.is_confirming_clear());

        // Other keys are swallowed while the prompt is open.
        handle_key_event(&mut app, press(KeyCode::Char('q'))).unwrap();
        assert!(!app.should_quit);

        handle_key_event(&mut app, press(KeyCode::Char('n'))).unwrap();
        assert!(!app.inbox.is_confirming_clear());
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_clear_prompt_confirmed() {
        let mut app = loaded_app();
        handle_key_event(&mut app, press(KeyCode::Char('D'))).unwrap();
        handle_key_event(&mut app, press(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.take_requests(), vec![Request::ClearAll]);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_refresh_key_queues_list_request() {
        let mut app = loaded_app();
        handle_key_event(&mut app, press(KeyCode::Char('r'))).unwrap();
        assert!(matches!(
            app.take_requests().as_slice(),
            [Request::ListSummaries { .. }]
        ));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = loaded_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key).unwrap();
        assert!(!app.should_quit);
    }
}
