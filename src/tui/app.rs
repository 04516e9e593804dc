//! Global application state for the TUI (the "Model" in Elm architecture).

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::Config;
use crate::i18n;
use crate::inbox::{Inbox, RefreshTimer, Request, Response};

/// Which panel currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    MailList,
    MailView,
}

/// Layout arrangement for list and message panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Only the message list is visible.
    ListOnly,
    /// List on top, message below.
    HorizontalSplit,
    /// List on the left, message on the right.
    VerticalSplit,
}

impl LayoutMode {
    /// Parse the `display.layout` setting. Unknown values fall back to horizontal.
    pub fn from_config(value: &str) -> Self {
        match value {
            "list-only" => Self::ListOnly,
            "vertical" => Self::VerticalSplit,
            _ => Self::HorizontalSplit,
        }
    }
}

/// Complete TUI state.
pub struct App {
    // ── Data ──────────────────────────────────
    /// Selection and pane contents.
    pub inbox: Inbox,
    /// Periodic list refresh.
    pub timer: RefreshTimer,
    /// Backend the viewer is attached to (display only).
    pub server_url: String,
    /// `strftime` format for receipt timestamps.
    pub date_format: String,

    // ── Navigation ────────────────────────────
    /// Scroll offset for the list widget.
    pub list_scroll_offset: usize,
    /// Scroll offset for the message view widget.
    pub message_scroll_offset: usize,
    /// Id of the message the scroll offset belongs to.
    scrolled_message: Option<String>,

    // ── UI state ──────────────────────────────
    /// Active panel.
    pub focus: PanelFocus,
    /// Layout mode.
    pub layout: LayoutMode,
    /// Help popup visible?
    pub show_help: bool,

    // ── Lifecycle ─────────────────────────────
    pub should_quit: bool,
    /// Transient status message and the instant it was set.
    pub status_message: Option<(String, Instant)>,

    /// Cached viewport height for the list (set during render).
    pub list_viewport_height: usize,
    /// Cached viewport height for the message view (set during render).
    pub message_view_height: usize,
    /// Screen area holding the list rows (set during render).
    pub list_rows_area: Rect,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            inbox: Inbox::new(),
            timer: RefreshTimer::new(config.polling.interval()),
            server_url: config.server.url.clone(),
            date_format: config.general.date_format.clone(),
            list_scroll_offset: 0,
            message_scroll_offset: 0,
            scrolled_message: None,
            focus: PanelFocus::MailList,
            layout: LayoutMode::from_config(&config.display.layout),
            show_help: false,
            should_quit: false,
            status_message: None,
            list_viewport_height: 20,
            message_view_height: 20,
            list_rows_area: Rect::default(),
        }
    }

    /// Initial load plus the start of the periodic refresh.
    pub fn mount(&mut self, now: Instant) {
        self.inbox.refresh_list();
        self.timer.start(now);
        tracing::info!(
            url = %self.server_url,
            interval_secs = self.timer.interval().as_secs(),
            "Viewer mounted"
        );
    }

    /// Stop the periodic refresh.
    pub fn teardown(&mut self) {
        self.timer.stop();
        tracing::info!("Viewer torn down");
    }

    /// Called every loop turn: fires the refresh timer and clears expired status messages.
    pub fn tick(&mut self, now: Instant) {
        if self.timer.poll_due(now) {
            self.inbox.poll_list();
        }
        if let Some((_, when)) = &self.status_message {
            if now.duration_since(*when).as_secs() >= 5 {
                self.status_message = None;
            }
        }
    }

    /// Requests queued by the inbox since the last call.
    pub fn take_requests(&mut self) -> Vec<Request> {
        self.inbox.take_requests()
    }

    /// Apply a completed request and keep the view consistent with it.
    pub fn apply(&mut self, response: Response) {
        self.inbox.apply(response);

        let shown = self.inbox.content().detail().map(|d| d.id.clone());
        if shown != self.scrolled_message {
            self.message_scroll_offset = 0;
            self.scrolled_message = shown;
        }
        self.clamp_list_scroll();
        self.ensure_selected_visible();
    }

    /// Select the list item at `index` (the keyboard/mouse equivalent of a click).
    pub fn select_message(&mut self, index: usize) {
        self.inbox.select_at(index);
        self.ensure_selected_visible();
    }

    /// Move the selection up or down.
    pub fn move_selection(&mut self, delta: isize) {
        self.inbox.select_relative(delta);
        self.ensure_selected_visible();
    }

    /// Number of items in the list pane.
    pub fn visible_count(&self) -> usize {
        self.inbox.list().summaries().len()
    }

    /// Select the row under a mouse click, if the click hit a list row.
    pub fn click_list(&mut self, column: u16, row: u16) {
        let area = self.list_rows_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return;
        }
        self.focus = PanelFocus::MailList;
        let index = self.list_scroll_offset + (row - area.y) as usize;
        if index < self.visible_count() {
            self.select_message(index);
        }
    }

    /// Refresh the list out of band from the timer.
    pub fn refresh_now(&mut self) {
        self.inbox.refresh_list();
        self.set_status(i18n::status_refreshing());
    }

    /// Accept the open clear-all prompt.
    pub fn confirm_clear(&mut self) {
        if self.inbox.is_confirming_clear() {
            self.inbox.confirm_clear();
            self.set_status(i18n::status_clearing());
        }
    }

    /// Set a transient status message that auto-clears after a few seconds.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some((msg.to_string(), Instant::now()));
    }

    /// Ensure the selected row is visible given the current scroll offset.
    pub fn ensure_selected_visible(&mut self) {
        let Some(selected) = self.inbox.selected_index() else {
            return;
        };
        let vp = self.list_viewport_height.max(1);
        if selected < self.list_scroll_offset {
            self.list_scroll_offset = selected;
        } else if selected >= self.list_scroll_offset + vp {
            self.list_scroll_offset = selected.saturating_sub(vp - 1);
        }
    }

    /// Keep the scroll offset inside a list that may have shrunk.
    fn clamp_list_scroll(&mut self) {
        let max = self.visible_count().saturating_sub(1);
        self.list_scroll_offset = self.list_scroll_offset.min(max);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::inbox::test_support::{detail, summary};

    fn app() -> App {
        App::new(&Config::default())
    }

    fn answer_list(app: &mut App, items: Vec<crate::model::MessageSummary>) {
        for request in app.take_requests() {
            if let Request::ListSummaries { seq } = request {
                app.apply(Response::Summaries {
                    seq,
                    result: Ok(items.clone()),
                });
            }
        }
    }

    #[test]
    fn test_mount_queues_initial_refresh_and_starts_timer() {
        let mut app = app();
        let t0 = Instant::now();
        app.mount(t0);
        assert!(app.timer.is_running());
        answer_list(&mut app, Vec::new());

        app.tick(t0 + Duration::from_secs(5));
        assert!(app.take_requests().is_empty());
        app.tick(t0 + Duration::from_secs(10));
        assert!(matches!(
            app.take_requests().as_slice(),
            [Request::ListSummaries { .. }]
        ));

        app.teardown();
        app.tick(t0 + Duration::from_secs(60));
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_tick_skips_while_list_request_is_pending() {
        let mut app = app();
        let t0 = Instant::now();
        app.mount(t0);
        let pending = app.take_requests();

        // Backend has not answered: ticks queue nothing.
        app.tick(t0 + Duration::from_secs(10));
        app.tick(t0 + Duration::from_secs(20));
        assert!(app.take_requests().is_empty());

        let Some(Request::ListSummaries { seq }) = pending.first().cloned() else {
            panic!("unexpected {pending:?}");
        };
        app.apply(Response::Summaries {
            seq,
            result: Ok(Vec::new()),
        });
        app.tick(t0 + Duration::from_secs(30));
        assert!(matches!(
            app.take_requests().as_slice(),
            [Request::ListSummaries { .. }]
        ));

        // A manual refresh is never skipped.
        app.refresh_now();
        assert!(matches!(
            app.take_requests().as_slice(),
            [Request::ListSummaries { .. }]
        ));
    }

    #[test]
    fn test_layout_from_config() {
        assert_eq!(LayoutMode::from_config("vertical"), LayoutMode::VerticalSplit);
        assert_eq!(LayoutMode::from_config("list-only"), LayoutMode::ListOnly);
        assert_eq!(LayoutMode::from_config("other"), LayoutMode::HorizontalSplit);
    }

    #[test]
    fn test_click_selects_row() {
        let mut app = app();
        app.mount(Instant::now());
        answer_list(
            &mut app,
            vec![summary("a", None), summary("b", None), summary("c", None)],
        );
        app.take_requests();
        app.list_rows_area = Rect::new(1, 3, 40, 10);

        app.click_list(5, 5);
        assert_eq!(app.inbox.selected_id(), Some("c"));
        assert!(matches!(
            app.take_requests().as_slice(),
            [Request::Detail { id, .. }] if id == "c"
        ));

        // Below the last row and outside the area: ignored.
        app.click_list(5, 8);
        app.click_list(60, 3);
        assert_eq!(app.inbox.selected_id(), Some("c"));
    }

    #[test]
    fn test_message_scroll_resets_on_new_message() {
        let mut app = app();
        app.inbox.select("a");
        let seq = match app.take_requests().as_slice() {
            [Request::Detail { seq, .. }] => *seq,
            other => panic!("unexpected {other:?}"),
        };
        app.apply(Response::Detail {
            id: "a".to_string(),
            seq,
            result: Ok(detail("a", "hello")),
        });
        app.message_scroll_offset = 7;

        app.inbox.select("b");
        let seq = match app.take_requests().as_slice() {
            [Request::Detail { seq, .. }] => *seq,
            other => panic!("unexpected {other:?}"),
        };
        app.apply(Response::Detail {
            id: "b".to_string(),
            seq,
            result: Ok(detail("b", "bye")),
        });
        assert_eq!(app.message_scroll_offset, 0);
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut app = app();
        app.list_viewport_height = 3;
        app.mount(Instant::now());
        let items: Vec<_> = (0..10).map(|i| summary(&i.to_string(), None)).collect();
        answer_list(&mut app, items);
        app.select_message(8);
        assert_eq!(app.list_scroll_offset, 6);
        app.move_selection(-8);
        assert_eq!(app.list_scroll_offset, 0);
    }
}
