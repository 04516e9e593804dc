//! List synchronization and selection.

use chrono::Utc;

use super::{ContentPane, Inbox, ListPane, Request};
use crate::error::Result;
use crate::model::MessageSummary;

impl Inbox {
    /// Queue a fetch of the summary collection.
    pub fn refresh_list(&mut self) {
        let seq = self.next_list_seq();
        self.outbox.push_back(Request::ListSummaries { seq });
    }

    /// Periodic refresh: queue a list fetch unless one is still in flight.
    ///
    /// Returns whether a request was queued.
    pub fn poll_list(&mut self) -> bool {
        if self.list_in_flight() {
            tracing::debug!(
                issued = self.list_seq,
                applied = self.list_applied,
                "List request still in flight, skipping tick"
            );
            return false;
        }
        self.refresh_list();
        true
    }

    /// Whether an issued list request has not been answered yet.
    pub fn list_in_flight(&self) -> bool {
        self.list_seq > self.list_applied
    }

    /// Apply the answer to list request `seq`.
    pub(super) fn apply_summaries(&mut self, seq: u64, result: Result<Vec<MessageSummary>>) {
        if seq <= self.list_applied {
            tracing::debug!(seq, applied = self.list_applied, "Dropping stale list response");
            return;
        }
        self.list_applied = seq;

        let summaries = match result {
            Ok(summaries) => summaries,
            Err(e) => {
                tracing::warn!(error = %e, "Error loading emails");
                self.list = ListPane::Error;
                return;
            }
        };

        self.last_synced = Some(Utc::now());

        if summaries.is_empty() {
            tracing::debug!("Inbox is empty");
            self.list = ListPane::Empty;
            self.content = ContentPane::Empty;
            self.next_detail_seq();
            return;
        }

        tracing::debug!(count = summaries.len(), "Inbox synchronized");
        let first_id = summaries[0].id.clone();
        match self.selected_id.as_deref() {
            None => {
                self.list = ListPane::Messages(summaries);
                self.select(&first_id);
            }
            Some(selected) => {
                // The selection is kept even when the message vanished server-side.
                if !summaries.iter().any(|s| s.id == selected) {
                    tracing::debug!(id = selected, "Selected message is no longer listed");
                }
                self.list = ListPane::Messages(summaries);
            }
        }
    }

    /// Make `id` the selected message and show it.
    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
        self.show(id);
    }

    /// Position of the selected message in the rendered list.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected_id.as_deref()?;
        self.list.summaries().iter().position(|s| s.id == selected)
    }

    /// Select the list item at `index`. Out-of-range indices are ignored.
    pub fn select_at(&mut self, index: usize) {
        if let Some(id) = self.list.summaries().get(index).map(|s| s.id.clone()) {
            self.select(&id);
        }
    }

    /// Move the selection by `delta` items, clamped to the list bounds.
    ///
    /// Starts from the first item when the selection is not in the list.
    pub fn select_relative(&mut self, delta: isize) {
        let count = self.list.summaries().len();
        if count == 0 {
            return;
        }
        let target = match self.selected_index() {
            Some(current) => current
                .saturating_add_signed(delta)
                .min(count - 1),
            None => 0,
        };
        if Some(target) != self.selected_index() {
            self.select_at(target);
        }
    }
}
