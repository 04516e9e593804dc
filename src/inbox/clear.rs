//! Confirmation-gated "delete all messages".

use super::{Inbox, Request};
use crate::error::Result;

impl Inbox {
    /// Open the yes/no confirmation prompt.
    pub fn request_clear(&mut self) {
        self.confirming_clear = true;
    }

    /// Whether the confirmation prompt is open.
    pub fn is_confirming_clear(&self) -> bool {
        self.confirming_clear
    }

    /// Close the prompt without doing anything.
    pub fn decline_clear(&mut self) {
        self.confirming_clear = false;
    }

    /// Close the prompt and queue the bulk delete.
    ///
    /// Does nothing unless the prompt is open.
    pub fn confirm_clear(&mut self) {
        if !self.confirming_clear {
            return;
        }
        self.confirming_clear = false;
        self.outbox.push_back(Request::ClearAll);
    }

    /// Apply the answer to the bulk delete.
    ///
    /// A failure is only logged; nothing visible changes.
    pub(super) fn apply_cleared(&mut self, result: Result<()>) {
        match result {
            Ok(()) => {
                self.selected_id = None;
                // Whatever detail is still loading belongs to a deleted message.
                self.next_detail_seq();
                self.refresh_list();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error clearing emails");
            }
        }
    }
}
