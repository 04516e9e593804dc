//! Content pane: fetch and display one message.

use super::{ContentPane, Inbox, Request};
use crate::error::Result;
use crate::model::MessageDetail;

impl Inbox {
    /// Queue a fresh fetch of message `id`. Details are never cached.
    pub fn show(&mut self, id: &str) {
        let seq = self.next_detail_seq();
        self.outbox.push_back(Request::Detail {
            id: id.to_string(),
            seq,
        });
    }

    /// Apply the answer to detail request `seq` for message `id`.
    pub(super) fn apply_detail(&mut self, id: &str, seq: u64, result: Result<MessageDetail>) {
        if seq != self.detail_seq {
            tracing::debug!(id, seq, latest = self.detail_seq, "Dropping stale detail response");
            return;
        }

        match result {
            Ok(mut detail) => {
                if detail.id.is_empty() {
                    detail.id = id.to_string();
                }
                self.content = ContentPane::Message(detail);
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Error loading email content");
                self.content = ContentPane::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{ContentPane, Inbox, Request, Response};

    fn detail_seq(inbox: &mut Inbox, expected_id: &str) -> u64 {
        match inbox.take_requests().as_slice() {
            [Request::Detail { id, seq }] if id == expected_id => *seq,
            other => panic!("expected detail request for {expected_id}, got {other:?}"),
        }
    }

    #[test]
    fn test_show_renders_detail() {
        let mut inbox = Inbox::new();
        inbox.show("a");
        let seq = detail_seq(&mut inbox, "a");
        let mut payload = detail("a", "hello");
        payload.id.clear();
        inbox.apply(Response::Detail {
            id: "a".to_string(),
            seq,
            result: Ok(payload),
        });

        let shown = inbox.content().detail().expect("message shown");
        assert_eq!(shown.id, "a");
        assert_eq!(shown.title(), "Hi");
        assert_eq!(shown.recipients_line(), "z@w.com");
    }

    #[test]
    fn test_show_twice_is_idempotent() {
        let mut inbox = Inbox::new();
        let mut rendered = Vec::new();
        for _ in 0..2 {
            inbox.show("a");
            let seq = detail_seq(&mut inbox, "a");
            inbox.apply(Response::Detail {
                id: "a".to_string(),
                seq,
                result: Ok(detail("a", "hello")),
            });
            rendered.push(inbox.content().clone());
        }
        assert_eq!(rendered[0], rendered[1]);
    }

    #[test]
    fn test_failure_shows_error_and_keeps_selection() {
        let mut inbox = Inbox::new();
        inbox.select("a");
        let seq = detail_seq(&mut inbox, "a");
        inbox.apply(Response::Detail {
            id: "a".to_string(),
            seq,
            result: Err(network_error()),
        });
        assert_eq!(inbox.content(), &ContentPane::Error);
        assert_eq!(inbox.selected_id(), Some("a"));
        assert!(inbox.take_requests().is_empty());
    }

    #[test]
    fn test_late_response_does_not_overwrite_newer_selection() {
        let mut inbox = Inbox::new();
        inbox.select("a");
        let seq_a = detail_seq(&mut inbox, "a");
        inbox.select("b");
        let seq_b = detail_seq(&mut inbox, "b");

        inbox.apply(Response::Detail {
            id: "b".to_string(),
            seq: seq_b,
            result: Ok(detail("b", "newer")),
        });
        inbox.apply(Response::Detail {
            id: "a".to_string(),
            seq: seq_a,
            result: Ok(detail("a", "older")),
        });

        assert_eq!(inbox.selected_id(), Some("b"));
        assert_eq!(
            inbox.content().detail().map(|d| d.body.as_str()),
            Some("newer")
        );
    }
}
