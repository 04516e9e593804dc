//! Inbox controller: the viewer's state and the rules that change it.
//!
//! [`Inbox`] is the single owner of the selection and of both panes. It never
//! performs I/O. Operations queue [`Request`]s; whoever drives the controller
//! executes them (see [`crate::dispatch`]) and feeds the resulting
//! [`Response`]s back through [`Inbox::apply`] on the same thread that renders.
//!
//! Each request slot (list, detail) carries a monotonically increasing
//! sequence number. A list response is applied unless a newer one has already
//! been applied, so a backend slower than the poll interval still renders every
//! reply in order. A detail response must answer the latest detail request;
//! anything that resets the content pane also retires pending detail requests.

mod clear;
mod content;
mod sync;
pub mod timer;

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::api::MailApi;
use crate::error::Result;
use crate::i18n;
use crate::model::{MessageDetail, MessageSummary};

pub use timer::RefreshTimer;

/// Work the controller wants done against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `GET /api/emails`
    ListSummaries { seq: u64 },
    /// `GET /api/emails/{id}`
    Detail { id: String, seq: u64 },
    /// `POST /api/clear`
    ClearAll,
}

/// Outcome of a [`Request`], handed back to [`Inbox::apply`].
#[derive(Debug)]
pub enum Response {
    Summaries {
        seq: u64,
        result: Result<Vec<MessageSummary>>,
    },
    Detail {
        id: String,
        seq: u64,
        result: Result<MessageDetail>,
    },
    Cleared {
        result: Result<()>,
    },
}

impl Request {
    /// Run the request to completion against `api`.
    pub fn execute(self, api: &dyn MailApi) -> Response {
        match self {
            Request::ListSummaries { seq } => Response::Summaries {
                seq,
                result: api.list_summaries(),
            },
            Request::Detail { id, seq } => {
                let result = api.get_detail(&id);
                Response::Detail { id, seq, result }
            }
            Request::ClearAll => Response::Cleared {
                result: api.clear_all(),
            },
        }
    }
}

/// What the list pane currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPane {
    /// No list response has arrived yet.
    Loading,
    Messages(Vec<MessageSummary>),
    Empty,
    Error,
}

/// What the content pane currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPane {
    /// Nothing has been shown yet.
    Idle,
    Message(MessageDetail),
    Empty,
    Error,
}

impl ListPane {
    /// Summaries currently rendered (empty unless the pane holds messages).
    pub fn summaries(&self) -> &[MessageSummary] {
        match self {
            ListPane::Messages(items) => items,
            _ => &[],
        }
    }

    /// Literal text shown instead of a list, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListPane::Loading => Some(i18n::list_loading()),
            ListPane::Messages(_) => None,
            ListPane::Empty => Some(i18n::list_empty()),
            ListPane::Error => Some(i18n::list_error()),
        }
    }
}

impl ContentPane {
    /// The rendered message, if the pane holds one.
    pub fn detail(&self) -> Option<&MessageDetail> {
        match self {
            ContentPane::Message(detail) => Some(detail),
            _ => None,
        }
    }

    /// Literal text shown instead of a message, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ContentPane::Idle => Some(i18n::content_idle()),
            ContentPane::Message(_) => None,
            ContentPane::Empty => Some(i18n::content_empty()),
            ContentPane::Error => Some(i18n::content_error()),
        }
    }
}

/// Viewer state for one session.
#[derive(Debug)]
pub struct Inbox {
    /// Identifier of the message shown in the content pane.
    selected_id: Option<String>,
    list: ListPane,
    content: ContentPane,
    /// A clear-all confirmation prompt is open.
    confirming_clear: bool,
    /// Last list request issued.
    list_seq: u64,
    /// Last list response applied. Requests above it are still in flight.
    list_applied: u64,
    detail_seq: u64,
    /// When the last list response was applied successfully.
    last_synced: Option<DateTime<Utc>>,
    outbox: VecDeque<Request>,
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Inbox {
    pub fn new() -> Self {
        Self {
            selected_id: None,
            list: ListPane::Loading,
            content: ContentPane::Idle,
            confirming_clear: false,
            list_seq: 0,
            list_applied: 0,
            detail_seq: 0,
            last_synced: None,
            outbox: VecDeque::new(),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn list(&self) -> &ListPane {
        &self.list
    }

    pub fn content(&self) -> &ContentPane {
        &self.content
    }

    pub fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.last_synced
    }

    /// Whether `summary` is the selected message.
    pub fn is_active(&self, summary: &MessageSummary) -> bool {
        self.selected_id.as_deref() == Some(summary.id.as_str())
    }

    /// Drain the requests queued since the last call, oldest first.
    pub fn take_requests(&mut self) -> Vec<Request> {
        self.outbox.drain(..).collect()
    }

    /// Apply a completed request.
    pub fn apply(&mut self, response: Response) {
        match response {
            Response::Summaries { seq, result } => self.apply_summaries(seq, result),
            Response::Detail { id, seq, result } => self.apply_detail(&id, seq, result),
            Response::Cleared { result } => self.apply_cleared(result),
        }
    }

    fn next_list_seq(&mut self) -> u64 {
        self.list_seq += 1;
        self.list_seq
    }

    fn next_detail_seq(&mut self) -> u64 {
        self.detail_seq += 1;
        self.detail_seq
    }
}
