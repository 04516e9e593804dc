//! Access to the capture server's REST API.
//!
//! | Operation      | Request                 |
//! |----------------|-------------------------|
//! | List summaries | `GET /api/emails`       |
//! | Get detail     | `GET /api/emails/{id}`  |
//! | Clear all      | `POST /api/clear`       |

pub mod client;

pub use client::HttpMailApi;

use crate::error::Result;
use crate::model::{MessageDetail, MessageSummary};

/// The three backend operations the viewer depends on.
///
/// Calls block the current thread; the TUI runs them on worker threads.
pub trait MailApi: Send + Sync {
    /// Fetch the summary collection, in server order.
    fn list_summaries(&self) -> Result<Vec<MessageSummary>>;

    /// Fetch the full content of one message.
    fn get_detail(&self, id: &str) -> Result<MessageDetail>;

    /// Delete every captured message.
    fn clear_all(&self) -> Result<()>;
}
