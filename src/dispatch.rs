//! Runs controller requests off the UI thread.
//!
//! Each request gets its own worker thread, so a slow or hung request never
//! delays the others. Completed responses are delivered over a channel that
//! the event loop drains on its own turn.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::api::MailApi;
use crate::inbox::{Request, Response};

/// Sends requests to worker threads and collects their responses.
pub struct Dispatcher {
    api: Arc<dyn MailApi>,
    tx: Sender<Response>,
    rx: Receiver<Response>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn MailApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx }
    }

    /// Start executing `request` in the background.
    pub fn dispatch(&self, request: Request) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tracing::trace!(?request, "Dispatching request");
        let spawned = thread::Builder::new()
            .name("inboxview-request".to_string())
            .spawn(move || {
                let response = request.execute(api.as_ref());
                // The receiver is gone once the viewer has shut down.
                let _ = tx.send(response);
            });
        if let Err(e) = spawned {
            tracing::error!(error = %e, "Failed to spawn request worker");
        }
    }

    /// Every response that has completed so far, without blocking.
    pub fn drain(&self) -> Vec<Response> {
        let mut responses = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        responses
    }

    /// Wait for the next response. Used by tests and one-shot commands.
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<Response> {
        self.rx.recv_timeout(timeout).ok()
    }
}
