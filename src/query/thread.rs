//! Fire-and-forget worker thread for one `/ask` call.
//!
//! The thread does ONLY HTTP I/O. No state transitions, no rendering.
//! It sends exactly one terminal event and exits; the controller on the
//! UI thread decides whether that event is still relevant.

use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::api::types::QuestionRequest;
use crate::api::AskClient;
use crate::query::events::{AskEvent, AskSender};

/// Handle to a running ask thread.
///
/// There is no cancellation: `clear()` and newer submissions make the
/// result irrelevant via sequence numbers, but the HTTP call itself runs
/// to completion.
#[derive(Debug)]
pub struct AskThreadHandle {
    handle: Option<JoinHandle<()>>,
    seq: u64,
}

impl AskThreadHandle {
    /// Sequence number of the submission this thread serves.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// True while the worker has not finished.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

/// Spawn a worker thread for one submission.
///
/// Sends `Started` immediately (so Loading is always observed before the
/// terminal state), then exactly one of `Answered`/`Failed`. Send failures
/// are ignored: if the receiver is gone the UI is shutting down.
pub fn spawn_ask_thread(
    client: AskClient,
    request: QuestionRequest,
    tx: AskSender,
    seq: u64,
) -> AskThreadHandle {
    let _ = tx.send(AskEvent::Started {
        seq,
        question: request.question.clone(),
    });

    let handle = thread::spawn(move || {
        debug!(seq, question = %request.question, "ask thread started");

        match client.ask_question(&request) {
            Ok(response) => {
                debug!(seq, sources = response.sources.len(), "ask thread settled");
                let _ = tx.send(AskEvent::Answered { seq, response });
            }
            Err(err) => {
                warn!(seq, error = %err, "ask thread failed");
                let _ = tx.send(AskEvent::Failed {
                    seq,
                    message: err.to_string(),
                });
            }
        }
    });

    AskThreadHandle {
        handle: Some(handle),
        seq,
    }
}
