//! Events sent from ask worker threads to the UI thread.

use std::sync::mpsc;

use crate::api::types::RagResponse;

/// Channel sender for ask events.
pub type AskSender = mpsc::Sender<AskEvent>;
/// Channel receiver for ask events.
pub type AskReceiver = mpsc::Receiver<AskEvent>;

/// Event from a worker thread.
///
/// `seq` is the submission's sequence number; the controller discards any
/// event whose number is not the latest issued one.
#[derive(Debug, Clone)]
pub enum AskEvent {
    /// Request handed to the transport.
    Started { seq: u64, question: String },
    /// Backend returned a grounded answer.
    Answered { seq: u64, response: RagResponse },
    /// Request failed (transport, HTTP, or decode).
    Failed { seq: u64, message: String },
}

impl AskEvent {
    /// Sequence number of the submission this event belongs to.
    pub fn seq(&self) -> u64 {
        match self {
            AskEvent::Started { seq, .. } => *seq,
            AskEvent::Answered { seq, .. } => *seq,
            AskEvent::Failed { seq, .. } => *seq,
        }
    }

    /// True for events that settle the submission.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AskEvent::Answered { .. } | AskEvent::Failed { .. })
    }
}
