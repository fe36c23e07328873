//! Query state controller.
//!
//! Owns the single query-state value and the two user actions, submit and
//! clear. Presentation code gets read-only access to the state plus these
//! two entry points; no shared mutable reference escapes.

use tracing::info;

use crate::api::types::{QuestionRequest, RagResponse};
use crate::api::AskClient;
use crate::query::events::{AskEvent, AskReceiver, AskSender};
use crate::query::thread::{spawn_ask_thread, AskThreadHandle};

/// Lifecycle of the active question. Exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    /// No question in flight, nothing to show.
    Idle,
    /// A submission is awaiting the backend.
    Loading,
    /// The backend answered; owned here until the next submission.
    Answered(RagResponse),
    /// The submission failed; the message persists until submit or clear.
    Errored(String),
}

/// Controller for the query lifecycle.
pub struct QueryController {
    client: AskClient,
    state: QueryState,
    /// Sequence number of the most recent submit/clear. Settlements tagged
    /// with anything older are discarded.
    latest_seq: u64,
    tx: AskSender,
    rx: AskReceiver,
    worker: Option<AskThreadHandle>,
}

impl QueryController {
    pub fn new(client: AskClient) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self {
            client,
            state: QueryState::Idle,
            latest_seq: 0,
            tx,
            rx,
            worker: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Loading)
    }

    /// Backend base URL (surfaced on the settings view).
    pub fn api_url(&self) -> &str {
        self.client.base_url()
    }

    /// Submit a question with an optional product filter.
    ///
    /// Blank (whitespace-only) questions are silently refused — no state
    /// change, no network call. Otherwise the previous answer or error is
    /// dropped, state moves to Loading, and a worker thread is spawned.
    /// Returns whether a submission actually happened.
    pub fn submit(&mut self, question: &str, product: Option<&str>) -> bool {
        let trimmed = question.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.latest_seq += 1;
        self.state = QueryState::Loading;

        let mut request = QuestionRequest::new(trimmed);
        if let Some(product) = product {
            request = request.with_product(product);
        }

        info!(seq = self.latest_seq, product = ?product, "submitting question");
        self.worker = Some(spawn_ask_thread(
            self.client.clone(),
            request,
            self.tx.clone(),
            self.latest_seq,
        ));
        true
    }

    /// Reset to Idle from any state.
    ///
    /// Performs no I/O and does not abort an in-flight call; bumping the
    /// sequence number guarantees that a later settlement of that call is
    /// discarded instead of resurfacing.
    pub fn clear(&mut self) {
        self.latest_seq += 1;
        self.state = QueryState::Idle;
    }

    /// Drain pending worker events and apply the relevant ones.
    ///
    /// Returns true when the visible state changed (callers rebuild any
    /// per-answer presentation state, e.g. evidence card expansion).
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Apply one event; stale sequence numbers are discarded.
    fn apply(&mut self, event: AskEvent) -> bool {
        if event.seq() != self.latest_seq {
            info!(seq = event.seq(), latest = self.latest_seq, "discarding stale ask event");
            return false;
        }
        match event {
            // Loading was already set synchronously in submit().
            AskEvent::Started { .. } => false,
            AskEvent::Answered { response, .. } => {
                self.state = QueryState::Answered(response);
                true
            }
            AskEvent::Failed { message, .. } => {
                self.state = QueryState::Errored(message);
                true
            }
        }
    }
}
