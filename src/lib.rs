//! CrediTrust Insight Console
//!
//! Terminal client for the CrediTrust complaint-analysis RAG service.
//! The client is pure presentation glue: it collects a question, POSTs it
//! to the backend's `/ask` endpoint, and renders the grounded answer with
//! its cited evidence snippets. Retrieval, ranking, and inference all live
//! in the backend.
//!
//! Execution model:
//! - The UI runs a deterministic, synchronous event loop (no async).
//! - Each submission spawns one fire-and-forget worker thread that does
//!   the HTTP call and reports back over an mpsc channel.
//! - All state transitions happen on the UI thread.

pub mod api;
pub mod cli;
pub mod config;
pub mod query;
pub mod ui;
