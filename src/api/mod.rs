//! HTTP layer for the CrediTrust RAG backend.
//!
//! The backend exposes exactly one operation the client cares about:
//! `POST {base_url}/ask`. Everything here exists to issue that call once
//! per submission and translate the outcome into a typed result.

pub mod client;
pub mod error;
pub mod transport;
pub mod transport_fake;
pub mod types;

pub use client::AskClient;
pub use error::ApiError;
pub use transport::{SyncTransport, Transport, UreqTransport};
pub use transport_fake::FakeTransport;
pub use types::{QuestionFilters, QuestionRequest, RagResponse, Source};
