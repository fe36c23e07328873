//! Wire types for the `/ask` exchange.
//!
//! These mirror the backend's contract exactly. The client performs no
//! schema validation beyond what deserialization itself enforces; the
//! response is trusted and replaced wholesale on the next submission.

use serde::{Deserialize, Serialize};

/// Optional retrieval filters attached to a question.
///
/// `None` fields are omitted from the JSON body entirely, matching the
/// backend's `exclude_none` handling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl QuestionFilters {
    /// True when no filter field is set.
    pub fn is_empty(&self) -> bool {
        self.product.is_none() && self.company.is_none()
    }
}

/// One question, constructed fresh per submission and immutable once sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<QuestionFilters>,
}

impl QuestionRequest {
    /// Build a request with no filters.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            filters: None,
        }
    }

    /// Attach a product filter.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        let filters = self.filters.get_or_insert_with(QuestionFilters::default);
        filters.product = Some(product.into());
        self
    }
}

/// A cited evidence snippet. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub text: String,
    pub product: String,
    pub company: String,
    pub complaint_id: String,
}

/// Grounded answer for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagResponse {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}
