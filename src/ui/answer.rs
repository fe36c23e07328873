//! Answer partitioning for two-column display.
//!
//! This is a presentation heuristic, not a parser. Model output has no
//! guaranteed structure, so the split is best-effort with documented
//! fallbacks and must be total over arbitrary input.

/// An answer split into a short highlight and a longer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSections {
    /// Key-observations block.
    pub summary: String,
    /// Detailed-analysis block.
    pub detail: String,
}

/// Split an answer on blank-line boundaries.
///
/// Fallback rules:
/// - Summary: the first section containing the word "summary"
///   (case-insensitive), a ':' or a '-'; otherwise the first section.
/// - Detail: every section after the first, joined with the original
///   blank-line delimiter; when no sections remain, the whole answer.
pub fn split_answer(answer: &str) -> AnswerSections {
    let sections: Vec<&str> = answer.split("\n\n").collect();

    let summary = sections
        .iter()
        .find(|s| {
            s.to_lowercase().contains("summary") || s.contains(':') || s.contains('-')
        })
        .copied()
        // split() always yields at least one element.
        .unwrap_or(sections[0]);

    let detail = if sections.len() > 1 {
        sections[1..].join("\n\n")
    } else {
        answer.to_string()
    };

    AnswerSections {
        summary: summary.to_string(),
        detail,
    }
}
