//! Wire types for the answering service
//!
//! Request and response bodies for `GET /questions` and `POST /ask`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /questions`
///
/// Only `questions` is consumed; any other field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Successful `POST /ask` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    /// Open label; classified for display by [`crate::session::ConfidenceTier`]
    pub confidence: String,
    pub sources: Vec<SourceRef>,
}

/// A citation attached to an answer
///
/// The service sends either a bare identifier or a metadata record that
/// carries at least a `source` field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SourceRef {
    Name(String),
    Record {
        source: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl SourceRef {
    /// The string shown for this citation
    pub fn display(&self) -> &str {
        match self {
            SourceRef::Name(name) => name,
            SourceRef::Record { source, .. } => source,
        }
    }
}

/// Resolve every citation to its display string, preserving order
pub fn normalize_sources(sources: &[SourceRef]) -> Vec<String> {
    sources.iter().map(|s| s.display().to_string()).collect()
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod wire_tests;
