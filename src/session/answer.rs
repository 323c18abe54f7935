//! Settled answer and confidence classification

use ratatui::style::Color;

use crate::service::{AskResponse, SourceRef, normalize_sources};

/// Display tier for a confidence label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// `"High"`
    Strong,
    /// `"Medium"`
    Moderate,
    /// `"Low"` and every label the service may invent
    Weak,
}

impl ConfidenceTier {
    /// Classify a label. Exact, case-sensitive match; never fails.
    pub fn classify(label: &str) -> Self {
        match label {
            "High" => ConfidenceTier::Strong,
            "Medium" => ConfidenceTier::Moderate,
            _ => ConfidenceTier::Weak,
        }
    }

    /// Badge color for this tier
    pub fn color(&self) -> Color {
        match self {
            ConfidenceTier::Strong => Color::Green,
            ConfidenceTier::Moderate => Color::Yellow,
            ConfidenceTier::Weak => Color::Red,
        }
    }
}

/// Answer, confidence and citations from one successful response
///
/// Kept together so they can only ever be replaced as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub confidence: String,
    pub sources: Vec<SourceRef>,
}

impl Answer {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::classify(&self.confidence)
    }

    /// Citations resolved to display strings, in response order
    pub fn source_labels(&self) -> Vec<String> {
        normalize_sources(&self.sources)
    }
}

impl From<AskResponse> for Answer {
    fn from(response: AskResponse) -> Self {
        Self {
            text: response.answer,
            confidence: response.confidence,
            sources: response.sources,
        }
    }
}

#[cfg(test)]
#[path = "answer_tests.rs"]
mod answer_tests;
