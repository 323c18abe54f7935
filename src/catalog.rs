//! Suggested-question catalog
//!
//! Loaded once at startup; read-only afterwards.

mod catalog_render;
mod catalog_state;

pub use catalog_render::render_pane;
pub use catalog_state::{CatalogState, CatalogStatus};

use crate::service::{AnswerService, ServiceError};

/// Outcome of one catalog fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoad {
    /// Empty when the fetch failed
    pub questions: Vec<String>,
    pub error: Option<ServiceError>,
}

/// Fetch the suggested questions
///
/// Issues exactly one request. A failure is logged here, once, and produces
/// an empty catalog; it never escapes as an error.
pub async fn load<S: AnswerService>(service: &S) -> CatalogLoad {
    match service.fetch_questions().await {
        Ok(questions) => {
            log::info!("Loaded {} suggested questions", questions.len());
            CatalogLoad {
                questions,
                error: None,
            }
        }
        Err(e) => {
            log::warn!("Failed to load questions: {}", e);
            CatalogLoad {
                questions: Vec::new(),
                error: Some(e),
            }
        }
    }
}
