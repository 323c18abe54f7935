//! Answering service boundary
//!
//! Defines the `AnswerService` seam, the `ServiceError` type shared by the
//! catalog loader and the query session, and the HTTP implementation.

use std::future::Future;

use thiserror::Error;

mod client;
pub mod wire;

pub use client::HttpAnswerService;
pub use wire::{AskResponse, SourceRef, normalize_sources};

/// Errors that can occur while talking to the answering service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("Service error ({code}): {message}")]
    Status { code: u16, message: String },

    /// Body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Parse(String),
}

/// The remote answering service
///
/// Implementations must be cheap to share across tasks; the worker holds one
/// behind an `Arc` and spawns each request as its own task.
pub trait AnswerService: Send + Sync + 'static {
    /// `GET /questions`
    fn fetch_questions(&self) -> impl Future<Output = Result<Vec<String>, ServiceError>> + Send;

    /// `POST /ask`
    fn ask(&self, question: &str)
    -> impl Future<Output = Result<AskResponse, ServiceError>> + Send;
}
