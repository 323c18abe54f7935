//! Query session state
//!
//! Owns the busy flag and the last settled answer. A submission takes an
//! `InFlight` ticket; settling consumes it, so leaving the pending state and
//! clearing `busy` are the same operation on every path.

use tokio::sync::mpsc::UnboundedSender;

use super::answer::Answer;
use crate::service::{AskResponse, ServiceError, SourceRef};
use crate::worker::WorkerRequest;

/// The single request currently in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pub request_id: u64,
    pub question: String,
}

/// Result of calling [`QuerySession::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request handed to the worker
    Submitted { request_id: u64 },
    /// Another request is still in flight; nothing was sent
    Busy,
    /// Blank question; nothing was sent
    Empty,
    /// The worker is gone; nothing was sent
    Disconnected,
}

/// Result of handing a worker response to [`QuerySession::settle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    Answered,
    Failed(ServiceError),
    /// Response did not belong to the in-flight request
    Ignored,
}

/// Query session state
#[derive(Debug, Default)]
pub struct QuerySession {
    in_flight: Option<InFlight>,
    answer: Option<Answer>,
    /// Question that produced `answer`
    last_question: Option<String>,
    /// Last request ID handed out
    request_id: u64,
    /// Channel to send requests to the worker thread
    request_tx: Option<UnboundedSender<WorkerRequest>>,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel used to reach the worker thread
    pub fn set_channel(&mut self, request_tx: UnboundedSender<WorkerRequest>) {
        self.request_tx = Some(request_tx);
    }

    /// True exactly while a request is in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&InFlight> {
        self.in_flight.as_ref()
    }

    pub fn pending_question(&self) -> Option<&str> {
        self.in_flight.as_ref().map(|t| t.question.as_str())
    }

    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    pub fn last_answer(&self) -> Option<&str> {
        self.answer.as_ref().map(|a| a.text.as_str())
    }

    pub fn last_confidence(&self) -> Option<&str> {
        self.answer.as_ref().map(|a| a.confidence.as_str())
    }

    /// Empty when no answer has settled yet
    pub fn last_sources(&self) -> &[SourceRef] {
        self.answer.as_ref().map_or(&[], |a| a.sources.as_slice())
    }

    pub fn last_question(&self) -> Option<&str> {
        self.last_question.as_deref()
    }

    /// Submit a question to the answering service
    ///
    /// No-op while busy. The previous answer stays in place until the new
    /// response settles.
    pub fn submit(&mut self, question: &str) -> SubmitOutcome {
        let question = question.trim();
        if question.is_empty() {
            return SubmitOutcome::Empty;
        }

        if let Some(in_flight) = &self.in_flight {
            log::debug!(
                "Ignoring submit while request {} is in flight",
                in_flight.request_id
            );
            return SubmitOutcome::Busy;
        }

        let Some(tx) = &self.request_tx else {
            return SubmitOutcome::Disconnected;
        };

        let request_id = self.request_id.wrapping_add(1);
        let request = WorkerRequest::Ask {
            question: question.to_string(),
            request_id,
        };
        if tx.send(request).is_err() {
            log::warn!("Worker unavailable, question not sent");
            return SubmitOutcome::Disconnected;
        }

        self.request_id = request_id;
        self.in_flight = Some(InFlight {
            request_id,
            question: question.to_string(),
        });
        log::debug!("Submitted request {}", request_id);
        SubmitOutcome::Submitted { request_id }
    }

    /// Apply the worker's response for `request_id`
    ///
    /// Success replaces the answer as a unit; failure leaves it untouched.
    /// Either way the session leaves the pending state.
    pub fn settle(
        &mut self,
        request_id: u64,
        result: Result<AskResponse, ServiceError>,
    ) -> SettleOutcome {
        let Some(ticket) = self.in_flight.take_if(|t| t.request_id == request_id) else {
            log::debug!("Ignoring response for request {}", request_id);
            return SettleOutcome::Ignored;
        };

        match result {
            Ok(response) => {
                log::debug!("Request {} answered", ticket.request_id);
                self.answer = Some(Answer::from(response));
                self.last_question = Some(ticket.question);
                SettleOutcome::Answered
            }
            Err(e) => {
                log::warn!("Request {} failed: {}", ticket.request_id, e);
                SettleOutcome::Failed(e)
            }
        }
    }

    /// Settle the in-flight request as failed because the worker went away
    pub fn abandon(&mut self) -> Option<ServiceError> {
        let ticket = self.in_flight.take()?;
        let error = ServiceError::Network("worker stopped before answering".to_string());
        log::warn!("Request {} failed: {}", ticket.request_id, error);
        Some(error)
    }
}

#[cfg(test)]
#[path = "session_state_tests.rs"]
mod session_state_tests;
