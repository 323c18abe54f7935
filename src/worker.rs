//! Service worker thread
//!
//! Runs outbound requests on a single-threaded tokio runtime in a background
//! thread so the UI never blocks. Each request is spawned as its own task, so
//! the catalog fetch and a question can be in flight at the same time and
//! suspend cooperatively. Results go back to the UI thread over a channel.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::catalog::{self, CatalogLoad};
use crate::service::{AnswerService, AskResponse, ServiceError};

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerRequest {
    /// Fetch the suggested questions
    LoadCatalog,
    /// Ask the service a question
    Ask {
        question: String,
        /// ID used to match the response to the in-flight submission
        request_id: u64,
    },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    Catalog(CatalogLoad),
    Answer {
        request_id: u64,
        result: Result<AskResponse, ServiceError>,
    },
}

/// Spawn the worker thread
///
/// The thread exits once `request_rx` is closed. Requests still pending at
/// that point are dropped without a response.
pub fn spawn_worker<S: AnswerService>(
    service: S,
    request_rx: UnboundedReceiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                // Dropping the channels here lets the UI see the worker is gone
                log::error!("Failed to start worker runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(Arc::new(service), request_rx, response_tx));
    });
}

/// Main worker loop - dispatches requests until the channel is closed
async fn worker_loop<S: AnswerService>(
    service: Arc<S>,
    mut request_rx: UnboundedReceiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        let service = Arc::clone(&service);
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            handle_request(service.as_ref(), request, &response_tx).await;
        });
    }

    log::debug!("Worker thread shutting down");
}

/// Run one request to completion and report its result
///
/// Every request yields exactly one response message.
async fn handle_request<S: AnswerService>(
    service: &S,
    request: WorkerRequest,
    response_tx: &Sender<WorkerResponse>,
) {
    let response = match request {
        WorkerRequest::LoadCatalog => WorkerResponse::Catalog(catalog::load(service).await),
        WorkerRequest::Ask {
            question,
            request_id,
        } => {
            log::debug!("Asking request {}", request_id);
            let result = service.ask(&question).await;
            WorkerResponse::Answer { request_id, result }
        }
    };

    if response_tx.send(response).is_err() {
        // UI thread is gone, nothing left to update
        log::debug!("Dropping response: UI disconnected");
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
