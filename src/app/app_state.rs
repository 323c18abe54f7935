use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use crate::catalog::{CatalogLoad, CatalogState, CatalogStatus};
use crate::help::HelpPopupState;
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::service::ServiceError;
use crate::session::{QuerySession, SettleOutcome};
use crate::worker::{WorkerRequest, WorkerResponse};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Questions,
    Input,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Questions => Focus::Input,
            Focus::Input => Focus::Questions,
        }
    }
}

/// Application state
pub struct App {
    pub catalog: CatalogState,
    pub session: QuerySession,
    pub input: InputState,
    pub focus: Focus,
    pub answer_scroll: ScrollState,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub frame_count: u64,
    pub should_quit: bool,
    pub service_url: String,
    response_rx: Option<Receiver<WorkerResponse>>,
}

impl App {
    pub fn new(service_url: String) -> Self {
        Self {
            catalog: CatalogState::new(),
            session: QuerySession::new(),
            input: InputState::new(),
            focus: Focus::default(),
            answer_scroll: ScrollState::new(),
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            frame_count: 0,
            should_quit: false,
            service_url,
            response_rx: None,
        }
    }

    /// Attach the worker channels and start the catalog fetch
    pub fn connect(
        &mut self,
        request_tx: UnboundedSender<WorkerRequest>,
        response_rx: Receiver<WorkerResponse>,
    ) {
        if request_tx.send(WorkerRequest::LoadCatalog).is_err() {
            log::warn!("Worker unavailable, suggested questions not requested");
        }
        self.session.set_channel(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Drain every response the worker has produced so far
    pub fn poll_worker(&mut self) {
        loop {
            let Some(rx) = &self.response_rx else {
                return;
            };

            match rx.try_recv() {
                Ok(response) => self.apply_response(response),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.handle_worker_gone();
                    return;
                }
            }
        }
    }

    fn apply_response(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Catalog(load) => {
                if let Some(message) = self.catalog.apply(load) {
                    self.notification.show_warning(message);
                }
            }
            WorkerResponse::Answer { request_id, result } => {
                match self.session.settle(request_id, result) {
                    SettleOutcome::Answered => self.answer_scroll.reset(),
                    SettleOutcome::Failed(e) => {
                        self.notification.show_error(format!("Question failed: {}", e));
                    }
                    SettleOutcome::Ignored => {}
                }
            }
        }
    }

    fn handle_worker_gone(&mut self) {
        log::error!("Worker disconnected");
        self.response_rx = None;

        if let Some(e) = self.session.abandon() {
            self.notification.show_error(format!("Question failed: {}", e));
        }

        if self.catalog.status() == &CatalogStatus::Loading
            && let Some(message) = self.catalog.apply(CatalogLoad {
                questions: Vec::new(),
                error: Some(ServiceError::Network(
                    "worker stopped before answering".to_string(),
                )),
            })
        {
            self.notification.show_warning(message);
        }
    }

    /// Per-iteration housekeeping for the main loop
    pub fn tick(&mut self) {
        self.notification.clear_if_expired();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
