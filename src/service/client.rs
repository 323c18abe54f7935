//! HTTP client for the answering service
//!
//! Thin `reqwest` wrapper; status and body handling is split out into
//! `decode_body` so it can be tested without a server.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::wire::{AskRequest, AskResponse, QuestionsResponse};
use super::{AnswerService, ServiceError};
use crate::config::ServiceConfig;

const QUESTIONS_PATH: &str = "/questions";
const ASK_PATH: &str = "/ask";

/// Longest error body kept in a `ServiceError::Status` message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// `AnswerService` over HTTP
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnswerService {
    /// Build a client for the configured service
    ///
    /// No timeout is applied unless `request_timeout_secs` is set.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl AnswerService for HttpAnswerService {
    async fn fetch_questions(&self) -> Result<Vec<String>, ServiceError> {
        let url = self.endpoint(QUESTIONS_PATH);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        decode_body::<QuestionsResponse>(status, &body).map(|r| r.questions)
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, ServiceError> {
        let url = self.endpoint(ASK_PATH);
        log::debug!("POST {}", url);

        // .json() sets the application/json content type
        let response = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        decode_body::<AskResponse>(status, &body)
    }
}

/// Turn a status and raw body into a typed response
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ServiceError> {
    if !status.is_success() {
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect()
        };
        return Err(ServiceError::Status {
            code: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
