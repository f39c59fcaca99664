//! HTTP client for the drafting services.
//!
//! The Generator, Evaluator and Exporter live behind a single base URL as
//! three POST endpoints (`/generate`, `/evaluate`, `/export`). The workflow
//! talks to them through the [`DraftServices`] seam; [`DraftApiClient`] is
//! the production implementation.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

mod types;
pub use types::*;

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:8000";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// The three remote collaborators behind the workflow.
///
/// The workflow depends on this seam rather than on a concrete transport,
/// so the state machine can be exercised without a network. Each call is a
/// single request/response exchange; retries and timeouts are the
/// transport's concern, not the workflow's.
#[async_trait]
pub trait DraftServices {
    /// Produce content for the draft's section specs.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ClientError>;

    /// Score the current content and possibly return a revision.
    async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ClientError>;

    /// Render the content to an opaque binary document.
    async fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ClientError>;
}

/// HTTP client for the drafting services.
#[derive(Debug, Clone)]
pub struct DraftApiClient {
    base_url: String,
    client: Client,
}

impl DraftApiClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Create a client pointing to localhost:8000.
    pub fn localhost() -> Self {
        Self::new(DEFAULT_URL)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle a JSON response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    /// Handle a binary response (export payloads).
    async fn handle_bytes(&self, response: reqwest::Response) -> Result<Vec<u8>, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }
}

#[async_trait]
impl<T: DraftServices + Send + Sync + ?Sized> DraftServices for std::sync::Arc<T> {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ClientError> {
        (**self).generate(request).await
    }

    async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ClientError> {
        (**self).evaluate(request).await
    }

    async fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ClientError> {
        (**self).export(request).await
    }
}

#[async_trait]
impl DraftServices for DraftApiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ClientError> {
        let response = self
            .client
            .post(self.url("/generate"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ClientError> {
        let response = self
            .client
            .post(self.url("/evaluate"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ClientError> {
        let response = self
            .client
            .post(self.url("/export"))
            .json(request)
            .send()
            .await?;
        self.handle_bytes(response).await
    }
}
