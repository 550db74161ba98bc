//! Submission clients
//!
//! The controller hands a validated [`FormValues`] to a [`SubmissionClient`].
//! [`HttpSubmissionClient`] POSTs it as JSON to the contact endpoint.

use crate::config::EndpointConfig;
use crate::values::FormValues;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Why a submission did not succeed
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Connection, timeout or body encoding failure
    #[error("request to contact endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered outside the 2xx range
    #[error("contact endpoint responded with status {0}")]
    Status(StatusCode),
}

/// Sends validated contact requests somewhere
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Deliver one submission; `Ok` only on a 2xx answer
    async fn send(&self, values: &FormValues) -> Result<(), SubmissionError>;
}

#[async_trait]
impl<T: SubmissionClient + ?Sized> SubmissionClient for Arc<T> {
    async fn send(&self, values: &FormValues) -> Result<(), SubmissionError> {
        (**self).send(values).await
    }
}

/// JSON-over-HTTP client for the contact endpoint
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    /// Client with reqwest defaults (no request timeout)
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Client for the configured endpoint, with its request timeout applied
    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn send(&self, values: &FormValues) -> Result<(), SubmissionError> {
        debug!(endpoint = %self.endpoint, "posting contact request");

        let response = self.http.post(&self.endpoint).json(values).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Status(status))
        }
    }
}
