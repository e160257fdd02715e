//! Reqwest-backed workflow gateway adapter.
//!
//! This adapter owns transport details only: endpoint resolution, timeout,
//! HTTP status mapping and JSON decoding. Retrying is layered on top by
//! [`crate::domain::RetryingWorkflowGateway`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::domain::ports::{WorkflowGateway, WorkflowGatewayError, WorkflowOperation};

/// Overall per-request timeout applied by [`WorkflowHttpGateway::new`].
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 5;

/// Reasons the gateway cannot be constructed.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowHttpGatewayBuildError {
    #[error("failed to build workflow HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("workflow base URL cannot carry path segments: {url}")]
    BaseUrl { url: String },
}

/// Workflow gateway performing JSON POSTs against `<base>/<operation>`.
pub struct WorkflowHttpGateway {
    client: Client,
    generate_word: Url,
    validate_sentence: Url,
}

impl WorkflowHttpGateway {
    /// Build a gateway with [`DEFAULT_REQUEST_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// base URL cannot be extended with operation paths.
    pub fn new(base_url: Url) -> Result<Self, WorkflowHttpGatewayBuildError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a gateway with an explicit overall request timeout.
    ///
    /// # Errors
    ///
    /// See [`WorkflowHttpGateway::new`].
    pub fn with_timeout(
        base_url: Url,
        timeout: Duration,
    ) -> Result<Self, WorkflowHttpGatewayBuildError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .build()?;
        Ok(Self {
            client,
            generate_word: operation_url(&base_url, WorkflowOperation::GenerateWord)?,
            validate_sentence: operation_url(&base_url, WorkflowOperation::ValidateSentence)?,
        })
    }

    /// Resolved URL for `operation`.
    pub fn endpoint(&self, operation: WorkflowOperation) -> &Url {
        match operation {
            WorkflowOperation::GenerateWord => &self.generate_word,
            WorkflowOperation::ValidateSentence => &self.validate_sentence,
        }
    }
}

#[async_trait]
impl WorkflowGateway for WorkflowHttpGateway {
    async fn call(
        &self,
        operation: WorkflowOperation,
        payload: Value,
    ) -> Result<Value, WorkflowGatewayError> {
        let url = self.endpoint(operation);
        let body = match payload {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        debug!(url = %url, "posting to workflow service");

        let response = self
            .client
            .post(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(map_status_error(url, status, body.as_ref()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(body.as_ref()).map_err(|error| {
            WorkflowGatewayError::decode(format!("invalid JSON from {operation}: {error}"))
        })
    }
}

fn operation_url(
    base: &Url,
    operation: WorkflowOperation,
) -> Result<Url, WorkflowHttpGatewayBuildError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| WorkflowHttpGatewayBuildError::BaseUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .push(operation.path());
    Ok(url)
}

fn map_transport_error(error: reqwest::Error) -> WorkflowGatewayError {
    error!(error = %error, "workflow service unreachable");
    WorkflowGatewayError::transport(error.to_string())
}

fn map_status_error(url: &Url, status: StatusCode, body: &[u8]) -> WorkflowGatewayError {
    error!(
        url = %url,
        status = status.as_u16(),
        body = %body_preview(body),
        "workflow service returned an error status"
    );
    WorkflowGatewayError::status(status.as_u16())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
