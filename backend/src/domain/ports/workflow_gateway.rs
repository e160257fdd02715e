//! Driven port for the external workflow-automation service.
//!
//! Word generation and sentence grading are owned by the workflow service.
//! The backend only forwards JSON payloads to named webhook operations and
//! classifies how each call ended.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::define_port_error;

/// Remote operation exposed by the workflow service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowOperation {
    /// Produce a new vocabulary word card.
    GenerateWord,
    /// Grade a sentence that uses a given word.
    ValidateSentence,
}

impl WorkflowOperation {
    /// Webhook path segment appended to the service base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::GenerateWord => "generate-word",
            Self::ValidateSentence => "validate-sentence",
        }
    }
}

impl std::fmt::Display for WorkflowOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

define_port_error! {
    /// Tagged failure outcomes of one workflow call.
    pub enum WorkflowGatewayError {
        /// The host was unreachable, the request could not be sent, or no
        /// complete response arrived in time.
        Transport { message: String } =>
            "workflow service connection failed: {message}",
        /// The service answered with a non-success status.
        Status { status: u16 } =>
            "{status}: AI Service Error",
        /// A success response carried a body that is not valid JSON.
        Decode { message: String } =>
            "workflow service response decode failed: {message}",
    }
}

impl WorkflowGatewayError {
    /// Only transport failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Port for invoking workflow operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkflowGateway: Send + Sync {
    /// Send `payload` to `operation` and return the decoded JSON response.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use serde_json::json;
    /// use worddee_backend::domain::ports::{
    ///     FixtureWorkflowGateway, WorkflowGateway, WorkflowOperation,
    /// };
    ///
    /// # async fn demo() -> Result<(), worddee_backend::domain::ports::WorkflowGatewayError> {
    /// let gateway = FixtureWorkflowGateway;
    /// let card = gateway
    ///     .call(WorkflowOperation::GenerateWord, json!({}))
    ///     .await?;
    /// assert!(card.get("word").is_some());
    /// # Ok(())
    /// # }
    /// ```
    async fn call(
        &self,
        operation: WorkflowOperation,
        payload: Value,
    ) -> Result<Value, WorkflowGatewayError>;
}

/// Fixture gateway returning canned responses for both operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureWorkflowGateway;

#[async_trait]
impl WorkflowGateway for FixtureWorkflowGateway {
    async fn call(
        &self,
        operation: WorkflowOperation,
        _payload: Value,
    ) -> Result<Value, WorkflowGatewayError> {
        Ok(match operation {
            WorkflowOperation::GenerateWord => json!({
                "word": "serendipity",
                "pronunciation": "ser-uhn-dip-i-tee",
                "type": "noun",
                "meaning": "The occurrence of events by chance in a happy way.",
                "example": "Finding the cafe was pure serendipity.",
                "level": "Advanced",
            }),
            WorkflowOperation::ValidateSentence => json!({
                "score": 7.5,
                "level": "Intermediate",
                "suggestion": "Consider a more vivid verb.",
                "corrected_sentence": "",
            }),
        })
    }
}
