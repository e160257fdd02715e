//! Sentence validation service.
//!
//! Forwards the submitted pair to the workflow service, stores one attempt
//! record per verdict, and returns the verdict unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};

use super::ports::{
    AttemptRepository, AttemptRepositoryError, SentenceValidationCommand,
    ValidateSentenceRequest, ValidateSentenceResponse, WorkflowGateway, WorkflowGatewayError,
    WorkflowOperation,
};
use super::{Error, NewAttempt, VerdictError};

/// Any reason a validation request did not complete.
#[derive(Debug, thiserror::Error)]
enum ValidationFailure {
    #[error(transparent)]
    Gateway(#[from] WorkflowGatewayError),
    #[error(transparent)]
    Verdict(#[from] VerdictError),
    #[error(transparent)]
    Repository(#[from] AttemptRepositoryError),
}

/// Validation service implementing [`SentenceValidationCommand`].
#[derive(Clone)]
pub struct SentenceValidationService {
    gateway: Arc<dyn WorkflowGateway>,
    attempts: Arc<dyn AttemptRepository>,
}

impl SentenceValidationService {
    /// Build the service over the grading gateway and the attempt store.
    pub fn new(gateway: Arc<dyn WorkflowGateway>, attempts: Arc<dyn AttemptRepository>) -> Self {
        Self { gateway, attempts }
    }

    async fn grade_and_record(
        &self,
        request: ValidateSentenceRequest,
    ) -> Result<ValidateSentenceResponse, ValidationFailure> {
        let payload = json!({ "word": &request.word, "sentence": &request.sentence });
        let verdict = self
            .gateway
            .call(WorkflowOperation::ValidateSentence, payload)
            .await?;

        let attempt = NewAttempt::from_verdict(request.word, request.sentence, &verdict)?;
        self.attempts.insert(&attempt).await?;
        info!(word = %attempt.word, score = attempt.score, "attempt recorded");

        Ok(ValidateSentenceResponse { verdict })
    }
}

#[async_trait]
impl SentenceValidationCommand for SentenceValidationService {
    async fn validate(
        &self,
        request: ValidateSentenceRequest,
    ) -> Result<ValidateSentenceResponse, Error> {
        self.grade_and_record(request).await.map_err(|err| {
            error!(error = %err, "sentence validation failed");
            Error::internal(err.to_string())
        })
    }
}

#[cfg(test)]
#[path = "sentence_validation_service_tests.rs"]
mod tests;
