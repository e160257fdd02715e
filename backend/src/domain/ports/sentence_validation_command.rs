//! Driving port for grading a sentence and recording the attempt.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::Error;

/// Sentence submitted for grading against a vocabulary word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateSentenceRequest {
    pub word: String,
    pub sentence: String,
}

/// Verdict returned by the workflow service, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidateSentenceResponse {
    pub verdict: Value,
}

/// Driving port for sentence validation.
///
/// A successful call means the verdict was obtained and one attempt
/// record was stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentenceValidationCommand: Send + Sync {
    /// Grade `request.sentence` for `request.word`.
    async fn validate(
        &self,
        request: ValidateSentenceRequest,
    ) -> Result<ValidateSentenceResponse, Error>;
}

/// Fixture command returning a fixed verdict without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSentenceValidationCommand;

#[async_trait]
impl SentenceValidationCommand for FixtureSentenceValidationCommand {
    async fn validate(
        &self,
        _request: ValidateSentenceRequest,
    ) -> Result<ValidateSentenceResponse, Error> {
        Ok(ValidateSentenceResponse {
            verdict: json!({
                "score": 5,
                "level": "Intermediate",
                "suggestion": "",
                "corrected_sentence": "",
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_returns_verdict_object() {
        let response = FixtureSentenceValidationCommand
            .validate(ValidateSentenceRequest {
                word: "brisk".to_owned(),
                sentence: "A brisk walk.".to_owned(),
            })
            .await
            .expect("fixture validates");

        assert!(response.verdict.is_object());
    }

    #[test]
    fn response_serialises_as_bare_verdict() {
        let response = ValidateSentenceResponse {
            verdict: json!({ "score": 3 }),
        };
        let encoded = serde_json::to_value(&response).expect("serialise response");
        assert_eq!(encoded, json!({ "score": 3 }));
    }
}
