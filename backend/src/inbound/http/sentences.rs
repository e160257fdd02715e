//! Sentence validation HTTP handler.
//!
//! ```text
//! POST /api/validate {"word":"brisk","sentence":"We took a brisk walk."}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::ValidateSentenceRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request payload for sentence validation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ValidateSentenceRequestBody {
    #[schema(example = "brisk")]
    pub word: String,
    #[schema(example = "We took a brisk walk before breakfast.")]
    pub sentence: String,
}

impl From<ValidateSentenceRequestBody> for ValidateSentenceRequest {
    fn from(body: ValidateSentenceRequestBody) -> Self {
        Self {
            word: body.word,
            sentence: body.sentence,
        }
    }
}

/// Grade a sentence, record the attempt and return the verdict.
#[utoipa::path(
    post,
    path = "/api/validate",
    request_body = ValidateSentenceRequestBody,
    responses(
        (status = 200, description = "Verdict from the grading workflow", body = crate::inbound::http::schemas::VerdictSchema),
        (status = 422, description = "Malformed request body", body = ErrorBody),
        (status = 500, description = "Grading or persistence failed", body = ErrorBody)
    ),
    tags = ["practice"],
    operation_id = "validateSentence"
)]
#[post("/validate")]
pub async fn validate_sentence(
    state: web::Data<HttpState>,
    payload: web::Json<ValidateSentenceRequestBody>,
) -> ApiResult<web::Json<Value>> {
    let response = state.validation.validate(payload.into_inner().into()).await?;
    Ok(web::Json(response.verdict))
}

#[cfg(test)]
#[path = "sentences_tests.rs"]
mod tests;
