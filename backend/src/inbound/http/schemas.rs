//! OpenAPI schema definitions for open JSON payloads.
//!
//! Word cards and verdicts are forwarded from the workflow service without a
//! fixed shape, so the domain types do not derive `ToSchema`. These wrappers
//! document the fields clients can expect.

use serde::Serialize;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::WordCard`].
///
/// Additional fields supplied by the workflow service are passed through.
#[derive(Serialize, ToSchema)]
#[schema(as = WordCard)]
#[allow(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct WordCardSchema {
    #[schema(example = "serendipity")]
    word: String,
    #[schema(example = "ser-uhn-dip-i-tee")]
    pronunciation: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "noun")]
    part_of_speech: Option<String>,
    meaning: Option<String>,
    example: Option<String>,
    /// Always present; a placeholder URL when the service supplied none.
    #[schema(example = "https://via.placeholder.com/400?text=serendipity")]
    image: String,
}

/// OpenAPI schema for the sentence verdict returned by `/api/validate`.
#[derive(Serialize, ToSchema)]
#[schema(as = Verdict)]
#[allow(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct VerdictSchema {
    #[schema(example = 7.5)]
    score: Option<f64>,
    #[schema(example = "Intermediate")]
    level: Option<String>,
    suggestion: Option<String>,
    corrected_sentence: Option<String>,
}
