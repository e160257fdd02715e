//! Attempt records: one persisted outcome per validated sentence.
//!
//! Records are append-only. [`NewAttempt::from_verdict`] turns the raw JSON
//! verdict returned by the workflow service into the insertable shape,
//! applying field defaults and score coercion.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Level stored when the verdict omits one.
pub const DEFAULT_LEVEL: &str = "Unknown";

/// Validation attempt ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttempt {
    /// Vocabulary word the sentence had to use.
    pub word: String,
    /// Sentence submitted by the learner.
    pub sentence: String,
    /// Score reported by the workflow service. Not range checked.
    pub score: f64,
    /// Proficiency label reported by the workflow service.
    pub level: String,
    /// Free-text improvement hint; may be empty.
    pub suggestion: String,
    /// Corrected rendition of the sentence; may be empty.
    pub corrected_sentence: String,
}

/// Stored validation attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    /// Store-assigned monotonic identifier.
    pub id: i32,
    /// Vocabulary word the sentence had to use.
    pub word: String,
    /// Sentence submitted by the learner.
    pub sentence: String,
    /// Score reported by the workflow service.
    pub score: f64,
    /// Proficiency label reported by the workflow service.
    pub level: String,
    /// Free-text improvement hint.
    pub suggestion: String,
    /// Corrected rendition of the sentence.
    pub corrected_sentence: String,
    /// Creation instant; the only ordering and grouping key.
    pub created_at: DateTime<Utc>,
}

/// Reasons a verdict cannot be turned into an attempt record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerdictError {
    /// The verdict was valid JSON but not an object.
    #[error("validation verdict must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
    /// The `score` field could not be read as a number.
    #[error("could not convert score to float: {value}")]
    InvalidScore { value: String },
}

impl NewAttempt {
    /// Build an attempt from the submitted pair and the service verdict.
    ///
    /// Missing `score` defaults to `0`; numeric strings and booleans are
    /// coerced. Missing or null text fields fall back to their defaults.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use worddee_backend::domain::NewAttempt;
    ///
    /// let verdict = json!({ "score": "8.5", "level": "B2" });
    /// let attempt = NewAttempt::from_verdict("brisk", "A brisk walk.", &verdict)?;
    /// assert_eq!(attempt.score, 8.5);
    /// assert_eq!(attempt.suggestion, "");
    /// # Ok::<(), worddee_backend::domain::VerdictError>(())
    /// ```
    pub fn from_verdict(
        word: impl Into<String>,
        sentence: impl Into<String>,
        verdict: &Value,
    ) -> Result<Self, VerdictError> {
        let Some(fields) = verdict.as_object() else {
            return Err(VerdictError::NotAnObject {
                kind: json_kind(verdict),
            });
        };

        Ok(Self {
            word: word.into(),
            sentence: sentence.into(),
            score: coerce_score(fields.get("score"))?,
            level: text_or(fields.get("level"), DEFAULT_LEVEL),
            suggestion: text_or(fields.get("suggestion"), ""),
            corrected_sentence: text_or(fields.get("corrected_sentence"), ""),
        })
    }
}

fn coerce_score(value: Option<&Value>) -> Result<f64, VerdictError> {
    match value {
        None => Ok(0.0),
        Some(Value::Number(number)) => number.as_f64().ok_or_else(|| VerdictError::InvalidScore {
            value: number.to_string(),
        }),
        Some(Value::Bool(flag)) => Ok(if *flag { 1.0 } else { 0.0 }),
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| VerdictError::InvalidScore { value: raw.clone() }),
        Some(other) => Err(VerdictError::InvalidScore {
            value: other.to_string(),
        }),
    }
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Name of the JSON type of `value`, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
