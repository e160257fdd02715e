//! Vocabulary word cards as produced by the workflow service.
//!
//! Cards are open JSON objects. Only `word` and `image` are interpreted; every
//! other field is forwarded to clients as received.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::attempt::json_kind;

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/400?text=";
const PLACEHOLDER_WORD: &str = "WORD";

/// Reasons a workflow response cannot be used as a card.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordCardError {
    /// The response was valid JSON but not an object.
    #[error("word card must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

/// Word card forwarded to clients.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use worddee_backend::domain::WordCard;
///
/// let card = WordCard::from_remote(json!({ "word": "brisk" }))?;
/// assert_eq!(
///     card.image(),
///     Some(&json!("https://via.placeholder.com/400?text=brisk"))
/// );
/// # Ok::<(), worddee_backend::domain::WordCardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCard(Map<String, Value>);

impl WordCard {
    /// Accept a workflow response, injecting a placeholder image when the
    /// card has none.
    pub fn from_remote(value: Value) -> Result<Self, WordCardError> {
        let Value::Object(mut fields) = value else {
            return Err(WordCardError::NotAnObject {
                kind: json_kind(&value),
            });
        };

        if fields.get("image").is_none_or(is_falsy) {
            let image = placeholder_image_url(fields.get("word"));
            fields.insert("image".to_owned(), Value::String(image));
        }
        Ok(Self(fields))
    }

    /// Card served when the workflow service cannot produce one.
    pub fn fallback() -> Self {
        let fields = [
            ("word", "System Offline"),
            ("pronunciation", "sys-tem off-line"),
            ("type", "Error"),
            ("meaning", "Unable to connect to AI service."),
            ("example", "Please check n8n container."),
            ("image", "https://via.placeholder.com/400?text=ERROR"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), Value::String(value.to_owned())))
        .collect();
        Self(fields)
    }

    /// The `word` field, if present.
    pub fn word(&self) -> Option<&Value> {
        self.0.get("word")
    }

    /// The `image` field, if present.
    pub fn image(&self) -> Option<&Value> {
        self.0.get("image")
    }

    /// Borrow the underlying JSON fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Placeholder image URL naming `word`, or `WORD` when absent.
pub fn placeholder_image_url(word: Option<&Value>) -> String {
    let text = match word {
        None | Some(Value::Null) => PLACEHOLDER_WORD.to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("{PLACEHOLDER_BASE}{encoded}")
}

/// JSON truthiness: null, `false`, zero, and empty strings, arrays or
/// objects are falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
