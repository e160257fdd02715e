//! Word-of-the-moment service.
//!
//! Implements [`WordQuery`] on top of the workflow gateway. Failures never
//! reach the caller: they are logged and replaced by the offline card.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::error;

use super::WordCard;
use super::ports::{WordQuery, WorkflowGateway, WorkflowOperation};

/// Word service implementing [`WordQuery`].
#[derive(Clone)]
pub struct WordService {
    gateway: Arc<dyn WorkflowGateway>,
}

impl WordService {
    /// Build the service over the workflow gateway.
    pub fn new(gateway: Arc<dyn WorkflowGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl WordQuery for WordService {
    async fn next_word(&self) -> WordCard {
        let remote = match self
            .gateway
            .call(WorkflowOperation::GenerateWord, json!({}))
            .await
        {
            Ok(remote) => remote,
            Err(err) => {
                error!(error = %err, "word generation failed; serving offline card");
                return WordCard::fallback();
            }
        };

        WordCard::from_remote(remote).unwrap_or_else(|err| {
            error!(error = %err, "word generation returned an unusable card");
            WordCard::fallback()
        })
    }
}
