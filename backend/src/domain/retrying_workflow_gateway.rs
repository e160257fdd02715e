//! Retry decorator for [`WorkflowGateway`] implementations.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use super::ports::{WorkflowGateway, WorkflowGatewayError, WorkflowOperation};
use super::retry::{FixedRetryPolicy, Sleeper, TokioSleeper, retry_fixed};

/// Wraps a gateway and retries transport failures on a fixed schedule.
///
/// Status and decode failures are returned after the first attempt.
pub struct RetryingWorkflowGateway {
    inner: Arc<dyn WorkflowGateway>,
    policy: FixedRetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl RetryingWorkflowGateway {
    /// Decorate `inner` with [`FixedRetryPolicy::WORKFLOW`].
    pub fn new(inner: Arc<dyn WorkflowGateway>) -> Self {
        Self::with_runtime(inner, FixedRetryPolicy::WORKFLOW, Arc::new(TokioSleeper))
    }

    /// Decorate `inner` with an explicit schedule and sleeper.
    pub fn with_runtime(
        inner: Arc<dyn WorkflowGateway>,
        policy: FixedRetryPolicy,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            inner,
            policy,
            sleeper,
        }
    }
}

#[async_trait]
impl WorkflowGateway for RetryingWorkflowGateway {
    async fn call(
        &self,
        operation: WorkflowOperation,
        payload: Value,
    ) -> Result<Value, WorkflowGatewayError> {
        let label = operation.path();
        retry_fixed(
            self.policy,
            self.sleeper.as_ref(),
            label,
            WorkflowGatewayError::is_retryable,
            |attempt| {
                info!(operation = label, attempt, "calling workflow service");
                self.inner.call(operation, payload.clone())
            },
        )
        .await
    }
}
