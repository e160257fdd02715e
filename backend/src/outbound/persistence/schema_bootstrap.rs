//! Startup connection and table creation for the history store.
//!
//! The database container may still be starting when the backend boots, so
//! pool construction and table creation are retried together on a fixed
//! schedule. The caller aborts startup when the schedule is exhausted.

use diesel_async::SimpleAsyncConnection;
use tracing::info;

use crate::domain::{FixedRetryPolicy, Sleeper, retry_fixed};

use super::pool::{DbPool, PoolConfig, PoolError};

/// Idempotent DDL for the history table and its ordering index.
pub(crate) const CREATE_HISTORY_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS history (
    id SERIAL PRIMARY KEY,
    word VARCHAR(255) NOT NULL,
    sentence TEXT NOT NULL,
    score DOUBLE PRECISION NOT NULL,
    level VARCHAR(50) NOT NULL,
    suggestion TEXT NOT NULL DEFAULT '',
    corrected_sentence TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS history_created_at_idx ON history (created_at DESC, id DESC);
";

/// Reasons a bootstrap attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaBootstrapError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("failed to create history table: {message}")]
    Schema { message: String },
}

/// Build the pool and make sure the history table exists.
///
/// Every failure is retried until `policy` is exhausted; the last error is
/// returned.
///
/// # Errors
///
/// Returns the error of the final attempt.
pub async fn connect_and_bootstrap(
    config: PoolConfig,
    policy: FixedRetryPolicy,
    sleeper: &dyn Sleeper,
) -> Result<DbPool, SchemaBootstrapError> {
    let pool = retry_fixed(policy, sleeper, "store bootstrap", |_| true, |attempt| {
        let config = config.clone();
        async move {
            info!(attempt, "connecting to history store");
            let pool = DbPool::new(config).await?;
            ensure_schema(&pool).await?;
            Ok::<_, SchemaBootstrapError>(pool)
        }
    })
    .await?;
    info!("history store ready");
    Ok(pool)
}

async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaBootstrapError> {
    let mut conn = pool.get().await?;
    conn.batch_execute(CREATE_HISTORY_SCHEMA)
        .await
        .map_err(|err| SchemaBootstrapError::Schema {
            message: err.to_string(),
        })
}
