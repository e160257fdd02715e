//! Port for attempt persistence and the reads backing the practice summary.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Attempt, NewAttempt};

use super::define_port_error;

define_port_error! {
    /// Errors raised by attempt repository adapters.
    pub enum AttemptRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "attempt repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "attempt repository query failed: {message}",
    }
}

/// Port for appending attempts and reading them back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Append one attempt. The store assigns `id` and `created_at`.
    async fn insert(&self, attempt: &NewAttempt) -> Result<(), AttemptRepositoryError>;

    /// Most recent `limit` attempts, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Attempt>, AttemptRepositoryError>;

    /// Total number of stored attempts.
    async fn count(&self) -> Result<u64, AttemptRepositoryError>;

    /// Distinct UTC calendar days on which attempts were stored, in no
    /// particular order.
    async fn list_activity_days(&self) -> Result<Vec<NaiveDate>, AttemptRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAttemptRepository;

#[async_trait]
impl AttemptRepository for FixtureAttemptRepository {
    async fn insert(&self, _attempt: &NewAttempt) -> Result<(), AttemptRepositoryError> {
        Ok(())
    }

    async fn list_recent(&self, _limit: usize) -> Result<Vec<Attempt>, AttemptRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<u64, AttemptRepositoryError> {
        Ok(0)
    }

    async fn list_activity_days(&self) -> Result<Vec<NaiveDate>, AttemptRepositoryError> {
        Ok(Vec::new())
    }
}
