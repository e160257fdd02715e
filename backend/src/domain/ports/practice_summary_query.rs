//! Driving port for the practice summary read.

use async_trait::async_trait;

use crate::domain::{Error, PracticeSummary};

/// Driving port returning recent scores, the day streak and practice time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeSummaryQuery: Send + Sync {
    /// Build the summary from the current contents of the store.
    async fn summary(&self) -> Result<PracticeSummary, Error>;
}

/// Fixture query reporting an empty history.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePracticeSummaryQuery;

#[async_trait]
impl PracticeSummaryQuery for FixturePracticeSummaryQuery {
    async fn summary(&self) -> Result<PracticeSummary, Error> {
        Ok(PracticeSummary::default())
    }
}
