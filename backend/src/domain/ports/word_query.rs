//! Driving port for fetching the next vocabulary word card.

use async_trait::async_trait;

use crate::domain::WordCard;

/// Driving port for the word-of-the-moment read.
///
/// The operation is infallible from the caller's point of view: adapters
/// always receive a card, possibly the offline fallback.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() {
/// use worddee_backend::domain::ports::{FixtureWordQuery, WordQuery};
///
/// let card = FixtureWordQuery.next_word().await;
/// assert!(card.word().is_some());
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordQuery: Send + Sync {
    /// Produce a word card for display.
    async fn next_word(&self) -> WordCard;
}

/// Fixture query that always returns the offline card.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWordQuery;

#[async_trait]
impl WordQuery for FixtureWordQuery {
    async fn next_word(&self) -> WordCard {
        WordCard::fallback()
    }
}
