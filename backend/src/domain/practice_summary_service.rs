//! Practice summary service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use super::ports::{AttemptRepository, AttemptRepositoryError, PracticeSummaryQuery};
use super::{Error, PracticeSummary, SUMMARY_WINDOW};

fn map_repository_error(error: AttemptRepositoryError) -> Error {
    match error {
        AttemptRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("attempt repository unavailable: {message}"))
        }
        AttemptRepositoryError::Query { message } => {
            Error::internal(format!("attempt repository error: {message}"))
        }
    }
}

/// Summary service implementing [`PracticeSummaryQuery`].
///
/// "Today" for streak purposes is the UTC date reported by the clock.
#[derive(Clone)]
pub struct PracticeSummaryService {
    attempts: Arc<dyn AttemptRepository>,
    clock: Arc<dyn Clock>,
}

impl PracticeSummaryService {
    /// Build the service over the attempt store and the clock that decides
    /// "today".
    pub fn new(attempts: Arc<dyn AttemptRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { attempts, clock }
    }
}

#[async_trait]
impl PracticeSummaryQuery for PracticeSummaryService {
    async fn summary(&self) -> Result<PracticeSummary, Error> {
        let recent = self
            .attempts
            .list_recent(SUMMARY_WINDOW)
            .await
            .map_err(map_repository_error)?;
        let total = self.attempts.count().await.map_err(map_repository_error)?;
        let activity = self
            .attempts
            .list_activity_days()
            .await
            .map_err(map_repository_error)?;

        let today = self.clock.utc().date_naive();
        Ok(PracticeSummary::build(&recent, total, &activity, today))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockAttemptRepository;
    use crate::domain::{Attempt, MINUTES_PER_ATTEMPT};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 18, 30, 0)
            .single()
            .expect("valid instant")
    }

    fn service(repo: MockAttemptRepository, now: DateTime<Utc>) -> PracticeSummaryService {
        PracticeSummaryService::new(Arc::new(repo), Arc::new(FixtureClock { utc_now: now }))
    }

    fn attempt(id: i32, created_at: DateTime<Utc>) -> Attempt {
        Attempt {
            id,
            word: "brisk".to_owned(),
            sentence: "A brisk walk.".to_owned(),
            score: f64::from(id),
            level: "B1".to_owned(),
            suggestion: String::new(),
            corrected_sentence: String::new(),
            created_at,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn summary_combines_recent_count_and_streak(now: DateTime<Utc>) {
        let newest = now - Duration::hours(1);
        let older = now - Duration::days(1);
        let mut repo = MockAttemptRepository::new();
        repo.expect_list_recent()
            .withf(|limit| *limit == SUMMARY_WINDOW)
            .times(1)
            .return_once(move |_| Ok(vec![attempt(2, newest), attempt(1, older)]));
        repo.expect_count().times(1).return_once(|| Ok(2));
        repo.expect_list_activity_days()
            .times(1)
            .return_once(move || Ok(vec![older.date_naive(), newest.date_naive()]));

        let summary = service(repo, now).summary().await.expect("summary builds");

        assert_eq!(summary.dates, vec!["18:30".to_owned(), "17:30".to_owned()]);
        assert_eq!(summary.scores, vec![1.0, 2.0]);
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.total_minutes, 2 * MINUTES_PER_ATTEMPT);
    }

    #[rstest]
    #[tokio::test]
    async fn connection_failure_maps_to_service_unavailable(now: DateTime<Utc>) {
        let mut repo = MockAttemptRepository::new();
        repo.expect_list_recent()
            .return_once(|_| Err(AttemptRepositoryError::connection("pool timed out")));

        let error = service(repo, now).summary().await.expect_err("store down");

        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
        assert!(error.message().contains("pool timed out"));
    }

    #[rstest]
    #[tokio::test]
    async fn query_failure_maps_to_internal_error(now: DateTime<Utc>) {
        let mut repo = MockAttemptRepository::new();
        repo.expect_list_recent().return_once(|_| Ok(Vec::new()));
        repo.expect_count()
            .return_once(|| Err(AttemptRepositoryError::query("relation missing")));

        let error = service(repo, now).summary().await.expect_err("query fails");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
