//! Fixed-delay retry loop shared by the workflow gateway and store bootstrap.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

/// Bounded retry schedule with a constant pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRetryPolicy {
    /// Total attempts including the first. Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Pause before each retry.
    pub delay: Duration,
}

impl FixedRetryPolicy {
    /// Outbound workflow calls: three attempts, two seconds apart.
    pub const WORKFLOW: Self = Self {
        max_attempts: 3,
        delay: Duration::from_secs(2),
    };

    /// Store availability at startup: ten attempts, two seconds apart.
    pub const STORE_BOOTSTRAP: Self = Self {
        max_attempts: 10,
        delay: Duration::from_secs(2),
    };
}

/// Async clock-independent sleeping abstraction for retries.
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use std::time::Duration;
///
/// use async_trait::async_trait;
/// use worddee_backend::domain::Sleeper;
///
/// #[derive(Default)]
/// struct CountingSleeper {
///     calls: Mutex<u32>,
/// }
///
/// #[async_trait]
/// impl Sleeper for CountingSleeper {
///     async fn sleep(&self, _duration: Duration) {
///         *self.calls.lock().expect("calls mutex") += 1;
///     }
/// }
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let sleeper = CountingSleeper::default();
/// sleeper.sleep(Duration::from_millis(25)).await;
/// assert_eq!(*sleeper.calls.lock().expect("calls mutex"), 1);
/// # });
/// ```
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or
/// the policy runs out of attempts. The last error is returned unchanged.
///
/// `operation` receives the 1-based attempt number.
pub async fn retry_fixed<T, E, F, Fut>(
    policy: FixedRetryPolicy,
    sleeper: &dyn Sleeper,
    label: &str,
    is_retryable: impl Fn(&E) -> bool,
    mut operation: F,
) -> Result<T, E>
where
    E: Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < max_attempts && is_retryable(&error) => {
                warn!(
                    operation = label,
                    attempt,
                    max_attempts,
                    delay_ms = u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
                    error = %error,
                    "attempt failed; retrying"
                );
                sleeper.sleep(policy.delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use rstest::rstest;

    use super::test_support::RecordingSleeper;
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Failure {
        Flaky,
        Fatal,
    }

    impl Display for Failure {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{self:?}")
        }
    }

    fn retryable(failure: &Failure) -> bool {
        *failure == Failure::Flaky
    }

    #[rstest]
    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let outcome = retry_fixed(FixedRetryPolicy::WORKFLOW, &sleeper, "probe", retryable, |attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 3 {
                    Err(Failure::Flaky)
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(outcome, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(sleeper.delays(), vec![Duration::from_secs(2); 2]);
    }

    #[rstest]
    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let outcome: Result<(), Failure> = retry_fixed(
            FixedRetryPolicy::STORE_BOOTSTRAP,
            &sleeper,
            "probe",
            retryable,
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(Failure::Flaky) }
            },
        )
        .await;

        assert_eq!(outcome, Err(Failure::Flaky));
        assert_eq!(calls.load(Ordering::SeqCst), 10);
        assert_eq!(sleeper.delays().len(), 9);
    }

    #[rstest]
    #[tokio::test]
    async fn non_retryable_errors_stop_immediately() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let outcome: Result<(), Failure> =
            retry_fixed(FixedRetryPolicy::WORKFLOW, &sleeper, "probe", retryable, |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(Failure::Fatal) }
            })
            .await;

        assert_eq!(outcome, Err(Failure::Fatal));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeper.delays().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn zero_attempts_still_runs_once() {
        let sleeper = RecordingSleeper::default();
        let policy = FixedRetryPolicy {
            max_attempts: 0,
            delay: Duration::from_millis(1),
        };

        let outcome: Result<(), Failure> =
            retry_fixed(policy, &sleeper, "probe", retryable, |_| async { Err(Failure::Flaky) })
                .await;

        assert_eq!(outcome, Err(Failure::Flaky));
        assert!(sleeper.delays().is_empty());
    }
}
