//! Retry and delay helpers
//!
//! Wraps flaky remote calls (Azure management APIs, upload endpoints) in a
//! fixed-delay, strictly sequential retry loop. No jitter, no backoff
//! growth: the deployment flow prefers predictable worst-case timing
//! (`max_attempts * delay`) over decorrelation.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Default number of attempts before the last failure is propagated.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default pause between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Run `operation` up to `max_attempts` times with `delay` between attempts.
///
/// The operation receives the 1-based attempt number. The first success
/// returns immediately; a failure on the final attempt is propagated
/// unchanged. Earlier failures are logged and swallowed. The operation is
/// always invoked at least once, even with `max_attempts` of zero.
pub async fn run_with_retry<T, E, F, Fut>(
    mut operation: F,
    max_attempts: u32,
    delay: Duration,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => return Err(err),
            Err(err) => {
                warn!(
                    attempt,
                    max_attempts,
                    error = %err,
                    "Retrying after failed attempt"
                );
                wait(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Suspend the current task for `delay`. No cancellation hook.
pub async fn wait(delay: Duration) {
    tokio::time::sleep(delay).await;
}
