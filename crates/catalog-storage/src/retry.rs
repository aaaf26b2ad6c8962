//! Bounded retry for busy/locked store operations.

use std::time::Duration;

use catalog_core::config::RetryConfig;
use catalog_core::errors::StorageError;

/// Run `op` until it succeeds, fails with a non-busy error, or the attempt
/// budget is spent. Sleeps between attempts, doubling the backoff up to
/// `max_backoff`. A final busy failure reports the number of attempts made.
pub fn with_busy_retry<T, F>(
    config: &RetryConfig,
    operation: &'static str,
    mut op: F,
) -> Result<T, StorageError>
where
    F: FnMut() -> Result<T, StorageError>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut backoff = config.initial_backoff();
    let mut attempt = 1;

    loop {
        match op() {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(operation, attempt, "store operation recovered after retry");
                }
                return Ok(value);
            }
            Err(e) if e.is_busy() && attempt < max_attempts => {
                tracing::warn!(
                    operation,
                    attempt,
                    max_attempts,
                    backoff_ms = backoff.as_millis() as u64,
                    error = %e,
                    "store busy, retrying"
                );
                if backoff > Duration::ZERO {
                    std::thread::sleep(backoff);
                }
                backoff = (backoff * 2).min(config.max_backoff());
                attempt += 1;
            }
            Err(StorageError::Busy { message, .. }) => {
                tracing::warn!(operation, attempts = attempt, "store still busy, giving up");
                return Err(StorageError::Busy {
                    attempts: attempt,
                    message,
                });
            }
            Err(e) => return Err(e),
        }
    }
}
