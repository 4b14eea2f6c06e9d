use std::fmt::Display;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Retry an async operation, sleeping `delays[i]` after the i-th failure.
///
/// Makes at most `delays.len() + 1` attempts. Errors for which
/// `is_retryable` returns false are returned immediately.
pub async fn retry_with_backoff<F, Fut, T, E, P>(
    mut operation: F,
    delays: &[Duration],
    is_retryable: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    P: Fn(&E) -> bool,
{
    let total = delays.len() + 1;

    for (i, delay) in delays.iter().enumerate() {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if is_retryable(&e) => {
                warn!(
                    "Request failed (attempt {}/{total}): {e}. Retrying after {}ms...",
                    i + 1,
                    delay.as_millis()
                );
                sleep(*delay).await;
            }
            Err(e) => return Err(e),
        }
    }

    operation().await
}
