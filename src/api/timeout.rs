//! Request-versus-timer race.
//!
//! Every network call is raced against a fixed-duration timer. Whichever settles
//! first wins; the losing request future is dropped, so its eventual response is
//! never applied.

use crate::domain::error::{ForkifyError, Result};
use std::future::Future;
use std::time::Duration;

/// Awaits `request`, failing with [`ForkifyError::Timeout`] once `limit` elapses.
///
/// # Errors
///
/// Returns the request's own error if it settles first with one, or
/// [`ForkifyError::Timeout`] carrying the limit in whole seconds.
pub async fn race_timeout<F, T>(limit: Duration, request: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, request).await {
        Ok(settled) => settled,
        Err(_elapsed) => {
            tracing::warn!(limit_secs = limit.as_secs(), "request timed out");
            Err(ForkifyError::Timeout(limit.as_secs()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn pending_request_loses_to_timer() {
        let result: Result<()> = race_timeout(Duration::from_secs(10), std::future::pending()).await;
        assert!(matches!(result, Err(ForkifyError::Timeout(10))));
    }

    #[tokio::test(start_paused = true)]
    async fn fast_request_wins() {
        let result = race_timeout(Duration::from_secs(10), async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(7)
        })
        .await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn request_error_is_propagated_unchanged() {
        let result: Result<()> = race_timeout(Duration::from_secs(10), async {
            Err(ForkifyError::Fetch("Invalid _id (400)".to_string()))
        })
        .await;
        assert!(matches!(result, Err(ForkifyError::Fetch(m)) if m == "Invalid _id (400)"));
    }
}
