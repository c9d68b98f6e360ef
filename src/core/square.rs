use crate::utils::error::{KitError, Result};
use std::time::Duration;

pub const SQUARE_DELAY: Duration = Duration::from_millis(1000);

/// Resolves to `n * n` after [`SQUARE_DELAY`].
///
/// Negative or NaN input fails right away with [`KitError::NegativeInput`] without waiting.
pub async fn square_async(n: f64) -> Result<f64> {
    square_async_with_delay(n, SQUARE_DELAY).await
}

pub async fn square_async_with_delay(n: f64, delay: Duration) -> Result<f64> {
    // NaN 也會被拒絕
    if !(n >= 0.0) {
        tracing::debug!("Rejecting input {}", n);
        return Err(KitError::NegativeInput { value: n });
    }

    tracing::debug!("Squaring {} after {:?}", n, delay);
    tokio::time::sleep(delay).await;
    Ok(n * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_square_waits_for_delay() {
        let start = Instant::now();
        let result = square_async(4.0).await.unwrap();
        assert_eq!(result, 16.0);
        assert!(start.elapsed() >= SQUARE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_rejects_immediately() {
        let start = Instant::now();
        let err = square_async(-1.0).await.unwrap_err();
        assert_eq!(err.to_string(), "Negative number not allowed!");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nan_rejects_immediately() {
        let start = Instant::now();
        let result = square_async_with_delay(f64::NAN, SQUARE_DELAY).await;
        assert!(matches!(result, Err(KitError::NegativeInput { .. })));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_is_accepted() {
        assert_eq!(square_async(0.0).await.unwrap(), 0.0);
    }

    #[test]
    fn test_custom_delay_with_block_on() {
        let result = tokio_test::block_on(square_async_with_delay(1.5, Duration::ZERO));
        assert_eq!(result.unwrap(), 2.25);
    }
}
