//! Lightweight async pacer used to keep request bursts under tracker abuse limits.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::sleep;

/// Enforces a minimum interval between consecutive requests to one service.
#[derive(Clone, Debug)]
pub struct Pacer {
    interval: Duration,
    last_call: Arc<Mutex<Option<Instant>>>,
}

impl Pacer {
    /// Creates a pacer that enforces a minimum delay between requests.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    /// Waits until the interval has elapsed since the previous call, then
    /// records the current call timestamp.
    pub async fn hit(&self) {
        let mut guard = self.last_call.lock().await;
        if let Some(last) = *guard {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed).await;
            }
        }
        *guard = Some(Instant::now());
    }

    /// Returns the configured minimum interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::Pacer;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn interval_accessor_returns_configured_value() {
        let pacer = Pacer::new(Duration::from_millis(25));
        assert_eq!(pacer.interval(), Duration::from_millis(25));
    }

    #[tokio::test]
    async fn second_hit_waits_for_interval() {
        let pacer = Pacer::new(Duration::from_millis(40));

        pacer.hit().await;
        let start = Instant::now();
        pacer.hit().await;

        assert!(start.elapsed() >= Duration::from_millis(35));
    }

    #[tokio::test]
    async fn zero_interval_never_sleeps() {
        let pacer = Pacer::new(Duration::ZERO);
        let start = Instant::now();
        pacer.hit().await;
        pacer.hit().await;
        assert!(start.elapsed() < Duration::from_millis(20));
    }
}
