use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Leading-edge rate limiter: the first call runs immediately, further calls
/// are dropped until the interval has elapsed since the last accepted run.
pub struct Throttler {
    interval: Duration,
    last_run: Mutex<Option<Instant>>,
}

impl Throttler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: Mutex::new(None),
        }
    }

    /// Runs `action` on the runtime if the interval has passed; otherwise
    /// drops it. Returns whether the action was accepted.
    pub fn throttle<F, Fut>(&self, action: F) -> bool
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut last_run = self.last_run.lock().unwrap();
        let now = Instant::now();

        if let Some(previous) = *last_run {
            if now.duration_since(previous) < self.interval {
                return false;
            }
        }

        *last_run = Some(now);
        tokio::spawn(async move {
            action().await;
        });
        true
    }
}
