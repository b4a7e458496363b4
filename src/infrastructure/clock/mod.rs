//! Clock adapter backed by the tokio timer

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::Clock;

/// Clock that suspends on `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl TokioClock {
    /// Create a new tokio clock
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_duration() {
        let clock = TokioClock::new();
        let start = tokio::time::Instant::now();

        clock.sleep(Duration::from_millis(250)).await;

        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
