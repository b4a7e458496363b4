//! Clock port interface

use std::time::Duration;

use async_trait::async_trait;

/// Port for timed suspension
#[async_trait]
pub trait Clock: Send + Sync {
    /// Suspend the current task for `duration`.
    async fn sleep(&self, duration: Duration);
}
