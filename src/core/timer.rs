use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::ports::TimerClient;
use crate::utils::error::Result;

/// How a registered timeout is scheduled. The two modes are not equivalent:
/// `Blocking` suspends the caller and runs the callback before
/// `register_timeout` returns, `Spawned` hands back a join handle and
/// returns immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    Blocking,
    #[default]
    Spawned,
}

/// Handle to a spawned timeout task. There is no cancellation: dropping the
/// handle detaches the task and the timeout still fires.
#[derive(Debug)]
pub struct TimeoutHandle {
    task: JoinHandle<Result<()>>,
}

impl TimeoutHandle {
    /// Waits for the timeout to fire and returns the callback's outcome.
    pub async fn join(self) -> Result<()> {
        self.task.await?
    }
}

#[derive(Debug, Default)]
pub struct Timer {
    mode: TimerMode,
}

impl Timer {
    pub fn new(mode: TimerMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Schedules exactly one `on_timeout` call on `client` after `secs`
    /// seconds. In `Blocking` mode the callback's error is the return value
    /// and the result is `Ok(None)`; in `Spawned` mode the returned handle
    /// carries it. A spawned callback failure is also logged, since the
    /// handle may have been dropped.
    pub async fn register_timeout(
        &self,
        secs: u64,
        client: Arc<dyn TimerClient>,
    ) -> Result<Option<TimeoutHandle>> {
        let delay = Duration::from_secs(secs);
        tracing::debug!(secs, mode = ?self.mode, "timeout registered");

        match self.mode {
            TimerMode::Blocking => {
                tokio::time::sleep(delay).await;
                client.on_timeout().await?;
                Ok(None)
            }
            TimerMode::Spawned => {
                let task = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Err(err) = client.on_timeout().await {
                        tracing::error!("timeout callback failed: {err}");
                        return Err(err);
                    }
                    Ok(())
                });
                Ok(Some(TimeoutHandle { task }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DoorError;
    use async_trait::async_trait;
    use tokio_test::assert_ok;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingClient {
        calls: AtomicUsize,
    }

    impl RecordingClient {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TimerClient for RecordingClient {
        async fn on_timeout(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl TimerClient for FailingClient {
        async fn on_timeout(&self) -> Result<()> {
            Err(DoorError::DoorLeftOpen { timeout_secs: 1 })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_blocking_timer_fires_before_returning() {
        let timer = Timer::new(TimerMode::Blocking);
        let client = Arc::new(RecordingClient::default());

        let handle = timer.register_timeout(1, client.clone()).await.unwrap();
        assert!(handle.is_none());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blocking_timer_surfaces_callback_error() {
        let timer = Timer::new(TimerMode::Blocking);

        let err = timer
            .register_timeout(1, Arc::new(FailingClient))
            .await
            .unwrap_err();
        assert!(matches!(err, DoorError::DoorLeftOpen { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_timer_returns_before_firing() {
        let timer = Timer::default();
        let client = Arc::new(RecordingClient::default());

        let handle = timer
            .register_timeout(1, client.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(client.calls(), 0);

        tokio_test::assert_ok!(handle.join().await);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_timer_propagates_error_through_join() {
        let timer = Timer::new(TimerMode::Spawned);

        let handle = timer
            .register_timeout(1, Arc::new(FailingClient))
            .await
            .unwrap()
            .unwrap();
        let err = handle.join().await.unwrap_err();
        assert!(matches!(err, DoorError::DoorLeftOpen { .. }));
    }
}
