use crate::utils::error::Result;
use async_trait::async_trait;

/// Capability contract for receiving a timeout notification. The timer only
/// knows about this trait, never about the concrete client behind it.
#[async_trait]
pub trait TimerClient: Send + Sync {
    async fn on_timeout(&self) -> Result<()>;
}
