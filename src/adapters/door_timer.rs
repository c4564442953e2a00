use std::sync::Arc;

use async_trait::async_trait;

use crate::core::door::Door;
use crate::domain::ports::TimerClient;
use crate::utils::error::Result;

/// Translates a timeout notification into a door-state check. Pure
/// delegation: the timer stays ignorant of doors, the door stays ignorant
/// of timers.
#[derive(Debug, Clone)]
pub struct DoorTimerAdapter {
    door: Arc<Door>,
}

impl DoorTimerAdapter {
    pub fn new(door: Arc<Door>) -> Self {
        Self { door }
    }
}

#[async_trait]
impl TimerClient for DoorTimerAdapter {
    async fn on_timeout(&self) -> Result<()> {
        self.door.signal_if_still_open()
    }
}
