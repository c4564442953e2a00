use std::sync::Arc;

use crate::adapters::door_timer::DoorTimerAdapter;
use crate::core::door::Door;
use crate::core::timer::{TimeoutHandle, Timer, TimerMode};
use crate::domain::model::LockPolicy;
use crate::utils::error::Result;

/// Wires a shared [`Door`], its adapter, and a [`Timer`] together so that
/// unlocking arms the alarm in one step.
#[derive(Debug)]
pub struct TimedDoor {
    door: Arc<Door>,
    adapter: Arc<DoorTimerAdapter>,
    timer: Timer,
}

impl TimedDoor {
    pub fn new(timeout_secs: u64, policy: LockPolicy, mode: TimerMode) -> Result<Self> {
        let door = Arc::new(Door::with_policy(timeout_secs, policy)?);
        let adapter = Arc::new(DoorTimerAdapter::new(Arc::clone(&door)));
        Ok(Self {
            door,
            adapter,
            timer: Timer::new(mode),
        })
    }

    /// Unlocks the door and registers its timeout against the door's own
    /// adapter. In `Blocking` mode this call itself waits out the timeout
    /// and returns the alarm outcome; in `Spawned` mode the returned handle
    /// carries it.
    pub async fn unlock(&self) -> Result<Option<TimeoutHandle>> {
        self.door.unlock()?;
        self.timer
            .register_timeout(self.door.timeout_secs(), self.adapter.clone())
            .await
    }

    pub fn lock(&self) -> Result<()> {
        self.door.lock()
    }

    pub fn is_open(&self) -> bool {
        self.door.is_open()
    }

    pub fn door(&self) -> Arc<Door> {
        Arc::clone(&self.door)
    }
}
