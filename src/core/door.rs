use std::sync::{Mutex, PoisonError};

use crate::domain::model::{DoorState, LockPolicy};
use crate::utils::error::{DoorError, Result};

/// A door with a fixed alarm timeout. State lives behind a mutex so a
/// spawned timer callback can read it while the owning task locks/unlocks.
#[derive(Debug)]
pub struct Door {
    state: Mutex<DoorState>,
    policy: LockPolicy,
    timeout_secs: u64,
}

impl Door {
    /// Creates a closed door with the default idempotent lock policy.
    /// A zero timeout is rejected.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Self::with_policy(timeout_secs, LockPolicy::default())
    }

    pub fn with_policy(timeout_secs: u64, policy: LockPolicy) -> Result<Self> {
        if timeout_secs == 0 {
            return Err(DoorError::InvalidTimeout);
        }
        Ok(Self {
            state: Mutex::new(DoorState::Closed),
            policy,
            timeout_secs,
        })
    }

    // A poisoned lock still holds a valid two-variant state, so recover it.
    fn state(&self) -> std::sync::MutexGuard<'_, DoorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn unlock(&self) -> Result<()> {
        let mut state = self.state();
        *state = state.unlocked(self.policy)?;
        tracing::debug!(timeout_secs = self.timeout_secs, "door unlocked");
        Ok(())
    }

    pub fn lock(&self) -> Result<()> {
        let mut state = self.state();
        *state = state.locked(self.policy)?;
        tracing::debug!("door locked");
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        *self.state() == DoorState::Open
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// The alarm check run at timeout: fails iff the door is open right now.
    pub fn signal_if_still_open(&self) -> Result<()> {
        if self.is_open() {
            tracing::warn!(
                timeout_secs = self.timeout_secs,
                "door still open at timeout"
            );
            return Err(DoorError::DoorLeftOpen {
                timeout_secs: self.timeout_secs,
            });
        }
        Ok(())
    }
}
