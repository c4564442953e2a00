use crate::utils::error::{DoorError, Result};

/// The two states a door can be in. A fresh door starts `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

/// How repeated lock/unlock calls are treated: `Idempotent` makes them
/// no-ops, `Strict` rejects them with [`DoorError::InvalidState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockPolicy {
    #[default]
    Idempotent,
    Strict,
}

impl DoorState {
    pub fn unlocked(self, policy: LockPolicy) -> Result<DoorState> {
        match (self, policy) {
            (DoorState::Closed, _) => Ok(DoorState::Open),
            (DoorState::Open, LockPolicy::Idempotent) => Ok(DoorState::Open),
            (DoorState::Open, LockPolicy::Strict) => {
                Err(DoorError::InvalidState { state: self })
            }
        }
    }

    pub fn locked(self, policy: LockPolicy) -> Result<DoorState> {
        match (self, policy) {
            (DoorState::Open, _) => Ok(DoorState::Closed),
            (DoorState::Closed, LockPolicy::Idempotent) => Ok(DoorState::Closed),
            (DoorState::Closed, LockPolicy::Strict) => {
                Err(DoorError::InvalidState { state: self })
            }
        }
    }
}
