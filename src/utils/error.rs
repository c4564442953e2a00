use thiserror::Error;

use crate::domain::model::DoorState;

#[derive(Error, Debug)]
pub enum DoorError {
    #[error("door left open past its {timeout_secs}s timeout")]
    DoorLeftOpen { timeout_secs: u64 },

    #[error("invalid transition: door is already {state:?}")]
    InvalidState { state: DoorState },

    #[error("invalid timeout: must be at least one second")]
    InvalidTimeout,

    #[error("timer task failed: {0}")]
    TimerTask(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DoorError>;
