pub mod door;
pub mod timed_door;
pub mod timer;

pub use crate::domain::model::{DoorState, LockPolicy};
pub use crate::domain::ports::TimerClient;
pub use crate::utils::error::Result;
