pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::door_timer::DoorTimerAdapter;
pub use core::door::Door;
pub use core::timed_door::TimedDoor;
pub use core::timer::{TimeoutHandle, Timer, TimerMode};
pub use domain::model::{DoorState, LockPolicy};
pub use domain::ports::TimerClient;
pub use utils::error::{DoorError, Result};
