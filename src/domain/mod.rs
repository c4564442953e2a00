// Domain layer: the door state machine and the capability ports the timer
// mechanism depends on. No external dependencies beyond the error types.

pub mod model;
pub mod ports;
