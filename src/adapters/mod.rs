// Adapters layer: concrete TimerClient implementations bridging the timer
// mechanism to domain objects.

pub mod door_timer;
