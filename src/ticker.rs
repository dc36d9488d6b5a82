use std::time::Duration;

/// How often the countdown is re-evaluated, in milliseconds
pub const COUNTDOWN_TICK_MS: u64 = 250;

/// Poll timeout of the event loop; doubles as the countdown cadence
pub fn tick_duration() -> Duration {
    Duration::from_millis(COUNTDOWN_TICK_MS)
}
