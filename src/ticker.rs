use std::time::{Duration, Instant};

/// How long the event loop waits for input before checking the ticker
pub const DEFAULT_POLL_MS: u64 = 250;

/// Countdown period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Get the event-loop poll timeout
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// The one repeating per-second schedule.
///
/// Armed is `Some(next_deadline)`. There is a single slot, so arming twice
/// can never leave two schedules firing.
#[derive(Debug, Default)]
pub struct Ticker {
    next_fire: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { next_fire: None }
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Arm the schedule with its first fire one period from `now`.
    /// Already armed: keeps the existing phase.
    pub fn arm(&mut self, now: Instant) {
        if self.next_fire.is_none() {
            self.next_fire = Some(now + TICK_PERIOD);
        }
    }

    /// Cancel the schedule
    pub fn disarm(&mut self) {
        self.next_fire = None;
    }

    /// Number of periods that have elapsed by `now`; the deadline moves past
    /// each of them so none is reported twice.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_fire else {
            return 0;
        };

        let mut fired = 0;
        while deadline <= now {
            fired += 1;
            deadline += TICK_PERIOD;
        }
        self.next_fire = Some(deadline);
        fired
    }

    /// Time until the next fire, if armed
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_fire
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
