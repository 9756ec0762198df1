use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Cancelable one-shot timers, polled by the owner.
///
/// A canceled handle must never be returned by `take_expired`.
pub trait Timer {
    fn arm(&mut self, delay: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
    /// Removes and returns every handle whose deadline has passed, earliest first.
    fn take_expired(&mut self) -> Vec<TimerHandle>;
}

/// Deadline bookkeeping shared by the timer implementations.
#[derive(Debug, Clone)]
struct Schedule<I> {
    next_id: u64,
    armed: Vec<(TimerHandle, I)>,
}

impl<I: Copy + Ord> Schedule<I> {
    fn new() -> Self {
        Self {
            next_id: 0,
            armed: Vec::new(),
        }
    }

    fn arm(&mut self, deadline: I) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.armed.push((handle, deadline));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.armed.retain(|(h, _)| *h != handle);
    }

    fn take_expired(&mut self, now: I) -> Vec<TimerHandle> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.armed.drain(..).partition(|(_, deadline)| *deadline <= now);
        self.armed = pending;
        due.sort_by_key(|(handle, deadline)| (*deadline, *handle));
        due.into_iter().map(|(handle, _)| handle).collect()
    }

    fn next_deadline(&self) -> Option<I> {
        self.armed.iter().map(|(_, deadline)| *deadline).min()
    }

    fn len(&self) -> usize {
        self.armed.len()
    }
}

/// A timer driven by an explicit clock, for deterministic tests.
#[derive(Debug, Clone)]
pub struct ManualTimer {
    now: Duration,
    schedule: Schedule<Duration>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            schedule: Schedule::new(),
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn pending_count(&self) -> usize {
        self.schedule.len()
    }
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for ManualTimer {
    fn arm(&mut self, delay: Duration) -> TimerHandle {
        self.schedule.arm(self.now + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.schedule.cancel(handle);
    }

    fn take_expired(&mut self) -> Vec<TimerHandle> {
        self.schedule.take_expired(self.now)
    }
}

/// A timer backed by the monotonic clock, polled from an event loop.
#[derive(Debug, Clone)]
pub struct WallTimer {
    schedule: Schedule<Instant>,
}

impl WallTimer {
    pub fn new() -> Self {
        Self {
            schedule: Schedule::new(),
        }
    }

    /// Time left until the earliest armed deadline, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.schedule
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

impl Default for WallTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for WallTimer {
    fn arm(&mut self, delay: Duration) -> TimerHandle {
        self.schedule.arm(Instant::now() + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.schedule.cancel(handle);
    }

    fn take_expired(&mut self) -> Vec<TimerHandle> {
        self.schedule.take_expired(Instant::now())
    }
}
