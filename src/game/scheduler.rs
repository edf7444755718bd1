use std::time::{Duration, Instant};

/// Identifies one arming of a [`Scheduler`].  Every call to
/// [`Scheduler::arm()`] yields a handle that no earlier call has produced.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct TimerHandle(u64);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Timer {
    handle: TimerHandle,
    interval: Duration,
    deadline: Instant,
}

/// A single repeating tick timer.
///
/// The scheduler never runs anything itself: the event loop asks it whether
/// a tick is due via [`Scheduler::poll()`], and at most one tick is reported
/// per call, so a tick can never start while another is being processed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Scheduler {
    timer: Option<Timer>,
    generation: u64,
}

impl Scheduler {
    pub(crate) fn new() -> Scheduler {
        Scheduler::default()
    }

    /// Start firing every `interval`, first at `now + interval`.  Any
    /// previously armed timer is discarded.
    pub(crate) fn arm(&mut self, interval: Duration, now: Instant) -> TimerHandle {
        self.generation += 1;
        let handle = TimerHandle(self.generation);
        self.timer = Some(Timer {
            handle,
            interval,
            deadline: now + interval,
        });
        handle
    }

    /// Stop firing.  Does nothing if the scheduler is not armed.
    pub(crate) fn disarm(&mut self) {
        self.timer = None;
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    #[cfg(test)]
    pub(crate) fn interval(&self) -> Option<Duration> {
        self.timer.map(|t| t.interval)
    }

    /// If the armed timer's deadline has been reached, schedule the next one
    /// relative to `now` and return the timer's handle.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<TimerHandle> {
        let timer = self.timer.as_mut()?;
        if now < timer.deadline {
            return None;
        }
        timer.deadline = now + timer.interval;
        Some(timer.handle)
    }

    /// How long until the armed timer fires, or `None` if not armed
    pub(crate) fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|t| t.deadline.saturating_duration_since(now))
    }
}
