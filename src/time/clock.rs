use std::{
    sync::atomic::{AtomicU64, Ordering::Relaxed},
    time::{Duration, Instant, SystemTime},
};

/// A source of timestamps.
///
/// [`Timer`](crate::Timer) reads the clock immediately before and after the
/// code it measures and asks the clock for the time in between.
pub trait Clock {
    /// A point in time as read from this clock.
    type Instant: Copy;

    /// Reads the current time.
    fn now(&self) -> Self::Instant;

    /// Returns the time between two readings, or zero if `end` precedes
    /// `start`.
    fn elapsed(&self, start: Self::Instant, end: Self::Instant) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    type Instant = C::Instant;

    #[inline(always)]
    fn now(&self) -> Self::Instant {
        (**self).now()
    }

    #[inline]
    fn elapsed(&self, start: Self::Instant, end: Self::Instant) -> Duration {
        (**self).elapsed(start, end)
    }
}

/// Monotonic operating system clock.
///
/// This is the default clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsClock;

impl Clock for OsClock {
    type Instant = Instant;

    #[inline(always)]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn elapsed(&self, start: Instant, end: Instant) -> Duration {
        end.saturating_duration_since(start)
    }
}

/// Wall clock time.
///
/// Unlike [`OsClock`], this clock may be adjusted while a measurement is in
/// progress. Backward steps produce zero-length durations.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = SystemTime;

    #[inline(always)]
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    #[inline]
    fn elapsed(&self, start: SystemTime, end: SystemTime) -> Duration {
        end.duration_since(start).unwrap_or_default()
    }
}

/// A clock that only moves when told to.
///
/// Time starts at zero and advances by [`advance`](Self::advance) plus a
/// fixed [`tick`](Self::with_tick) on every read. Measured targets can hold a
/// reference to the clock to simulate their own cost.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use reptime::{ManualClock, Reps, Timer};
///
/// let clock = ManualClock::new();
/// let timer = Timer::new(&clock);
///
/// let m = timer.total(Reps::new(3)?, || clock.advance(Duration::from_millis(2)));
/// assert_eq!(m.duration, Duration::from_millis(6));
/// # Ok::<(), reptime::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    nanos: AtomicU64,
    tick: u64,
}

impl ManualClock {
    /// Creates a clock at time zero that does not tick.
    pub const fn new() -> Self {
        Self { nanos: AtomicU64::new(0), tick: 0 }
    }

    /// Creates a clock at time zero that advances by `tick` on every read.
    pub fn with_tick(tick: Duration) -> Self {
        Self { nanos: AtomicU64::new(0), tick: duration_nanos(tick) }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.saturating_fetch_add(duration_nanos(by));
    }

    /// Returns the current reading without ticking.
    pub fn peek(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Relaxed))
    }

    /// Adds `nanos`, stopping at `u64::MAX` so time never goes backwards.
    /// Returns the previous reading.
    fn saturating_fetch_add(&self, nanos: u64) -> u64 {
        let result = self.nanos.fetch_update(Relaxed, Relaxed, |n| Some(n.saturating_add(nanos)));

        match result {
            Ok(prev) | Err(prev) => prev,
        }
    }
}

impl Clock for ManualClock {
    type Instant = Duration;

    fn now(&self) -> Duration {
        Duration::from_nanos(self.saturating_fetch_add(self.tick))
    }

    fn elapsed(&self, start: Duration, end: Duration) -> Duration {
        end.saturating_sub(start)
    }
}

fn duration_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
