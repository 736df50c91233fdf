use std::convert::Infallible;

use tracing::debug;

use crate::{
    time::{compiler_fence, Clock, OsClock},
    Measurement, Reps,
};

#[cfg(test)]
mod tests;

/// Times repeated calls to a target.
///
/// Targets are closures; arguments are forwarded by capturing them. Each
/// operation comes in an infallible form and a `try_` form whose target
/// returns [`Result`]. In the `try_` forms, the first error ends the
/// measurement and is returned as-is, without any timing.
///
/// # Examples
///
/// ```
/// use reptime::{Reps, Timer};
///
/// let timer: Timer = Timer::default();
/// let data: Vec<f64> = (0..1000).map(f64::from).collect();
///
/// let m = timer.bestoftotal(Reps::new(5)?, Reps::new(100)?, || {
///     data.iter().map(|x| x.sqrt()).sum::<f64>()
/// });
///
/// println!("fastest 100 calls took {:?}, last sum = {}", m.duration, m.result);
/// # Ok::<(), reptime::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer<C = OsClock> {
    clock: C,
}

impl<C: Clock> Timer<C> {
    /// Creates a timer reading from `clock`.
    #[inline]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the clock this timer reads from.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Calls `target` `reps` times and measures the time of all calls
    /// together.
    ///
    /// The clock is read once before the first call and once after the last.
    pub fn total<O, F>(&self, reps: Reps, mut target: F) -> Measurement<O>
    where
        F: FnMut() -> O,
    {
        into_ok(self.try_total(reps, || Ok(target())))
    }

    /// Fallible form of [`total`](Self::total).
    pub fn try_total<O, E, F>(&self, reps: Reps, mut target: F) -> Result<Measurement<O>, E>
    where
        F: FnMut() -> Result<O, E>,
    {
        let m = self.measure_total(reps, target)?;
        debug!(reps = reps.get(), duration = ?m.duration, "total");

        Ok(m)
    }

    /// Calls `target` `reps` times, timing each call on its own, and keeps
    /// the fastest time.
    ///
    /// The returned result is from the last call, which is not necessarily
    /// the fastest one.
    pub fn bestof<O, F>(&self, reps: Reps, mut target: F) -> Measurement<O>
    where
        F: FnMut() -> O,
    {
        into_ok(self.try_bestof(reps, || Ok(target())))
    }

    /// Fallible form of [`bestof`](Self::bestof).
    pub fn try_bestof<O, E, F>(&self, reps: Reps, mut target: F) -> Result<Measurement<O>, E>
    where
        F: FnMut() -> Result<O, E>,
    {
        let m = self.measure_best(reps, target)?;
        debug!(reps = reps.get(), best = ?m.duration, "bestof");

        Ok(m)
    }

    /// Takes the [best of](Self::bestof) `outer` measurements, each the
    /// [total](Self::total) of `inner` calls to `target`.
    pub fn bestoftotal<O, F>(&self, outer: Reps, inner: Reps, mut target: F) -> Measurement<O>
    where
        F: FnMut() -> O,
    {
        into_ok(self.try_bestoftotal(outer, inner, || Ok(target())))
    }

    /// Fallible form of [`bestoftotal`](Self::bestoftotal).
    pub fn try_bestoftotal<O, E, F>(
        &self,
        outer: Reps,
        inner: Reps,
        mut target: F,
    ) -> Result<Measurement<O>, E>
    where
        F: FnMut() -> Result<O, E>,
    {
        // Nothing may be logged between the outer clock reads.
        let best = self.measure_best(outer, || self.measure_total(inner, &mut target))?;
        debug!(outer = outer.get(), inner = inner.get(), best = ?best.duration, "bestoftotal");

        Ok(best.map(|total| total.result))
    }

    fn measure_total<O, E, F>(&self, reps: Reps, mut target: F) -> Result<Measurement<O>, E>
    where
        F: FnMut() -> Result<O, E>,
    {
        let start = self.read();

        let mut result = target()?;
        for _ in 1..reps.get() {
            result = target()?;
        }

        let end = self.read();

        Ok(Measurement { duration: self.clock.elapsed(start, end), result })
    }

    fn measure_best<O, E, F>(&self, reps: Reps, mut target: F) -> Result<Measurement<O>, E>
    where
        F: FnMut() -> Result<O, E>,
    {
        let mut sample = || -> Result<Measurement<O>, E> {
            let start = self.read();
            let result = target()?;
            let end = self.read();

            Ok(Measurement { duration: self.clock.elapsed(start, end), result })
        };

        let Measurement { duration: mut best, mut result } = sample()?;

        for _ in 1..reps.get() {
            let next = sample()?;
            best = best.min(next.duration);
            result = next.result;
        }

        Ok(Measurement { duration: best, result })
    }

    /// Reads the clock without letting surrounding code move across it.
    #[inline(always)]
    fn read(&self) -> C::Instant {
        compiler_fence();
        let now = self.clock.now();
        compiler_fence();
        now
    }
}

#[inline(always)]
fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
