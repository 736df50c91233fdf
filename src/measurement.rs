use std::time::Duration;

/// The outcome of timing a target.
///
/// What `duration` means depends on the operation that produced it: the sum
/// of all calls for [`Timer::total`](crate::Timer::total), or the fastest
/// single call for [`Timer::bestof`](crate::Timer::bestof).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement<T> {
    /// Measured time.
    pub duration: Duration,

    /// Value returned by the final call to the target.
    pub result: T,
}

impl<T> Measurement<T> {
    /// Returns [`duration`](Self::duration) in seconds.
    #[inline]
    pub fn secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    /// Transforms the result while keeping the duration.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Measurement<U> {
        Measurement { duration: self.duration, result: f(self.result) }
    }

    /// Splits into `(duration, result)`.
    #[inline]
    pub fn into_parts(self) -> (Duration, T) {
        (self.duration, self.result)
    }
}

impl<T> From<Measurement<T>> for (Duration, T) {
    #[inline]
    fn from(m: Measurement<T>) -> Self {
        m.into_parts()
    }
}
