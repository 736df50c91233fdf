use std::{fmt, num::NonZeroU64};

use crate::Error;

/// The number of times a target is invoked within one measurement.
///
/// A `Reps` is never zero, so every measurement has at least one call whose
/// result can be reported.
///
/// # Examples
///
/// ```
/// use reptime::{Error, Reps};
///
/// let reps = Reps::new(1000)?;
/// assert_eq!(reps.get(), 1000);
///
/// assert!(matches!(Reps::new(0), Err(Error::ZeroRepetitions)));
/// assert!(matches!(Reps::try_from(-3_i64), Err(Error::NegativeRepetitions { count: -3 })));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Reps(NonZeroU64);

impl Reps {
    /// A single repetition.
    pub const ONE: Self = Self(NonZeroU64::MIN);

    /// Validates a repetition count.
    #[inline]
    pub fn new(count: u64) -> Result<Self, Error> {
        NonZeroU64::new(count).map(Self).ok_or(Error::ZeroRepetitions)
    }

    /// Validates a repetition count in const contexts.
    pub(crate) const fn new_const(count: u64) -> Option<Self> {
        match NonZeroU64::new(count) {
            Some(count) => Some(Self(count)),
            None => None,
        }
    }

    /// Returns the count as a primitive.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for Reps {
    #[inline]
    fn from(count: NonZeroU64) -> Self {
        Self(count)
    }
}

impl TryFrom<u64> for Reps {
    type Error = Error;

    #[inline]
    fn try_from(count: u64) -> Result<Self, Error> {
        Self::new(count)
    }
}

impl TryFrom<i64> for Reps {
    type Error = Error;

    fn try_from(count: i64) -> Result<Self, Error> {
        match u64::try_from(count) {
            Ok(count) => Self::new(count),
            Err(_) => Err(Error::NegativeRepetitions { count }),
        }
    }
}

impl fmt::Debug for Reps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero() {
        assert!(matches!(Reps::new(0), Err(Error::ZeroRepetitions)));
        assert!(matches!(Reps::try_from(0_i64), Err(Error::ZeroRepetitions)));
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(
            Reps::try_from(i64::MIN),
            Err(Error::NegativeRepetitions { count: i64::MIN })
        ));
    }

    #[test]
    fn accepts_positive() {
        assert_eq!(Reps::try_from(1_i64).unwrap(), Reps::ONE);
        assert_eq!(Reps::new(u64::MAX).unwrap().get(), u64::MAX);
    }
}
