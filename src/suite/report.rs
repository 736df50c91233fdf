use std::time::Duration;

use crate::{config::Mode, Measurement};

/// The measurement of one [`Suite`](crate::Suite) candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Name the candidate was registered under.
    pub name: String,

    /// How the candidate was measured.
    pub mode: Mode,

    /// Measured time, as defined by [`mode`](Self::mode).
    pub duration: Duration,

    /// `Debug` rendering of the candidate's last return value.
    pub result: String,
}

impl Report {
    pub(crate) fn new(name: &str, mode: Mode, measurement: Measurement<String>) -> Self {
        Self {
            name: name.to_owned(),
            mode,
            duration: measurement.duration,
            result: measurement.result,
        }
    }

    /// Returns [`duration`](Self::duration) divided by the number of calls it
    /// covers.
    pub fn per_call(&self) -> Duration {
        let calls = u128::from(self.mode.calls_per_duration());
        let nanos = self.duration.as_nanos() / calls;

        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reps;

    fn report(mode: Mode, nanos: u64) -> Report {
        Report::new(
            "test",
            mode,
            Measurement { duration: Duration::from_nanos(nanos), result: String::new() },
        )
    }

    #[test]
    fn per_call() {
        let reps = Reps::new(4).unwrap();

        assert_eq!(report(Mode::Total { reps }, 100).per_call(), Duration::from_nanos(25));
        assert_eq!(report(Mode::BestOf { reps }, 100).per_call(), Duration::from_nanos(100));

        let mode = Mode::BestOfTotal { outer: Reps::ONE, inner: reps };
        assert_eq!(report(mode, 10).per_call(), Duration::from_nanos(2));
    }
}
