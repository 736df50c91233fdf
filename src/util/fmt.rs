use std::{fmt, time::Duration};

/// Formats a [`Duration`] with a unit suffix and a number of significant
/// figures given by the format precision (default 4).
///
/// Digits beyond the significant figures are truncated, not rounded, and
/// trailing fractional zeros are dropped.
#[derive(Clone, Copy)]
pub struct DisplayDuration(pub Duration);

impl fmt::Display for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sig_figs = f.precision().unwrap_or(4);

        let nanos = self.0.as_nanos();
        let scale = TimeScale::from_nanos(nanos);

        let int = nanos / scale.nanos();
        let int_digits = int.checked_ilog10().map_or(1, |log| log as usize + 1);

        // Never print more fractional digits than the scale can resolve.
        let fract_digits = sig_figs.saturating_sub(int_digits).min(scale.max_fract_digits());

        let mut str = int.to_string();

        if fract_digits != 0 {
            let multiple = 10_u128.pow(fract_digits as u32);
            let fract = (nanos % scale.nanos()) * multiple / scale.nanos();

            if fract != 0 {
                let fract = format!("{fract:0fract_digits$}");
                str.push('.');
                str.push_str(fract.trim_end_matches('0'));
            }
        }

        str.push_str(scale.suffix());

        // Fill up to specified width.
        if let Some(fill_len) = f.width().and_then(|width| width.checked_sub(str.chars().count())) {
            let fill = std::iter::repeat(f.fill()).take(fill_len);
            match f.align() {
                None | Some(fmt::Alignment::Left) => str.extend(fill),
                Some(_) => str = fill.chain(str.chars()).collect(),
            }
        }

        f.write_str(&str)
    }
}

impl fmt::Debug for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

mod nanos {
    pub const MICROS: u128 = 1_000;
    pub const MILLIS: u128 = 1_000 * MICROS;
    pub const SEC: u128 = 1_000 * MILLIS;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimeScale {
    NanoSec,
    MicroSec,
    MilliSec,
    Sec,
}

impl TimeScale {
    /// Determines the scale of time for representing a number of nanoseconds.
    fn from_nanos(nanos: u128) -> Self {
        use nanos::*;

        if nanos < MICROS {
            Self::NanoSec
        } else if nanos < MILLIS {
            Self::MicroSec
        } else if nanos < SEC {
            Self::MilliSec
        } else {
            Self::Sec
        }
    }

    /// Returns the number of nanoseconds in one unit of this scale.
    fn nanos(self) -> u128 {
        use nanos::*;

        match self {
            Self::NanoSec => 1,
            Self::MicroSec => MICROS,
            Self::MilliSec => MILLIS,
            Self::Sec => SEC,
        }
    }

    fn max_fract_digits(self) -> usize {
        match self {
            Self::NanoSec => 0,
            Self::MicroSec => 3,
            Self::MilliSec => 6,
            Self::Sec => 9,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::NanoSec => "ns",
            Self::MicroSec => "µs",
            Self::MilliSec => "ms",
            Self::Sec => "s",
        }
    }
}
