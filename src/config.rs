use std::{fmt, str::FromStr};

use regex::Regex;

use crate::Reps;

/// Which timing operation a [`Suite`](crate::Suite) applies to each candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// [`Timer::total`](crate::Timer::total).
    Total {
        /// Calls to the candidate.
        reps: Reps,
    },

    /// [`Timer::bestof`](crate::Timer::bestof).
    BestOf {
        /// Individually-timed calls to the candidate.
        reps: Reps,
    },

    /// [`Timer::bestoftotal`](crate::Timer::bestoftotal).
    BestOfTotal {
        /// Number of totals to take the best of.
        outer: Reps,

        /// Calls to the candidate within each total.
        inner: Reps,
    },
}

impl Default for Mode {
    /// Best of 5 totals of 1000 calls.
    fn default() -> Self {
        Self::BestOfTotal { outer: Self::DEFAULT_REPS, inner: Self::DEFAULT_INNER }
    }
}

impl Mode {
    pub(crate) const DEFAULT_REPS: Reps = match Reps::new_const(5) {
        Some(reps) => reps,
        None => unreachable!(),
    };

    pub(crate) const DEFAULT_INNER: Reps = match Reps::new_const(1000) {
        Some(reps) => reps,
        None => unreachable!(),
    };

    /// The CLI name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Total { .. } => "total",
            Self::BestOf { .. } => "best-of",
            Self::BestOfTotal { .. } => "best-of-total",
        }
    }

    /// Number of candidate calls covered by one reported duration.
    pub fn calls_per_duration(self) -> u64 {
        match self {
            Self::Total { reps } => reps.get(),
            Self::BestOf { .. } => 1,
            Self::BestOfTotal { inner, .. } => inner.get(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Total { reps } => write!(f, "total of {reps}"),
            Self::BestOf { reps } => write!(f, "best of {reps}"),
            Self::BestOfTotal { outer, inner } => write!(f, "best of {outer} totals of {inner}"),
        }
    }
}

/// Filters which candidates to run based on name.
#[derive(Debug)]
pub(crate) enum Filter {
    Regex(Regex),
    Exact(String),
}

impl Filter {
    /// Parses `pattern` as an exact name or a regular expression.
    pub fn new(pattern: &str, exact: bool) -> Result<Self, regex::Error> {
        if exact {
            Ok(Self::Exact(pattern.to_owned()))
        } else {
            Regex::new(pattern).map(Self::Regex)
        }
    }

    /// Returns `true` if a string matches this filter.
    pub fn is_match(&self, s: &str) -> bool {
        match self {
            Self::Regex(r) => r.is_match(s),
            Self::Exact(e) => e == s,
        }
    }
}

/// The primary action to perform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Action {
    /// Measure candidates.
    #[default]
    Run,

    /// List candidates.
    List,
}

/// The style with which to format output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Column table with a header row.
    #[default]
    Pretty,

    /// Each candidate is printed on its own line.
    Terse,

    /// A JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "pretty" => Ok(Self::Pretty),
            "terse" => Ok(Self::Terse),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// How reports should be ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sorting {
    /// In the order candidates were added.
    #[default]
    Registration,

    /// By name.
    Name,

    /// Fastest first, breaking ties by name.
    Time,
}

impl FromStr for Sorting {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "registration" => Ok(Self::Registration),
            "name" => Ok(Self::Name),
            "time" => Ok(Self::Time),
            _ => Err(()),
        }
    }
}
