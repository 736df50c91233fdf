use std::{error::Error as StdError, io};

/// Errors produced by measurement setup and by [`Suite`](crate::Suite) runs.
///
/// Errors returned by a measured target are never wrapped by the
/// [`Timer`](crate::Timer) itself; see [`Timer::try_total`](crate::Timer::try_total).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A repetition count of zero was given.
    #[error("repetition count must be greater than zero")]
    ZeroRepetitions,

    /// A negative repetition count was given.
    #[error("repetition count must not be negative (got {count})")]
    NegativeRepetitions {
        /// The rejected count.
        count: i64,
    },

    /// `--inner` was given for a mode without inner repetitions.
    #[error("--inner only applies to best-of-total, not {mode}")]
    InnerRepsUnused {
        /// Name of the selected mode.
        mode: &'static str,
    },

    /// A name filter was not a valid regular expression.
    #[error("invalid filter pattern: {0}")]
    Filter(#[from] regex::Error),

    /// CLI arguments could not be parsed.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// A suite candidate returned an error, which ends the run.
    #[error("candidate '{name}' failed: {source}")]
    Candidate {
        /// Name the candidate was registered under.
        name: String,

        /// The error returned by the candidate.
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Writing reports failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Serializing reports as JSON failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
