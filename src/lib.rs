#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod cli;
mod config;
mod error;
mod measurement;
mod output;
mod reps;
mod suite;
mod timer;
mod util;

pub mod time;

#[doc(inline)]
pub use std::hint::black_box;

pub use crate::{
    config::{Mode, OutputFormat, Sorting},
    error::{Error, Result},
    measurement::Measurement,
    reps::Reps,
    suite::{Report, Suite},
    time::{Clock, ManualClock, OsClock, SystemClock},
    timer::Timer,
};

/// Calls `target` `reps` times and measures the time of all calls together,
/// using the [`OsClock`].
///
/// See [`Timer::total`].
///
/// # Examples
///
/// ```
/// let (duration, last) = reptime::total(3, || 1 + 1)?.into_parts();
///
/// assert_eq!(last, 2);
/// println!("3 calls took {duration:?}");
/// # Ok::<(), reptime::Error>(())
/// ```
pub fn total<O, F>(reps: u64, target: F) -> Result<Measurement<O>>
where
    F: FnMut() -> O,
{
    Ok(Timer::new(OsClock).total(Reps::new(reps)?, target))
}

/// Calls `target` `reps` times and returns the fastest single call, using the
/// [`OsClock`].
///
/// See [`Timer::bestof`].
///
/// # Examples
///
/// ```
/// let m = reptime::bestof(5, || (0..100u64).sum::<u64>())?;
///
/// assert_eq!(m.result, 4950);
/// # Ok::<(), reptime::Error>(())
/// ```
pub fn bestof<O, F>(reps: u64, target: F) -> Result<Measurement<O>>
where
    F: FnMut() -> O,
{
    Ok(Timer::new(OsClock).bestof(Reps::new(reps)?, target))
}

/// Takes the best of `outer` totals of `inner` calls to `target`, using the
/// [`OsClock`].
///
/// See [`Timer::bestoftotal`].
///
/// # Examples
///
/// ```
/// let m = reptime::bestoftotal(5, 1000, || 2.0_f64.sqrt())?;
///
/// assert_eq!(m.result, std::f64::consts::SQRT_2);
/// # Ok::<(), reptime::Error>(())
/// ```
pub fn bestoftotal<O, F>(outer: u64, inner: u64, target: F) -> Result<Measurement<O>>
where
    F: FnMut() -> O,
{
    Ok(Timer::new(OsClock).bestoftotal(Reps::new(outer)?, Reps::new(inner)?, target))
}
