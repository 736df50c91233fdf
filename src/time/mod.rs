//! Clock sources used by [`Timer`](crate::Timer).

mod clock;
mod fence;

pub use clock::*;
pub(crate) use fence::*;
