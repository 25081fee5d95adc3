//! Motion primitives for handkit
//!
//! Motions are advanced by elapsed milliseconds supplied by the caller; none
//! of them read the system time on their own. [`FrameClock`] turns a
//! [`Clock`] into per-frame deltas for callers that do want wall time.

mod clock;
mod easing;
mod motion;

pub use clock::*;
pub use easing::*;
pub use motion::*;
