//! Minute-bucketed traffic over a trailing window.
//!
//! [`realtime`] answers a point-in-time query against the record store.
//! [`LiveWindow`] keeps the same buckets incrementally for a stream of
//! records, which is what the `stats` dashboard runs on.
//!
//! "Now" is always taken from the data, never from the wall clock.

mod histogram;
mod live;
mod realtime;


pub use histogram::Histogram;
pub use live::{LiveSnapshot, LiveWindow};
pub use realtime::{DEFAULT_WINDOW_MINUTES, WindowDataPoint, realtime, window_bounds};
