//! Aggregate statistics over materialised outcomes.
//!
//! Every statistic returns `None` on an empty collection; no statistic
//! panics or returns NaN for lack of data.

mod samples;

pub use samples::Samples;
