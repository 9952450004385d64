//! Timing data produced by a benchmark sweep.

pub mod timing;

pub use timing::{SweepReport, TrialTiming};
