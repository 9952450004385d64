pub mod driver;

pub use driver::{BenchmarkDriver, SweepOutcome};
