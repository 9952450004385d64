#![doc = include_str!("../README.md")]

pub mod bench;
pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod image;
pub mod parallel;

// --- High-level re-exports -------------------------------------------------

pub use crate::bench::{BenchmarkDriver, SweepOutcome};
pub use crate::config::{BenchmarkConfig, THREAD_COUNTS};
pub use crate::diagnostics::{SweepReport, TrialTiming};
pub use crate::edges::GradientKernels;
pub use crate::image::SampleBuffer;
pub use crate::parallel::{partition_rows, ParallelDispatcher, RowRange, RowRangeWorker};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sobel_bench::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let input = SampleBuffer::new(480, 640, vec![0u8; 640 * 480])?;
/// let mut output = input.zeros_like();
/// ParallelDispatcher::new(4)?.dispatch(&input, &mut output)?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::SampleBuffer;
    pub use crate::{BenchmarkConfig, BenchmarkDriver, ParallelDispatcher};
}
