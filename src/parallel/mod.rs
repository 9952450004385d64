//! Row-partitioned parallel evaluation of the gradient kernel.
//!
//! - `partition_rows` splits `[0, rows)` into contiguous, non-overlapping
//!   ranges; the last range absorbs the remainder.
//! - `RowRangeWorker` fills one band of output rows.
//! - `ParallelDispatcher` spawns one scoped thread per range and joins them.

pub mod dispatcher;
pub mod range;
pub mod worker;

pub use dispatcher::ParallelDispatcher;
pub use range::{partition_rows, RowRange};
pub use worker::RowRangeWorker;
