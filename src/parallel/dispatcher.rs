//! Thread-per-range dispatch of the gradient kernel.
//!
//! `ParallelDispatcher::dispatch` partitions the rows, splits the output
//! storage into one disjoint `&mut [u8]` band per range and runs each band on
//! its own scoped OS thread. The scope joins every thread before returning,
//! which is the only synchronisation point: nothing is shared mutably, the
//! input is only read, and no pool outlives a call.
use super::{partition_rows, RowRange, RowRangeWorker};
use crate::edges::GradientKernels;
use crate::image::{ImageView, ImageViewMut, SampleBuffer};
use log::{debug, warn};
use std::thread;

#[derive(Clone, Debug)]
pub struct ParallelDispatcher {
    thread_count: usize,
    kernels: GradientKernels,
}

impl ParallelDispatcher {
    /// Dispatcher running the Sobel pair on `thread_count` workers.
    pub fn new(thread_count: usize) -> Result<Self, String> {
        Self::with_kernels(thread_count, GradientKernels::SOBEL)
    }

    pub fn with_kernels(thread_count: usize, kernels: GradientKernels) -> Result<Self, String> {
        if thread_count == 0 {
            return Err("Thread count must be at least 1".to_string());
        }
        Ok(Self {
            thread_count,
            kernels,
        })
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn kernels(&self) -> &GradientKernels {
        &self.kernels
    }

    /// Ranges this dispatcher would assign for an image with `rows` rows.
    pub fn ranges(&self, rows: usize) -> Result<Vec<RowRange>, String> {
        partition_rows(rows, self.thread_count)
    }

    /// Recompute every cell of `output` from `input`, blocking until all
    /// workers have finished.
    pub fn dispatch(
        &self,
        input: &SampleBuffer,
        output: &mut SampleBuffer,
    ) -> Result<(), String> {
        if !input.same_shape(output) {
            return Err(format!(
                "Output buffer {}x{} does not match input {}x{}",
                output.rows(),
                output.cols(),
                input.rows(),
                input.cols()
            ));
        }

        let rows = input.height();
        let cols = input.width();
        let ranges = self.ranges(rows)?;
        if self.thread_count > rows {
            warn!(
                "ParallelDispatcher: {} threads for {} rows, only the last worker gets rows",
                self.thread_count, rows
            );
        }
        debug!(
            "ParallelDispatcher::dispatch threads={} rows={} cols={} ranges={:?}",
            self.thread_count, rows, cols, ranges
        );

        let view = input.as_view();
        let kernels = &self.kernels;
        let mut remaining = output
            .as_mut_slice()
            .ok_or_else(|| "Output buffer is not contiguous".to_string())?;

        thread::scope(|s| -> Result<(), String> {
            for (k, range) in ranges.iter().copied().enumerate() {
                let (band, rest) =
                    std::mem::take(&mut remaining).split_at_mut(range.len() * cols);
                remaining = rest;
                let worker = RowRangeWorker::new(view, kernels, range);
                thread::Builder::new()
                    .name(format!("sobel-worker-{k}"))
                    .spawn_scoped(s, move || worker.run(band))
                    .map_err(|e| format!("Failed to spawn worker {k} for {range:?}: {e}"))?;
            }
            Ok(())
        })?;

        debug_assert!(remaining.is_empty());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::gradient_magnitude;

    fn ramp(rows: usize, cols: usize) -> SampleBuffer {
        let data = (0..rows * cols)
            .map(|i| ((i * 37 + (i / cols) * 11) % 256) as u8)
            .collect();
        SampleBuffer::new(rows, cols, data).expect("buffer")
    }

    fn sequential(input: &SampleBuffer) -> SampleBuffer {
        let mut out = input.zeros_like();
        let view = input.as_view();
        for r in 0..input.rows() {
            for c in 0..input.cols() {
                out.set(r, c, gradient_magnitude(&view, &GradientKernels::SOBEL, r, c));
            }
        }
        out
    }

    #[test]
    fn rejects_zero_threads() {
        assert!(ParallelDispatcher::new(0).is_err());
    }

    #[test]
    fn rejects_mismatched_output() {
        let input = SampleBuffer::zeros(4, 4);
        let mut output = SampleBuffer::zeros(4, 5);
        let err = ParallelDispatcher::new(2)
            .expect("dispatcher")
            .dispatch(&input, &mut output)
            .unwrap_err();
        assert!(err.contains("does not match"), "unexpected error: {err}");
    }

    #[test]
    fn matches_sequential_for_uneven_partitions() {
        let input = ramp(13, 7);
        let expected = sequential(&input);
        for threads in [1, 2, 3, 4, 5, 8, 13, 16] {
            let mut output = input.zeros_like();
            ParallelDispatcher::new(threads)
                .expect("dispatcher")
                .dispatch(&input, &mut output)
                .expect("dispatch");
            assert_eq!(output, expected, "threads={threads}");
        }
    }

    #[test]
    fn overwrites_previous_output() {
        let input = ramp(6, 5);
        let mut output = SampleBuffer::new(6, 5, vec![77; 30]).expect("buffer");
        ParallelDispatcher::new(4)
            .expect("dispatcher")
            .dispatch(&input, &mut output)
            .expect("dispatch");
        assert_eq!(output, sequential(&input));
    }

    #[test]
    fn exposes_partition() {
        let dispatcher = ParallelDispatcher::new(3).expect("dispatcher");
        assert_eq!(dispatcher.thread_count(), 3);
        assert_eq!(dispatcher.kernels(), &GradientKernels::SOBEL);
        let ranges = dispatcher.ranges(10).expect("ranges");
        assert_eq!(ranges.last(), Some(&RowRange::new(6, 10)));
    }
}
