//! Thread-count sweep over a fixed input image.
//!
//! For every configured thread count the driver builds a fresh
//! `ParallelDispatcher`, times one synchronous dispatch into the shared
//! output buffer and records the elapsed wall-clock time. The output buffer
//! is allocated once, zero-initialised, and overwritten in full by each
//! trial; after the sweep it holds the result of the last configuration.
use crate::config::BenchmarkConfig;
use crate::diagnostics::SweepReport;
use crate::edges::GradientKernels;
use crate::image::SampleBuffer;
use crate::parallel::ParallelDispatcher;
use log::info;
use std::time::Instant;

/// Result of a full sweep: the final output image and the timings.
#[derive(Clone, Debug)]
pub struct SweepOutcome {
    pub output: SampleBuffer,
    pub report: SweepReport,
}

#[derive(Clone, Debug)]
pub struct BenchmarkDriver {
    thread_counts: Vec<usize>,
    kernels: GradientKernels,
}

impl BenchmarkDriver {
    /// Driver for the sweep described by `config`, using the Sobel pair.
    pub fn new(config: &BenchmarkConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            thread_counts: config.thread_counts.clone(),
            kernels: GradientKernels::SOBEL,
        })
    }

    pub fn thread_counts(&self) -> &[usize] {
        &self.thread_counts
    }

    /// Run the sweep, allocating the output buffer.
    pub fn run(&self, input: &SampleBuffer) -> Result<SweepOutcome, String> {
        let mut output = input.zeros_like();
        let report = self.run_into(input, &mut output)?;
        Ok(SweepOutcome { output, report })
    }

    /// Run the sweep into a caller-provided buffer of the input's extents.
    pub fn run_into(
        &self,
        input: &SampleBuffer,
        output: &mut SampleBuffer,
    ) -> Result<SweepReport, String> {
        if input.is_empty() {
            return Err(format!(
                "Input image is empty ({}x{})",
                input.rows(),
                input.cols()
            ));
        }

        let mut report = SweepReport::new(input.rows(), input.cols());
        for &thread_count in &self.thread_counts {
            let dispatcher = ParallelDispatcher::with_kernels(thread_count, self.kernels)?;

            let start = Instant::now();
            dispatcher.dispatch(input, output)?;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            info!(
                "BenchmarkDriver: threads={} elapsed_ms={:.3}",
                thread_count, elapsed_ms
            );
            report.push(thread_count, elapsed_ms);
        }
        Ok(report)
    }
}
