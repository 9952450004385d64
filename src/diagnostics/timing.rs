use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock time of one dispatch at a given thread count.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialTiming {
    pub thread_count: usize,
    pub elapsed_ms: f64,
}

impl TrialTiming {
    pub fn new(thread_count: usize, elapsed_ms: f64) -> Self {
        Self {
            thread_count,
            elapsed_ms,
        }
    }
}

impl fmt::Display for TrialTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Threads: {}, Time: {:.3} ms",
            self.thread_count, self.elapsed_ms
        )
    }
}

/// Timings for a full sweep, one entry per configuration in sweep order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub image_rows: usize,
    pub image_cols: usize,
    pub trials: Vec<TrialTiming>,
}

impl SweepReport {
    pub fn new(image_rows: usize, image_cols: usize) -> Self {
        Self {
            image_rows,
            image_cols,
            trials: Vec::new(),
        }
    }

    pub fn push(&mut self, thread_count: usize, elapsed_ms: f64) {
        self.trials.push(TrialTiming::new(thread_count, elapsed_ms));
    }

    pub fn total_ms(&self) -> f64 {
        self.trials.iter().map(|t| t.elapsed_ms).sum()
    }

    /// Console report, one line per trial.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.trials.iter().map(ToString::to_string)
    }
}
