use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Thread counts swept by the benchmark, in report order.
pub const THREAD_COUNTS: [usize; 6] = [1, 2, 4, 8, 16, 32];
pub const DEFAULT_INPUT: &str = "goslov.jpg";
pub const DEFAULT_OUTPUT: &str = "sobel_output.jpg";

/// Everything the benchmark needs besides the pixels. The binary always runs
/// with `BenchmarkConfig::default()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Image decoded to grayscale before the sweep.
    pub input: PathBuf,
    /// Destination of the output from the last configuration.
    pub output: PathBuf,
    pub thread_counts: Vec<usize>,
    /// Optional JSON dump of the sweep timings.
    pub report_json: Option<PathBuf>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            thread_counts: THREAD_COUNTS.to_vec(),
            report_json: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.thread_counts.is_empty() {
            return Err("Thread count sweep is empty".to_string());
        }
        if let Some(pos) = self.thread_counts.iter().position(|&n| n == 0) {
            return Err(format!("Thread count at position {pos} must be at least 1"));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<BenchmarkConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: BenchmarkConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    config.validate()?;
    Ok(config)
}
