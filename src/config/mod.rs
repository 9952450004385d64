pub mod bench;

pub use bench::{load_config, BenchmarkConfig, THREAD_COUNTS};
