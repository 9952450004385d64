//! Edge responses: the fixed Sobel kernel pair and per-pixel gradient
//! magnitude with truncated (skip out-of-bounds) border handling.

pub mod grad;

pub use grad::{gradient_at, gradient_magnitude, magnitude_u8, GradientKernels, Kernel3};
