//! Sobel gradient magnitude for a single pixel of an 8-bit image.
//!
//! - Correlates a 3×3 kernel pair (`X` and `Y`) centred on the pixel.
//! - Neighbours outside the image are skipped, not clamped or reflected, so
//!   border responses are truncated (implicit zero padding).
//! - Outputs `round(sqrt(gx^2 + gy^2))` saturated to `u8`.
//!
//! The computation only reads the input view, so any number of threads can
//! evaluate disjoint (or overlapping) pixels concurrently.
use crate::image::{ImageU8, ImageView};

pub type Kernel3 = [[i32; 3]; 3];

/// Horizontal kernel: responds to brightness changes along a row.
pub const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical kernel: responds to brightness changes along a column.
pub const SOBEL_KERNEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Immutable kernel pair passed to workers by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientKernels {
    pub x: Kernel3,
    pub y: Kernel3,
}

impl GradientKernels {
    pub const SOBEL: GradientKernels = GradientKernels {
        x: SOBEL_KERNEL_X,
        y: SOBEL_KERNEL_Y,
    };
}

impl Default for GradientKernels {
    fn default() -> Self {
        Self::SOBEL
    }
}

/// Raw `(gx, gy)` responses at (`row`, `col`).
pub fn gradient_at(
    input: &ImageU8<'_>,
    kernels: &GradientKernels,
    row: usize,
    col: usize,
) -> (i32, i32) {
    let rows = input.height();
    let cols = input.width();
    let mut gx = 0i32;
    let mut gy = 0i32;

    for (ki, kx_row) in kernels.x.iter().enumerate() {
        // ki - 1 is the row offset; skip rows that fall outside [0, rows)
        let Some(r) = (row + ki).checked_sub(1).filter(|&r| r < rows) else {
            continue;
        };
        let samples = input.row(r);
        let ky_row = &kernels.y[ki];
        for kj in 0..3 {
            let Some(c) = (col + kj).checked_sub(1).filter(|&c| c < cols) else {
                continue;
            };
            let pixel = i32::from(samples[c]);
            gx += pixel * kx_row[kj];
            gy += pixel * ky_row[kj];
        }
    }

    (gx, gy)
}

/// Combine gradient components into a saturated 8-bit magnitude.
#[inline]
pub fn magnitude_u8(gx: i32, gy: i32) -> u8 {
    let sq = f64::from(gx) * f64::from(gx) + f64::from(gy) * f64::from(gy);
    sq.sqrt().round().min(255.0) as u8
}

/// Gradient magnitude at (`row`, `col`), saturated to `[0, 255]`.
#[inline]
pub fn gradient_magnitude(
    input: &ImageU8<'_>,
    kernels: &GradientKernels,
    row: usize,
    col: usize,
) -> u8 {
    let (gx, gy) = gradient_at(input, kernels, row, col);
    magnitude_u8(gx, gy)
}
