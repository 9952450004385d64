use super::RowRange;
use crate::edges::{gradient_magnitude, GradientKernels};
use crate::image::{ImageU8, ImageView};

/// Computes gradient magnitudes for one contiguous band of rows.
///
/// The worker reads the shared input view and writes only into the output
/// slice it is handed, which covers exactly its rows. Ownership of that
/// `&mut [u8]` is what keeps concurrent workers from aliasing each other.
#[derive(Clone, Copy, Debug)]
pub struct RowRangeWorker<'a> {
    input: ImageU8<'a>,
    kernels: &'a GradientKernels,
    range: RowRange,
}

impl<'a> RowRangeWorker<'a> {
    pub fn new(input: ImageU8<'a>, kernels: &'a GradientKernels, range: RowRange) -> Self {
        debug_assert!(range.end <= input.height());
        Self {
            input,
            kernels,
            range,
        }
    }

    pub fn range(&self) -> RowRange {
        self.range
    }

    /// Fill `out` (`range.len() * cols` samples, row-major) with magnitudes.
    pub fn run(&self, out: &mut [u8]) {
        let cols = self.input.width();
        debug_assert_eq!(out.len(), self.range.len() * cols);
        if cols == 0 {
            return;
        }
        let rows = self.range.start..self.range.end;
        for (row, out_row) in rows.zip(out.chunks_exact_mut(cols)) {
            for (col, px) in out_row.iter_mut().enumerate() {
                *px = gradient_magnitude(&self.input, self.kernels, row, col);
            }
        }
    }
}
