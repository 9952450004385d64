//! Owned single-channel 8-bit sample grid in row-major layout.
//!
//! `SampleBuffer` is the storage handed between the decode/encode
//! collaborators and the convolution core. Rows are tightly packed
//! (stride == cols), so a contiguous run of rows maps onto a contiguous
//! sub-slice of the backing storage. The dispatcher relies on that to hand
//! each worker an exclusive `&mut [u8]` covering only its rows.
use super::{ImageU8, ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleBuffer {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl SampleBuffer {
    /// Wrap raw row-major samples. `data.len()` must equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self, String> {
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| format!("Sample buffer {rows}x{cols} overflows usize"))?;
        if data.len() != expected {
            return Err(format!(
                "Sample buffer {rows}x{cols} needs {expected} samples, got {}",
                data.len()
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Zero-initialised buffer of `rows × cols`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Zero-initialised buffer with the same extents as `self`.
    pub fn zeros_like(&self) -> Self {
        Self::zeros(self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline]
    pub fn same_shape(&self, other: &SampleBuffer) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Intensity at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: u8) {
        self.data[row * self.cols + col] = v;
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.cols,
            h: self.rows,
            stride: self.cols,
            data: &self.data,
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl ImageView for SampleBuffer {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.cols
    }
    #[inline]
    fn height(&self) -> usize {
        self.rows
    }
    #[inline]
    fn stride(&self) -> usize {
        self.cols
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.cols;
        &self.data[start..start + self.cols]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for SampleBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.cols;
        &mut self.data[start..start + self.cols]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        Some(&mut self.data)
    }
}
