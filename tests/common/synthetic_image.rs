#![allow(dead_code)]

use sobel_bench::SampleBuffer;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(rows: usize, cols: usize, cell: usize) -> SampleBuffer {
    assert!(rows > 0 && cols > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; rows * cols];
    for y in 0..rows {
        for x in 0..cols {
            let sum = x / cell + y / cell;
            img[y * cols + x] = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    SampleBuffer::new(rows, cols, img).expect("checkerboard buffer")
}

/// Columns `< split` are `low`, the rest `high`.
pub fn vertical_step(rows: usize, cols: usize, split: usize, low: u8, high: u8) -> SampleBuffer {
    let data = (0..rows * cols)
        .map(|i| if i % cols < split { low } else { high })
        .collect();
    SampleBuffer::new(rows, cols, data).expect("step buffer")
}

pub fn uniform(rows: usize, cols: usize, value: u8) -> SampleBuffer {
    SampleBuffer::new(rows, cols, vec![value; rows * cols]).expect("uniform buffer")
}

/// Deterministic pseudo-random texture (xorshift), useful for catching
/// partition-dependent differences.
pub fn noise(rows: usize, cols: usize, seed: u32) -> SampleBuffer {
    let mut state = seed.max(1);
    let data = (0..rows * cols)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    SampleBuffer::new(rows, cols, data).expect("noise buffer")
}
