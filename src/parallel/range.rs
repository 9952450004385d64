use serde::Serialize;

/// Half-open row interval `[start, end)` owned by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "row range start {start} > end {end}");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, row: usize) -> bool {
        (self.start..self.end).contains(&row)
    }
}

/// Split `[0, rows)` into `thread_count` contiguous ranges.
///
/// Every range gets `rows / thread_count` rows except the last, which runs to
/// `rows` and absorbs the remainder. When `thread_count > rows` all but the
/// last range are empty.
pub fn partition_rows(rows: usize, thread_count: usize) -> Result<Vec<RowRange>, String> {
    if thread_count == 0 {
        return Err("Thread count must be at least 1".to_string());
    }
    let rows_per_worker = rows / thread_count;
    let ranges = (0..thread_count)
        .map(|k| {
            let start = k * rows_per_worker;
            let end = if k == thread_count - 1 {
                rows
            } else {
                (k + 1) * rows_per_worker
            };
            RowRange::new(start, end)
        })
        .collect();
    Ok(ranges)
}
