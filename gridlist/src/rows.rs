//! Row packing: partition a run of items into rows of at most N columns.

use std::ops::Range;

/// Iterator over the index ranges of consecutive rows.
///
/// Produces exactly `ceil(len / columns)` ranges; every index appears once,
/// in order. The last row holds the remainder.
#[derive(Debug, Clone)]
pub struct RowRanges {
    next: usize,
    len: usize,
    columns: usize,
}

/// Pack `len` items into rows of `columns` items.
///
/// A column count of zero is treated as one so packing always terminates.
pub fn row_ranges(len: usize, columns: usize) -> RowRanges {
    RowRanges {
        next: 0,
        len,
        columns: columns.max(1),
    }
}

/// Number of rows needed for `len` items.
pub fn row_count(len: usize, columns: usize) -> usize {
    len.div_ceil(columns.max(1))
}

impl Iterator for RowRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.next >= self.len {
            return None;
        }
        let start = self.next;
        let end = (start + self.columns).min(self.len);
        self.next = end;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = row_count(self.len - self.next, self.columns);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowRanges {}
