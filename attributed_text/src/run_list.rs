// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sorted, non-overlapping value runs for a single attribute key.

use alloc::vec::Vec;
use core::ops::Range;

/// The runs of one attribute key.
///
/// Invariants, restored by every mutating method:
///
/// - runs are sorted by start and do not overlap
/// - no run is empty
/// - two touching runs never hold equal values (they are coalesced)
///
/// Bytes not covered by any run carry no value for the key.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RunList<V> {
    runs: Vec<(Range<usize>, V)>,
}

impl<V> Default for RunList<V> {
    fn default() -> Self {
        Self { runs: Vec::new() }
    }
}

impl<V: Clone + PartialEq> RunList<V> {
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[(Range<usize>, V)] {
        &self.runs
    }

    /// Index of the first run that ends after `offset`.
    #[inline]
    fn first_ending_after(&self, offset: usize) -> usize {
        self.runs.partition_point(|(r, _)| r.end <= offset)
    }

    /// Returns the run containing byte `offset`, if any.
    pub(crate) fn get(&self, offset: usize) -> Option<(Range<usize>, &V)> {
        let ix = self.first_ending_after(offset);
        let (range, value) = self.runs.get(ix)?;
        (range.start <= offset).then(|| (range.clone(), value))
    }

    /// Returns the runs overlapping `range`, each clipped to `range`.
    pub(crate) fn iter_in(&self, range: Range<usize>) -> impl Iterator<Item = (Range<usize>, &V)> {
        let (start, end) = (range.start, range.end);
        let first = self.first_ending_after(start);
        self.runs[first..]
            .iter()
            .take_while(move |(r, _)| r.start < end)
            .map(move |(r, v)| (r.start.max(start)..r.end.min(end), v))
    }

    /// Overwrites `range` with `value`.
    pub(crate) fn set(&mut self, range: Range<usize>, value: V) {
        if range.is_empty() {
            return;
        }
        self.clear(range.clone());
        let ix = self.first_ending_after(range.start);
        self.runs.insert(ix, (range, value));
        self.coalesce_around(ix);
    }

    /// Removes any value from `range`, splitting runs that straddle its ends.
    pub(crate) fn clear(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let first = self.first_ending_after(range.start);
        let last = first
            + self.runs[first..]
                .iter()
                .take_while(|(r, _)| r.start < range.end)
                .count();
        if first == last {
            return;
        }
        let mut keep: Vec<(Range<usize>, V)> = Vec::with_capacity(2);
        let head = &self.runs[first];
        if head.0.start < range.start {
            keep.push((head.0.start..range.start, head.1.clone()));
        }
        let tail = &self.runs[last - 1];
        if tail.0.end > range.end {
            keep.push((range.end..tail.0.end, tail.1.clone()));
        }
        self.runs.splice(first..last, keep);
    }

    /// Copies the runs inside `range`, rebased so that `range.start` becomes `0`.
    pub(crate) fn slice(&self, range: Range<usize>) -> Self {
        let base = range.start;
        Self {
            runs: self
                .iter_in(range)
                .map(|(r, v)| (r.start - base..r.end - base, v.clone()))
                .collect(),
        }
    }

    /// Replaces the bytes in `range` with `replacement_len` bytes carrying `replacement`'s runs.
    ///
    /// Runs before the range keep their offsets; runs after it move by the length difference.
    pub(crate) fn splice(&mut self, range: Range<usize>, replacement_len: usize, replacement: &Self) {
        let mut out = Vec::with_capacity(self.runs.len() + replacement.runs.len());
        let mut inserted = false;
        let shifted_start = range.start + replacement_len;
        for (r, v) in self.runs.drain(..) {
            if r.start < range.start {
                out.push((r.start..r.end.min(range.start), v.clone()));
            }
            if r.end > range.end {
                if !inserted {
                    extend_shifted(&mut out, &replacement.runs, range.start);
                    inserted = true;
                }
                let start = r.start.max(range.end) - range.end + shifted_start;
                let end = r.end - range.end + shifted_start;
                out.push((start..end, v));
            }
        }
        if !inserted {
            extend_shifted(&mut out, &replacement.runs, range.start);
        }
        self.runs = out;
        self.normalize();
    }

    fn coalesce_around(&mut self, ix: usize) {
        if ix + 1 < self.runs.len() {
            let (left, right) = self.runs.split_at_mut(ix + 1);
            let (cur, next) = (&mut left[ix], &right[0]);
            if cur.0.end == next.0.start && cur.1 == next.1 {
                cur.0.end = next.0.end;
                self.runs.remove(ix + 1);
            }
        }
        if ix > 0 {
            let (left, right) = self.runs.split_at_mut(ix);
            let (prev, cur) = (&mut left[ix - 1], &right[0]);
            if prev.0.end == cur.0.start && prev.1 == cur.1 {
                prev.0.end = cur.0.end;
                self.runs.remove(ix);
            }
        }
    }

    /// Drops empty runs and merges touching runs with equal values.
    fn normalize(&mut self) {
        let mut out: Vec<(Range<usize>, V)> = Vec::with_capacity(self.runs.len());
        for (r, v) in self.runs.drain(..) {
            if r.is_empty() {
                continue;
            }
            match out.last_mut() {
                Some((last, last_value)) if last.end == r.start && *last_value == v => {
                    last.end = r.end;
                }
                _ => out.push((r, v)),
            }
        }
        self.runs = out;
    }
}

fn extend_shifted<V: Clone>(out: &mut Vec<(Range<usize>, V)>, runs: &[(Range<usize>, V)], by: usize) {
    out.extend(
        runs.iter()
            .map(|(r, v)| (r.start + by..r.end + by, v.clone())),
    );
}

#[cfg(test)]
mod tests {
    use super::RunList;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::ops::Range;

    fn runs(list: &RunList<u8>) -> Vec<(Range<usize>, u8)> {
        list.as_slice().to_vec()
    }

    #[test]
    fn set_overwrites_and_splits() {
        let mut list = RunList::default();
        list.set(0..10, 1);
        list.set(3..5, 2);
        assert_eq!(runs(&list), vec![(0..3, 1), (3..5, 2), (5..10, 1)]);
    }

    #[test]
    fn set_coalesces_equal_neighbors() {
        let mut list = RunList::default();
        list.set(0..3, 1);
        list.set(5..8, 1);
        list.set(3..5, 1);
        assert_eq!(runs(&list), vec![(0..8, 1)]);
    }

    #[test]
    fn clear_only_touches_range() {
        let mut list = RunList::default();
        list.set(0..4, 1);
        list.set(6..10, 2);
        list.clear(2..8);
        assert_eq!(runs(&list), vec![(0..2, 1), (8..10, 2)]);
        list.clear(0..10);
        assert!(list.is_empty());
    }

    #[test]
    fn get_and_iter_in() {
        let mut list = RunList::default();
        list.set(2..4, 7);
        assert_eq!(list.get(1), None);
        assert_eq!(list.get(2), Some((2..4, &7)));
        assert_eq!(list.get(4), None);
        let clipped: Vec<_> = list.iter_in(3..10).collect();
        assert_eq!(clipped, vec![(3..4, &7)]);
    }

    #[test]
    fn splice_grows_and_shifts() {
        let mut list = RunList::default();
        list.set(0..2, 1);
        list.set(4..6, 2);
        list.set(8..10, 3);

        let mut replacement = RunList::default();
        replacement.set(0..5, 9);
        // Replace the 2-byte run at 4..6 with 5 bytes.
        list.splice(4..6, 5, &replacement);
        assert_eq!(runs(&list), vec![(0..2, 1), (4..9, 9), (11..13, 3)]);
    }

    #[test]
    fn splice_inside_run_splits_it() {
        let mut list = RunList::default();
        list.set(0..10, 1);
        list.splice(4..6, 1, &RunList::default());
        assert_eq!(runs(&list), vec![(0..4, 1), (5..9, 1)]);

        let mut same = RunList::default();
        same.set(0..1, 1);
        list.splice(4..5, 1, &same);
        assert_eq!(runs(&list), vec![(0..9, 1)]);
    }

    #[test]
    fn slice_rebases() {
        let mut list = RunList::default();
        list.set(2..6, 1);
        list.set(6..9, 2);
        let slice = list.slice(4..8);
        assert_eq!(runs(&slice), vec![(0..2, 1), (2..4, 2)]);
        assert_eq!(list.len(), 2);
    }
}
