// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-based segmentation for [`AttributedText`].
//!
//! Given an [`AttributedText`] whose keys each carry their own runs, this module produces
//! non-overlapping, contiguous segments over which no key changes value, and exposes the
//! key/value pairs active over each segment.

use alloc::vec::Vec;
use core::ops::Range;

use crate::AttributedText;

/// Iterator over contiguous attribute segments produced from an [`AttributedText`].
///
/// Each yielded item is a non-empty, non-overlapping byte range; together they cover the whole
/// text. The attributes for the yielded range are exposed through
/// [`AttributeSegments::active_attributes`].
///
/// # Examples
///
/// ```
/// use attributed_text::AttributedText;
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// enum Key {
///     Color,
///     Weight,
/// }
///
/// let mut text = AttributedText::<Key, u32>::new("hello");
/// text.set_attribute(Key::Color, text.resolve(Some(0..2)).unwrap(), 1);
/// text.set_attribute(Key::Weight, text.resolve(Some(1..5)).unwrap(), 700);
///
/// let mut segments = text.segments();
///
/// assert_eq!(segments.next(), Some(0..1));
/// assert_eq!(segments.active_attributes().get(Key::Color), Some(&1));
/// assert_eq!(segments.active_attributes().get(Key::Weight), None);
///
/// assert_eq!(segments.next(), Some(1..2));
/// assert_eq!(segments.active_attributes().len(), 2);
///
/// assert_eq!(segments.next(), Some(2..5));
/// let keys: Vec<_> = segments.active_attributes().iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec![Key::Weight]);
///
/// assert_eq!(segments.next(), None);
/// ```
#[derive(Debug)]
pub struct AttributeSegments<'a, K, V> {
    lists: Vec<(K, &'a [(Range<usize>, V)])>,
    boundaries: Vec<usize>,
    active: Vec<(K, &'a V)>,
    index: usize,
}

impl<'a, K: Copy + Ord, V: Clone + PartialEq> AttributeSegments<'a, K, V> {
    pub(crate) fn new(attributed: &'a AttributedText<K, V>) -> Self {
        let lists: Vec<_> = attributed.run_lists().collect();
        let run_count: usize = lists.iter().map(|(_, runs)| runs.len()).sum();

        let mut boundaries = Vec::with_capacity(2 + run_count.saturating_mul(2));
        boundaries.push(0);
        boundaries.push(attributed.len());
        for (_, runs) in &lists {
            for (range, _) in *runs {
                boundaries.push(range.start);
                boundaries.push(range.end);
            }
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        Self {
            active: Vec::with_capacity(lists.len()),
            lists,
            boundaries,
            index: 0,
        }
    }

    /// Returns the attributes active for the most recently yielded segment.
    ///
    /// Before the first successful [`Iterator::next`] call, this returns an empty view.
    /// After exhaustion (`next()` returns `None`), this also returns an empty view.
    pub fn active_attributes(&self) -> ActiveAttributes<'_, 'a, K, V> {
        ActiveAttributes {
            entries: &self.active,
        }
    }
}

impl<'a, K: Copy + Ord, V: Clone + PartialEq> Iterator for AttributeSegments<'a, K, V> {
    type Item = Range<usize>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.active.clear();
        if self.index + 1 >= self.boundaries.len() {
            return None;
        }
        let start = self.boundaries[self.index];
        let end = self.boundaries[self.index + 1];
        self.index += 1;
        debug_assert!(start < end, "boundaries are sorted + deduped");

        for (key, runs) in &mut self.lists {
            let mut list: &'a [(Range<usize>, V)] = *runs;
            while let Some(((range, _), rest)) = list.split_first() {
                if range.end > start {
                    break;
                }
                list = rest;
            }
            *runs = list;
            if let Some((range, value)) = list.first() {
                if range.start <= start {
                    self.active.push((*key, value));
                }
            }
        }
        Some(start..end)
    }
}

impl<K: Copy + Ord, V: Clone + PartialEq> ExactSizeIterator for AttributeSegments<'_, K, V> {
    fn len(&self) -> usize {
        // Remaining segments are remaining adjacent boundary pairs: [i, i + 1).
        self.boundaries.len().saturating_sub(self.index + 1)
    }
}

/// A view of the attributes active over a particular segment, in key order.
#[derive(Clone, Copy, Debug)]
pub struct ActiveAttributes<'s, 'a, K, V> {
    entries: &'s [(K, &'a V)],
}

impl<'s, 'a, K: Copy + Ord, V> ActiveAttributes<'s, 'a, K, V> {
    /// Returns the value `key` holds over the segment.
    pub fn get(&self, key: K) -> Option<&'a V> {
        self.entries
            .binary_search_by(|(k, _)| k.cmp(&key))
            .ok()
            .map(|ix| self.entries[ix].1)
    }

    /// Iterate over the active key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (K, &'a V)> + 's {
        self.entries.iter().copied()
    }

    /// Number of keys carrying a value over the segment.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key carries a value over the segment.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
