// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;
use core::ops::Range;

use crate::run_list::RunList;
use crate::{AttributeSegments, Error, GraphemeIndex, TextRange};

/// A string with keyed attribute runs applied to ranges within it.
///
/// Each key `K` has its own run list; writing a key never disturbs another key. Two values
/// compare equal when they have the same text and, for every key, the same runs. Since runs
/// are kept coalesced, that is the same as "every character carries the same attributes".
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText<K, V> {
    text: String,
    graphemes: GraphemeIndex,
    attributes: BTreeMap<K, RunList<V>>,
}

impl<K: Copy + Ord, V: Clone + PartialEq> Default for AttributedText<K, V> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<K: Copy + Ord, V: Clone + PartialEq> AttributedText<K, V> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let graphemes = GraphemeIndex::new(&text);
        Self {
            text,
            graphemes,
            attributes: BTreeMap::new(),
        }
    }

    /// Borrow the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The grapheme cluster boundaries of the text.
    #[inline]
    pub fn graphemes(&self) -> &GraphemeIndex {
        &self.graphemes
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the number of characters (grapheme clusters).
    #[inline]
    pub fn char_len(&self) -> usize {
        self.graphemes.char_len()
    }

    /// Resolves a character range into a byte [`TextRange`].
    ///
    /// `None` resolves to the whole text.
    pub fn resolve(&self, range: Option<Range<usize>>) -> Result<TextRange, Error> {
        match range {
            Some(range) => TextRange::from_chars(&self.graphemes, range),
            None => Ok(TextRange::full(&self.graphemes)),
        }
    }

    /// Validates a byte `range` against this text and returns a [`TextRange`].
    #[inline]
    pub fn byte_range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.graphemes, range)
    }

    /// Converts a byte range back into character positions.
    #[inline]
    pub fn char_range(&self, range: TextRange) -> Range<usize> {
        self.graphemes.char_index(range.start())..self.graphemes.char_index(range.end())
    }

    /// Converts a byte range into UTF-16 code unit offsets.
    pub fn utf16_range(&self, range: TextRange) -> Range<usize> {
        let start = self.text[..range.start()].encode_utf16().count();
        let len = self.text[range.as_range()].encode_utf16().count();
        start..start + len
    }

    /// Overwrites the value of `key` over `range`.
    pub fn set_attribute(&mut self, key: K, range: TextRange, value: V) {
        if range.is_empty() {
            return;
        }
        self.attributes
            .entry(key)
            .or_default()
            .set(range.as_range(), value);
    }

    /// Removes any value of `key` from `range`.
    pub fn remove_attribute(&mut self, key: K, range: TextRange) {
        if let btree_map::Entry::Occupied(mut entry) = self.attributes.entry(key) {
            entry.get_mut().clear(range.as_range());
            if entry.get().is_empty() {
                entry.remove();
            }
        }
    }

    /// Returns the value of `key` at byte `index` together with its full run.
    pub fn attribute_at(&self, key: K, index: usize) -> Option<(Range<usize>, &V)> {
        self.attributes.get(&key)?.get(index)
    }

    /// Iterate over the runs of `key` that overlap `range`, clipped to `range`.
    ///
    /// Gaps (bytes where `key` holds no value) are skipped.
    pub fn attribute_runs(&self, key: K, range: TextRange) -> AttributeRuns<'_, V> {
        let runs = self
            .attributes
            .get(&key)
            .map(RunList::as_slice)
            .unwrap_or_default();
        let first = runs.partition_point(|(r, _)| r.end <= range.start());
        AttributeRuns {
            runs: &runs[first..],
            range: range.as_range(),
        }
    }

    /// Iterate over the keys that carry at least one run.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.attributes.keys().copied()
    }

    /// Returns the number of runs across all keys.
    pub fn attributes_len(&self) -> usize {
        self.attributes.values().map(RunList::len).sum()
    }

    /// Remove all attribute runs.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Split the text into maximal segments over which no key changes value.
    pub fn segments(&self) -> AttributeSegments<'_, K, V> {
        AttributeSegments::new(self)
    }

    /// Copies `range` (text and attributes) into a new value whose offsets start at zero.
    pub fn slice(&self, range: TextRange) -> Self {
        let text = String::from(&self.text[range.as_range()]);
        let attributes = self
            .attributes
            .iter()
            .map(|(key, runs)| (*key, runs.slice(range.as_range())))
            .filter(|(_, runs)| !runs.is_empty())
            .collect();
        Self {
            graphemes: GraphemeIndex::new(&text),
            text,
            attributes,
        }
    }

    /// Replaces `range` with `replacement`, text and attributes both.
    ///
    /// Attributes inside `range` are discarded in favor of the replacement's; runs after the
    /// range move by the difference in length.
    pub fn replace_range(&mut self, range: TextRange, replacement: &Self) {
        self.text
            .replace_range(range.as_range(), replacement.as_str());
        self.graphemes = GraphemeIndex::new(&self.text);

        let empty = RunList::default();
        let mut keys: alloc::vec::Vec<K> = self.attributes.keys().copied().collect();
        keys.extend(replacement.attributes.keys().copied());
        keys.sort_unstable();
        keys.dedup();
        for key in keys {
            let incoming = replacement.attributes.get(&key).unwrap_or(&empty);
            let runs = self.attributes.entry(key).or_default();
            runs.splice(range.as_range(), replacement.len(), incoming);
            if runs.is_empty() {
                self.attributes.remove(&key);
            }
        }
    }

    pub(crate) fn run_lists(&self) -> impl Iterator<Item = (K, &[(Range<usize>, V)])> {
        self.attributes
            .iter()
            .map(|(key, runs)| (*key, runs.as_slice()))
    }
}

/// Iterator over the runs of one key within a range, returned by
/// [`AttributedText::attribute_runs`].
#[derive(Clone, Debug)]
pub struct AttributeRuns<'a, V> {
    runs: &'a [(Range<usize>, V)],
    range: Range<usize>,
}

impl<'a, V> Iterator for AttributeRuns<'a, V> {
    type Item = (Range<usize>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let ((run, value), rest) = self.runs.split_first()?;
        if run.start >= self.range.end {
            self.runs = &[];
            return None;
        }
        self.runs = rest;
        Some((
            run.start.max(self.range.start)..run.end.min(self.range.end),
            value,
        ))
    }
}
