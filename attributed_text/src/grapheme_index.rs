// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Byte offsets of the extended grapheme cluster boundaries of a string.
///
/// The boundary list always starts at `0` and ends at the byte length of the text, so a text of
/// `n` characters has `n + 1` boundaries. An empty text has the single boundary `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphemeIndex {
    boundaries: Vec<usize>,
}

impl GraphemeIndex {
    /// Segments `text` into extended grapheme clusters.
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.grapheme_indices(true).map(|(ix, _)| ix).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// The number of characters (grapheme clusters).
    #[inline]
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// The length of the segmented text in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// All boundaries, including `0` and the byte length.
    #[inline]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Returns the byte offset at which character `char_index` starts.
    ///
    /// `char_len()` maps to the byte length. Anything beyond that is `None`.
    #[inline]
    pub fn byte_offset(&self, char_index: usize) -> Option<usize> {
        self.boundaries.get(char_index).copied()
    }

    /// Returns the index of the first character boundary at or after `byte_offset`.
    ///
    /// For an offset that lies on a boundary this is the exact character index.
    #[inline]
    pub fn char_index(&self, byte_offset: usize) -> usize {
        self.boundaries.partition_point(|&b| b < byte_offset)
    }

    /// Returns `true` if `byte_offset` falls between two characters (or at either end).
    #[inline]
    pub fn is_boundary(&self, byte_offset: usize) -> bool {
        self.boundaries.binary_search(&byte_offset).is_ok()
    }

    /// Returns the byte span of the character containing `byte_offset`.
    ///
    /// A boundary offset yields the empty span `byte_offset..byte_offset`; an offset past the end
    /// of the text yields `None`.
    pub fn enclosing(&self, byte_offset: usize) -> Option<Range<usize>> {
        if byte_offset > self.byte_len() {
            return None;
        }
        match self.boundaries.binary_search(&byte_offset) {
            Ok(_) => Some(byte_offset..byte_offset),
            // `ix` is at least 1 because boundary 0 is always present, and at most
            // `boundaries.len() - 1` because of the length check above.
            Err(ix) => Some(self.boundaries[ix - 1]..self.boundaries[ix]),
        }
    }
}
