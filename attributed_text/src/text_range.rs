// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, GraphemeIndex, Unit};

/// A validated byte range into the backing string of an attributed text.
///
/// This is a convenience wrapper around `Range<usize>` that carries invariants useful for
/// attributed text APIs:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on grapheme cluster boundaries
///
/// Ranges are usually produced from character positions with [`TextRange::from_chars`] (or
/// [`AttributedText::resolve`](crate::AttributedText::resolve)), which is the only place where
/// character and byte units meet.
///
/// ## Important
///
/// `TextRange` does not encode which specific text it was validated against. It is the caller's
/// responsibility to only reuse a `TextRange` with the same text content it was validated for.
///
/// ## Example
///
/// ```
/// use attributed_text::{GraphemeIndex, TextRange};
///
/// let index = GraphemeIndex::new("añb");
/// let range = TextRange::from_chars(&index, 1..2).unwrap();
/// assert_eq!(range.as_range(), 1..3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for a byte `range`.
    #[inline]
    pub fn new(graphemes: &GraphemeIndex, range: Range<usize>) -> Result<Self, Error> {
        validate_range(graphemes, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// Converts a range of character (grapheme cluster) positions into a byte range.
    ///
    /// Fails if `start > end` or if either endpoint lies past the last character.
    pub fn from_chars(graphemes: &GraphemeIndex, range: Range<usize>) -> Result<Self, Error> {
        let char_len = graphemes.char_len();
        if range.start > range.end {
            return Err(Error::invalid_range(
                Unit::Chars,
                range.start,
                range.end,
                char_len,
            ));
        }
        match (
            graphemes.byte_offset(range.start),
            graphemes.byte_offset(range.end),
        ) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(Error::invalid_bounds(
                Unit::Chars,
                range.start,
                range.end,
                char_len,
            )),
        }
    }

    /// The full extent of a text with the given index.
    #[inline]
    pub fn full(graphemes: &GraphemeIndex) -> Self {
        Self {
            start: 0,
            end: graphemes.byte_len(),
        }
    }

    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for internal callers that already maintain range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The length of the range in bytes.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

#[inline]
pub(crate) fn validate_range(graphemes: &GraphemeIndex, range: &Range<usize>) -> Result<(), Error> {
    let text_len = graphemes.byte_len();
    if range.start > range.end {
        return Err(Error::invalid_range(
            Unit::Bytes,
            range.start,
            range.end,
            text_len,
        ));
    }
    if range.start > text_len || range.end > text_len {
        return Err(Error::invalid_bounds(
            Unit::Bytes,
            range.start,
            range.end,
            text_len,
        ));
    }
    if !graphemes.is_boundary(range.start) {
        return Err(Error::not_on_char_boundary(
            graphemes,
            range.start,
            range.end,
            Endpoint::Start,
            range.start,
        ));
    }
    if !graphemes.is_boundary(range.end) {
        return Err(Error::not_on_char_boundary(
            graphemes,
            range.start,
            range.end,
            Endpoint::End,
            range.end,
        ));
    }
    Ok(())
}
