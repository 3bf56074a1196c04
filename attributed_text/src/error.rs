// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::GraphemeIndex;

/// Rich error type for range resolution.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range, the length of the text in
/// the same [`Unit`] as the range, and, for boundary failures, the enclosing character span.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The unit `start`, `end` and `len` are expressed in.
    unit: Unit,

    /// The start index of the caller-provided range.
    start: usize,

    /// The end index (exclusive) of the caller-provided range.
    end: usize,

    /// The length of the underlying text at the time of failure.
    len: usize,

    /// Extra detail for boundary-related errors, when available.
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The unit of [`start`](Self::start), [`end`](Self::end) and [`len`](Self::len).
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The start index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The caller's range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The length of the underlying text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    pub(crate) fn invalid_bounds(unit: Unit, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            unit,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn invalid_range(unit: Unit, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            unit,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary(
        graphemes: &GraphemeIndex,
        start: usize,
        end: usize,
        which: Endpoint,
        index: usize,
    ) -> Self {
        let span = graphemes.enclosing(index).unwrap_or(index..index);
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            unit: Unit::Bytes,
            start,
            end,
            len: graphemes.byte_len(),
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start: span.start,
                char_end: span.end,
            }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let unit = match self.unit {
            Unit::Bytes => "bytes",
            Unit::Chars => "chars",
        };
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {} ({unit})",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::NotOnCharBoundary => {
                if let Some(b) = self.boundary {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "range {}..{}: {} index {} splits a character (char {}..{})",
                        self.start, self.end, which, b.index, b.char_start, b.char_end
                    )
                } else {
                    write!(f, "range {}..{} splits a character", self.start, self.end)
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was inside a grapheme cluster.
    NotOnCharBoundary,
}

impl ErrorKind {
    /// Returns `true` for the kinds that describe a range lying outside the text.
    ///
    /// Both [`ErrorKind::InvalidBounds`] and [`ErrorKind::InvalidRange`] qualify.
    pub fn is_out_of_bounds(self) -> bool {
        matches!(self, Self::InvalidBounds | Self::InvalidRange)
    }
}

/// The unit a range is expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    /// UTF-8 byte offsets into the backing string.
    Bytes,

    /// Extended grapheme cluster positions.
    Chars,
}

/// Identifies which endpoint of a range failed boundary validation.
///
/// This type is surfaced via [`BoundaryInfo`], which is attached to [`Error`]
/// for boundary-related failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an offending byte index that fell inside a character.
///
/// Returned by [`Error::boundary`] when the error kind is
/// [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing grapheme cluster.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing grapheme cluster.
    pub char_end: usize,
}
