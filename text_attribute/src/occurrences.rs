// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pattern search over a rich text and per-match editing.
//!
//! Searching works on characters (grapheme clusters): a pattern never matches part of a
//! character. [`RichText::occurrences`] is a read-only lazy search, and
//! [`RichText::enumerate_occurrences`] hands each match to a callback as an editable slice
//! and splices the result back in before looking for the next one.

use core::ops::Range;

use attributed_text::TextRange;
use bitflags::bitflags;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Attribute, Error, RichText, Style};

bitflags! {
    /// Options for pattern search.
    ///
    /// Each search step follows the usual host search semantics; the enumeration then resumes
    /// at the end of the match it found.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SearchOptions: u8 {
        /// Compare characters after lowercase folding.
        const CASE_INSENSITIVE = 1 << 0;
        /// Only match at the start of the search window (at its end with `BACKWARDS`).
        const ANCHORED = 1 << 1;
        /// Take the last match in the search window rather than the first.
        const BACKWARDS = 1 << 2;
    }
}

/// Lazy iterator over the character ranges where a pattern occurs.
///
/// Returned by [`RichText::occurrences`]. The text is captured when the iterator is created,
/// so matches are reported against that snapshot.
#[derive(Clone, Debug)]
pub struct Occurrences {
    /// Folded characters of the searched scope.
    haystack: Vec<String>,
    /// Byte offset of each character of the scope, plus the scope end.
    offsets: Vec<usize>,
    /// Character position of the scope start.
    first_char: usize,
    needle: Vec<String>,
    options: SearchOptions,
    /// Index into `haystack` where the next search window starts.
    cursor: usize,
}

impl Occurrences {
    pub(crate) fn new(text: &RichText, pattern: &str, options: SearchOptions, scope: TextRange) -> Self {
        let fold = |g: &str| {
            if options.contains(SearchOptions::CASE_INSENSITIVE) {
                g.to_lowercase()
            } else {
                g.to_owned()
            }
        };
        let source = &text.as_str()[scope.as_range()];
        let mut haystack = Vec::new();
        let mut offsets = Vec::new();
        for (offset, grapheme) in source.grapheme_indices(true) {
            offsets.push(scope.start() + offset);
            haystack.push(fold(grapheme));
        }
        offsets.push(scope.end());

        Self {
            haystack,
            offsets,
            first_char: text.inner.graphemes().char_index(scope.start()),
            needle: pattern.graphemes(true).map(fold).collect(),
            options,
            cursor: 0,
        }
    }

    /// Finds the next match, as indices into `haystack`, and advances past it.
    fn next_match(&mut self) -> Option<Range<usize>> {
        let width = self.needle.len();
        let end = self.haystack.len();
        if width == 0 || self.cursor >= end || end - self.cursor < width {
            self.cursor = end;
            return None;
        }
        let last_start = end - width;
        let matches_at = |at: usize| self.haystack[at..at + width] == self.needle[..];

        let found = match (
            self.options.contains(SearchOptions::ANCHORED),
            self.options.contains(SearchOptions::BACKWARDS),
        ) {
            (true, false) => Some(self.cursor).filter(|&at| matches_at(at)),
            (true, true) => Some(last_start).filter(|&at| matches_at(at)),
            (false, false) => (self.cursor..=last_start).find(|&at| matches_at(at)),
            (false, true) => (self.cursor..=last_start).rev().find(|&at| matches_at(at)),
        };
        match found {
            Some(start) => {
                self.cursor = start + width;
                Some(start..start + width)
            }
            None => {
                self.cursor = end;
                None
            }
        }
    }

    /// The next match as a byte range of the snapshot.
    pub(crate) fn next_bytes(&mut self) -> Option<Range<usize>> {
        let found = self.next_match()?;
        Some(self.offsets[found.start]..self.offsets[found.end])
    }
}

impl Iterator for Occurrences {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.next_match()?;
        Some(self.first_char + found.start..self.first_char + found.end)
    }
}

/// One match handed to the callback of [`RichText::enumerate_occurrences`].
///
/// The slice may be edited freely, including changing its length. It replaces the matched
/// span once the callback returns.
#[derive(Debug)]
pub struct Occurrence {
    range: Range<usize>,
    text: RichText,
}

impl Occurrence {
    /// The character range of the match in the text as it is now, after earlier edits.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The matched span, text and attributes.
    pub fn text(&self) -> &RichText {
        &self.text
    }

    /// Mutable access to the matched span.
    pub fn text_mut(&mut self) -> &mut RichText {
        &mut self.text
    }
}

impl RichText {
    /// Lazily finds `pattern` within a character range (`None` for the whole text).
    ///
    /// Matches do not overlap; each search resumes where the previous match ended.
    pub fn occurrences(
        &self,
        pattern: &str,
        options: SearchOptions,
        range: Option<Range<usize>>,
    ) -> Result<Occurrences, Error> {
        let scope = self.resolve(range)?;
        Ok(Occurrences::new(self, pattern, options, scope))
    }

    /// Calls `f` on every occurrence of `pattern` in a character range.
    ///
    /// Each occurrence carries a copy of the matched span; after `f` returns the copy is
    /// written back over the span. If the copy changed length, the positions of the
    /// remaining matches move accordingly, so edits never see stale offsets.
    pub fn enumerate_occurrences<F>(
        &mut self,
        pattern: &str,
        options: SearchOptions,
        range: Option<Range<usize>>,
        mut f: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&mut Occurrence),
    {
        let scope = self.resolve(range)?;
        let mut matches = Occurrences::new(self, pattern, options, scope);
        let mut delta: isize = 0;

        while let Some(found) = matches.next_bytes() {
            let start = found.start.saturating_add_signed(delta);
            let end = found.end.saturating_add_signed(delta);
            let span = match self.inner.byte_range(start..end) {
                Ok(span) => span,
                Err(err) => {
                    // An earlier edit merged characters across this match.
                    log::debug!("skipping occurrence at {start}..{end}: {err}");
                    continue;
                }
            };

            let mut occurrence = Occurrence {
                range: self.char_range(span),
                text: Self {
                    inner: self.inner.slice(span),
                },
            };
            log::trace!("occurrence of {pattern:?} at {:?}", occurrence.range);
            f(&mut occurrence);

            let new_len = occurrence.text.inner.len();
            self.inner.replace_range(span, &occurrence.text.inner);
            delta += new_len as isize - span.len() as isize;
        }
        Ok(())
    }

    /// Applies `attributes` to every occurrence of `pattern`.
    pub fn add_attributes_to_occurrences(
        &mut self,
        attributes: &[Attribute],
        pattern: &str,
        options: SearchOptions,
        range: Option<Range<usize>>,
    ) -> Result<(), Error> {
        if attributes.is_empty() {
            return self.resolve(range).map(drop);
        }
        self.enumerate_occurrences(pattern, options, range, |occurrence| {
            let text = occurrence.text_mut();
            let whole = TextRange::full(text.inner.graphemes());
            text.apply_resolved(attributes, whole);
        })
    }

    /// Removes `styles` from every occurrence of `pattern`.
    pub fn remove_attributes_from_occurrences(
        &mut self,
        styles: &[Style],
        pattern: &str,
        options: SearchOptions,
        range: Option<Range<usize>>,
    ) -> Result<(), Error> {
        if styles.is_empty() {
            return self.resolve(range).map(drop);
        }
        self.enumerate_occurrences(pattern, options, range, |occurrence| {
            let text = occurrence.text_mut();
            let whole = TextRange::full(text.inner.graphemes());
            text.retract_resolved(styles, whole);
        })
    }

    /// Returns a copy with `attributes` applied to every occurrence of `pattern`.
    pub fn adding_attributes_to_occurrences(
        &self,
        attributes: &[Attribute],
        pattern: &str,
        options: SearchOptions,
        range: Option<Range<usize>>,
    ) -> Result<Self, Error> {
        let mut text = self.clone();
        text.add_attributes_to_occurrences(attributes, pattern, options, range)?;
        Ok(text)
    }

    /// Returns a copy with `styles` removed from every occurrence of `pattern`.
    pub fn removing_attributes_from_occurrences(
        &self,
        styles: &[Style],
        pattern: &str,
        options: SearchOptions,
        range: Option<Range<usize>>,
    ) -> Result<Self, Error> {
        let mut text = self.clone();
        text.remove_attributes_from_occurrences(styles, pattern, options, range)?;
        Ok(text)
    }
}
