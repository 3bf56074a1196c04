// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use attributed_text::{AttributeSegments, AttributedText, TextRange};

use crate::{AttributeKey, AttributeValue, Error, ParagraphStyle};

/// A string with typed formatting attributes over character ranges.
///
/// Positions are counted in characters (extended grapheme clusters), so a flag emoji or a
/// letter followed by a combining accent is one position. `None` in place of a range means
/// the whole text.
///
/// Editing goes through `&mut self` methods such as
/// [`add_attributes`](Self::add_attributes); each of them has a counterpart such as
/// [`adding_attributes`](Self::adding_attributes) that leaves the receiver untouched and
/// returns an edited copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    pub(crate) inner: AttributedText<AttributeKey, AttributeValue>,
}

impl RichText {
    /// Creates a rich text with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inner: AttributedText::new(text),
        }
    }

    /// The plain text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.char_len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The underlying byte-addressed storage.
    #[inline]
    pub fn as_attributed(&self) -> &AttributedText<AttributeKey, AttributeValue> {
        &self.inner
    }

    /// Resolves a character range into a validated byte range.
    ///
    /// Fails with [`Error::OutOfBounds`] if `start > end` or if either endpoint lies past the
    /// end of the text.
    pub fn resolve(&self, range: Option<Range<usize>>) -> Result<TextRange, Error> {
        Ok(self.inner.resolve(range)?)
    }

    /// Converts a resolved range back into character positions.
    #[inline]
    pub fn char_range(&self, range: TextRange) -> Range<usize> {
        self.inner.char_range(range)
    }

    /// The UTF-16 code unit range covering a character range.
    pub fn utf16_range(&self, range: Option<Range<usize>>) -> Result<Range<usize>, Error> {
        let range = self.resolve(range)?;
        Ok(self.inner.utf16_range(range))
    }

    /// The value of `key` at character `index`, with the character range of its run.
    pub fn attribute_at(
        &self,
        key: AttributeKey,
        index: usize,
    ) -> Option<(Range<usize>, &AttributeValue)> {
        let graphemes = self.inner.graphemes();
        let byte = graphemes.byte_offset(index)?;
        let (run, value) = self.inner.attribute_at(key, byte)?;
        Some((graphemes.char_index(run.start)..graphemes.char_index(run.end), value))
    }

    /// The runs of `key` overlapping a character range, clipped to it, in character positions.
    ///
    /// Characters where `key` holds no value are skipped.
    pub fn attribute_runs(
        &self,
        key: AttributeKey,
        range: Option<Range<usize>>,
    ) -> Result<impl Iterator<Item = (Range<usize>, &AttributeValue)> + '_, Error> {
        let range = self.resolve(range)?;
        let graphemes = self.inner.graphemes();
        Ok(self
            .inner
            .attribute_runs(key, range)
            .map(move |(run, value)| {
                (graphemes.char_index(run.start)..graphemes.char_index(run.end), value)
            }))
    }

    /// The paragraph style in effect at character `index`.
    ///
    /// Characters without a paragraph style use [`ParagraphStyle::default`].
    pub fn paragraph_style(&self, index: usize) -> ParagraphStyle {
        self.attribute_at(AttributeKey::ParagraphStyle, index)
            .and_then(|(_, value)| value.as_paragraph_style().copied())
            .unwrap_or_default()
    }

    /// Iterate over the keys that carry a value somewhere in the text.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.inner.keys()
    }

    /// Split the text into maximal byte segments over which no attribute changes.
    pub fn segments(&self) -> AttributeSegments<'_, AttributeKey, AttributeValue> {
        self.inner.segments()
    }

    /// Copies a character range, text and attributes, into a new value.
    pub fn slice(&self, range: Option<Range<usize>>) -> Result<Self, Error> {
        let range = self.resolve(range)?;
        Ok(Self {
            inner: self.inner.slice(range),
        })
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::RichText;
    use crate::values::TextAlignment;
    use crate::{AttributeKey, AttributeValue, ErrorKind, ParagraphStyle};

    #[test]
    fn positions_are_characters() {
        let text = RichText::from("e\u{301}🇫🇷!");
        assert_eq!(text.len(), 3);
        assert_eq!(text.resolve(Some(1..2)).unwrap().as_range(), 3..11);
        assert_eq!(text.utf16_range(Some(2..3)).unwrap(), 6..7);

        let err = text.resolve(Some(0..4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn attribute_at_reports_character_runs() {
        let mut text = RichText::from("añb");
        text.inner.set_attribute(
            AttributeKey::Kern,
            text.resolve(Some(1..3)).unwrap(),
            AttributeValue::Float(2.0),
        );

        assert_eq!(
            text.attribute_at(AttributeKey::Kern, 1),
            Some((1..3, &AttributeValue::Float(2.0)))
        );
        assert_eq!(text.attribute_at(AttributeKey::Kern, 0), None);
        assert_eq!(text.attribute_at(AttributeKey::Kern, 3), None);

        let runs: Vec<_> = text
            .attribute_runs(AttributeKey::Kern, Some(0..2))
            .unwrap()
            .collect();
        assert_eq!(runs, vec![(1..2, &AttributeValue::Float(2.0))]);
    }

    #[test]
    fn paragraph_style_defaults() {
        let mut text = RichText::from("ab");
        assert_eq!(text.paragraph_style(0), ParagraphStyle::default());

        let centered = ParagraphStyle {
            alignment: TextAlignment::Center,
            ..ParagraphStyle::default()
        };
        text.inner.set_attribute(
            AttributeKey::ParagraphStyle,
            text.resolve(None).unwrap(),
            AttributeValue::ParagraphStyle(centered),
        );
        assert_eq!(text.paragraph_style(1), centered);
    }

    #[test]
    fn segments_follow_attribute_changes() {
        let mut text = RichText::from("añb cd");
        text.inner.set_attribute(
            AttributeKey::Kern,
            text.resolve(Some(0..3)).unwrap(),
            AttributeValue::Float(1.0),
        );
        assert_eq!(text.as_attributed().attributes_len(), 1);
        assert_eq!(text.as_attributed().char_len(), 6);

        let mut segments = text.segments();
        assert_eq!(segments.next(), Some(0..4));
        assert_eq!(
            segments.active_attributes().get(AttributeKey::Kern),
            Some(&AttributeValue::Float(1.0))
        );
        assert_eq!(segments.next(), Some(4..7));
        assert_eq!(segments.active_attributes().get(AttributeKey::Kern), None);
        assert_eq!(segments.next(), None);
    }

    #[test]
    fn slice_keeps_attributes() {
        let mut text = RichText::from("hello world");
        text.inner.set_attribute(
            AttributeKey::Kern,
            text.resolve(Some(6..11)).unwrap(),
            AttributeValue::Float(1.0),
        );
        let world = text.slice(Some(6..11)).unwrap();
        assert_eq!(world.as_str(), "world");
        assert_eq!(
            world.attribute_at(AttributeKey::Kern, 0),
            Some((0..5, &AttributeValue::Float(1.0)))
        );
    }
}
