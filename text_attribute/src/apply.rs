// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adding and removing attributes over character ranges.

use core::ops::Range;

use attributed_text::TextRange;

use crate::merge::{Retract, rule_for};
use crate::{Attribute, Error, RichText, Style};

impl RichText {
    /// Applies `attributes` in order over a character range (`None` for the whole text).
    ///
    /// Most attributes overwrite whatever their slot held. Paragraph attributes instead
    /// replace only their own field of the paragraph style already present under each part
    /// of the range, so `LineSpacing` followed by `TextAlignment` yields a style with both.
    ///
    /// The range is validated before anything is written.
    pub fn add_attributes(
        &mut self,
        attributes: &[Attribute],
        range: Option<Range<usize>>,
    ) -> Result<(), Error> {
        let range = self.resolve(range)?;
        self.apply_resolved(attributes, range);
        Ok(())
    }

    /// Applies a single attribute; see [`add_attributes`](Self::add_attributes).
    pub fn add_attribute(
        &mut self,
        attribute: Attribute,
        range: Option<Range<usize>>,
    ) -> Result<(), Error> {
        self.add_attributes(core::slice::from_ref(&attribute), range)
    }

    /// Removes the attributes named by `styles` from a character range.
    ///
    /// Only spans where a style's slot actually holds a value are touched. For paragraph
    /// styles, only the named field is reset; the paragraph style is dropped entirely once
    /// nothing but defaults remain.
    pub fn remove_attributes(
        &mut self,
        styles: &[Style],
        range: Option<Range<usize>>,
    ) -> Result<(), Error> {
        let range = self.resolve(range)?;
        self.retract_resolved(styles, range);
        Ok(())
    }

    /// Removes a single style; see [`remove_attributes`](Self::remove_attributes).
    pub fn remove_attribute(
        &mut self,
        style: Style,
        range: Option<Range<usize>>,
    ) -> Result<(), Error> {
        self.remove_attributes(&[style], range)
    }

    /// Returns a copy with `attributes` applied; `self` is unchanged.
    pub fn adding_attributes(
        &self,
        attributes: &[Attribute],
        range: Option<Range<usize>>,
    ) -> Result<Self, Error> {
        let mut text = self.clone();
        text.add_attributes(attributes, range)?;
        Ok(text)
    }

    /// Returns a copy with `attribute` applied; `self` is unchanged.
    pub fn adding_attribute(
        &self,
        attribute: Attribute,
        range: Option<Range<usize>>,
    ) -> Result<Self, Error> {
        self.adding_attributes(core::slice::from_ref(&attribute), range)
    }

    /// Returns a copy with `styles` removed; `self` is unchanged.
    pub fn removing_attributes(
        &self,
        styles: &[Style],
        range: Option<Range<usize>>,
    ) -> Result<Self, Error> {
        let mut text = self.clone();
        text.remove_attributes(styles, range)?;
        Ok(text)
    }

    /// Returns a copy with `style` removed; `self` is unchanged.
    pub fn removing_attribute(
        &self,
        style: Style,
        range: Option<Range<usize>>,
    ) -> Result<Self, Error> {
        self.removing_attributes(&[style], range)
    }

    pub(crate) fn apply_resolved(&mut self, attributes: &[Attribute], range: TextRange) {
        if range.is_empty() {
            return;
        }
        for attribute in attributes {
            let key = attribute.key();
            let rule = rule_for(key);

            // Existing runs and the gaps between them each merge separately.
            let mut writes = Vec::new();
            let mut cursor = range.start();
            for (run, value) in self.inner.attribute_runs(key, range) {
                if cursor < run.start {
                    writes.push((cursor..run.start, (rule.merge)(None, attribute)));
                }
                cursor = run.end;
                writes.push((run, (rule.merge)(Some(value), attribute)));
            }
            if cursor < range.end() {
                writes.push((cursor..range.end(), (rule.merge)(None, attribute)));
            }

            for (span, value) in writes {
                self.inner
                    .set_attribute(key, TextRange::new_unchecked(span.start, span.end), value);
            }
        }
    }

    pub(crate) fn retract_resolved(&mut self, styles: &[Style], range: TextRange) {
        for &style in styles {
            let key = style.key();
            let rule = rule_for(key);
            let edits: Vec<_> = self
                .inner
                .attribute_runs(key, range)
                .map(|(run, value)| (run, (rule.retract)(value, style)))
                .collect();

            for (run, retract) in edits {
                let span = TextRange::new_unchecked(run.start, run.end);
                match retract {
                    Retract::Keep => {}
                    Retract::Clear => self.inner.remove_attribute(key, span),
                    Retract::Replace(value) => self.inner.set_attribute(key, span, value),
                }
            }
        }
    }
}
