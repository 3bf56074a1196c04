// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::values::{LineBreakMode, TextAlignment};
use crate::{Attribute, Style};

/// Paragraph-level layout settings.
///
/// Several attributes share this one storage slot, so a value is built up field by field:
/// applying an attribute replaces only the field it names.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Space above the paragraph.
    pub paragraph_spacing_before: f32,
    /// How lines that do not fit are wrapped or truncated.
    pub line_break_mode: LineBreakMode,
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Multiplier applied to the natural line height; `0` leaves it unchanged.
    pub line_height_multiple: f32,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
}

impl ParagraphStyle {
    /// Replaces the field named by `attribute`.
    ///
    /// Returns `false`, leaving `self` unchanged, if `attribute` is not a paragraph attribute.
    pub fn apply(&mut self, attribute: &Attribute) -> bool {
        match *attribute {
            Attribute::ParagraphSpacingBefore(v) => self.paragraph_spacing_before = v,
            Attribute::LineBreakMode(v) => self.line_break_mode = v,
            Attribute::LineSpacing(v) => self.line_spacing = v,
            Attribute::LineHeightMultiple(v) => self.line_height_multiple = v,
            Attribute::TextAlignment(v) => self.alignment = v,
            _ => return false,
        }
        true
    }

    /// Resets the field named by `style` to its default.
    ///
    /// Returns `false` if `style` is not a paragraph style.
    pub fn reset(&mut self, style: Style) -> bool {
        let default = Self::default();
        match style {
            Style::ParagraphSpacingBefore => {
                self.paragraph_spacing_before = default.paragraph_spacing_before;
            }
            Style::LineBreakMode => self.line_break_mode = default.line_break_mode,
            Style::LineSpacing => self.line_spacing = default.line_spacing,
            Style::LineHeightMultiple => self.line_height_multiple = default.line_height_multiple,
            Style::TextAlignment => self.alignment = default.alignment,
            _ => return false,
        }
        true
    }

    /// Returns `true` if the field named by `style` differs from its default.
    pub fn is_set(&self, style: Style) -> bool {
        let mut reset = *self;
        reset.reset(style) && reset != *self
    }

    /// Returns `true` if every field has its default value.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::ParagraphStyle;
    use crate::values::TextAlignment;
    use crate::{Attribute, Style};

    #[test]
    fn apply_replaces_one_field() {
        let mut style = ParagraphStyle::default();
        assert!(style.apply(&Attribute::LineSpacing(10.0)));
        assert!(style.apply(&Attribute::TextAlignment(TextAlignment::Center)));
        assert_eq!(style.line_spacing, 10.0);
        assert_eq!(style.alignment, TextAlignment::Center);
        assert_eq!(style.paragraph_spacing_before, 0.0);

        assert!(!style.apply(&Attribute::Kern(1.0)));
    }

    #[test]
    fn reset_and_is_set() {
        let mut style = ParagraphStyle {
            line_spacing: 4.0,
            ..ParagraphStyle::default()
        };
        assert!(style.is_set(Style::LineSpacing));
        assert!(!style.is_set(Style::TextAlignment));
        assert!(!style.is_set(Style::Kern));

        assert!(style.reset(Style::LineSpacing));
        assert!(style.is_default());
    }
}
