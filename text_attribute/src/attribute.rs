// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attribute vocabulary and its mapping onto storage slots.

use core::fmt;
use core::str::FromStr;

use crate::ParagraphStyle;
use crate::values::{
    Attachment, Color, Font, Image, LineBreakMode, LineStyle, Shadow, TextAlignment, Url,
};

/// A single typed formatting instruction.
///
/// Every attribute is written to a storage slot ([`AttributeKey`]) as a storage value
/// ([`AttributeValue`]). Most attributes own their slot. The paragraph family
/// ([`ParagraphSpacingBefore`](Self::ParagraphSpacingBefore),
/// [`LineBreakMode`](Self::LineBreakMode), [`LineSpacing`](Self::LineSpacing),
/// [`LineHeightMultiple`](Self::LineHeightMultiple) and
/// [`TextAlignment`](Self::TextAlignment)) shares [`AttributeKey::ParagraphStyle`], and both
/// attachment variants share [`AttributeKey::Attachment`].
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// Typeface and size.
    Font(Font),
    /// Extra space between characters, in points.
    Kern(f32),
    /// Glyph color.
    ForegroundColor(Color),
    /// Color behind the glyphs.
    BackgroundColor(Color),
    /// Drop shadow.
    Shadow(Shadow),
    /// Underline style.
    UnderlineStyle(LineStyle),
    /// Underline color.
    UnderlineColor(Color),
    /// Strikethrough style.
    StrikethroughStyle(LineStyle),
    /// Strikethrough color.
    StrikethroughColor(Color),
    /// Space above the paragraph.
    ParagraphSpacingBefore(f32),
    /// Wrapping or truncation of lines that do not fit.
    LineBreakMode(LineBreakMode),
    /// Extra space between lines.
    LineSpacing(f32),
    /// Multiplier applied to the natural line height.
    LineHeightMultiple(f32),
    /// Horizontal alignment.
    TextAlignment(TextAlignment),
    /// Vertical offset from the baseline, in points.
    BaselineOffset(f32),
    /// Hyperlink target.
    Link(Url),
    /// Embedded object.
    TextAttachment(Attachment),
    /// Embedded image, stored as an attachment showing that image.
    TextAttachmentImage(Image),
}

impl Attribute {
    /// The key-only tag naming this attribute.
    pub fn style(&self) -> Style {
        match self {
            Self::Font(_) => Style::Font,
            Self::Kern(_) => Style::Kern,
            Self::ForegroundColor(_) => Style::ForegroundColor,
            Self::BackgroundColor(_) => Style::BackgroundColor,
            Self::Shadow(_) => Style::Shadow,
            Self::UnderlineStyle(_) => Style::UnderlineStyle,
            Self::UnderlineColor(_) => Style::UnderlineColor,
            Self::StrikethroughStyle(_) => Style::StrikethroughStyle,
            Self::StrikethroughColor(_) => Style::StrikethroughColor,
            Self::ParagraphSpacingBefore(_) => Style::ParagraphSpacingBefore,
            Self::LineBreakMode(_) => Style::LineBreakMode,
            Self::LineSpacing(_) => Style::LineSpacing,
            Self::LineHeightMultiple(_) => Style::LineHeightMultiple,
            Self::TextAlignment(_) => Style::TextAlignment,
            Self::BaselineOffset(_) => Style::BaselineOffset,
            Self::Link(_) => Style::Link,
            Self::TextAttachment(_) => Style::TextAttachment,
            Self::TextAttachmentImage(_) => Style::TextAttachmentImage,
        }
    }

    /// The storage slot this attribute is written to.
    #[inline]
    pub fn key(&self) -> AttributeKey {
        self.style().key()
    }

    /// The value written to the storage slot.
    ///
    /// Paragraph-family attributes produce a complete [`ParagraphStyle`] in which only their
    /// own field differs from the default.
    pub fn value(&self) -> AttributeValue {
        match self {
            Self::Font(font) => AttributeValue::Font(font.clone()),
            Self::Kern(v) | Self::BaselineOffset(v) => AttributeValue::Float(*v),
            Self::ForegroundColor(c)
            | Self::BackgroundColor(c)
            | Self::UnderlineColor(c)
            | Self::StrikethroughColor(c) => AttributeValue::Color(*c),
            Self::Shadow(shadow) => AttributeValue::Shadow(*shadow),
            Self::UnderlineStyle(s) | Self::StrikethroughStyle(s) => AttributeValue::LineStyle(*s),
            Self::ParagraphSpacingBefore(_)
            | Self::LineBreakMode(_)
            | Self::LineSpacing(_)
            | Self::LineHeightMultiple(_)
            | Self::TextAlignment(_) => {
                let mut style = ParagraphStyle::default();
                style.apply(self);
                AttributeValue::ParagraphStyle(style)
            }
            Self::Link(url) => AttributeValue::Link(url.clone()),
            Self::TextAttachment(attachment) => AttributeValue::Attachment(attachment.clone()),
            Self::TextAttachmentImage(image) => {
                AttributeValue::Attachment(Attachment::new(image.clone()))
            }
        }
    }
}

/// Key-only tag for each [`Attribute`] variant.
///
/// This is the tag used by the portable encoding and the unit of removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Style {
    /// See [`Attribute::Font`].
    Font,
    /// See [`Attribute::Kern`].
    Kern,
    /// See [`Attribute::ForegroundColor`].
    ForegroundColor,
    /// See [`Attribute::BackgroundColor`].
    BackgroundColor,
    /// See [`Attribute::Shadow`].
    Shadow,
    /// See [`Attribute::UnderlineStyle`].
    UnderlineStyle,
    /// See [`Attribute::UnderlineColor`].
    UnderlineColor,
    /// See [`Attribute::StrikethroughStyle`].
    StrikethroughStyle,
    /// See [`Attribute::StrikethroughColor`].
    StrikethroughColor,
    /// See [`Attribute::ParagraphSpacingBefore`].
    ParagraphSpacingBefore,
    /// See [`Attribute::LineBreakMode`].
    LineBreakMode,
    /// See [`Attribute::LineSpacing`].
    LineSpacing,
    /// See [`Attribute::LineHeightMultiple`].
    LineHeightMultiple,
    /// See [`Attribute::TextAlignment`].
    TextAlignment,
    /// See [`Attribute::BaselineOffset`].
    BaselineOffset,
    /// See [`Attribute::Link`].
    Link,
    /// See [`Attribute::TextAttachment`].
    TextAttachment,
    /// See [`Attribute::TextAttachmentImage`].
    TextAttachmentImage,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Font,
        Self::Kern,
        Self::ForegroundColor,
        Self::BackgroundColor,
        Self::Shadow,
        Self::UnderlineStyle,
        Self::UnderlineColor,
        Self::StrikethroughStyle,
        Self::StrikethroughColor,
        Self::ParagraphSpacingBefore,
        Self::LineBreakMode,
        Self::LineSpacing,
        Self::LineHeightMultiple,
        Self::TextAlignment,
        Self::BaselineOffset,
        Self::Link,
        Self::TextAttachment,
        Self::TextAttachmentImage,
    ];

    /// The storage slot attributes of this style are written to.
    pub fn key(self) -> AttributeKey {
        match self {
            Self::Font => AttributeKey::Font,
            Self::Kern => AttributeKey::Kern,
            Self::ForegroundColor => AttributeKey::ForegroundColor,
            Self::BackgroundColor => AttributeKey::BackgroundColor,
            Self::Shadow => AttributeKey::Shadow,
            Self::UnderlineStyle => AttributeKey::UnderlineStyle,
            Self::UnderlineColor => AttributeKey::UnderlineColor,
            Self::StrikethroughStyle => AttributeKey::StrikethroughStyle,
            Self::StrikethroughColor => AttributeKey::StrikethroughColor,
            Self::ParagraphSpacingBefore
            | Self::LineBreakMode
            | Self::LineSpacing
            | Self::LineHeightMultiple
            | Self::TextAlignment => AttributeKey::ParagraphStyle,
            Self::BaselineOffset => AttributeKey::BaselineOffset,
            Self::Link => AttributeKey::Link,
            Self::TextAttachment | Self::TextAttachmentImage => AttributeKey::Attachment,
        }
    }

    /// The tag used in the portable encoding.
    ///
    /// `TextAttachmentImage` keeps its historical wire spelling, `textAttachementImage`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::Kern => "kern",
            Self::ForegroundColor => "foregroundColor",
            Self::BackgroundColor => "backgroundColor",
            Self::Shadow => "shadow",
            Self::UnderlineStyle => "underlineStyle",
            Self::UnderlineColor => "underlineColor",
            Self::StrikethroughStyle => "strikethroughStyle",
            Self::StrikethroughColor => "strikethroughColor",
            Self::ParagraphSpacingBefore => "paragraphSpacingBefore",
            Self::LineBreakMode => "lineBreakMode",
            Self::LineSpacing => "lineSpacing",
            Self::LineHeightMultiple => "lineHeightMultiple",
            Self::TextAlignment => "textAlignment",
            Self::BaselineOffset => "baselineOffset",
            Self::Link => "link",
            Self::TextAttachment => "textAttachment",
            Self::TextAttachmentImage => "textAttachementImage",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or(UnknownStyle)
    }
}

/// Returned by [`Style::from_str`] for an unrecognized tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownStyle;

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown style tag")
    }
}

impl core::error::Error for UnknownStyle {}

/// A storage slot of a [`RichText`](crate::RichText).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// Holds [`AttributeValue::Font`].
    Font,
    /// Holds [`AttributeValue::Float`].
    Kern,
    /// Holds [`AttributeValue::Color`].
    ForegroundColor,
    /// Holds [`AttributeValue::Color`].
    BackgroundColor,
    /// Holds [`AttributeValue::Shadow`].
    Shadow,
    /// Holds [`AttributeValue::LineStyle`].
    UnderlineStyle,
    /// Holds [`AttributeValue::Color`].
    UnderlineColor,
    /// Holds [`AttributeValue::LineStyle`].
    StrikethroughStyle,
    /// Holds [`AttributeValue::Color`].
    StrikethroughColor,
    /// Holds [`AttributeValue::ParagraphStyle`]; shared by the paragraph family.
    ParagraphStyle,
    /// Holds [`AttributeValue::Float`].
    BaselineOffset,
    /// Holds [`AttributeValue::Link`].
    Link,
    /// Holds [`AttributeValue::Attachment`]; shared by both attachment styles.
    Attachment,
}

/// A value held by a storage slot.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A font.
    Font(Font),
    /// A plain number (kerning, baseline offset).
    Float(f32),
    /// A color.
    Color(Color),
    /// A shadow.
    Shadow(Shadow),
    /// An underline or strikethrough style.
    LineStyle(LineStyle),
    /// A complete paragraph style.
    ParagraphStyle(ParagraphStyle),
    /// A link target.
    Link(Url),
    /// An attachment.
    Attachment(Attachment),
}

impl AttributeValue {
    /// Returns the paragraph style, if this is one.
    pub fn as_paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self {
            Self::ParagraphStyle(style) => Some(style),
            _ => None,
        }
    }
}
