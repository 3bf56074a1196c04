// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload types carried by [`Attribute`](crate::Attribute) variants.

use std::sync::Arc;

use bitflags::bitflags;
use peniko::kurbo::Size;

pub use peniko::Color;
pub use url::Url;

/// A font identified by its name and point size.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// The font's name, or [`Font::SYSTEM_NAME`] for the platform UI font.
    pub name: String,
    /// The point size.
    pub size: f32,
}

impl Font {
    /// The name used for the platform's default UI font.
    pub const SYSTEM_NAME: &'static str = "system-ui";

    /// Creates a font from a name and point size.
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// The platform's default UI font at `size`.
    pub fn system(size: f32) -> Self {
        Self::new(Self::SYSTEM_NAME, size)
    }

    /// Returns `true` if this is the platform's default UI font.
    pub fn is_system(&self) -> bool {
        self.name == Self::SYSTEM_NAME
    }
}

bitflags! {
    /// Decoration line style, shared by underlines and strikethroughs.
    ///
    /// Bit values match the host conventions so they can be exchanged as plain integers.
    /// The empty set draws no line.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LineStyle: u32 {
        /// A single thin line.
        const SINGLE = 0x01;
        /// A thick line.
        const THICK = 0x02;
        /// Two thin lines.
        const DOUBLE = 0x09;
        /// Dotted pattern.
        const PATTERN_DOT = 0x0100;
        /// Dashed pattern.
        const PATTERN_DASH = 0x0200;
        /// Dash-dot pattern.
        const PATTERN_DASH_DOT = 0x0300;
        /// Dash-dot-dot pattern.
        const PATTERN_DASH_DOT_DOT = 0x0400;
        /// Draw the line only under words, not under whitespace.
        const BY_WORD = 0x8000;
    }
}

impl LineStyle {
    /// No line.
    pub const NONE: Self = Self::empty();
}

/// How lines that do not fit are wrapped or truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    ByWordWrapping,
    /// Wrap at character boundaries.
    ByCharWrapping,
    /// Clip at the container edge.
    ByClipping,
    /// Truncate with an ellipsis at the start of the line.
    ByTruncatingHead,
    /// Truncate with an ellipsis at the end of the line.
    ByTruncatingTail,
    /// Truncate with an ellipsis in the middle of the line.
    ByTruncatingMiddle,
}

impl LineBreakMode {
    /// The integer code used on the wire.
    pub fn raw(self) -> i64 {
        match self {
            Self::ByWordWrapping => 0,
            Self::ByCharWrapping => 1,
            Self::ByClipping => 2,
            Self::ByTruncatingHead => 3,
            Self::ByTruncatingTail => 4,
            Self::ByTruncatingMiddle => 5,
        }
    }

    /// Looks up a mode by its wire code.
    pub fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::ByWordWrapping,
            1 => Self::ByCharWrapping,
            2 => Self::ByClipping,
            3 => Self::ByTruncatingHead,
            4 => Self::ByTruncatingTail,
            5 => Self::ByTruncatingMiddle,
            _ => return None,
        })
    }
}

/// Horizontal alignment of the lines of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Stretched to both edges, except the last line.
    Justified,
    /// Follows the writing direction of the text.
    #[default]
    Natural,
}

impl TextAlignment {
    /// The integer code used on the wire.
    pub fn raw(self) -> i64 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
            Self::Justified => 3,
            Self::Natural => 4,
        }
    }

    /// Looks up an alignment by its wire code.
    pub fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::Left,
            1 => Self::Center,
            2 => Self::Right,
            3 => Self::Justified,
            4 => Self::Natural,
            _ => return None,
        })
    }

    /// Fraction of the free space placed before a line: `0` for leading, `0.5` for centered,
    /// `1` for trailing.
    pub fn offset(self) -> f64 {
        match self {
            Self::Left | Self::Natural | Self::Justified => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

/// A drop shadow.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
    /// Displacement of the shadow from the glyphs.
    pub offset: Size,
    /// Blur radius.
    pub blur_radius: f64,
    /// Shadow color; the renderer picks a default when `None`.
    pub color: Option<Color>,
}

/// Encoded image bytes (for example PNG data).
///
/// The bytes are not decoded here. An empty image is the placeholder used when no data is
/// available.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Image {
    data: Arc<[u8]>,
}

impl Image {
    /// Wraps encoded image bytes.
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self { data: data.into() }
    }

    /// The empty placeholder image.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns `true` for the placeholder image.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An inline object embedded in the text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attachment {
    /// The image shown for the attachment; empty when the attachment has none.
    pub image: Image,
}

impl Attachment {
    /// Creates an attachment that displays `image`.
    pub fn new(image: Image) -> Self {
        Self { image }
    }
}
