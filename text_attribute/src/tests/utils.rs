// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Size;

use crate::values::{
    Attachment, Color, Font, Image, LineBreakMode, LineStyle, Shadow, TextAlignment,
};
use crate::{Attribute, AttributeKey, AttributeValue, RichText, Style};

/// One attribute of every style, with non-default values.
pub(crate) fn one_of_each() -> Vec<Attribute> {
    let attributes = vec![
        Attribute::Font(Font::new("Helvetica Neue", 17.0)),
        Attribute::Kern(0.5),
        Attribute::ForegroundColor(Color::from_rgba8(10, 20, 30, 255)),
        Attribute::BackgroundColor(Color::from_rgba8(255, 255, 0, 64)),
        Attribute::Shadow(Shadow {
            offset: Size::new(2.0, -3.0),
            blur_radius: 4.0,
            color: Some(Color::from_rgba8(0, 0, 0, 128)),
        }),
        Attribute::UnderlineStyle(LineStyle::DOUBLE | LineStyle::PATTERN_DOT),
        Attribute::UnderlineColor(Color::from_rgb8(200, 0, 0)),
        Attribute::StrikethroughStyle(LineStyle::THICK),
        Attribute::StrikethroughColor(Color::from_rgb8(0, 0, 200)),
        Attribute::ParagraphSpacingBefore(6.0),
        Attribute::LineBreakMode(LineBreakMode::ByTruncatingTail),
        Attribute::LineSpacing(2.5),
        Attribute::LineHeightMultiple(1.25),
        Attribute::TextAlignment(TextAlignment::Right),
        Attribute::BaselineOffset(-1.5),
        Attribute::Link("https://linebender.org/".parse().unwrap()),
        Attribute::TextAttachment(Attachment::new(Image::new(vec![0x89, b'P', b'N', b'G']))),
        Attribute::TextAttachmentImage(Image::new(vec![1, 2, 3, 4, 5])),
    ];
    assert_eq!(
        attributes.iter().map(Attribute::style).collect::<Vec<_>>(),
        Style::ALL,
        "one attribute per style, in order"
    );
    attributes
}

/// The runs of `key` over the whole text, in characters.
pub(crate) fn runs(text: &RichText, key: AttributeKey) -> Vec<(core::ops::Range<usize>, AttributeValue)> {
    text.attribute_runs(key, None)
        .unwrap()
        .map(|(range, value)| (range, value.clone()))
        .collect()
}
