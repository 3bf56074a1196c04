// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portable encoding of attributes.
//!
//! An attribute is encoded as a [`PortableAttributeRecord`]: a style tag plus a JSON value.
//!
//! | Value kind           | Encoding                                         |
//! |----------------------|--------------------------------------------------|
//! | color                | `"#RRGGBBAA"`, two uppercase hex digits per channel |
//! | font                 | `{"name": string, "size": number}`               |
//! | shadow               | `{"blur": number, "offset": {"width", "height"}, "color"?}` |
//! | link                 | URL string                                       |
//! | image                | base64 string, absent for an empty image          |
//! | numbers, enums, bits | JSON numbers                                     |
//!
//! Decoding is strict about tags and value shapes, with a few lenient cases kept for
//! compatibility with existing data: an unknown line break mode decodes as
//! [`LineBreakMode::ByWordWrapping`], an unknown alignment as [`TextAlignment::Justified`],
//! unknown line style bits are dropped, a line style code outside the 32-bit range draws no
//! line, a whole float such as `1.0` is accepted where an integer code is expected, a font without a name becomes the system font, and an
//! attachment without a value gets an empty image.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use peniko::kurbo::Size;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::values::{
    Attachment, Color, Font, Image, LineBreakMode, LineStyle, Shadow, TextAlignment, Url,
};
use crate::{Attribute, Error, Style};

/// The portable form of one [`Attribute`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortableAttributeRecord {
    /// The style tag, as given by [`Style::as_str`].
    pub style: String,
    /// The encoded value, absent for an empty attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Encodes an attribute.
///
/// JSON has no representation for NaN or infinity, so a non-finite magnitude (for example
/// `Attribute::Kern(f32::NAN)`) is written as `null` and is rejected by [`decode`]. Such
/// values are not supported in portable form.
pub fn encode(attribute: &Attribute) -> PortableAttributeRecord {
    let value = match attribute {
        Attribute::Font(font) => Some(json!({ "name": font.name, "size": font.size })),
        Attribute::Kern(v)
        | Attribute::ParagraphSpacingBefore(v)
        | Attribute::LineSpacing(v)
        | Attribute::LineHeightMultiple(v)
        | Attribute::BaselineOffset(v) => {
            if !v.is_finite() {
                log::debug!("{} value {v} has no JSON form, writing null", attribute.style());
            }
            Some(Value::from(*v))
        }
        Attribute::ForegroundColor(c)
        | Attribute::BackgroundColor(c)
        | Attribute::UnderlineColor(c)
        | Attribute::StrikethroughColor(c) => Some(encode_color(*c)),
        Attribute::Shadow(shadow) => Some(encode_shadow(shadow)),
        Attribute::UnderlineStyle(s) | Attribute::StrikethroughStyle(s) => {
            Some(Value::from(s.bits()))
        }
        Attribute::LineBreakMode(mode) => Some(Value::from(mode.raw())),
        Attribute::TextAlignment(alignment) => Some(Value::from(alignment.raw())),
        Attribute::Link(url) => Some(Value::from(url.as_str())),
        Attribute::TextAttachment(Attachment { image }) | Attribute::TextAttachmentImage(image) => {
            encode_image(image)
        }
    };
    PortableAttributeRecord {
        style: attribute.style().as_str().to_owned(),
        value,
    }
}

/// Decodes an attribute.
///
/// Fails with [`Error::UnsupportedStyle`] for an unknown tag and with
/// [`Error::MalformedValue`] when the value does not have the shape the tag requires.
pub fn decode(record: &PortableAttributeRecord) -> Result<Attribute, Error> {
    let style: Style = record
        .style
        .parse()
        .map_err(|_| Error::UnsupportedStyle {
            style: record.style.clone(),
        })?;
    let value = record.value.as_ref().filter(|v| !v.is_null());

    Ok(match style {
        Style::Font => Attribute::Font(decode_font(value)?),
        Style::Kern => Attribute::Kern(float(style, value)?),
        Style::ForegroundColor => Attribute::ForegroundColor(decode_color(style, value)?),
        Style::BackgroundColor => Attribute::BackgroundColor(decode_color(style, value)?),
        Style::Shadow => Attribute::Shadow(decode_shadow(value)?),
        Style::UnderlineStyle => Attribute::UnderlineStyle(line_style(style, value)?),
        Style::UnderlineColor => Attribute::UnderlineColor(decode_color(style, value)?),
        Style::StrikethroughStyle => Attribute::StrikethroughStyle(line_style(style, value)?),
        Style::StrikethroughColor => Attribute::StrikethroughColor(decode_color(style, value)?),
        Style::ParagraphSpacingBefore => Attribute::ParagraphSpacingBefore(float(style, value)?),
        Style::LineBreakMode => {
            let raw = integer(style, value)?;
            Attribute::LineBreakMode(LineBreakMode::from_raw(raw).unwrap_or_else(|| {
                log::debug!("unknown line break mode {raw}, using word wrapping");
                LineBreakMode::ByWordWrapping
            }))
        }
        Style::LineSpacing => Attribute::LineSpacing(float(style, value)?),
        Style::LineHeightMultiple => Attribute::LineHeightMultiple(float(style, value)?),
        Style::TextAlignment => {
            let raw = integer(style, value)?;
            Attribute::TextAlignment(TextAlignment::from_raw(raw).unwrap_or_else(|| {
                log::debug!("unknown text alignment {raw}, using justified");
                TextAlignment::Justified
            }))
        }
        Style::BaselineOffset => Attribute::BaselineOffset(float(style, value)?),
        Style::Link => {
            let url = value
                .and_then(Value::as_str)
                .ok_or(Error::malformed(style, "expected a URL string"))?;
            Attribute::Link(Url::parse(url).map_err(|_| Error::malformed(style, "invalid URL"))?)
        }
        Style::TextAttachment => {
            Attribute::TextAttachment(Attachment::new(decode_image(style, value)?))
        }
        Style::TextAttachmentImage => Attribute::TextAttachmentImage(decode_image(style, value)?),
    })
}

/// Encodes a list of attributes, preserving order.
pub fn encode_all(attributes: &[Attribute]) -> Vec<PortableAttributeRecord> {
    attributes.iter().map(encode).collect()
}

/// Decodes a list of records, stopping at the first failure.
pub fn decode_all(records: &[PortableAttributeRecord]) -> Result<Vec<Attribute>, Error> {
    records.iter().map(decode).collect()
}

/// Serializes a list of attributes as a JSON array of records.
pub fn to_json(attributes: &[Attribute]) -> serde_json::Result<String> {
    serde_json::to_string(&encode_all(attributes))
}

/// Parses a JSON array of records.
///
/// Decoding failures are reported through the [`serde_json::Error`], with the message of the
/// underlying [`Error`].
pub fn from_json(json: &str) -> serde_json::Result<Vec<Attribute>> {
    serde_json::from_str(json)
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Attribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = PortableAttributeRecord::deserialize(deserializer)?;
        decode(&record).map_err(serde::de::Error::custom)
    }
}

fn encode_color(color: Color) -> Value {
    let c = color.to_rgba8();
    Value::from(format!("#{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, c.a))
}

fn parse_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i * 2..i * 2 + 2)?, 16).ok();
    match digits.len() {
        6 => Some(Color::from_rgb8(channel(0)?, channel(1)?, channel(2)?)),
        8 => Some(Color::from_rgba8(channel(0)?, channel(1)?, channel(2)?, channel(3)?)),
        _ => None,
    }
}

fn encode_shadow(shadow: &Shadow) -> Value {
    let mut object = Map::new();
    object.insert("blur".into(), Value::from(shadow.blur_radius));
    object.insert(
        "offset".into(),
        json!({ "width": shadow.offset.width, "height": shadow.offset.height }),
    );
    if let Some(color) = shadow.color {
        object.insert("color".into(), encode_color(color));
    }
    Value::Object(object)
}

fn encode_image(image: &Image) -> Option<Value> {
    (!image.is_empty()).then(|| Value::from(STANDARD.encode(image.data())))
}

fn number(style: Style, value: Option<&Value>) -> Result<f64, Error> {
    value
        .and_then(Value::as_f64)
        .ok_or(Error::malformed(style, "expected a number"))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Attribute magnitudes are stored as f32; wider encoded values lose precision."
)]
fn float(style: Style, value: Option<&Value>) -> Result<f32, Error> {
    number(style, value).map(|v| v as f32)
}

/// Reads an integer, also accepting a float with no fractional part such as `1.0`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The float is whole and checked to lie within the i64 range."
)]
fn integer(style: Style, value: Option<&Value>) -> Result<i64, Error> {
    let value = value.ok_or(Error::malformed(style, "expected an integer"))?;
    if let Some(raw) = value.as_i64() {
        return Ok(raw);
    }
    value
        .as_f64()
        .filter(|v| v.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(v))
        .map(|v| v as i64)
        .ok_or(Error::malformed(style, "expected an integer"))
}

fn decode_color(style: Style, value: Option<&Value>) -> Result<Color, Error> {
    value
        .and_then(Value::as_str)
        .and_then(parse_color)
        .ok_or(Error::malformed(style, "expected a \"#RRGGBBAA\" color"))
}

fn line_style(style: Style, value: Option<&Value>) -> Result<LineStyle, Error> {
    let raw = integer(style, value)?;
    let Ok(bits) = u32::try_from(raw) else {
        log::debug!("{style} value {raw} is out of range, drawing no line");
        return Ok(LineStyle::empty());
    };
    let line = LineStyle::from_bits_truncate(bits);
    if line.bits() != bits {
        log::debug!("dropping unknown {style} bits {:#x}", bits & !line.bits());
    }
    Ok(line)
}

fn decode_image(style: Style, value: Option<&Value>) -> Result<Image, Error> {
    let Some(value) = value else {
        log::debug!("{style} has no image data, using an empty image");
        return Ok(Image::empty());
    };
    let encoded = value
        .as_str()
        .ok_or(Error::malformed(style, "expected a base64 string"))?;
    let data = STANDARD
        .decode(encoded)
        .map_err(|_| Error::malformed(style, "invalid base64"))?;
    Ok(Image::new(data))
}

fn decode_font(value: Option<&Value>) -> Result<Font, Error> {
    let style = Style::Font;
    let object = value
        .and_then(Value::as_object)
        .ok_or(Error::malformed(style, "expected a font object"))?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or(Error::malformed(style, "expected a font name"))?;
    let size = float(style, object.get("size"))?;
    if name.is_empty() {
        log::debug!("font has no name, using the system font");
        return Ok(Font::system(size));
    }
    Ok(Font::new(name, size))
}

fn decode_shadow(value: Option<&Value>) -> Result<Shadow, Error> {
    let style = Style::Shadow;
    let object = value
        .and_then(Value::as_object)
        .ok_or(Error::malformed(style, "expected a shadow object"))?;
    let blur_radius = number(style, object.get("blur"))?;
    let offset = object
        .get("offset")
        .and_then(Value::as_object)
        .ok_or(Error::malformed(style, "expected a shadow offset"))?;
    let offset = Size::new(
        number(style, offset.get("width"))?,
        number(style, offset.get("height"))?,
    );
    let color = match object.get("color").filter(|v| !v.is_null()) {
        Some(v) => Some(decode_color(style, Some(v))?),
        None => None,
    };
    Ok(Shadow {
        offset,
        blur_radius,
        color,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{PortableAttributeRecord, decode, encode};
    use crate::values::{Color, Font, LineBreakMode, LineStyle, TextAlignment};
    use crate::{Attribute, ErrorKind};

    fn record(style: &str, value: serde_json::Value) -> PortableAttributeRecord {
        PortableAttributeRecord {
            style: style.into(),
            value: Some(value),
        }
    }

    #[test]
    fn wire_shapes() {
        let red = encode(&Attribute::ForegroundColor(Color::from_rgba8(255, 0, 16, 128)));
        assert_eq!(red, record("foregroundColor", json!("#FF001080")));

        let font = encode(&Attribute::Font(Font::new("Menlo", 12.0)));
        assert_eq!(font.value, Some(json!({ "name": "Menlo", "size": 12.0 })));

        let underline = encode(&Attribute::UnderlineStyle(LineStyle::SINGLE | LineStyle::BY_WORD));
        assert_eq!(underline.value, Some(json!(0x8001)));

        let empty = encode(&Attribute::TextAttachmentImage(crate::values::Image::empty()));
        assert_eq!(empty.style, "textAttachementImage");
        assert_eq!(empty.value, None);
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"style":"textAttachementImage"}"#);
    }

    #[test]
    fn strict_failures() {
        let err = decode(&record("blink", json!(1))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedStyle);

        for bad in [
            record("kern", json!("wide")),
            record("foregroundColor", json!("red")),
            record("font", json!({ "size": 12 })),
            record("link", json!("not a url")),
            record("shadow", json!({ "blur": 1.0 })),
            record("textAlignment", json!(1.5)),
            record("textAttachment", json!("***")),
            PortableAttributeRecord {
                style: "lineSpacing".into(),
                value: None,
            },
        ] {
            assert_eq!(
                decode(&bad).unwrap_err().kind(),
                ErrorKind::MalformedValue,
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn lenient_defaults() {
        assert_eq!(
            decode(&record("lineBreakMode", json!(42))).unwrap(),
            Attribute::LineBreakMode(LineBreakMode::ByWordWrapping)
        );
        assert_eq!(
            decode(&record("textAlignment", json!(-3))).unwrap(),
            Attribute::TextAlignment(TextAlignment::Justified)
        );
        assert_eq!(
            decode(&record("strikethroughStyle", json!(0x10001))).unwrap(),
            Attribute::StrikethroughStyle(LineStyle::SINGLE)
        );
        assert_eq!(
            decode(&record("underlineStyle", json!(-1))).unwrap(),
            Attribute::UnderlineStyle(LineStyle::empty())
        );
        assert_eq!(
            decode(&record("underlineStyle", json!(1_u64 << 40))).unwrap(),
            Attribute::UnderlineStyle(LineStyle::empty())
        );
        assert_eq!(
            decode(&record("textAlignment", json!(1.0))).unwrap(),
            Attribute::TextAlignment(TextAlignment::Center)
        );
        let font = decode(&record("font", json!({ "name": "", "size": 9 }))).unwrap();
        assert_eq!(font, Attribute::Font(Font::system(9.0)));
        assert!(matches!(font, Attribute::Font(f) if f.is_system()));
        assert!(!Font::new("Menlo", 9.0).is_system());
        let attachment = PortableAttributeRecord {
            style: "textAttachment".into(),
            value: None,
        };
        assert!(matches!(
            decode(&attachment).unwrap(),
            Attribute::TextAttachment(a) if a.image.is_empty()
        ));
    }

    #[test]
    fn non_finite_magnitudes_are_not_portable() {
        let record = encode(&Attribute::Kern(f32::NAN));
        assert_eq!(record.value, Some(serde_json::Value::Null));
        assert_eq!(decode(&record).unwrap_err().kind(), ErrorKind::MalformedValue);

        let record = encode(&Attribute::BaselineOffset(f32::INFINITY));
        assert_eq!(decode(&record).unwrap_err().kind(), ErrorKind::MalformedValue);
    }

    #[test]
    fn shadow_reads_offset() {
        let decoded = decode(&record(
            "shadow",
            json!({ "blur": 2.0, "offset": { "width": 1.0, "height": -1.0 }, "color": "#000000FF" }),
        ))
        .unwrap();
        let Attribute::Shadow(shadow) = decoded else {
            panic!("expected a shadow, got {decoded:?}");
        };
        assert_eq!(shadow.blur_radius, 2.0);
        assert_eq!((shadow.offset.width, shadow.offset.height), (1.0, -1.0));
        assert_eq!(shadow.color, Some(Color::from_rgba8(0, 0, 0, 255)));
    }

    #[test]
    fn json_lists() {
        let attributes = vec![
            Attribute::Kern(1.5),
            Attribute::Link("https://example.com/a".parse().unwrap()),
        ];
        let json = super::to_json(&attributes).unwrap();
        assert_eq!(super::from_json(&json).unwrap(), attributes);

        let err = super::from_json(r#"[{"style":"blink"}]"#).unwrap_err();
        assert!(err.to_string().contains("unsupported style"), "{err}");
    }
}
