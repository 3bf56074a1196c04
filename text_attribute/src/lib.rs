// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed rich-text attributes over character ranges, built on [`attributed_text`].
//!
//! - [`Attribute`] is the formatting vocabulary (fonts, colors, decorations, paragraph
//!   settings, links, attachments). Each attribute names a storage slot ([`AttributeKey`])
//!   and the value it writes there ([`AttributeValue`]).
//! - [`RichText`] is a string plus those slots. Attributes are added and removed over
//!   character ranges or over every occurrence of a pattern.
//! - [`codec`] converts attributes to and from a portable JSON record.
//! - [`hit_test`] maps a point in laid out text back to a character.
//!
//! ## Indices
//!
//! Positions count characters, that is extended grapheme clusters: an emoji flag or an `e`
//! followed by a combining accent is one position. `None` in place of a range means the whole
//! text. A range that does not fit the text is rejected with [`Error::OutOfBounds`] before
//! anything is written.
//!
//! ## Shared slots
//!
//! The five paragraph attributes ([`Attribute::ParagraphSpacingBefore`],
//! [`Attribute::LineBreakMode`], [`Attribute::LineSpacing`],
//! [`Attribute::LineHeightMultiple`] and [`Attribute::TextAlignment`]) are stored together as
//! one [`ParagraphStyle`]. Adding one of them changes only its own field, and removing one
//! resets only that field. Every other attribute overwrites its slot.
//!
//! ## Example
//!
//! ```
//! use text_attribute::values::{LineStyle, TextAlignment};
//! use text_attribute::{Attribute, AttributeKey, RichText, SearchOptions, Style};
//!
//! let mut text = RichText::from("The fox jumps");
//! text.add_attributes_to_occurrences(
//!     &[Attribute::UnderlineStyle(LineStyle::SINGLE)],
//!     "fox",
//!     SearchOptions::empty(),
//!     None,
//! )
//! .unwrap();
//! let (run, _) = text.attribute_at(AttributeKey::UnderlineStyle, 4).unwrap();
//! assert_eq!(run, 4..7);
//!
//! text.add_attributes(
//!     &[
//!         Attribute::LineSpacing(10.0),
//!         Attribute::TextAlignment(TextAlignment::Center),
//!     ],
//!     None,
//! )
//! .unwrap();
//! assert_eq!(text.paragraph_style(0).line_spacing, 10.0);
//! assert_eq!(text.paragraph_style(0).alignment, TextAlignment::Center);
//!
//! let plain = text
//!     .removing_attributes(
//!         &[Style::UnderlineStyle, Style::LineSpacing, Style::TextAlignment],
//!         None,
//!     )
//!     .unwrap();
//! assert_eq!(plain, RichText::from("The fox jumps"));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod apply;
mod attribute;
mod error;
mod merge;
mod occurrences;
mod paragraph;
mod rich_text;

pub mod codec;
pub mod hit_test;
pub mod values;

#[cfg(test)]
mod tests;

pub use attributed_text;

pub use attribute::{Attribute, AttributeKey, AttributeValue, Style, UnknownStyle};
pub use codec::PortableAttributeRecord;
pub use error::{Error, ErrorKind};
pub use occurrences::{Occurrence, Occurrences, SearchOptions};
pub use paragraph::ParagraphStyle;
pub use rich_text::RichText;
