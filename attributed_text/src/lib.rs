// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text stores a string together with keyed attribute runs.
//!
//! Every attribute key owns a list of non-overlapping, coalesced runs over the text. Setting a
//! value for a key overwrites whatever that key held over the range; other keys are untouched.
//!
//! ## Indices
//!
//! Two units are in play:
//!
//! - **Characters** are extended grapheme clusters. These are the positions callers reason
//!   about (a flag emoji or an `e` followed by a combining accent is one character).
//! - **Bytes** are UTF-8 offsets into the backing string. Storage is addressed in bytes.
//!
//! [`AttributedText::resolve`] converts a character range into a validated byte [`TextRange`];
//! every storage operation takes a [`TextRange`], so an invalid range is rejected before
//! anything is written.
//!
//! ## Example
//!
//! ```
//! use attributed_text::AttributedText;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
//! enum Key {
//!     Bold,
//! }
//!
//! let mut text = AttributedText::<Key, bool>::new("héllo wörld");
//! let world = text.resolve(Some(6..11)).unwrap();
//! text.set_attribute(Key::Bold, world, true);
//!
//! assert_eq!(text.attribute_at(Key::Bold, world.start()).map(|(_, v)| *v), Some(true));
//! assert_eq!(text.char_range(world), 6..11);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod attribute_segments;
mod attributed_text;
mod error;
mod grapheme_index;
mod run_list;
mod text_range;

pub use crate::attribute_segments::{ActiveAttributes, AttributeSegments};
pub use crate::attributed_text::{AttributeRuns, AttributedText};
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind, Unit};
pub use crate::grapheme_index::GraphemeIndex;
pub use crate::text_range::TextRange;
