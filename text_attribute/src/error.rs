// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Style;

/// Errors returned by the application engine and the portable codec.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A character range did not fit the text.
    ///
    /// The wrapped error carries the offending range and the text length.
    OutOfBounds(attributed_text::Error),

    /// A portable record named a style tag that is not recognized.
    UnsupportedStyle {
        /// The unrecognized tag.
        style: String,
    },

    /// A portable record's value did not have the shape its style requires.
    MalformedValue {
        /// The style whose value was malformed.
        style: Style,
        /// A short description of what was expected.
        reason: &'static str,
    },
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfBounds(_) => ErrorKind::OutOfBounds,
            Self::UnsupportedStyle { .. } => ErrorKind::UnsupportedStyle,
            Self::MalformedValue { .. } => ErrorKind::MalformedValue,
        }
    }

    pub(crate) fn malformed(style: Style, reason: &'static str) -> Self {
        Self::MalformedValue { style, reason }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(err) => write!(f, "out of bounds: {err}"),
            Self::UnsupportedStyle { style } => write!(f, "unsupported style `{style}`"),
            Self::MalformedValue { style, reason } => {
                write!(f, "malformed value for `{style}`: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfBounds(err) => Some(err),
            _ => None,
        }
    }
}

impl From<attributed_text::Error> for Error {
    fn from(err: attributed_text::Error) -> Self {
        Self::OutOfBounds(err)
    }
}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`Error::OutOfBounds`].
    OutOfBounds,

    /// See [`Error::UnsupportedStyle`].
    UnsupportedStyle,

    /// See [`Error::MalformedValue`].
    MalformedValue,
}
