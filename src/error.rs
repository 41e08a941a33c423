// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// An abstract error category.
///
/// Useful when a caller needs to branch on the kind of a failure
/// and not on its exact cause.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// A value passed by a caller is invalid.
    InvalidArgument,
    /// An operation cannot be expressed for vector images.
    NotSupported,
    /// A requested region lies outside of the image.
    OutOfBounds,
    /// Input/output or data failure.
    Runtime,
}

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// A value passed by a caller is invalid.
    InvalidArgument(String),

    /// An operation is not supported by the SVG backend.
    NotSupported(String),

    /// A requested region lies outside of the image.
    OutOfBounds(String),

    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Compressed SVG must use the GZip algorithm.
    MalformedGZip,

    /// Failed to parse an SVG data.
    ParsingFailed(roxmltree::Error),

    /// The root element is not `svg`.
    NotAnSvg,

    /// An output format is not `svg` or `svgz`.
    UnsupportedFormat(String),

    /// Saving requires a path, but the image was not opened from a file.
    MissingPath,

    /// An input/output error.
    Io(std::io::Error),
}

impl Error {
    /// Returns an abstract error category.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::NotSupported(_) => ErrorKind::NotSupported,
            Error::OutOfBounds(_) => ErrorKind::OutOfBounds,
            Error::NotAnUtf8Str
            | Error::MalformedGZip
            | Error::ParsingFailed(_)
            | Error::NotAnSvg
            | Error::UnsupportedFormat(_)
            | Error::MissingPath
            | Error::Io(_) => ErrorKind::Runtime,
        }
    }

    pub(crate) fn not_implemented() -> Self {
        Error::NotSupported("this method is not implemented".to_string())
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl From<rwsvgtree::Error> for Error {
    fn from(e: rwsvgtree::Error) -> Self {
        match e {
            rwsvgtree::Error::NotAnSvg => Error::NotAnSvg,
            rwsvgtree::Error::ParsingFailed(e) => Error::ParsingFailed(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::InvalidArgument(ref msg) => {
                write!(f, "invalid argument: {}", msg)
            }
            Error::NotSupported(ref msg) => {
                write!(f, "not supported: {}", msg)
            }
            Error::OutOfBounds(ref msg) => {
                write!(f, "out of bounds: {}", msg)
            }
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::MalformedGZip => {
                write!(f, "provided data has a malformed GZip content")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
            Error::NotAnSvg => {
                write!(f, "an image could not be created from the given input")
            }
            Error::UnsupportedFormat(ref format) => {
                write!(
                    f,
                    "saving image in '{}' format is not supported, use 'svg' or 'svgz'",
                    format
                )
            }
            Error::MissingPath => {
                write!(
                    f,
                    "save path can be omitted only if the image has been opened from a file"
                )
            }
            Error::Io(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::ParsingFailed(ref e) => Some(e),
            Error::Io(ref e) => Some(e),
            _ => None,
        }
    }
}
