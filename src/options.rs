// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rwsvgtree::WriteOptions;

use crate::Error;

/// An output format.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Format {
    /// Plain XML.
    Svg,
    /// GZip compressed XML.
    Svgz,
}

impl Format {
    /// Returns a file extension of the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Svgz => "svgz",
        }
    }

    /// Detects a format from a file extension.
    ///
    /// Returns `None` when the path has no extension.
    pub fn from_path(path: &Path) -> Option<Result<Self, Error>> {
        path.extension()
            .map(|ext| ext.to_string_lossy().parse())
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::Svg
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Parses a format name. Case-insensitive.
    fn from_str(text: &str) -> Result<Self, Error> {
        match text.to_ascii_lowercase().as_str() {
            "svg" => Ok(Format::Svg),
            "svgz" => Ok(Format::Svgz),
            _ => Err(Error::UnsupportedFormat(text.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Image saving options.
#[derive(Clone, Copy, Default, Debug)]
pub struct SaveOptions {
    /// An output format.
    ///
    /// When not set, the format is detected from the save path extension,
    /// then from the path the image was opened from.
    /// Falls back to [`Format::Svg`].
    ///
    /// Default: `None`
    pub format: Option<Format>,

    /// XML writing options.
    pub write: WriteOptions,
}
