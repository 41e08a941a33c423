// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// A color model.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Palette {
    /// RGB, the only model supported by SVG.
    Rgb,
    /// CMYK.
    Cmyk,
    /// Grayscale.
    Grayscale,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Rgb
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Palette::Rgb => "rgb",
            Palette::Cmyk => "cmyk",
            Palette::Grayscale => "gray",
        };

        write!(f, "{}", name)
    }
}

/// A color.
///
/// RGB channels are in a `0..=255` range and can be fractional.
/// CMYK and gray values are percentages.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    Rgb { red: f64, green: f64, blue: f64 },
    Cmyk { c: f64, m: f64, y: f64, k: f64 },
    Gray(f64),
}

impl Color {
    /// Creates a new RGB color.
    #[inline]
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Color::Rgb { red, green, blue }
    }

    /// Returns the palette this color belongs to.
    pub fn palette(&self) -> Palette {
        match self {
            Color::Rgb { .. } => Palette::Rgb,
            Color::Cmyk { .. } => Palette::Cmyk,
            Color::Gray(_) => Palette::Grayscale,
        }
    }
}

impl From<svgtypes::Color> for Color {
    fn from(c: svgtypes::Color) -> Self {
        Color::rgb(c.red as f64, c.green as f64, c.blue as f64)
    }
}
