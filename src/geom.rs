// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image size and position primitives.

use std::fmt;

use crate::Error;

/// The size a document declares for itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SizeType {
    /// Both dimensions are fixed pixel counts.
    Absolute,
    /// Only the ratio between the dimensions is known.
    AspectRatio,
    /// No usable size information is present.
    None,
}

/// An image size with a type tag.
///
/// Dimensions of a [`SizeType::None`] box are always 300x150,
/// but callers must branch on [`SizeBox::kind`] and not on the numbers.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeBox {
    width: u32,
    height: u32,
    kind: SizeType,
}

impl SizeBox {
    /// Creates a new absolute size.
    ///
    /// Zero dimensions are an error.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        Self::with_type(width, height, SizeType::Absolute)
    }

    /// Creates a new aspect ratio size.
    ///
    /// Zero dimensions are an error.
    pub fn aspect_ratio(width: u32, height: u32) -> Result<Self, Error> {
        Self::with_type(width, height, SizeType::AspectRatio)
    }

    /// Creates an undefined size.
    pub fn none() -> Self {
        SizeBox {
            width: 300,
            height: 150,
            kind: SizeType::None,
        }
    }

    /// Creates a new size of the specified type.
    ///
    /// Dimensions are ignored for [`SizeType::None`].
    pub fn with_type(width: u32, height: u32, kind: SizeType) -> Result<Self, Error> {
        if kind == SizeType::None {
            return Ok(Self::none());
        }

        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "length of either side cannot be 0 or negative, current size is {}x{}",
                width, height
            )));
        }

        Ok(SizeBox {
            width,
            height,
            kind,
        })
    }

    /// Creates a size from values that are already known to be valid.
    #[inline]
    pub(crate) fn from_valid(width: u32, height: u32, kind: SizeType) -> Self {
        debug_assert!(width > 0 && height > 0);
        SizeBox {
            width,
            height,
            kind,
        }
    }

    /// Returns the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the size type.
    #[inline]
    pub fn kind(&self) -> SizeType {
        self.kind
    }

    /// Checks that the size can be used for bounds checking.
    ///
    /// Only undefined sizes cannot.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.kind != SizeType::None
    }

    /// Scales both dimensions by `ratio`.
    pub fn scale(&self, ratio: f64) -> Result<Self, Error> {
        if !self.is_bounded() {
            return Ok(*self);
        }

        let width = round_side(self.width as f64 * ratio)?;
        let height = round_side(self.height as f64 * ratio)?;
        Self::with_type(width, height, self.kind)
    }

    /// Adds `size` to both dimensions.
    pub fn increase(&self, size: i64) -> Result<Self, Error> {
        if !self.is_bounded() {
            return Ok(*self);
        }

        let width = round_side(self.width as f64 + size as f64)?;
        let height = round_side(self.height as f64 + size as f64)?;
        Self::with_type(width, height, self.kind)
    }

    /// Scales the size proportionally to the specified width.
    pub fn widen(&self, width: u32) -> Result<Self, Error> {
        self.scale(width as f64 / self.width as f64)
    }

    /// Scales the size proportionally to the specified height.
    pub fn heighten(&self, height: u32) -> Result<Self, Error> {
        self.scale(height as f64 / self.height as f64)
    }

    /// Checks that `other` placed at `start` fits inside this size.
    pub fn contains(&self, other: SizeBox, start: Point) -> bool {
        start.x >= 0
            && start.y >= 0
            && self.width as i64 >= other.width as i64 + start.x as i64
            && self.height as i64 >= other.height as i64 + start.y as i64
    }

    /// Returns the area.
    #[inline]
    pub fn square(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

fn round_side(n: f64) -> Result<u32, Error> {
    let n = n.round();
    if n.is_finite() && n >= 0.0 && n <= u32::MAX as f64 {
        Ok(n as u32)
    } else {
        Err(Error::InvalidArgument(format!("{} is not a valid side length", n)))
    }
}

impl fmt::Debug for SizeBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SizeBox({:?} {} {})", self.kind, self.width, self.height)
    }
}

impl fmt::Display for SizeBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            SizeType::Absolute => write!(f, "{}x{} px", self.width, self.height),
            SizeType::AspectRatio => write!(f, "{}x{}", self.width, self.height),
            SizeType::None => write!(f, "undefined"),
        }
    }
}

/// A position on an image.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new `Point` from values.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Checks that the point lies inside the size.
    #[inline]
    pub fn in_box(&self, size: SizeBox) -> bool {
        self.x >= 0
            && self.y >= 0
            && (self.x as i64) < size.width as i64
            && (self.y as i64) < size.height as i64
    }

    /// Checks that the point is the top-left corner.
    #[inline]
    pub fn is_origin(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl From<(i32, i32)> for Point {
    fn from(v: (i32, i32)) -> Self {
        Point::new(v.0, v.1)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point({} {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
