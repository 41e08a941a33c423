// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgimage` is an SVG image editing library.

Unlike raster editors, it never renders anything. Each operation rewrites
the SVG document instead: a resize changes the root element size attributes,
a crop nests the document into a new viewport, and color effects are expressed
as SVG filter primitives.

```
use svgimage::{Image, Point, SizeBox};

let mut image = Image::from_str(
    "<svg xmlns='http://www.w3.org/2000/svg' width='100' height='100'/>"
).unwrap();
image.crop(Point::new(25, 25), SizeBox::new(50, 50).unwrap()).unwrap();
image.effects().grayscale().unwrap().blur(2.0).unwrap();
assert_eq!(image.size(), SizeBox::new(50, 50).unwrap());
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

mod color;
mod error;
mod filter;
mod geom;
mod geometry;
mod image;
mod numbers;
mod options;
mod size;
mod units;

pub use rwsvgtree;
pub use rwsvgtree::{Document, Indent, WriteOptions};

pub use crate::color::{Color, Palette};
pub use crate::error::{Error, ErrorKind};
pub use crate::filter::{Effects, Matrix, FILTER_ID_PREFIX};
pub use crate::geom::{Point, SizeBox, SizeType};
pub use crate::geometry::{crop, fix_view_box, resize, ResizeFilter};
pub use crate::image::Image;
pub use crate::options::{Format, SaveOptions};
pub use crate::size::{
    resolve as resolve_size, resolve_element as resolve_element_size, ASPECT_RATIO_RANGE,
};
pub use crate::units::to_pixels;

/// Decompresses an SVGZ file.
pub fn decompress_svgz(data: &[u8]) -> Result<Vec<u8>, Error> {
    use std::io::Read;

    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut decoded = Vec::with_capacity(data.len() * 2);
    decoder
        .read_to_end(&mut decoded)
        .map_err(|_| Error::MalformedGZip)?;
    Ok(decoded)
}
