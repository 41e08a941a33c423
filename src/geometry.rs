// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resizing and cropping by rewriting the root element geometry.

use rwsvgtree::{AttributeId, Document, ElementId, NodeId, SVG_NS};

use crate::geom::{Point, SizeBox, SizeType};
use crate::size::{self, pixel_attribute};
use crate::Error;

/// A resampling filter.
///
/// Vector images are never resampled, so only [`ResizeFilter::Undefined`] is accepted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[allow(missing_docs)]
pub enum ResizeFilter {
    Undefined,
    Point,
    Box,
    Triangle,
    Hermite,
    Hanning,
    Hamming,
    Blackman,
    Gaussian,
    Quadratic,
    Cubic,
    Catrom,
    Mitchell,
    Lanczos,
    Bessel,
    Sinc,
}

impl Default for ResizeFilter {
    fn default() -> Self {
        ResizeFilter::Undefined
    }
}

/// Resizes a document.
///
/// Absolute sizes set `width` and `height`. Aspect ratio sizes keep only a `viewBox`
/// with the requested ratio. An undefined size removes all of them.
pub fn resize(doc: &mut Document, size: SizeBox, filter: ResizeFilter) -> Result<(), Error> {
    if filter != ResizeFilter::Undefined {
        return Err(Error::InvalidArgument(format!(
            "{:?} resize filter is not supported, use Undefined",
            filter
        )));
    }

    let current = size::resolve(doc);
    if current == size {
        return Ok(());
    }

    let svg = root_id(doc)?;
    fix_view_box(doc, svg);

    match size.kind() {
        SizeType::Absolute => {
            set_size(doc, svg, size);
        }
        SizeType::AspectRatio => {
            if current.kind() != SizeType::None && is_same_ratio(current, size) {
                doc.remove_attribute(svg, AttributeId::Width);
                doc.remove_attribute(svg, AttributeId::Height);
            } else {
                set_size(doc, svg, size);
                crop(doc, Point::new(0, 0), size)?;
            }
        }
        SizeType::None => {
            doc.remove_attribute(svg, AttributeId::Width);
            doc.remove_attribute(svg, AttributeId::Height);
            doc.remove_attribute(svg, AttributeId::ViewBox);
        }
    }

    Ok(())
}

/// Crops a document.
///
/// The current root element is nested into a new `svg` element of the requested size
/// and shifted by the negated `start` position.
pub fn crop(doc: &mut Document, start: Point, size: SizeBox) -> Result<(), Error> {
    let current = size::resolve(doc);

    if start.x < 0 || start.y < 0 {
        return Err(Error::OutOfBounds(format!(
            "crop position must not be negative, got {}",
            start
        )));
    }

    if current.is_bounded() && size.is_bounded() && !current.contains(size, start) {
        return Err(Error::OutOfBounds(format!(
            "a {} region at {} does not fit into a {} image",
            size, start, current
        )));
    }

    if start.is_origin() && current == size {
        return Ok(());
    }

    if current.is_bounded() && size.is_bounded() {
        let absolute = SizeBox::from_valid(current.width(), current.height(), SizeType::Absolute);
        resize(doc, absolute, ResizeFilter::Undefined)?;
    }

    let svg = root_id(doc)?;
    fix_view_box(doc, svg);

    if !start.is_origin() {
        doc.set_attribute(svg, AttributeId::X, &(-start.x).to_string());
        doc.set_attribute(svg, AttributeId::Y, &(-start.y).to_string());
    }

    let outer = doc.create_element(ElementId::Svg.to_str());
    doc.set_raw_attribute(outer, "xmlns", SVG_NS);
    doc.set_attribute(outer, AttributeId::Version, "1.1");
    set_size(doc, outer, size);
    doc.wrap(svg, outer);
    log::debug!("The root element is wrapped into a {} viewport.", size);

    fix_view_box(doc, outer);

    if size.kind() != SizeType::Absolute {
        doc.remove_attribute(outer, AttributeId::Width);
        doc.remove_attribute(outer, AttributeId::Height);
    }

    if size.kind() == SizeType::None {
        doc.remove_attribute(outer, AttributeId::ViewBox);
    }

    Ok(())
}

/// Sets a `viewBox` from the pixel `width` and `height`, unless it is already set.
///
/// Does nothing when the size is not known.
pub fn fix_view_box(doc: &mut Document, svg: NodeId) {
    let node = doc.get(svg);
    if node.has_attribute(AttributeId::ViewBox) {
        return;
    }

    let width = pixel_attribute(node, AttributeId::Width);
    let height = pixel_attribute(node, AttributeId::Height);
    if width > 0 && height > 0 {
        let value = format!("0 0 {} {}", width, height);
        doc.set_attribute(svg, AttributeId::ViewBox, &value);
    }
}

fn root_id(doc: &Document) -> Result<NodeId, Error> {
    doc.root_element().map(|n| n.id()).ok_or(Error::NotAnSvg)
}

fn set_size(doc: &mut Document, svg: NodeId, size: SizeBox) {
    doc.set_attribute(svg, AttributeId::Width, &size.width().to_string());
    doc.set_attribute(svg, AttributeId::Height, &size.height().to_string());
}

// Ratios are equal when one side can be computed from the other.
fn is_same_ratio(a: SizeBox, b: SizeBox) -> bool {
    let (aw, ah) = (a.width() as f64, a.height() as f64);
    let (bw, bh) = (b.width() as f64, b.height() as f64);
    (aw * bh / ah).round() == bw || (ah * bw / aw).round() == bh
}
