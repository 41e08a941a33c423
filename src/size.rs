// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use rwsvgtree::{AttributeId, Document, Node};

use crate::geom::{SizeBox, SizeType};
use crate::units::to_pixels;

/// The largest side of a normalized aspect ratio.
pub const ASPECT_RATIO_RANGE: u32 = 65535;

/// Resolves the size of a document from its root element.
///
/// Returns [`SizeType::None`] for an empty document.
pub fn resolve(doc: &Document) -> SizeBox {
    match doc.root_element() {
        Some(svg) => resolve_element(svg),
        None => SizeBox::none(),
    }
}

/// Resolves the size of an `svg` element from its `width`, `height` and `viewBox`.
///
/// Never fails: malformed values are treated as absent.
pub fn resolve_element(svg: Node) -> SizeBox {
    let width = pixel_attribute(svg, AttributeId::Width);
    let height = pixel_attribute(svg, AttributeId::Height);

    if width > 0 && height > 0 {
        return SizeBox::from_valid(width, height, SizeType::Absolute);
    }

    let (vb_width, vb_height) = match view_box_size(svg) {
        Some(v) => v,
        None => return SizeBox::none(),
    };

    if width > 0 {
        let height = round_side(width as f64 / vb_width * vb_height);
        return SizeBox::from_valid(width, height, SizeType::Absolute);
    }

    if height > 0 {
        let width = round_side(height as f64 / vb_height * vb_width);
        return SizeBox::from_valid(width, height, SizeType::Absolute);
    }

    let (width, height) = normalize_aspect_ratio(vb_width, vb_height);
    SizeBox::from_valid(width, height, SizeType::AspectRatio)
}

/// Returns an attribute value converted to whole pixels.
///
/// Returns 0 when the attribute is not set or invalid.
pub(crate) fn pixel_attribute(svg: Node, aid: AttributeId) -> u32 {
    svg.attribute::<&str>(aid).map(to_pixels).unwrap_or(0)
}

fn view_box_size(svg: Node) -> Option<(f64, f64)> {
    let vb = svg.attribute::<svgtypes::ViewBox>(AttributeId::ViewBox)?;
    if vb.w.is_finite() && vb.h.is_finite() {
        Some((vb.w, vb.h))
    } else {
        log::debug!("viewBox {}x{} is too large.", vb.w, vb.h);
        None
    }
}

// Maps a ratio that cannot be represented by two integers onto `1..=65535`.
fn normalize_aspect_ratio(width: f64, height: f64) -> (u32, u32) {
    let range = ASPECT_RATIO_RANGE as f64;
    let is_simple = |n: f64| n.fract() == 0.0 && n <= range;

    if is_simple(width) && is_simple(height) {
        return (width as u32, height as u32);
    }

    if width >= height {
        (ASPECT_RATIO_RANGE, round_side(height / width * range))
    } else {
        (round_side(width / height * range), ASPECT_RATIO_RANGE)
    }
}

// A computed side is never smaller than 1px.
fn round_side(n: f64) -> u32 {
    let n = n.round();
    if n >= 1.0 {
        // Saturating cast.
        n as u32
    } else {
        1
    }
}
