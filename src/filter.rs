// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Raster-like effects expressed as SVG filter primitives.
//!
//! All effects of a document are collected in a single `filter` element,
//! referenced by a group that wraps the whole root element content:
//!
//! ```text
//! <svg>
//!     <g filter="url(#svgimage-filter-0123456789abcdef)">
//!         <filter id="svgimage-filter-0123456789abcdef">
//!             <!-- one primitive per effect, in call order -->
//!         </filter>
//!         <!-- original content -->
//!     </g>
//! </svg>
//! ```
//!
//! When the group `filter` attribute is changed by someone else,
//! the next effect wraps everything into a new group with a new filter.

use std::fmt;

use float_cmp::{ApproxEq, F64Margin};
use rwsvgtree::{AttributeId, Document, ElementId, NodeId, WriteOptions};
use sha2::{Digest, Sha256};

use crate::numbers::{format_number, format_numbers};
use crate::{Color, Error};

/// A prefix of all filter IDs created by this crate.
pub const FILTER_ID_PREFIX: &str = "svgimage-filter-";

/// A filter ID hash length in hex digits.
const HASH_LEN: usize = 16;

#[rustfmt::skip]
const NEGATIVE_MATRIX: &[f64] = &[
    -1.0, 0.0, 0.0, 0.0, 1.0,
    0.0, -1.0, 0.0, 0.0, 1.0,
    0.0, 0.0, -1.0, 0.0, 1.0,
    0.0, 0.0, 0.0, 1.0, 0.0,
];

#[rustfmt::skip]
const SHARPEN_KERNEL: &[f64] = &[
    -0.02, -0.12, -0.02,
    -0.12, 1.56, -0.12,
    -0.02, -0.12, -0.02,
];

/// A convolution kernel.
#[derive(Clone, PartialEq, Debug)]
pub struct Matrix {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl Matrix {
    /// Creates a new matrix.
    ///
    /// Values are in a row-major order. Missing values are set to zero.
    pub fn new(width: u32, height: u32, values: &[f64]) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(
                "matrix dimensions must be positive".to_string(),
            ));
        }

        let len = width as usize * height as usize;
        if values.len() > len {
            return Err(Error::InvalidArgument(format!(
                "a {}x{} matrix cannot hold {} values",
                width,
                height,
                values.len()
            )));
        }

        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidArgument(
                "matrix values must be finite".to_string(),
            ));
        }

        let mut list = values.to_vec();
        list.resize(len, 0.0);

        Ok(Matrix {
            width,
            height,
            values: list,
        })
    }

    /// Returns matrix width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns matrix height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns matrix values in a row-major order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a value at the specified position.
    pub fn value_at(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.values.get((y * self.width + x) as usize).copied()
    }

    /// Returns the sum of all values.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

// A filter primitive that is not yet inserted into a document.
struct Primitive {
    name: ElementId,
    attributes: Vec<(AttributeId, String)>,
    children: Vec<Primitive>,
}

impl Primitive {
    fn new(name: ElementId) -> Self {
        Primitive {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    fn attr(mut self, aid: AttributeId, value: impl Into<String>) -> Self {
        self.attributes.push((aid, value.into()));
        self
    }

    fn child(mut self, child: Primitive) -> Self {
        self.children.push(child);
        self
    }

    // The same transfer function for the R, G and B channels.
    fn component_transfer(func: impl Fn(ElementId) -> Primitive) -> Self {
        Primitive::new(ElementId::FeComponentTransfer)
            .child(func(ElementId::FeFuncR))
            .child(func(ElementId::FeFuncG))
            .child(func(ElementId::FeFuncB))
    }

    fn color_matrix(kind: &str, values: &[f64]) -> Self {
        Primitive::new(ElementId::FeColorMatrix)
            .attr(AttributeId::Type, kind)
            .attr(AttributeId::Values, format_numbers(values))
    }
}

/// An effects editor.
///
/// Each method validates its arguments first and appends exactly one filter primitive
/// on success. A failed call leaves the document untouched.
pub struct Effects<'a> {
    doc: &'a mut Document,
}

impl<'a> Effects<'a> {
    /// Creates a new effects editor for a document.
    pub fn new(doc: &'a mut Document) -> Self {
        Effects { doc }
    }

    /// Applies a gamma correction.
    pub fn gamma(&mut self, correction: f64) -> Result<&mut Self, Error> {
        if !(correction.is_finite() && correction > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "gamma correction must be positive, got {}",
                correction
            )));
        }

        let exponent = 1.0 / correction;
        if !exponent.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "gamma correction {} is too small",
                correction
            )));
        }

        let exponent = format_number(exponent);
        self.append(Primitive::component_transfer(|func| {
            Primitive::new(func)
                .attr(AttributeId::Type, "gamma")
                .attr(AttributeId::Exponent, exponent.clone())
        }))
    }

    /// Inverts the colors.
    pub fn negative(&mut self) -> Result<&mut Self, Error> {
        self.append(Primitive::color_matrix("matrix", NEGATIVE_MATRIX))
    }

    /// Removes the colors.
    pub fn grayscale(&mut self) -> Result<&mut Self, Error> {
        self.append(Primitive::color_matrix("saturate", &[0.0]))
    }

    /// Tints the image with a color.
    ///
    /// Only RGB colors are supported.
    pub fn colorize(&mut self, color: Color) -> Result<&mut Self, Error> {
        let (red, green, blue) = match color {
            Color::Rgb { red, green, blue } => (red, green, blue),
            _ => {
                return Err(Error::NotSupported(
                    "only RGB colors can be used for colorizing".to_string(),
                ))
            }
        };

        let is_channel = |n: f64| n.is_finite() && (0.0..=255.0).contains(&n);
        if !(is_channel(red) && is_channel(green) && is_channel(blue)) {
            return Err(Error::InvalidArgument(format!(
                "color channels must be in a 0..255 range, got {} {} {}",
                red, green, blue
            )));
        }

        #[rustfmt::skip]
        let values = [
            red / 255.0, 0.0, 0.0, 0.0, 0.0,
            0.0, green / 255.0, 0.0, 0.0, 0.0,
            0.0, 0.0, blue / 255.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0, 0.0,
        ];

        self.append(Primitive::color_matrix("matrix", &values))
    }

    /// Sharpens the image.
    pub fn sharpen(&mut self) -> Result<&mut Self, Error> {
        let kernel = Matrix {
            width: 3,
            height: 3,
            values: SHARPEN_KERNEL.to_vec(),
        };

        self.convolve(&kernel)
    }

    /// Blurs the image.
    pub fn blur(&mut self, sigma: f64) -> Result<&mut Self, Error> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "blur sigma must be positive, got {}",
                sigma
            )));
        }

        self.append(
            Primitive::new(ElementId::FeGaussianBlur)
                .attr(AttributeId::StdDeviation, format_number(sigma)),
        )
    }

    /// Blurs the image with the default sigma of 1.
    pub fn blur_default(&mut self) -> Result<&mut Self, Error> {
        self.blur(1.0)
    }

    /// Changes the brightness.
    ///
    /// `amount` must be in a `-100..=100` range.
    pub fn brightness(&mut self, amount: i32) -> Result<&mut Self, Error> {
        if !(-100..=100).contains(&amount) {
            return Err(Error::InvalidArgument(format!(
                "brightness must be in a -100..100 range, got {}",
                amount
            )));
        }

        let intercept = format_number(amount as f64 / 100.0);
        self.append(Primitive::component_transfer(|func| {
            Primitive::new(func)
                .attr(AttributeId::Type, "linear")
                .attr(AttributeId::Intercept, intercept.clone())
        }))
    }

    /// Applies a convolution kernel.
    ///
    /// The kernel is not normalized.
    pub fn convolve(&mut self, matrix: &Matrix) -> Result<&mut Self, Error> {
        let mut fe = Primitive::new(ElementId::FeConvolveMatrix);

        if matrix.width != 3 || matrix.height != 3 {
            fe = fe.attr(
                AttributeId::Order,
                format!("{} {}", matrix.width, matrix.height),
            );
        }

        fe = fe.attr(AttributeId::KernelMatrix, format_numbers(&matrix.values));

        // SVG divides by the kernel sum by default, unless it is zero.
        let sum = matrix.sum();
        let margin = F64Margin {
            epsilon: 1e-9,
            ulps: 4,
        };
        if !sum.approx_eq(0.0, margin) && !sum.approx_eq(1.0, margin) {
            fe = fe.attr(AttributeId::Divisor, "1");
        }

        fe = fe.attr(AttributeId::KernelUnitLength, "1");

        self.append(fe)
    }

    fn append(&mut self, primitive: Primitive) -> Result<&mut Self, Error> {
        let filter = self.resolve_filter()?;
        let prefix = element_prefix(self.doc);
        let fe = self.create_primitive(&primitive, prefix.as_deref());
        self.doc
            .set_attribute(fe, AttributeId::ColorInterpolationFilters, "sRGB");
        self.doc.append(filter, fe);
        Ok(self)
    }

    fn create_primitive(&mut self, primitive: &Primitive, prefix: Option<&str>) -> NodeId {
        let id = self
            .doc
            .create_element(&qualified_name(prefix, primitive.name));
        for (aid, value) in &primitive.attributes {
            self.doc.set_attribute(id, *aid, value);
        }

        for child in &primitive.children {
            let child_id = self.create_primitive(child, prefix);
            self.doc.append(id, child_id);
        }

        id
    }

    // Returns the filter element, creating the wrapper group and the filter if needed.
    fn resolve_filter(&mut self) -> Result<NodeId, Error> {
        let root = self.doc.root_element().ok_or(Error::NotAnSvg)?.id();
        let prefix = element_prefix(self.doc);

        let filter_id = match known_filter_id(self.doc) {
            Some(id) => id,
            None => {
                let id = format!("{}{}", FILTER_ID_PREFIX, content_hash(self.doc));
                log::debug!("Wrapping the document content into a '{}' filter group.", id);

                let group = self.doc.create_element(&qualified_name(prefix.as_deref(), ElementId::G));
                self.doc.move_children(root, group);
                self.doc.append(root, group);
                self.doc
                    .set_attribute(group, AttributeId::Filter, &format!("url(#{})", id));
                id
            }
        };

        let existing = self
            .doc
            .descendants()
            .find(|n| n.has_tag_name(ElementId::Filter) && n.element_id() == filter_id)
            .map(|n| n.id());

        if let Some(id) = existing {
            return Ok(id);
        }

        // The wrapper group is the only root child at this point.
        let group = self
            .doc
            .get(root)
            .first_child()
            .ok_or(Error::NotAnSvg)?
            .id();

        let filter = self
            .doc
            .create_element(&qualified_name(prefix.as_deref(), ElementId::Filter));
        self.doc.set_attribute(filter, AttributeId::Id, &filter_id);
        self.doc.prepend(group, filter);
        Ok(filter)
    }
}

impl fmt::Debug for Effects<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Effects {{ filter: {:?} }}", known_filter_id(&*self.doc))
    }
}

// Returns the filter ID of a wrapper group created by us.
//
// The root element must have a single child, which is a group
// that references a filter with a known ID pattern.
fn known_filter_id(doc: &Document) -> Option<String> {
    let root = doc.root_element()?;
    let mut children = root.children();
    let group = children.next()?;
    if children.next().is_some() || !group.has_tag_name(ElementId::G) {
        return None;
    }

    let value = group.attribute::<&str>(AttributeId::Filter)?;
    let id = value.strip_prefix("url(#")?.strip_suffix(')')?;
    let hash = id.strip_prefix(FILTER_ID_PREFIX)?;
    let is_hash = hash.len() == HASH_LEN
        && hash
            .bytes()
            .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c));

    if is_hash {
        Some(id.to_string())
    } else {
        None
    }
}

// The first 8 bytes of SHA-256 of the current document in hex.
fn content_hash(doc: &Document) -> String {
    let text = doc.to_string(&WriteOptions::default());
    let digest = Sha256::digest(text.as_bytes());
    digest[..HASH_LEN / 2]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

// New elements share the root element prefix, like `svg:g`.
fn element_prefix(doc: &Document) -> Option<String> {
    doc.root_element()
        .and_then(|n| n.prefix())
        .map(|s| s.to_string())
}

fn qualified_name(prefix: Option<&str>, eid: ElementId) -> String {
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, eid),
        None => eid.to_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::parse_str("<svg xmlns='http://www.w3.org/2000/svg'><rect/></svg>").unwrap()
    }

    #[test]
    fn matrix_padding() {
        let m = Matrix::new(2, 2, &[1.0, 2.0]).unwrap();
        assert_eq!(m.values(), &[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(m.value_at(1, 0), Some(2.0));
        assert_eq!(m.value_at(2, 0), None);
    }

    #[test]
    fn matrix_errors() {
        assert!(Matrix::new(0, 2, &[]).is_err());
        assert!(Matrix::new(1, 1, &[1.0, 2.0]).is_err());
        assert!(Matrix::new(1, 1, &[f64::NAN]).is_err());
    }

    #[test]
    fn filter_id_format() {
        let mut doc = doc();
        Effects::new(&mut doc).grayscale().unwrap();
        let id = known_filter_id(&doc).unwrap();
        assert_eq!(id.len(), FILTER_ID_PREFIX.len() + HASH_LEN);
        assert!(id.starts_with(FILTER_ID_PREFIX));
    }

    #[test]
    fn foreign_filter_is_not_known() {
        let doc = Document::parse_str(
            "<svg><g filter='url(#svgimage-filter-0123456789ABCDEF)'/></svg>",
        )
        .unwrap();
        assert_eq!(known_filter_id(&doc), None);

        let doc = Document::parse_str(
            "<svg><g filter='url(#svgimage-filter-0123456789abcdef)'/><g/></svg>",
        )
        .unwrap();
        assert_eq!(known_filter_id(&doc), None);
    }

    #[test]
    fn prefixed_root() {
        let mut doc = Document::parse_str(
            "<svg:svg xmlns:svg='http://www.w3.org/2000/svg'><svg:rect/></svg:svg>",
        )
        .unwrap();
        Effects::new(&mut doc).blur(2.0).unwrap();

        let group = doc.root_element().unwrap().first_child().unwrap();
        assert_eq!(group.tag_name(), Some("svg:g"));
        let filter = group.first_child().unwrap();
        assert_eq!(filter.tag_name(), Some("svg:filter"));
        assert_eq!(
            filter.first_child().unwrap().tag_name(),
            Some("svg:feGaussianBlur")
        );
    }
}
