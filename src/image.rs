// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use rwsvgtree::{AttributeId, Document, ElementId, WriteOptions, SVG_NS};

use crate::filter::Effects;
use crate::geom::{Point, SizeBox, SizeType};
use crate::geometry::{self, ResizeFilter};
use crate::options::{Format, SaveOptions};
use crate::{Color, Error, Palette};

/// An SVG image.
///
/// Owns its document exclusively. Cloning performs a deep copy.
#[derive(Clone, Debug)]
pub struct Image {
    doc: Document,
    path: Option<PathBuf>,
    palette: Palette,
}

impl Image {
    /// Creates a new empty image.
    ///
    /// Absolute sizes set `width`, `height` and `viewBox`.
    /// Aspect ratio sizes set only the `viewBox`.
    ///
    /// Background colors are not supported.
    pub fn create(size: SizeBox, background: Option<Color>) -> Result<Self, Error> {
        if background.is_some() {
            return Err(Error::InvalidArgument(
                "an SVG image cannot have a background color".to_string(),
            ));
        }

        let mut doc = Document::new();
        let svg = doc.create_element(ElementId::Svg.to_str());
        doc.set_raw_attribute(svg, "xmlns", SVG_NS);
        doc.set_attribute(svg, AttributeId::Version, "1.1");

        if size.kind() == SizeType::Absolute {
            doc.set_attribute(svg, AttributeId::Width, &size.width().to_string());
            doc.set_attribute(svg, AttributeId::Height, &size.height().to_string());
        }

        if size.kind() != SizeType::None {
            let view_box = format!("0 0 {} {}", size.width(), size.height());
            doc.set_attribute(svg, AttributeId::ViewBox, &view_box);
        }

        let root = doc.root().id();
        doc.append(root, svg);

        Ok(Self::from_document(doc))
    }

    /// Opens an image from a file.
    ///
    /// The path is remembered and used by [`Image::save`] when no other path is provided.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let mut image = Self::from_data(&data)?;
        image.path = Some(path.to_path_buf());
        Ok(image)
    }

    /// Loads an image from a reader.
    pub fn read<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_data(&data)
    }

    /// Loads an image from SVG or SVGZ data.
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        if data.starts_with(&[0x1f, 0x8b]) {
            let data = crate::decompress_svgz(data)?;
            let text = std::str::from_utf8(&data).map_err(|_| Error::NotAnUtf8Str)?;
            Self::from_str(text)
        } else {
            let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;
            Self::from_str(text)
        }
    }

    /// Loads an image from an SVG string.
    pub fn from_str(text: &str) -> Result<Self, Error> {
        let doc = Document::parse_str(text)?;
        Ok(Self::from_document(doc))
    }

    /// Creates an image from an existing document.
    pub fn from_document(doc: Document) -> Self {
        Image {
            doc,
            path: None,
            palette: Palette::default(),
        }
    }

    /// Returns the underlying document.
    #[inline]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Returns the underlying document for editing.
    #[inline]
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Returns the path the image was opened from.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns a deep copy of the image.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the current image size.
    ///
    /// Computed from the document each time.
    pub fn size(&self) -> SizeBox {
        crate::size::resolve(&self.doc)
    }

    /// Crops the image.
    pub fn crop(&mut self, start: Point, size: SizeBox) -> Result<&mut Self, Error> {
        geometry::crop(&mut self.doc, start, size)?;
        Ok(self)
    }

    /// Resizes the image.
    pub fn resize(&mut self, size: SizeBox, filter: ResizeFilter) -> Result<&mut Self, Error> {
        geometry::resize(&mut self.doc, size, filter)?;
        Ok(self)
    }

    /// Returns an effects editor.
    pub fn effects(&mut self) -> Effects {
        Effects::new(&mut self.doc)
    }

    /// Removes all comments.
    pub fn strip(&mut self) -> &mut Self {
        let count = self.doc.remove_comments();
        log::debug!("{} comments were removed.", count);
        self
    }

    /// Serializes the image.
    pub fn get(&self, format: Format, opt: &WriteOptions) -> Result<Vec<u8>, Error> {
        let text = self.doc.to_string(opt);
        match format {
            Format::Svg => Ok(text.into_bytes()),
            Format::Svgz => {
                let mut encoder =
                    flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
                encoder.write_all(text.as_bytes())?;
                Ok(encoder.finish()?)
            }
        }
    }

    /// Saves the image to a file.
    ///
    /// When `path` is not set, the path the image was opened from is used.
    pub fn save(&self, path: Option<&Path>, opt: &SaveOptions) -> Result<(), Error> {
        let path = path.or_else(|| self.path()).ok_or(Error::MissingPath)?;

        let format = match opt.format {
            Some(format) => format,
            None => {
                let detected = Format::from_path(path)
                    .or_else(|| self.path().and_then(Format::from_path));
                match detected {
                    Some(format) => format?,
                    None => Format::Svg,
                }
            }
        };

        let data = self.get(format, &opt.write)?;
        std::fs::write(path, data)?;
        log::debug!("Saved to '{}' as {}.", path.display(), format);
        Ok(())
    }

    /// Returns the image palette.
    #[inline]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Sets the image palette.
    ///
    /// Only RGB is supported.
    pub fn use_palette(&mut self, palette: Palette) -> Result<&mut Self, Error> {
        if palette != Palette::Rgb {
            return Err(Error::NotSupported(format!(
                "SVG supports only the RGB palette, got {}",
                palette
            )));
        }

        self.palette = palette;
        Ok(self)
    }

    /// Not supported.
    pub fn paste(&mut self, _image: &Image, _start: Point, _alpha: u8) -> Result<&mut Self, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn rotate(&mut self, _angle: f64, _background: Option<Color>) -> Result<&mut Self, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn flip_horizontally(&mut self) -> Result<&mut Self, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn flip_vertically(&mut self) -> Result<&mut Self, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn draw(&mut self) -> Result<(), Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn apply_mask(&mut self, _mask: &Image) -> Result<&mut Self, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn fill(&mut self, _fill: Color) -> Result<&mut Self, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn mask(&self) -> Result<Image, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn histogram(&self) -> Result<Vec<Color>, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn color_at(&self, _point: Point) -> Result<Color, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn layers(&self) -> Result<Vec<Image>, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn interlace(&mut self, _scheme: &str) -> Result<&mut Self, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn profile(&mut self, _profile: &[u8]) -> Result<&mut Self, Error> {
        Err(Error::not_implemented())
    }

    /// Not supported.
    pub fn font(&self, _path: &Path, _size: u32, _color: Color) -> Result<(), Error> {
        Err(Error::not_implemented())
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.doc.to_string(&WriteOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_absolute() {
        let image = Image::create(SizeBox::new(20, 10).unwrap(), None).unwrap();
        assert_eq!(
            image.to_string(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
             width=\"20\" height=\"10\" viewBox=\"0 0 20 10\"/>"
        );
        assert_eq!(image.size(), SizeBox::new(20, 10).unwrap());
    }

    #[test]
    fn create_with_background() {
        let size = SizeBox::new(20, 10).unwrap();
        let err = Image::create(size, Some(Color::rgb(0.0, 0.0, 0.0))).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn palette() {
        let mut image = Image::create(SizeBox::none(), None).unwrap();
        assert_eq!(image.palette(), Palette::Rgb);
        assert!(image.use_palette(Palette::Rgb).is_ok());
        assert!(matches!(image.use_palette(Palette::Cmyk), Err(Error::NotSupported(_))));
    }

    #[test]
    fn copy_is_independent() {
        let image = Image::create(SizeBox::new(20, 10).unwrap(), None).unwrap();
        let mut copy = image.copy();
        copy.effects().grayscale().unwrap();
        assert_ne!(image.to_string(), copy.to_string());
    }
}
