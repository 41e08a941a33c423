use std::io::{Read, Write};
use std::path::PathBuf;

use svgimage::{
    Color, Error, ErrorKind, Format, Image, Indent, Point, SaveOptions, SizeBox, SizeType,
    WriteOptions,
};

const SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\">\
                   <!-- comment --><rect width=\"10\" height=\"10\"/></svg>";

fn no_decl() -> WriteOptions {
    WriteOptions {
        declaration: false,
        ..WriteOptions::default()
    }
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn gunzip(data: &[u8]) -> String {
    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut text = String::new();
    decoder.read_to_string(&mut text).unwrap();
    text
}

// A unique path inside a temporary directory.
fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("svgimage-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn from_svgz() {
    let image = Image::from_data(&gzip(SVG.as_bytes())).unwrap();
    assert_eq!(image.size(), SizeBox::new(10, 10).unwrap());
}

#[test]
fn read() {
    let image = Image::read(SVG.as_bytes()).unwrap();
    assert_eq!(image.get(Format::Svg, &no_decl()).unwrap(), SVG.as_bytes());
}

#[test]
fn not_an_svg() {
    let err = Image::from_str("<html/>").unwrap_err();
    assert!(matches!(err, Error::NotAnSvg));
    assert_eq!(err.kind(), ErrorKind::Runtime);
}

#[test]
fn malformed_xml() {
    let err = Image::from_str("<svg><g></svg>").unwrap_err();
    assert!(matches!(err, Error::ParsingFailed(_)));
    assert_eq!(err.kind(), ErrorKind::Runtime);
}

#[test]
fn not_utf8() {
    assert!(matches!(Image::from_data(&[0xff, 0xfe, 0x00]), Err(Error::NotAnUtf8Str)));
}

#[test]
fn malformed_gzip() {
    assert!(matches!(Image::from_data(&[0x1f, 0x8b, 0x00]), Err(Error::MalformedGZip)));
}

#[test]
fn get_svgz() {
    let image = Image::from_str(SVG).unwrap();
    let data = image.get(Format::Svgz, &no_decl()).unwrap();
    assert!(data.starts_with(&[0x1f, 0x8b]));
    assert_eq!(gunzip(&data), SVG);
}

#[test]
fn get_indented() {
    let image = Image::from_str("<svg><g><rect/></g></svg>").unwrap();
    let opt = WriteOptions {
        indent: Indent::Spaces(2),
        ..no_decl()
    };

    let data = image.get(Format::Svg, &opt).unwrap();
    assert_eq!(
        String::from_utf8(data).unwrap(),
        "<svg>\n  <g>\n    <rect/>\n  </g>\n</svg>\n"
    );
}

#[test]
fn format_names() {
    assert_eq!("SVG".parse::<Format>().unwrap(), Format::Svg);
    let err = "png".parse::<Format>().unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert_eq!(err.kind(), ErrorKind::Runtime);
}

#[test]
fn strip() {
    let mut image = Image::from_str(&format!("<!--a-->{}<!--b-->", SVG)).unwrap();
    image.strip();
    assert_eq!(
        String::from_utf8(image.get(Format::Svg, &no_decl()).unwrap()).unwrap(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\">\
         <rect width=\"10\" height=\"10\"/></svg>"
    );
}

#[test]
fn create_aspect_ratio() {
    let image = Image::create(SizeBox::aspect_ratio(4, 3).unwrap(), None).unwrap();
    assert_eq!(
        String::from_utf8(image.get(Format::Svg, &no_decl()).unwrap()).unwrap(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 4 3\"/>"
    );
    assert_eq!(image.size(), SizeBox::aspect_ratio(4, 3).unwrap());
}

#[test]
fn create_undefined() {
    let image = Image::create(SizeBox::none(), None).unwrap();
    assert_eq!(
        String::from_utf8(image.get(Format::Svg, &no_decl()).unwrap()).unwrap(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\"/>"
    );
    assert_eq!(image.size().kind(), SizeType::None);
}

#[test]
fn copy() {
    let image = Image::from_str(SVG).unwrap();
    let mut copy = image.copy();
    copy.resize(SizeBox::new(20, 20).unwrap(), Default::default()).unwrap();
    assert_eq!(image.size(), SizeBox::new(10, 10).unwrap());
    assert_eq!(copy.size(), SizeBox::new(20, 20).unwrap());
}

#[test]
fn save_and_open() {
    let path = temp_path("save_and_open.svg");
    let image = Image::from_str(SVG).unwrap();
    image.save(Some(path.as_path()), &SaveOptions::default()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("<?xml"));

    let mut image = Image::open(&path).unwrap();
    assert_eq!(image.path(), Some(path.as_path()));
    image.resize(SizeBox::new(5, 5).unwrap(), Default::default()).unwrap();
    image.save(None, &SaveOptions::default()).unwrap();

    assert_eq!(Image::open(&path).unwrap().size(), SizeBox::new(5, 5).unwrap());
}

#[test]
fn save_format_from_extension() {
    let path = temp_path("extension.SVGZ");
    let image = Image::from_str(SVG).unwrap();
    image.save(Some(path.as_path()), &SaveOptions::default()).unwrap();

    let data = std::fs::read(&path).unwrap();
    assert!(data.starts_with(&[0x1f, 0x8b]));
}

#[test]
fn save_format_from_opened_path() {
    let src = temp_path("opened.svgz");
    std::fs::write(&src, gzip(SVG.as_bytes())).unwrap();

    let image = Image::open(&src).unwrap();
    let dst = temp_path("opened-copy");
    image.save(Some(dst.as_path()), &SaveOptions::default()).unwrap();

    let data = std::fs::read(&dst).unwrap();
    assert!(data.starts_with(&[0x1f, 0x8b]));
}

#[test]
fn save_explicit_format() {
    let path = temp_path("explicit.svgz");
    let image = Image::from_str(SVG).unwrap();
    let opt = SaveOptions {
        format: Some(Format::Svg),
        write: no_decl(),
    };
    image.save(Some(path.as_path()), &opt).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), SVG);
}

#[test]
fn save_unsupported_extension() {
    let path = temp_path("unsupported.png");
    let image = Image::from_str(SVG).unwrap();
    let err = image.save(Some(path.as_path()), &SaveOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn save_without_path() {
    let image = Image::from_str(SVG).unwrap();
    let err = image.save(None, &SaveOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MissingPath));
}

#[test]
fn open_missing_file() {
    let err = Image::open(temp_path("missing.svg")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn unsupported_operations() {
    let mut image = Image::from_str(SVG).unwrap();
    let other = image.copy();
    let black = Color::rgb(0.0, 0.0, 0.0);

    let mut errors = vec![
        image.paste(&other, Point::new(0, 0), 100).map(|_| ()).unwrap_err(),
        image.rotate(90.0, None).map(|_| ()).unwrap_err(),
        image.flip_horizontally().map(|_| ()).unwrap_err(),
        image.flip_vertically().map(|_| ()).unwrap_err(),
        image.draw().unwrap_err(),
        image.apply_mask(&other).map(|_| ()).unwrap_err(),
        image.fill(black).map(|_| ()).unwrap_err(),
        image.interlace("line").map(|_| ()).unwrap_err(),
        image.profile(&[]).map(|_| ()).unwrap_err(),
    ];
    errors.push(image.mask().map(|_| ()).unwrap_err());
    errors.push(image.histogram().map(|_| ()).unwrap_err());
    errors.push(image.color_at(Point::new(1, 1)).map(|_| ()).unwrap_err());
    errors.push(image.layers().map(|_| ()).unwrap_err());
    errors.push(image.font(&temp_path("font.ttf"), 12, black).unwrap_err());

    for err in errors {
        assert_eq!(err.kind(), ErrorKind::NotSupported);
    }

    assert_eq!(image.to_string(), other.to_string());
}

#[test]
fn display() {
    let image = Image::from_str(SVG).unwrap();
    assert_eq!(
        image.to_string(),
        format!("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>{}", SVG)
    );
}
