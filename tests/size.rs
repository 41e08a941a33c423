use svgimage::{Image, SizeBox, SizeType};

macro_rules! test {
    ($name:ident, $attrs:expr, $kind:expr, $width:expr, $height:expr) => {
        #[test]
        fn $name() {
            let text = format!("<svg xmlns='http://www.w3.org/2000/svg' {}><rect/></svg>", $attrs);
            let size = Image::from_str(&text).unwrap().size();
            assert_eq!(size.kind(), $kind);
            assert_eq!((size.width(), size.height()), ($width, $height));
        }
    };
}

test!(absolute_px, "width='100px' height='100px'", SizeType::Absolute, 100, 100);
test!(absolute_units, "width='1in' height='12pt'", SizeType::Absolute, 96, 16);
test!(absolute_ignores_view_box, "width='10' height='20' viewBox='0 0 1 1'", SizeType::Absolute, 10, 20);
test!(absolute_rounding, "width='10.5' height='10.4'", SizeType::Absolute, 11, 10);
test!(width_only, "width='100' viewBox='0 0 200 100'", SizeType::Absolute, 100, 50);
test!(height_only, "height='200' viewBox='0 0 200 100'", SizeType::Absolute, 400, 200);
test!(aspect_ratio, "viewBox='0 0 200 100'", SizeType::AspectRatio, 200, 100);
test!(aspect_ratio_with_relative_size, "width='100%' height='100%' viewBox='0 0 4 3'", SizeType::AspectRatio, 4, 3);
test!(undefined, "", SizeType::None, 300, 150);
test!(undefined_width_only, "width='100'", SizeType::None, 300, 150);
test!(undefined_negative_view_box, "viewBox='0 0 -200 100'", SizeType::None, 300, 150);
test!(undefined_malformed_view_box, "viewBox='0 0 200'", SizeType::None, 300, 150);
test!(undefined_huge_width, "width='1e20' height='5'", SizeType::None, 300, 150);
test!(undefined_zero_size, "width='0' height='0'", SizeType::None, 300, 150);

fn ratio(size: SizeBox) -> f64 {
    size.width() as f64 / size.height() as f64
}

#[test]
fn huge_view_box_keeps_ratio() {
    let image = Image::from_str(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 16e50 9e50'/>",
    )
    .unwrap();

    let size = image.size();
    assert_eq!(size.kind(), SizeType::AspectRatio);
    assert_eq!(size.width(), svgimage::ASPECT_RATIO_RANGE);
    assert!((ratio(size) - 16.0 / 9.0).abs() < 0.001);
}

#[test]
fn tiny_view_box_keeps_ratio() {
    let image = Image::from_str(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 16e-50 9e-50'/>",
    )
    .unwrap();

    let size = image.size();
    assert_eq!(size.kind(), SizeType::AspectRatio);
    assert!((ratio(size) - 16.0 / 9.0).abs() < 0.001);
}

#[test]
fn size_follows_document() {
    let mut image = Image::from_str("<svg xmlns='http://www.w3.org/2000/svg'/>").unwrap();
    assert_eq!(image.size().kind(), SizeType::None);

    let doc = image.document_mut();
    let svg = doc.root_element().unwrap().id();
    doc.set_attribute(svg, svgimage::rwsvgtree::AttributeId::ViewBox, "0 0 3 2");
    assert_eq!(image.size(), SizeBox::aspect_ratio(3, 2).unwrap());
}

#[test]
fn display() {
    assert_eq!(SizeBox::new(10, 20).unwrap().to_string(), "10x20 px");
    assert_eq!(SizeBox::aspect_ratio(16, 9).unwrap().to_string(), "16x9");
    assert_eq!(SizeBox::none().to_string(), "undefined");
}
