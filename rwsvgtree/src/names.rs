// Element and attribute names used when editing a document.
//
// Unlike a read-only tree, a mutable document has to keep unknown
// elements and attributes, so names are stored as strings.
// These enums only cover the names we create or query ourselves.

macro_rules! names {
    ($(#[$meta:meta])* $name:ident, $($variant:ident => $value:literal),+ $(,)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[allow(missing_docs)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Returns the name as it appears in XML.
            pub fn to_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Parses a name.
            ///
            /// Matching is case-sensitive, like in SVG.
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(text: &str) -> Option<Self> {
                match text {
                    $($value => Some($name::$variant)),+,
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.to_str())
            }
        }
    };
}

names!(
    /// List of known SVG elements.
    ElementId,
    FeColorMatrix => "feColorMatrix",
    FeComponentTransfer => "feComponentTransfer",
    FeConvolveMatrix => "feConvolveMatrix",
    FeFuncB => "feFuncB",
    FeFuncG => "feFuncG",
    FeFuncR => "feFuncR",
    FeGaussianBlur => "feGaussianBlur",
    Filter => "filter",
    G => "g",
    Svg => "svg",
);

names!(
    /// List of known SVG attributes.
    AttributeId,
    ColorInterpolationFilters => "color-interpolation-filters",
    Divisor => "divisor",
    Exponent => "exponent",
    Filter => "filter",
    Height => "height",
    Id => "id",
    Intercept => "intercept",
    KernelMatrix => "kernelMatrix",
    KernelUnitLength => "kernelUnitLength",
    Order => "order",
    StdDeviation => "stdDeviation",
    Type => "type",
    Values => "values",
    Version => "version",
    ViewBox => "viewBox",
    Width => "width",
    X => "x",
    Y => "y",
);
