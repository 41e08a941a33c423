use xmlwriter::{Indent, XmlWriter};

use crate::{Document, Node, NodeKind};

impl Document {
    /// Writes the document back to a string.
    pub fn to_string(&self, opt: &WriteOptions) -> String {
        let mut xml = XmlWriter::new(xmlwriter::Options {
            use_single_quote: opt.use_single_quote,
            indent: opt.indent,
            attributes_indent: opt.attributes_indent,
        });

        if opt.declaration {
            xml.write_declaration();
        }

        let mut preserve = false;
        for node in self.root().children() {
            // Text outside the root element cannot be written.
            if !node.is_text() {
                write_node(node, opt, &mut preserve, &mut xml);
            }
        }

        xml.end_document()
    }
}

/// XML writing options.
#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    /// Write the `<?xml ...?>` declaration.
    ///
    /// Default: enabled
    pub declaration: bool,

    /// Use single quote marks instead of double quote.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <rect fill="red"/>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <rect fill='red'/>
    /// ```
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Set XML nodes indention.
    ///
    /// With `Indent::None` the existing whitespace text is written as is,
    /// so the output is as close to the input as possible.
    /// Otherwise, whitespace-only text nodes are dropped and the tree is re-indented.
    ///
    /// Elements with text content are never re-indented.
    ///
    /// Default: `Indent::None`
    pub indent: Indent,

    /// Set XML attributes indention.
    ///
    /// # Examples
    ///
    /// `Indent::Spaces(2)`
    ///
    /// Before:
    ///
    /// ```text
    /// <svg>
    ///     <rect fill="red" stroke="black"/>
    /// </svg>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <svg>
    ///     <rect
    ///       fill="red"
    ///       stroke="black"/>
    /// </svg>
    /// ```
    ///
    /// Default: `None`
    pub attributes_indent: Indent,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            declaration: true,
            use_single_quote: false,
            indent: Indent::None,
            attributes_indent: Indent::None,
        }
    }
}

fn write_node(node: Node, opt: &WriteOptions, preserve: &mut bool, xml: &mut XmlWriter) {
    match node.d.kind {
        NodeKind::Element {
            ref tag_name,
            ref attributes,
        } => {
            xml.start_element(tag_name);
            for attr in attributes {
                xml.write_attribute(&attr.name, &escape_attribute(&attr.value));
            }

            let outer_preserve = *preserve;
            if !outer_preserve && has_text_content(node) {
                *preserve = true;
                xml.set_preserve_whitespaces(true);
            }

            for child in node.children() {
                write_node(child, opt, preserve, xml);
            }

            xml.end_element();

            if !outer_preserve && *preserve {
                *preserve = false;
                xml.set_preserve_whitespaces(false);
            }
        }
        NodeKind::Text(ref text) => {
            if *preserve || opt.indent == Indent::None || !is_blank(text) {
                // `XmlWriter` escapes only `<`.
                xml.write_text(&text.replace('&', "&amp;"));
            }
        }
        NodeKind::Comment(ref text) => {
            xml.write_comment(text);
        }
        NodeKind::Root => {}
    }
}

fn has_text_content(node: Node) -> bool {
    node.children()
        .any(|c| c.is_text() && !c.text().map(is_blank).unwrap_or(true))
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_whitespace())
}

// `XmlWriter` escapes only quotes.
fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;")
}
