use crate::{Document, Error, NodeId};

const XML_NAMESPACE_NS: &str = "http://www.w3.org/XML/1998/namespace";

impl Document {
    /// Parses a [`Document`] from a string.
    ///
    /// DTD is allowed, so entities are resolved.
    ///
    /// The root element must be `svg`. The name is checked case-insensitively
    /// and without a namespace, since many files in the wild are sloppy about both.
    pub fn parse_str(text: &str) -> Result<Document, Error> {
        let opt = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };

        let xml = roxmltree::Document::parse_with_options(text, opt)?;
        Self::parse_tree(&xml)
    }

    /// Parses a [`Document`] from a [`roxmltree::Document`].
    pub fn parse_tree(xml: &roxmltree::Document) -> Result<Document, Error> {
        if !xml
            .root_element()
            .tag_name()
            .name()
            .eq_ignore_ascii_case("svg")
        {
            return Err(Error::NotAnSvg);
        }

        let mut doc = Document::new();
        let root_id = doc.root().id();
        parse_xml_node_children(xml.root(), root_id, 0, &mut doc)?;
        Ok(doc)
    }
}

fn parse_xml_node_children(
    parent: roxmltree::Node,
    parent_id: NodeId,
    depth: u32,
    doc: &mut Document,
) -> Result<(), Error> {
    // Deeply nested documents are almost certainly malicious.
    if depth > 1024 {
        return Err(roxmltree::Error::NodesLimitReached.into());
    }

    for node in parent.children() {
        match node.node_type() {
            roxmltree::NodeType::Element => {
                let id = parse_element(node, doc);
                doc.append(parent_id, id);
                parse_xml_node_children(node, id, depth + 1, doc)?;
            }
            roxmltree::NodeType::Text => {
                // Text outside the root element is not allowed by XML.
                if !parent.is_root() {
                    let id = doc.create_text(node.text().unwrap_or_default());
                    doc.append(parent_id, id);
                }
            }
            roxmltree::NodeType::Comment => {
                let id = doc.create_comment(node.text().unwrap_or_default());
                doc.append(parent_id, id);
            }
            roxmltree::NodeType::PI => {
                log::debug!("Processing instruction {:?} is skipped.", node.pi());
            }
            roxmltree::NodeType::Root => {}
        }
    }

    Ok(())
}

fn parse_element(node: roxmltree::Node, doc: &mut Document) -> NodeId {
    let tag_name = node.tag_name();
    let name = match tag_name.namespace() {
        Some(ns) if node.default_namespace() != Some(ns) => qualify(node, ns, tag_name.name()),
        _ => tag_name.name().to_string(),
    };

    let id = doc.create_element(&name);

    // Namespaces are resolved by roxmltree, so declarations are not attributes anymore.
    // Write back only the ones introduced by this element.
    let parent = node.parent_element();
    for ns in node.namespaces() {
        if ns.uri() == XML_NAMESPACE_NS {
            continue;
        }

        let inherited = parent
            .map(|p| {
                p.namespaces()
                    .any(|pns| pns.name() == ns.name() && pns.uri() == ns.uri())
            })
            .unwrap_or(false);

        if !inherited {
            let attr_name = match ns.name() {
                Some(prefix) => format!("xmlns:{}", prefix),
                None => "xmlns".to_string(),
            };

            doc.set_raw_attribute(id, &attr_name, ns.uri());
        }
    }

    for attr in node.attributes() {
        let attr_name = match attr.namespace() {
            Some(ns) => qualify(node, ns, attr.name()),
            None => attr.name().to_string(),
        };

        doc.set_raw_attribute(id, &attr_name, attr.value());
    }

    id
}

fn qualify(node: roxmltree::Node, ns: &str, local: &str) -> String {
    let prefix = if ns == XML_NAMESPACE_NS {
        Some("xml")
    } else {
        node.namespaces()
            .find(|v| v.uri() == ns && v.name().is_some())
            .and_then(|v| v.name())
    };

    match prefix {
        Some(prefix) => format!("{}:{}", prefix, local),
        None => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributeId, Document, Error};

    #[test]
    fn parse_simple() {
        let doc = Document::parse_str(
            "<svg xmlns='http://www.w3.org/2000/svg' width='10'><!--c--><rect/>text</svg>",
        )
        .unwrap();

        let svg = doc.root_element().unwrap();
        assert_eq!(svg.tag_name(), Some("svg"));
        assert_eq!(svg.raw_attribute("xmlns"), Some("http://www.w3.org/2000/svg"));
        assert_eq!(svg.attribute::<&str>(AttributeId::Width), Some("10"));

        let kinds: Vec<_> = svg
            .children()
            .map(|n| (n.is_comment(), n.is_element(), n.is_text()))
            .collect();
        assert_eq!(kinds, vec![(true, false, false), (false, true, false), (false, false, true)]);
    }

    #[test]
    fn parse_prefixed() {
        let doc = Document::parse_str(
            "<svg:svg xmlns:svg='http://www.w3.org/2000/svg' \
             xmlns:xlink='http://www.w3.org/1999/xlink'>\
             <svg:use xlink:href='#a' xml:space='preserve'/></svg:svg>",
        )
        .unwrap();

        let svg = doc.root_element().unwrap();
        assert_eq!(svg.tag_name(), Some("svg:svg"));
        assert_eq!(svg.raw_attribute("xmlns:svg"), Some("http://www.w3.org/2000/svg"));

        let child = svg.first_child().unwrap();
        assert_eq!(child.tag_name(), Some("svg:use"));
        assert_eq!(child.raw_attribute("xlink:href"), Some("#a"));
        assert_eq!(child.raw_attribute("xml:space"), Some("preserve"));
        // Declarations are not repeated on children.
        assert!(child.raw_attribute("xmlns:svg").is_none());
    }

    #[test]
    fn parse_entities() {
        let doc = Document::parse_str(
            "<!DOCTYPE svg [<!ENTITY w '42'>]>\
             <svg xmlns='http://www.w3.org/2000/svg' width='&w;'/>",
        )
        .unwrap();

        let svg = doc.root_element().unwrap();
        assert_eq!(svg.raw_attribute("width"), Some("42"));
    }

    #[test]
    fn root_name_is_case_insensitive() {
        assert!(Document::parse_str("<SVG/>").is_ok());
    }

    #[test]
    fn not_an_svg() {
        assert!(matches!(Document::parse_str("<html/>"), Err(Error::NotAnSvg)));
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            Document::parse_str("<svg><g></svg>"),
            Err(Error::ParsingFailed(_))
        ));
    }
}
