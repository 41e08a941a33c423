/*!
Represents an [SVG](https://www.w3.org/TR/SVG11/Overview.html) document as a mutable tree.

`rwsvgtree` uses [`roxmltree`](https://github.com/RazrFalcon/roxmltree) for parsing,
but unlike `roxmltree` the resulting tree can be edited: nodes can be created,
moved, wrapped and detached, and attributes can be changed.
The tree can be written back to a string using [`xmlwriter`].

Unknown elements, attributes, comments and text are preserved,
so a document survives a parse-write cycle mostly unchanged.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

use std::str::FromStr;

#[rustfmt::skip] mod names;
mod parse;
mod write;

pub use names::{AttributeId, ElementId};
pub use write::WriteOptions;

pub use roxmltree;
pub use svgtypes;
pub use xmlwriter::Indent;

/// The SVG namespace.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// The root element is not `svg`.
    NotAnSvg,

    /// Failed to parse an XML.
    ParsingFailed(roxmltree::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnSvg => {
                write!(f, "the root element is not 'svg'")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A mutable SVG tree container.
///
/// All nodes are stored in a single arena. Detached nodes stay in the arena
/// until the document is dropped, but are no longer reachable from the root.
///
/// Cloning a document produces a deep copy that shares nothing with the original.
#[derive(Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Creates an empty document.
    ///
    /// The document contains only the root node.
    pub fn new() -> Self {
        Document {
            nodes: vec![NodeData::new(NodeKind::Root)],
        }
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> Node {
        self.get(NodeId::new(0))
    }

    /// Returns the root element.
    ///
    /// Only an empty document has no root element.
    #[inline]
    pub fn root_element(&self) -> Option<Node> {
        self.root().first_element_child()
    }

    /// Returns an iterator over document's descendant nodes.
    ///
    /// Shorthand for `doc.root().descendants()`.
    #[inline]
    pub fn descendants(&self) -> Descendants {
        self.root().descendants()
    }

    /// Returns a node by ID.
    ///
    /// # Panics
    ///
    /// When `id` belongs to a different document.
    #[inline]
    pub fn get(&self, id: NodeId) -> Node {
        Node {
            id,
            d: &self.nodes[id.get_usize()],
            doc: self,
        }
    }

    #[inline]
    fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.get_usize()]
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(NodeData::new(kind));
        id
    }

    /// Creates a new detached element.
    ///
    /// `tag_name` is a qualified name, like `g` or `svg:g`.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag_name: tag_name.to_string(),
            attributes: Vec::new(),
        })
    }

    /// Creates a new detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Creates a new detached comment node.
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Comment(text.to_string()))
    }

    /// Appends `child` to the end of the `parent` children list.
    ///
    /// `child` is detached from its current position first.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(!self.get(parent).ancestors().any(|n| n.id == child));

        self.detach(child);

        let last = self.nodes[parent.get_usize()].last_child;
        {
            let d = self.data_mut(child);
            d.parent = Some(parent);
            d.prev_sibling = last;
        }

        match last {
            Some(last) => self.data_mut(last).next_sibling = Some(child),
            None => self.data_mut(parent).first_child = Some(child),
        }

        self.data_mut(parent).last_child = Some(child);
    }

    /// Inserts `child` at the start of the `parent` children list.
    ///
    /// `child` is detached from its current position first.
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
        match self.nodes[parent.get_usize()].first_child {
            Some(first) if first != child => self.insert_before(first, child),
            Some(_) => {}
            None => self.append(parent, child),
        }
    }

    /// Inserts `node` right before `sibling`.
    ///
    /// `node` is detached from its current position first.
    /// Does nothing when `sibling` is detached itself.
    pub fn insert_before(&mut self, sibling: NodeId, node: NodeId) {
        if sibling == node {
            return;
        }

        let parent = match self.nodes[sibling.get_usize()].parent {
            Some(parent) => parent,
            None => return,
        };

        debug_assert!(!self.get(parent).ancestors().any(|n| n.id == node));

        self.detach(node);

        let prev = self.nodes[sibling.get_usize()].prev_sibling;
        {
            let d = self.data_mut(node);
            d.parent = Some(parent);
            d.prev_sibling = prev;
            d.next_sibling = Some(sibling);
        }

        self.data_mut(sibling).prev_sibling = Some(node);

        match prev {
            Some(prev) => self.data_mut(prev).next_sibling = Some(node),
            None => self.data_mut(parent).first_child = Some(node),
        }
    }

    /// Removes a node from its parent.
    ///
    /// The node keeps its own children, so it can be inserted back later.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let d = &self.nodes[id.get_usize()];
            (d.parent, d.prev_sibling, d.next_sibling)
        };

        let parent = match parent {
            Some(parent) => parent,
            None => return,
        };

        {
            let p = self.data_mut(parent);
            if p.first_child == Some(id) {
                p.first_child = next;
            }

            if p.last_child == Some(id) {
                p.last_child = prev;
            }
        }

        if let Some(prev) = prev {
            self.data_mut(prev).next_sibling = next;
        }

        if let Some(next) = next {
            self.data_mut(next).prev_sibling = prev;
        }

        let d = self.data_mut(id);
        d.parent = None;
        d.prev_sibling = None;
        d.next_sibling = None;
    }

    /// Replaces `node` with `wrapper` and makes `node` the last child of `wrapper`.
    pub fn wrap(&mut self, node: NodeId, wrapper: NodeId) {
        self.detach(wrapper);
        self.insert_before(node, wrapper);
        self.append(wrapper, node);
    }

    /// Moves all `from` children to the end of the `to` children list, preserving their order.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        while let Some(child) = self.nodes[from.get_usize()].first_child {
            self.append(to, child);
        }
    }

    /// Sets a known attribute.
    pub fn set_attribute(&mut self, id: NodeId, aid: AttributeId, value: &str) {
        self.set_raw_attribute(id, aid.to_str(), value);
    }

    /// Sets an attribute by its qualified name.
    ///
    /// An existing attribute keeps its position. Does nothing for non-element nodes.
    pub fn set_raw_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element {
            ref mut attributes, ..
        } = self.data_mut(id).kind
        {
            match attributes.iter_mut().find(|a| a.name == name) {
                Some(attr) => attr.value = value.to_string(),
                None => attributes.push(Attribute {
                    name: name.to_string(),
                    value: value.to_string(),
                }),
            }
        }
    }

    /// Removes a known attribute and returns its value.
    pub fn remove_attribute(&mut self, id: NodeId, aid: AttributeId) -> Option<String> {
        self.remove_raw_attribute(id, aid.to_str())
    }

    /// Removes an attribute by its qualified name and returns its value.
    pub fn remove_raw_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        if let NodeKind::Element {
            ref mut attributes, ..
        } = self.data_mut(id).kind
        {
            let idx = attributes.iter().position(|a| a.name == name)?;
            Some(attributes.remove(idx).value)
        } else {
            None
        }
    }

    /// Removes all comments, including the ones outside the root element.
    ///
    /// Returns the number of removed comments.
    pub fn remove_comments(&mut self) -> usize {
        let ids: Vec<NodeId> = self
            .descendants()
            .filter(|n| n.is_comment())
            .map(|n| n.id())
            .collect();

        for id in &ids {
            self.detach(*id);
        }

        ids.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        if !self.root().has_children() {
            return write!(f, "Document []");
        }

        macro_rules! writeln_indented {
            ($depth:expr, $f:expr, $fmt:expr) => {
                for _ in 0..$depth { write!($f, "    ")?; }
                writeln!($f, $fmt)?;
            };
            ($depth:expr, $f:expr, $fmt:expr, $($arg:tt)*) => {
                for _ in 0..$depth { write!($f, "    ")?; }
                writeln!($f, $fmt, $($arg)*)?;
            };
        }

        fn print_children(
            parent: Node,
            depth: usize,
            f: &mut std::fmt::Formatter,
        ) -> Result<(), std::fmt::Error> {
            for child in parent.children() {
                if child.is_element() {
                    writeln_indented!(depth, f, "Element {{");
                    writeln_indented!(depth, f, "    tag_name: {:?}", child.tag_name());

                    if !child.attributes().is_empty() {
                        writeln_indented!(depth + 1, f, "attributes: [");
                        for attr in child.attributes() {
                            writeln_indented!(depth + 2, f, "{:?}", attr);
                        }
                        writeln_indented!(depth + 1, f, "]");
                    }

                    if child.has_children() {
                        writeln_indented!(depth, f, "    children: [");
                        print_children(child, depth + 2, f)?;
                        writeln_indented!(depth, f, "    ]");
                    }

                    writeln_indented!(depth, f, "}}");
                } else {
                    writeln_indented!(depth, f, "{:?}", child);
                }
            }

            Ok(())
        }

        writeln!(f, "Document [")?;
        print_children(self.root(), 1, f)?;
        writeln!(f, "]")?;

        Ok(())
    }
}

/// A node ID.
///
/// Valid only for the document that created it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn new(id: u32) -> Self {
        NodeId(id)
    }

    #[inline]
    fn get_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(id: usize) -> Self {
        debug_assert!(id <= core::u32::MAX as usize);
        NodeId::new(id as u32)
    }
}

#[derive(Clone, Debug)]
enum NodeKind {
    Root,
    Element {
        tag_name: String,
        attributes: Vec<Attribute>,
    },
    Text(String),
    Comment(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    kind: NodeKind,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        NodeData {
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            kind,
        }
    }
}

/// An attribute.
#[derive(Clone, PartialEq)]
pub struct Attribute {
    /// Attribute's qualified name.
    pub name: String,
    /// Attribute's value.
    pub value: String,
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "Attribute {{ name: {:?}, value: {:?} }}",
            self.name, self.value
        )
    }
}

/// A read-only view of a node.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    id: NodeId,
    doc: &'a Document,
    d: &'a NodeData,
}

impl Eq for Node<'_> {}

impl PartialEq for Node<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.doc, other.doc)
    }
}

impl<'a> Node<'a> {
    /// Returns node's ID.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Checks if the current node is the root node.
    #[inline]
    pub fn is_root(&self) -> bool {
        matches!(self.d.kind, NodeKind::Root)
    }

    /// Checks if the current node is an element.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.d.kind, NodeKind::Element { .. })
    }

    /// Checks if the current node is a text.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.d.kind, NodeKind::Text(_))
    }

    /// Checks if the current node is a comment.
    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self.d.kind, NodeKind::Comment(_))
    }

    /// Returns node's document.
    #[inline]
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Returns element's qualified tag name, unless the current node is not an element.
    #[inline]
    pub fn tag_name(&self) -> Option<&'a str> {
        match self.d.kind {
            NodeKind::Element { ref tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    /// Returns element's tag name without a prefix.
    #[inline]
    pub fn local_name(&self) -> Option<&'a str> {
        let name = self.tag_name()?;
        Some(match name.find(':') {
            Some(idx) => &name[idx + 1..],
            None => name,
        })
    }

    /// Returns element's tag name prefix, if any.
    #[inline]
    pub fn prefix(&self) -> Option<&'a str> {
        let name = self.tag_name()?;
        name.find(':').map(|idx| &name[..idx])
    }

    /// Checks that the element has a specified local name.
    #[inline]
    pub fn has_tag_name(&self, eid: ElementId) -> bool {
        self.local_name() == Some(eid.to_str())
    }

    /// Returns element's `id` attribute value.
    ///
    /// Returns an empty string otherwise.
    #[inline]
    pub fn element_id(&self) -> &'a str {
        self.attribute(AttributeId::Id).unwrap_or("")
    }

    /// Parses an attribute value.
    #[inline]
    pub fn attribute<T: FromValue<'a>>(&self, aid: AttributeId) -> Option<T> {
        let value = self.raw_attribute(aid.to_str())?;
        match T::parse(*self, aid, value) {
            Some(v) => Some(v),
            None => {
                log::warn!("Failed to parse {} value: '{}'.", aid, value);
                None
            }
        }
    }

    /// Returns an attribute value by its qualified name.
    #[inline]
    pub fn raw_attribute(&self, name: &str) -> Option<&'a str> {
        self.attributes()
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Checks if an attribute is present.
    #[inline]
    pub fn has_attribute(&self, aid: AttributeId) -> bool {
        self.raw_attribute(aid.to_str()).is_some()
    }

    /// Returns a list of all element's attributes.
    #[inline]
    pub fn attributes(&self) -> &'a [Attribute] {
        match self.d.kind {
            NodeKind::Element { ref attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Returns text or comment content.
    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        match self.d.kind {
            NodeKind::Text(ref text) | NodeKind::Comment(ref text) => Some(text),
            _ => None,
        }
    }

    /// Returns a parent node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.d.parent.map(|id| self.doc.get(id))
    }

    /// Returns the parent element.
    #[inline]
    pub fn parent_element(&self) -> Option<Self> {
        self.ancestors().skip(1).find(|n| n.is_element())
    }

    /// Returns the previous sibling.
    #[inline]
    pub fn prev_sibling(&self) -> Option<Self> {
        self.d.prev_sibling.map(|id| self.doc.get(id))
    }

    /// Returns the next sibling.
    #[inline]
    pub fn next_sibling(&self) -> Option<Self> {
        self.d.next_sibling.map(|id| self.doc.get(id))
    }

    /// Returns the first child.
    #[inline]
    pub fn first_child(&self) -> Option<Self> {
        self.d.first_child.map(|id| self.doc.get(id))
    }

    /// Returns the first child element.
    #[inline]
    pub fn first_element_child(&self) -> Option<Self> {
        self.children().find(|n| n.is_element())
    }

    /// Returns the last child.
    #[inline]
    pub fn last_child(&self) -> Option<Self> {
        self.d.last_child.map(|id| self.doc.get(id))
    }

    /// Checks if the node has child nodes.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.d.first_child.is_some()
    }

    /// Returns an iterator over ancestor nodes starting at this node.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors(Some(*self))
    }

    /// Returns an iterator over children nodes.
    #[inline]
    pub fn children(&self) -> Children<'a> {
        Children {
            front: self.first_child(),
            back: self.last_child(),
        }
    }

    #[inline]
    fn traverse(&self) -> Traverse<'a> {
        Traverse {
            root: *self,
            edge: None,
        }
    }

    /// Returns an iterator over this node and its descendants.
    #[inline]
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants(self.traverse())
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self.d.kind {
            NodeKind::Root => write!(f, "Root"),
            NodeKind::Element { ref tag_name, .. } => {
                write!(
                    f,
                    "Element {{ tag_name: {:?}, attributes: {:?} }}",
                    tag_name,
                    self.attributes()
                )
            }
            NodeKind::Text(ref text) => write!(f, "Text({:?})", text),
            NodeKind::Comment(ref text) => write!(f, "Comment({:?})", text),
        }
    }
}

/// An iterator over ancestor nodes.
#[derive(Clone, Debug)]
pub struct Ancestors<'a>(Option<Node<'a>>);

impl<'a> Iterator for Ancestors<'a> {
    type Item = Node<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.0.take();
        self.0 = node.as_ref().and_then(Node::parent);
        node
    }
}

/// An iterator over children nodes.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    front: Option<Node<'a>>,
    back: Option<Node<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.front.take();
        if self.front == self.back {
            self.back = None;
        } else {
            self.front = node.as_ref().and_then(Node::next_sibling);
        }
        node
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Edge<'a> {
    Open(Node<'a>),
    Close(Node<'a>),
}

#[derive(Clone, Debug)]
struct Traverse<'a> {
    root: Node<'a>,
    edge: Option<Edge<'a>>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = Edge<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.edge {
            Some(Edge::Open(node)) => {
                self.edge = Some(match node.first_child() {
                    Some(first_child) => Edge::Open(first_child),
                    None => Edge::Close(node),
                });
            }
            Some(Edge::Close(node)) => {
                if node == self.root {
                    self.edge = None;
                } else if let Some(next_sibling) = node.next_sibling() {
                    self.edge = Some(Edge::Open(next_sibling));
                } else {
                    self.edge = node.parent().map(Edge::Close);
                }
            }
            None => {
                self.edge = Some(Edge::Open(self.root));
            }
        }

        self.edge
    }
}

/// A descendants iterator.
#[derive(Clone, Debug)]
pub struct Descendants<'a>(Traverse<'a>);

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for edge in &mut self.0 {
            if let Edge::Open(node) = edge {
                return Some(node);
            }
        }

        None
    }
}

/// A trait for parsing attribute values.
pub trait FromValue<'a>: Sized {
    /// Parses an attribute value.
    ///
    /// When `None` is returned, the attribute value will be logged as a parsing failure.
    fn parse(node: Node<'a>, aid: AttributeId, value: &'a str) -> Option<Self>;
}

impl<'a> FromValue<'a> for &'a str {
    #[inline]
    fn parse(_: Node, _: AttributeId, value: &'a str) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromValue<'a> for f64 {
    fn parse(_: Node, _: AttributeId, value: &str) -> Option<Self> {
        svgtypes::Number::from_str(value).ok().map(|v| v.0)
    }
}

impl<'a> FromValue<'a> for svgtypes::ViewBox {
    fn parse(_: Node, _: AttributeId, value: &str) -> Option<Self> {
        Self::from_str(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let svg = doc.create_element("svg");
        let a = doc.create_element("a");
        let b = doc.create_element("b");
        doc.append(doc.root().id(), svg);
        doc.append(svg, a);
        doc.append(svg, b);
        (doc, svg, a, b)
    }

    fn names(doc: &Document, id: NodeId) -> Vec<&str> {
        doc.get(id)
            .children()
            .map(|n| n.tag_name().unwrap_or("#"))
            .collect()
    }

    #[test]
    fn append_and_prepend() {
        let (mut doc, svg, _, _) = sample();
        let c = doc.create_element("c");
        doc.prepend(svg, c);
        assert_eq!(names(&doc, svg), vec!["c", "a", "b"]);

        // Appending an attached node moves it.
        doc.append(svg, c);
        assert_eq!(names(&doc, svg), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_before_first() {
        let (mut doc, svg, a, _) = sample();
        let c = doc.create_element("c");
        doc.insert_before(a, c);
        assert_eq!(names(&doc, svg), vec!["c", "a", "b"]);
        assert_eq!(doc.get(a).prev_sibling().and_then(|n| n.tag_name()), Some("c"));
    }

    #[test]
    fn detach_middle_and_last() {
        let (mut doc, svg, a, b) = sample();
        let c = doc.create_element("c");
        doc.append(svg, c);

        doc.detach(b);
        assert_eq!(names(&doc, svg), vec!["a", "c"]);
        assert!(doc.get(b).parent().is_none());

        doc.detach(c);
        assert_eq!(names(&doc, svg), vec!["a"]);
        assert_eq!(doc.get(svg).last_child().map(|n| n.id()), Some(a));
    }

    #[test]
    fn wrap_node() {
        let (mut doc, svg, a, _) = sample();
        let g = doc.create_element("g");
        doc.wrap(a, g);
        assert_eq!(names(&doc, svg), vec!["g", "b"]);
        assert_eq!(names(&doc, g), vec!["a"]);
    }

    #[test]
    fn move_children_keeps_order() {
        let (mut doc, svg, _, _) = sample();
        let g = doc.create_element("g");
        doc.move_children(svg, g);
        doc.append(svg, g);
        assert_eq!(names(&doc, svg), vec!["g"]);
        assert_eq!(names(&doc, g), vec!["a", "b"]);
    }

    #[test]
    fn attributes() {
        let (mut doc, svg, _, _) = sample();
        doc.set_attribute(svg, AttributeId::Width, "10");
        doc.set_attribute(svg, AttributeId::Height, "20");
        doc.set_attribute(svg, AttributeId::Width, "30");

        let node = doc.get(svg);
        assert_eq!(node.attributes()[0].name, "width");
        assert_eq!(node.attribute::<f64>(AttributeId::Width), Some(30.0));
        assert!(node.attribute::<svgtypes::ViewBox>(AttributeId::Width).is_none());

        assert_eq!(doc.remove_attribute(svg, AttributeId::Height), Some("20".to_string()));
        assert_eq!(doc.remove_attribute(svg, AttributeId::Height), None);
        assert!(!doc.get(svg).has_attribute(AttributeId::Height));
    }

    #[test]
    fn remove_comments() {
        let (mut doc, svg, a, _) = sample();
        let c1 = doc.create_comment("one");
        let c2 = doc.create_comment("two");
        doc.prepend(doc.root().id(), c1);
        doc.append(a, c2);
        assert_eq!(doc.remove_comments(), 2);
        assert!(!doc.descendants().any(|n| n.is_comment()));
        assert_eq!(names(&doc, svg), vec!["a", "b"]);
    }

    #[test]
    fn clone_is_deep() {
        let (doc, svg, _, _) = sample();
        let mut copy = doc.clone();
        copy.set_attribute(svg, AttributeId::Width, "1");
        assert!(!doc.get(svg).has_attribute(AttributeId::Width));
    }

    #[test]
    fn view_box_attribute() {
        let (mut doc, svg, _, _) = sample();
        doc.set_attribute(svg, AttributeId::ViewBox, "0,0 20 10");
        let vb = doc
            .get(svg)
            .attribute::<svgtypes::ViewBox>(AttributeId::ViewBox)
            .unwrap();
        assert_eq!((vb.x, vb.y, vb.w, vb.h), (0.0, 0.0, 20.0, 10.0));

        doc.set_attribute(svg, AttributeId::ViewBox, "0 0 -20 10");
        assert!(doc.get(svg).attribute::<svgtypes::ViewBox>(AttributeId::ViewBox).is_none());
    }

    #[test]
    fn local_name_and_prefix() {
        let mut doc = Document::new();
        let svg = doc.create_element("svg:svg");
        let node = doc.get(svg);
        assert_eq!(node.local_name(), Some("svg"));
        assert_eq!(node.prefix(), Some("svg"));
        assert!(node.has_tag_name(ElementId::Svg));
    }
}
