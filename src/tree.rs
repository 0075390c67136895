// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::{AttributeId, ElementId};

/// A compiled primitives tree.
///
/// The root node is always produced from the `svg` element.
#[derive(Clone)]
pub struct Tree {
    pub(crate) root: Node,
}

impl Tree {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Takes the root node out of the tree.
    #[inline]
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Returns an iterator over all nodes in the tree, in document order.
    ///
    /// Shorthand for `tree.root().descendants()`.
    #[inline]
    pub fn descendants(&self) -> Descendants<'_> {
        self.root.descendants()
    }

    /// Returns the first node with the specified `id` attribute.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.descendants()
            .find(|n| n.attribute(AttributeId::Id) == Some(id))
    }

    /// Writes the tree as indented text.
    ///
    /// Each node is written on its own line, followed by its attributes.
    /// Node keys are included when `keys` is set.
    pub fn to_text(&self, keys: bool) -> String {
        let mut s = String::new();
        write_node(&self.root, 0, keys, &mut s);
        s
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.to_text(false))
    }
}

fn write_node(node: &Node, depth: usize, keys: bool, s: &mut String) {
    write_indent(depth, s);

    match node {
        Node::Placeholder(ref p) => {
            s.push_str("placeholder ");
            s.push_str(&p.tag_name);
        }
        _ => {
            if let Some(tag_name) = node.tag_name() {
                s.push_str(tag_name.to_str());
            }
        }
    }

    if keys {
        // Writing into a `String` cannot fail.
        let _ = write!(s, " #{}", node.key().get());
    }

    for (aid, value) in node.attributes().iter() {
        let _ = write!(s, " {}={:?}", aid, value);
    }

    s.push('\n');

    for child in node.children() {
        match child {
            Child::Node(ref n) => write_node(n, depth + 1, keys, s),
            Child::Text(ref text) => {
                write_indent(depth + 1, s);
                let _ = writeln!(s, "{:?}", text);
            }
        }
    }
}

fn write_indent(depth: usize, s: &mut String) {
    for _ in 0..depth {
        s.push_str("    ");
    }
}

/// A node identity inside a single tree.
///
/// Keys are assigned sequentially during compilation, starting from zero,
/// and are unique within a tree.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeKey(u32);

impl NodeKey {
    #[inline]
    pub(crate) fn new(n: u32) -> Self {
        NodeKey(n)
    }

    /// Returns the key value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

/// A list of resolved node attributes.
///
/// Contains only attributes allowed on the node's element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Attributes(BTreeMap<AttributeId, String>);

static EMPTY_ATTRIBUTES: Attributes = Attributes(BTreeMap::new());

impl Attributes {
    #[inline]
    pub(crate) fn new() -> Self {
        Attributes(BTreeMap::new())
    }

    #[inline]
    pub(crate) fn insert(&mut self, aid: AttributeId, value: &str) {
        self.0.insert(aid, value.to_string());
    }

    /// Returns an attribute value.
    #[inline]
    pub fn get(&self, aid: AttributeId) -> Option<&str> {
        self.0.get(&aid).map(String::as_str)
    }

    /// Checks if an attribute is present.
    #[inline]
    pub fn contains(&self, aid: AttributeId) -> bool {
        self.0.contains_key(&aid)
    }

    /// Returns the number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if there are no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over attributes, ordered by ID.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, &str)> {
        self.0.iter().map(|(aid, value)| (*aid, value.as_str()))
    }
}

/// A container kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum ContainerKind {
    Svg,
    Group,
    Defs,
    LinearGradient,
    RadialGradient,
    Stop,
}

impl ContainerKind {
    /// Returns the source element.
    pub fn tag_name(&self) -> ElementId {
        match self {
            ContainerKind::Svg => ElementId::Svg,
            ContainerKind::Group => ElementId::G,
            ContainerKind::Defs => ElementId::Defs,
            ContainerKind::LinearGradient => ElementId::LinearGradient,
            ContainerKind::RadialGradient => ElementId::RadialGradient,
            ContainerKind::Stop => ElementId::Stop,
        }
    }
}

/// A shape kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum ShapeKind {
    Circle,
    Rect,
    Line,
    Ellipse,
    Polygon,
    Polyline,
    Path,
    Text,
    TSpan,
    Use,
}

impl ShapeKind {
    /// Returns the source element.
    pub fn tag_name(&self) -> ElementId {
        match self {
            ShapeKind::Circle => ElementId::Circle,
            ShapeKind::Rect => ElementId::Rect,
            ShapeKind::Line => ElementId::Line,
            ShapeKind::Ellipse => ElementId::Ellipse,
            ShapeKind::Polygon => ElementId::Polygon,
            ShapeKind::Polyline => ElementId::Polyline,
            ShapeKind::Path => ElementId::Path,
            ShapeKind::Text => ElementId::Text,
            ShapeKind::TSpan => ElementId::Tspan,
            ShapeKind::Use => ElementId::Use,
        }
    }
}

/// A structural node: the root, a group, definitions or a paint server.
#[derive(Clone, Debug)]
pub struct Container {
    pub(crate) kind: ContainerKind,
    pub(crate) key: NodeKey,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<Child>,
}

impl Container {
    /// Returns the container kind.
    #[inline]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Returns the node key.
    #[inline]
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// Returns resolved attributes.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns children in document order.
    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

/// A drawable node.
///
/// `text` and `tspan` shapes can contain text and `tspan` children.
/// Other shapes usually have none.
#[derive(Clone, Debug)]
pub struct Shape {
    pub(crate) kind: ShapeKind,
    pub(crate) key: NodeKey,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<Child>,
}

impl Shape {
    /// Returns the shape kind.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the node key.
    #[inline]
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// Returns resolved attributes.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns children in document order.
    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

/// An inert stand-in for an unsupported element.
#[derive(Clone, Debug)]
pub struct Placeholder {
    pub(crate) key: NodeKey,
    pub(crate) tag_name: String,
}

impl Placeholder {
    /// Returns the node key.
    #[inline]
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// Returns the name of the element this placeholder stands for.
    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }
}

/// A primitives tree node.
#[derive(Clone, Debug)]
#[allow(missing_docs)]
pub enum Node {
    Container(Container),
    Shape(Shape),
    Placeholder(Placeholder),
}

impl Node {
    /// Returns the node key.
    #[inline]
    pub fn key(&self) -> NodeKey {
        match self {
            Node::Container(ref c) => c.key,
            Node::Shape(ref s) => s.key,
            Node::Placeholder(ref p) => p.key,
        }
    }

    /// Returns the source element, unless this is a placeholder.
    #[inline]
    pub fn tag_name(&self) -> Option<ElementId> {
        match self {
            Node::Container(ref c) => Some(c.kind.tag_name()),
            Node::Shape(ref s) => Some(s.kind.tag_name()),
            Node::Placeholder(_) => None,
        }
    }

    /// Checks if the current node is a placeholder.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Node::Placeholder(_))
    }

    /// Returns resolved attributes.
    ///
    /// Placeholders have no attributes.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Container(ref c) => &c.attributes,
            Node::Shape(ref s) => &s.attributes,
            Node::Placeholder(_) => &EMPTY_ATTRIBUTES,
        }
    }

    /// Returns an attribute value.
    #[inline]
    pub fn attribute(&self, aid: AttributeId) -> Option<&str> {
        self.attributes().get(aid)
    }

    /// Returns children in document order.
    #[inline]
    pub fn children(&self) -> &[Child] {
        match self {
            Node::Container(ref c) => &c.children,
            Node::Shape(ref s) => &s.children,
            Node::Placeholder(_) => &[],
        }
    }

    /// Returns an iterator over child nodes, skipping text.
    #[inline]
    pub fn child_nodes(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.children().iter().filter_map(Child::as_node)
    }

    /// Returns an iterator over this node and its descendants, in document order.
    #[inline]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Returns the concatenated text of this node and its descendants.
    pub fn text(&self) -> String {
        let mut s = String::new();
        collect_text(self, &mut s);
        s
    }
}

fn collect_text(node: &Node, s: &mut String) {
    for child in node.children() {
        match child {
            Child::Node(ref n) => collect_text(n, s),
            Child::Text(ref text) => s.push_str(text),
        }
    }
}

/// A node child.
#[derive(Clone, Debug)]
pub enum Child {
    /// A compiled element.
    Node(Node),
    /// A text content, as authored.
    Text(String),
}

impl Child {
    /// Returns the child as a node.
    #[inline]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(ref n) => Some(n),
            Child::Text(_) => None,
        }
    }

    /// Returns the child as a text.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Node(_) => None,
            Child::Text(ref text) => Some(text),
        }
    }
}

/// An iterator over a node and its descendants.
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push in reverse to preserve the document order.
        self.stack.extend(node.child_nodes().rev());
        Some(node)
    }
}
