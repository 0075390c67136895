// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use crate::attributes::{enabled, normalize_name, split_style, strip_units};
use crate::tree::{
    Attributes, Child, Container, ContainerKind, Node, NodeKey, Placeholder, Shape, ShapeKind,
};
use crate::{walker, AttributeId, ElementId, Error, Options, Tree};

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub(crate) const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const XML_NAMESPACE_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// The maximum elements nesting depth, not counting the root element.
pub(crate) const MAX_DEPTH: usize = 1024;

/// A compilation state.
///
/// Lives for a single compilation call, so node keys start from zero
/// for each tree.
pub(crate) struct State<'a> {
    pub(crate) opt: &'a Options,
    next_key: u32,
}

impl<'a> State<'a> {
    fn new(opt: &'a Options) -> Self {
        State { opt, next_key: 0 }
    }

    fn next_key(&mut self) -> NodeKey {
        let key = NodeKey::new(self.next_key);
        self.next_key += 1;
        key
    }
}

/// An element with resolved attributes and compiled children.
pub(crate) struct Element<'a, 'input> {
    pub(crate) xml: roxmltree::Node<'a, 'input>,
    tag_name: ElementId,
    key: NodeKey,
    attributes: Attributes,
    pub(crate) children: Vec<Child>,
}

/// An opened XML element.
pub(crate) enum Opened<'a, 'input> {
    /// A supported element, which children must be compiled next.
    Element(Element<'a, 'input>),
    /// An unsupported element. Its subtree is ignored.
    Placeholder(Node),
}

type CompileFn = fn(Element<'_, '_>, &Options) -> Node;

pub(crate) fn compile_document(doc: &roxmltree::Document, opt: &Options) -> Result<Tree, Error> {
    let root = doc.root_element();
    if parse_tag_name(root) != Some(ElementId::Svg) {
        return Err(Error::NoSvgElement);
    }

    let mut state = State::new(opt);
    let root = walker::compile_tree(root, &mut state)?;
    Ok(Tree { root })
}

pub(crate) fn parse_tag_name(node: roxmltree::Node) -> Option<ElementId> {
    if !node.is_element() {
        return None;
    }

    match node.tag_name().namespace() {
        None | Some(SVG_NS) => {}
        _ => return None,
    }

    ElementId::from_str(node.tag_name().name())
}

/// Assigns a key to an element and resolves its attributes.
///
/// Unsupported elements become placeholders.
pub(crate) fn open_element<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    state: &mut State,
) -> Opened<'a, 'input> {
    let key = state.next_key();

    let tag_name = match parse_tag_name(node) {
        Some(id) => id,
        None => {
            log::debug!("Unsupported element '{}'. Skipped.", node.tag_name().name());
            return Opened::Placeholder(Node::Placeholder(Placeholder {
                key,
                tag_name: node.tag_name().name().to_string(),
            }));
        }
    };

    Opened::Element(Element {
        xml: node,
        tag_name,
        key,
        attributes: resolve_attributes(node, tag_name, state.opt),
        children: Vec::new(),
    })
}

/// Builds a node from an element with compiled children.
pub(crate) fn finish_element(element: Element, opt: &Options) -> Node {
    compiler(element.tag_name)(element, opt)
}

fn compiler(tag_name: ElementId) -> CompileFn {
    match tag_name {
        ElementId::Svg => compile_svg,
        ElementId::G => |e, _| container(ContainerKind::Group, e),
        ElementId::Defs => |e, _| container(ContainerKind::Defs, e),
        ElementId::LinearGradient => |e, _| container(ContainerKind::LinearGradient, e),
        ElementId::RadialGradient => |e, _| container(ContainerKind::RadialGradient, e),
        ElementId::Stop => |e, _| container(ContainerKind::Stop, e),
        ElementId::Circle => |e, _| shape(ShapeKind::Circle, e),
        ElementId::Rect => |e, _| shape(ShapeKind::Rect, e),
        ElementId::Line => |e, _| shape(ShapeKind::Line, e),
        ElementId::Ellipse => |e, _| shape(ShapeKind::Ellipse, e),
        ElementId::Polygon => |e, _| shape(ShapeKind::Polygon, e),
        ElementId::Polyline => |e, _| shape(ShapeKind::Polyline, e),
        ElementId::Text => |e, _| shape(ShapeKind::Text, e),
        ElementId::Path => compile_path,
        ElementId::Tspan => compile_tspan,
        ElementId::Use => compile_use,
    }
}

fn container(kind: ContainerKind, e: Element) -> Node {
    Node::Container(Container {
        kind,
        key: e.key,
        attributes: e.attributes,
        children: e.children,
    })
}

fn shape(kind: ShapeKind, e: Element) -> Node {
    Node::Shape(Shape {
        kind,
        key: e.key,
        attributes: e.attributes,
        children: e.children,
    })
}

fn compile_svg(mut e: Element, opt: &Options) -> Node {
    if let Some(width) = opt.width() {
        e.attributes.insert(AttributeId::Width, width);
    }

    if let Some(height) = opt.height() {
        e.attributes.insert(AttributeId::Height, height);
    }

    container(ContainerKind::Svg, e)
}

fn compile_path(mut e: Element, opt: &Options) -> Node {
    // Unlike other elements, a path receives the fill color
    // even when it was explicitly set to `none`.
    if let Some(fill) = opt.fill() {
        e.attributes.insert(AttributeId::Fill, fill);
    }

    shape(ShapeKind::Path, e)
}

fn compile_use(mut e: Element, _: &Options) -> Node {
    let href = e
        .xml
        .attribute((XLINK_NS, "href"))
        .or_else(|| e.xml.attribute("href"));

    if let Some(href) = href {
        let href = href.trim();
        if svgtypes::IRI::from_str(href).is_err() {
            log::debug!("'use' references a non-local resource '{}'.", href);
        }

        e.attributes.insert(AttributeId::Href, href);
    }

    // `use` is always rendered without children.
    e.children.clear();

    shape(ShapeKind::Use, e)
}

fn compile_tspan(mut e: Element, _: &Options) -> Node {
    if let Some(y) = e.attributes.get(AttributeId::Y) {
        if let Some(y) = fix_tspan_y(e.xml, y) {
            e.attributes.insert(AttributeId::Y, &y);
        }
    }

    shape(ShapeKind::TSpan, e)
}

/// Converts an absolute `tspan` vertical position into an offset
/// from the nearest positioned `text` or `tspan` ancestor.
fn fix_tspan_y(node: roxmltree::Node, y: &str) -> Option<String> {
    let y = parse_number(y)?;

    let base = node
        .ancestors()
        .skip(1)
        .filter(|n| matches!(parse_tag_name(*n), Some(ElementId::Text | ElementId::Tspan)))
        .find_map(|n| n.attribute("y"))?;
    let base = parse_number(strip_units(base))?;

    let offset = y - base;
    if !offset.is_finite() {
        return None;
    }

    Some(format_number(offset))
}

fn parse_number(text: &str) -> Option<f64> {
    svgtypes::Number::from_str(text).ok().map(|n| n.0)
}

fn format_number(n: f64) -> String {
    // Hide floating point noise, like 20.299999999999997,
    // by keeping 12 significant digits.
    let n = format!("{:.11e}", n).parse::<f64>().unwrap_or(n);
    if n == 0.0 {
        // Avoid `-0`.
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Resolves element attributes.
///
/// Attributes are applied in the following order, each step overriding the previous one:
///
/// 1. The fill color from options, when `fill_all` is set.
/// 2. Authored attributes.
/// 3. Declarations from the `style` attribute.
///
/// Only attributes allowed on the element are kept.
pub(crate) fn resolve_attributes(
    node: roxmltree::Node,
    tag_name: ElementId,
    opt: &Options,
) -> Attributes {
    let fill = opt.fill();
    let mut attributes = Attributes::new();

    if let Some(fill) = fill {
        if opt.fill_all {
            attributes.insert(AttributeId::Fill, fill);
        }
    }

    for attr in node.attributes() {
        let name = qualified_name(node, &attr);
        if name == "style" {
            continue;
        }

        let aid = match enabled(&normalize_name(&name), tag_name) {
            Some(aid) => aid,
            None => {
                log::trace!("Attribute '{}' is not allowed on '{}'. Skipped.", name, tag_name);
                continue;
            }
        };

        let value = strip_units(attr.value());
        attributes.insert(aid, fill_value(aid, value, fill));
    }

    if let Some(style) = node.attribute("style") {
        for (aid, value) in split_style(style) {
            if !tag_name.allows(aid) {
                log::trace!("Property '{}' is not allowed on '{}'. Skipped.", aid, tag_name);
                continue;
            }

            let value = strip_units(value);
            attributes.insert(aid, fill_value(aid, value, fill));
        }
    }

    attributes
}

/// Replaces an authored fill with the one from options, unless it's `none`.
#[inline]
fn fill_value<'a>(aid: AttributeId, value: &'a str, fill: Option<&'a str>) -> &'a str {
    match fill {
        Some(fill) if aid == AttributeId::Fill && value != "none" => fill,
        _ => value,
    }
}

/// Returns an attribute name as authored, including a namespace prefix.
fn qualified_name(node: roxmltree::Node, attr: &roxmltree::Attribute) -> String {
    let prefix = match attr.namespace() {
        None => return attr.name().to_string(),
        Some(XLINK_NS) => Some("xlink"),
        Some(XML_NAMESPACE_NS) => Some("xml"),
        Some(ns) => node.lookup_prefix(ns),
    };

    match prefix {
        Some(prefix) => format!("{}:{}", prefix, attr.name()),
        None => attr.name().to_string(),
    }
}
