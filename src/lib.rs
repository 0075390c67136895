// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgprim` compiles an SVG document into a tree of drawing primitives.

Only a fixed set of elements and attributes is supported. Attribute names are
converted to camel-case, `px` units are removed, `style` attributes are split
into separate attributes and everything that is not explicitly allowed is dropped.

The resulting [`Tree`] does not draw anything by itself.
It's up to a host surface to map each node into drawing calls.

```
let svg = "<svg viewBox='0 0 10 10'><circle cx='5' cy='5' r='4' style='fill:red'/></svg>";
let tree = svgprim::render(svg, &svgprim::Options::default()).unwrap();

let circle = tree.root().child_nodes().next().unwrap();
assert_eq!(circle.attribute(svgprim::AttributeId::Fill), Some("red"));
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

pub mod attributes;
mod compiler;
mod error;
mod extract;
mod loader;
#[rustfmt::skip] mod names;
mod options;
mod tree;
mod walker;
mod whitelist;

pub use error::Error;
pub use extract::extract_svg;
pub use loader::{FetchFn, HrefResolverFn, LoadFn, Loader, Source};
pub use names::{AttributeId, ElementId};
pub use options::Options;
pub use tree::*;
pub use whitelist::COMMON_ATTRIBUTES;

pub use roxmltree;

impl Tree {
    /// Compiles a `Tree` from a text that contains an SVG.
    ///
    /// The text can contain anything around the `svg` element,
    /// like an XML declaration or an HTML markup.
    pub fn from_str(text: &str, opt: &Options) -> Result<Self, Error> {
        let svg = extract_svg(text).ok_or(Error::NoSvgElement)?;
        let doc = roxmltree::Document::parse(&svg)?;
        Self::from_xmltree(&doc, opt)
    }

    /// Compiles a `Tree` from a `roxmltree::Document`.
    ///
    /// The root element must be `svg`.
    pub fn from_xmltree(doc: &roxmltree::Document, opt: &Options) -> Result<Self, Error> {
        compiler::compile_document(doc, opt)
    }
}

/// Compiles a `Tree` from a text that contains an SVG.
///
/// Unlike [`Tree::from_str`], errors are logged and no tree is returned.
pub fn render(text: &str, opt: &Options) -> Option<Tree> {
    match Tree::from_str(text, opt) {
        Ok(tree) => Some(tree),
        Err(e) => {
            log::warn!("Failed to compile an SVG cause {}.", e);
            None
        }
    }
}
