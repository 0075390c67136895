// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::compiler::{self, Element, Opened, State, MAX_DEPTH};
use crate::tree::{Child, Node};
use crate::Error;

/// An element whose children are being compiled.
struct Frame<'a, 'input: 'a> {
    element: Element<'a, 'input>,
    next: Option<roxmltree::Node<'a, 'input>>,
}

impl<'a, 'input: 'a> Frame<'a, 'input> {
    fn new(element: Element<'a, 'input>) -> Self {
        let next = element.xml.first_child();
        Frame { element, next }
    }

    fn advance(&mut self) -> Option<roxmltree::Node<'a, 'input>> {
        let node = self.next?;
        self.next = node.next_sibling();
        Some(node)
    }

    fn finish(mut self, state: &State) -> Node {
        let children = std::mem::take(&mut self.element.children);
        self.element.children = trim_children(children);
        compiler::finish_element(self.element, state.opt)
    }
}

/// Compiles an element and its subtree.
///
/// Children are compiled before their parent, in document order.
/// Text nodes are kept as is. Comments and processing instructions are ignored.
///
/// The walk uses an explicit stack, so the nesting depth is limited
/// only by `MAX_DEPTH`.
pub(crate) fn compile_tree(root: roxmltree::Node, state: &mut State) -> Result<Node, Error> {
    let mut current = match compiler::open_element(root, state) {
        Opened::Element(element) => Frame::new(element),
        Opened::Placeholder(node) => return Ok(node),
    };
    let mut parents: Vec<Frame> = Vec::new();

    loop {
        match current.advance() {
            Some(node) if node.is_element() => {
                if parents.len() + 1 > MAX_DEPTH {
                    return Err(Error::NestingLimitReached);
                }

                match compiler::open_element(node, state) {
                    Opened::Element(element) => {
                        let parent = std::mem::replace(&mut current, Frame::new(element));
                        parents.push(parent);
                    }
                    Opened::Placeholder(node) => current.element.children.push(Child::Node(node)),
                }
            }
            Some(node) if node.is_text() => {
                if let Some(text) = node.text() {
                    current.element.children.push(Child::Text(text.to_string()));
                }
            }
            Some(_) => {}
            None => {
                let node = current.finish(state);
                match parents.pop() {
                    Some(parent) => {
                        current = parent;
                        current.element.children.push(Child::Node(node));
                    }
                    None => return Ok(node),
                }
            }
        }
    }
}

/// Removes children without a meaningful content, like indentation between elements.
fn trim_children(mut children: Vec<Child>) -> Vec<Child> {
    children.retain(|child| match child {
        Child::Text(ref text) => !text.trim().is_empty(),
        Child::Node(_) => true,
    });
    children
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_removed() {
        let children = vec![
            Child::Text("\n    ".to_string()),
            Child::Text(String::new()),
            Child::Text(" Hello ".to_string()),
            Child::Text("\t".to_string()),
        ];

        let children = trim_children(children);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].as_text(), Some(" Hello "));
    }

    #[test]
    fn nodes_are_kept() {
        let placeholder = Node::Placeholder(crate::tree::Placeholder {
            key: crate::tree::NodeKey::new(0),
            tag_name: "foo".to_string(),
        });

        let children = trim_children(vec![Child::Node(placeholder), Child::Text(" ".to_string())]);
        assert_eq!(children.len(), 1);
        assert!(children[0].as_node().unwrap().is_placeholder());
    }
}
