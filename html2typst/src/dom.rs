//! Owned document tree
//!
//!     The translator walks a small, owned tree instead of the parser's reference counted DOM.
//!     The tree keeps exactly what translation needs: element tag names, their attributes in
//!     source order and an ordered child list; text is a leaf. Comments, doctypes and
//!     processing instructions are dropped while converting.
//!
//!     Parsing is delegated to `html5ever`, which recovers from malformed markup the same way a
//!     browser does (unclosed tags, stray end tags, misnested formatting). Conversion from the
//!     `RcDom` and every whole-subtree walk here use an explicit stack, so deeply nested editor
//!     output never grows the call stack.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::io::Read;

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with its tag name, attributes (in source order) and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Value of the first attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated payload of every text node below this element, in document order.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Text(payload) => text.push_str(payload),
                Node::Element(element) => stack.extend(element.children.iter().rev()),
            }
        }
        text
    }

    /// First direct child element with the given tag.
    pub fn child_element(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            Node::Element(element) if element.tag == tag => Some(element),
            _ => None,
        })
    }
}

// Dropping a deep tree through the derived glue recurses once per level.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

impl Node {
    pub fn text(payload: impl Into<String>) -> Self {
        Node::Text(payload.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// True for text nodes made only of whitespace (source indentation between tags).
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Node::Text(payload) if payload.trim().is_empty())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Parse an HTML string into the top-level nodes of the document.
///
/// The parser always synthesizes the `html`, `head` and `body` wrappers, so the result is
/// normally a single `html` element.
pub fn parse_html(source: &str) -> Vec<Node> {
    let dom = parse_document(RcDom::default(), Default::default()).one(source);
    convert(&dom.document)
}

/// Parse HTML read from `reader` as UTF-8 (invalid sequences are replaced).
pub fn parse_html_from_reader<R: Read>(reader: &mut R) -> std::io::Result<Vec<Node>> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(reader)?;
    Ok(convert(&dom.document))
}

struct Frame {
    handle: Handle,
    next: usize,
    element: Option<Element>,
    children: Vec<Node>,
}

impl Frame {
    fn new(handle: Handle, element: Option<Element>) -> Self {
        Self {
            handle,
            next: 0,
            element,
            children: Vec::new(),
        }
    }
}

/// Convert the children of an `RcDom` handle into owned nodes.
fn convert(root: &Handle) -> Vec<Node> {
    let mut stack = vec![Frame::new(root.clone(), None)];

    while let Some(top) = stack.last_mut() {
        let child = top.handle.children.borrow().get(top.next).cloned();
        let Some(child) = child else {
            let Some(mut frame) = stack.pop() else { break };
            let children = std::mem::take(&mut frame.children);
            match (frame.element.take(), stack.last_mut()) {
                (Some(mut element), Some(parent)) => {
                    element.children = children;
                    parent.children.push(Node::Element(element));
                }
                _ => return children,
            }
            continue;
        };
        top.next += 1;

        match &child.data {
            NodeData::Text { contents } => {
                top.children.push(Node::Text(contents.borrow().to_string()));
            }
            NodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                let element = Element {
                    tag: name.local.to_string(),
                    attrs: attrs
                        .borrow()
                        .iter()
                        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                        .collect(),
                    children: Vec::new(),
                };
                // Template children live in a separate fragment.
                let source = template_contents
                    .borrow()
                    .clone()
                    .unwrap_or_else(|| child.clone());
                stack.push(Frame::new(source, Some(element)));
            }
            _ => {}
        }
    }

    Vec::new()
}
