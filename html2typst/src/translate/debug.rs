//! Diagnostic comments for debug mode
//!
//! Markers are Typst block comments placed next to the content they describe. They never
//! replace or split that content, and outside debug mode nothing here produces output.

use super::{classify, ElementKind};
use crate::context::Context;
use crate::dom::{Element, Node};

pub(crate) fn unsupported_marker(tag: &str) -> String {
    format!("/* Unsupported tag: {tag} */")
}

/// Put an unsupported-tag marker in front of the translated children of `tag`.
pub(crate) fn annotate(tag: &str, content: String, ctx: Context) -> String {
    if !ctx.debug {
        return content;
    }

    let marker = unsupported_marker(tag);
    if content.is_empty() {
        marker
    } else if ctx.inline {
        format!("{marker} {content}")
    } else {
        format!("{marker}\n{content}")
    }
}

/// Markers for the unsupported tags below `element`, in document order. Code is emitted as raw
/// text, so its markers sit next to it instead of inside.
pub(crate) fn nested_markers(element: &Element, ctx: Context) -> Option<String> {
    if !ctx.debug {
        return None;
    }

    let mut markers = Vec::new();
    let mut pending: Vec<&Node> = element.children.iter().rev().collect();
    while let Some(node) = pending.pop() {
        if let Node::Element(child) = node {
            if classify(&child.tag) == ElementKind::Unknown {
                markers.push(unsupported_marker(&child.tag));
            }
            pending.extend(child.children.iter().rev());
        }
    }
    (!markers.is_empty()).then(|| markers.join(" "))
}

/// Marker naming an image source, so images dropped from the output can be found again.
pub(crate) fn image_marker(src: &str, ctx: Context) -> Option<String> {
    let src = src.trim();
    (ctx.debug && !src.is_empty()).then(|| format!("/* Image: {} */", src.replace("*/", "* /")))
}
