//! Node dispatcher
//!
//!     Walks the document tree and turns every node into Typst markup. Text is copied through
//!     untouched; elements are routed by tag name:
//!
//!     | Kind        | Tags                                                    | Handled by         |
//!     |-------------|---------------------------------------------------------|--------------------|
//!     | Block       | `h1`–`h6`, `p`, `div`, `ul`, `ol`, `li`, `blockquote`, `pre`, `hr` | [`block`] |
//!     | Inline      | `strong`, `b`, `em`, `i`, `u`, `s`, `a`, `img`, `code`, `br`, `sup`, `sub`, `span`… | [`inline`] |
//!     | Transparent | `html`, `body`, `main`, `section`…                      | children only      |
//!     | Unknown     | anything else, `script` and `style` included            | children + [`debug`] marker |
//!
//!     A sibling sequence in block position is cut into runs: consecutive inline nodes form one
//!     implicit paragraph, block elements become fragments of their own. Inside a line of text
//!     (headings, paragraphs, list items, links…) block tags are flattened to their content.
//!
//!     Nothing in here can fail. Once the recursion passes [`MAX_NESTING`] levels the remaining
//!     subtree is emitted as raw text gathered with an explicit stack, so pathological nesting
//!     costs formatting but never text.

pub(crate) mod block;
pub(crate) mod debug;
pub(crate) mod inline;

use crate::assemble::{self, join};
use crate::context::Context;
use crate::dom::{Element, Node};
use crate::style::resolve;
use inline::InlineBuffer;
use tracing::{debug, warn};

/// Element levels formatted before falling back to raw text.
pub const MAX_NESTING: usize = 256;

/// Wrapper tags that carry no formatting of their own and are never reported as unsupported.
pub const TRANSPARENT_TAGS: &[&str] = &[
    "html",
    "head",
    "body",
    "main",
    "article",
    "section",
    "header",
    "footer",
    "nav",
    "aside",
    "figure",
    "figcaption",
    "thead",
    "tbody",
    "tfoot",
];

const BLOCK_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "p",
    "div",
    "ul",
    "ol",
    "li",
    "blockquote",
    "pre",
    "hr",
];

const INLINE_TAGS: &[&str] = &[
    "strong", "b", "em", "i", "u", "ins", "s", "strike", "del", "span", "font", "mark", "small",
    "label", "abbr", "cite", "q", "a", "img", "code", "kbd", "samp", "tt", "br", "sup", "sub",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    Block,
    Inline,
    Transparent,
    Unknown,
}

pub(crate) fn classify(tag: &str) -> ElementKind {
    if BLOCK_TAGS.contains(&tag) {
        ElementKind::Block
    } else if INLINE_TAGS.contains(&tag) {
        ElementKind::Inline
    } else if TRANSPARENT_TAGS.contains(&tag) {
        ElementKind::Transparent
    } else {
        ElementKind::Unknown
    }
}

pub(crate) fn too_deep(ctx: Context) -> bool {
    ctx.nesting >= MAX_NESTING
}

/// Raw text of a subtree that lies past the nesting limit.
pub(crate) fn fallback(element: &Element) -> String {
    warn!(
        tag = %element.tag,
        limit = MAX_NESTING,
        "nesting limit reached, emitting raw text"
    );
    element.text_content()
}

/// True when `node` has to be laid out as a block: a block element, or a wrapper (known
/// transparent or unknown) with a block somewhere below it.
pub(crate) fn is_block(node: &Node) -> bool {
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        let Node::Element(element) = node else {
            continue;
        };
        match classify(&element.tag) {
            ElementKind::Block => return true,
            ElementKind::Inline => {}
            ElementKind::Transparent | ElementKind::Unknown => {
                pending.extend(element.children.iter());
            }
        }
    }
    false
}

/// Translate a single node.
///
/// Text is returned unchanged. In block position (`ctx.inline == false`) the result may hold
/// several blocks separated by blank lines.
pub fn translate(node: &Node, ctx: Context) -> String {
    let element = match node {
        Node::Text(payload) => return payload.clone(),
        Node::Element(element) => element,
    };

    if too_deep(ctx) {
        return fallback(element);
    }

    let directives = resolve(&element.attrs);
    match classify(&element.tag) {
        ElementKind::Block if ctx.inline => block::flatten(element, ctx),
        ElementKind::Block => block::format(element, directives, ctx),
        ElementKind::Inline => inline::render(element, directives, ctx).into_string(),
        ElementKind::Transparent => pass_through(element, ctx),
        ElementKind::Unknown => {
            debug!(tag = %element.tag, "passing through unsupported tag");
            let content = pass_through(element, ctx);
            debug::annotate(&element.tag, content, ctx)
        }
    }
}

/// Translate a sibling sequence in block position into block fragments.
pub fn translate_blocks(nodes: &[Node], ctx: Context) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut run = InlineBuffer::new();
    let inline_ctx = ctx.as_inline();

    for node in nodes {
        if is_block(node) {
            flush_run(&mut run, &mut fragments);
            fragments.push(translate(node, ctx));
        } else {
            run.push_node(node, inline_ctx);
        }
    }
    flush_run(&mut run, &mut fragments);

    fragments
}

fn flush_run(run: &mut InlineBuffer, fragments: &mut Vec<String>) {
    let text = std::mem::take(run).finish();
    let paragraph = assemble::paragraph(&text);
    if !paragraph.is_empty() {
        fragments.push(paragraph);
    }
}

/// Children of a wrapper without formatting of its own.
fn pass_through(element: &Element, ctx: Context) -> String {
    if !ctx.inline && element.children.iter().any(is_block) {
        join(translate_blocks(&element.children, ctx.descend()))
    } else {
        inline::children(&element.children, ctx)
    }
}
