//! Inline formatting
//!
//! Renders emphasis, links, images, raw code, super/subscript and line breaks. Children are
//! collected through an [`InlineBuffer`], which decides per emphasis whether the `*…*` / `_…_`
//! shorthand is safe at that position or whether the `#strong[…]` / `#emph[…]` function form
//! is needed. Typst only recognizes the shorthand delimiters at word boundaries, so
//! `*one**two*` or `]*x*` would not compile as intended.

use super::{debug, translate, ElementKind};
use crate::context::Context;
use crate::dom::{Element, Node};
use crate::style::{resolve, Directives};

/// Emphasis kinds with both a shorthand and a function spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emphasis {
    Strong,
    Emph,
}

impl Emphasis {
    fn delimiter(self) -> char {
        match self {
            Emphasis::Strong => '*',
            Emphasis::Emph => '_',
        }
    }

    fn shorthand(self, body: &str) -> String {
        let d = self.delimiter();
        format!("{d}{body}{d}")
    }

    /// A body that starts or ends with the delimiter would merge with it (`**x**`).
    fn fits_shorthand(self, body: &str) -> bool {
        let d = self.delimiter();
        !body.starts_with(d) && !body.ends_with(d)
    }

    fn function(self, body: &str) -> String {
        match self {
            Emphasis::Strong => format!("#strong[{body}]"),
            Emphasis::Emph => format!("#emph[{body}]"),
        }
    }
}

/// Result of rendering one inline element.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Inline {
    Text(String),
    Emphasis(Emphasis, String),
}

impl Inline {
    /// The rendering used when no surrounding text is known.
    pub(crate) fn into_string(self) -> String {
        match self {
            Inline::Text(text) => text,
            Inline::Emphasis(_, body) if is_blank(&body) => body,
            Inline::Emphasis(emphasis, body) if emphasis.fits_shorthand(&body) => {
                emphasis.shorthand(&body)
            }
            Inline::Emphasis(emphasis, body) => emphasis.function(&body),
        }
    }
}

fn is_blank(body: &str) -> bool {
    body.trim().is_empty()
}

/// The last shorthand written to the buffer, kept so it can be respelled if the next text
/// glues onto its closing delimiter.
#[derive(Debug)]
struct Shorthand {
    start: usize,
    emphasis: Emphasis,
    body: String,
}

/// Accumulates one run of inline output.
#[derive(Debug, Default)]
pub(crate) struct InlineBuffer {
    text: String,
    last_shorthand: Option<Shorthand>,
}

impl InlineBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_str(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if let Some(shorthand) = self.last_shorthand.take() {
            if fragment.starts_with(glues_to_delimiter) {
                self.text.truncate(shorthand.start);
                self.text
                    .push_str(&shorthand.emphasis.function(&shorthand.body));
            }
        }
        self.text.push_str(fragment);
    }

    pub(crate) fn push_emphasis(&mut self, emphasis: Emphasis, body: String) {
        if is_blank(&body) {
            self.push_str(&body);
            return;
        }

        let at_boundary = self.text.chars().next_back().map_or(true, |c| !glues_to_delimiter(c));
        if at_boundary && emphasis.fits_shorthand(&body) {
            // A pending shorthand ends in a delimiter, so it cannot be at a boundary.
            self.last_shorthand = None;
            let start = self.text.len();
            self.text.push_str(&emphasis.shorthand(&body));
            self.last_shorthand = Some(Shorthand {
                start,
                emphasis,
                body,
            });
        } else {
            self.push_str(&emphasis.function(&body));
        }
    }

    pub(crate) fn push_inline(&mut self, inline: Inline) {
        match inline {
            Inline::Text(text) => self.push_str(&text),
            Inline::Emphasis(emphasis, body) => self.push_emphasis(emphasis, body),
        }
    }

    /// Translate `node` in inline mode and append it.
    pub(crate) fn push_node(&mut self, node: &Node, ctx: Context) {
        match node {
            Node::Element(element)
                if super::classify(&element.tag) == ElementKind::Inline
                    && !super::too_deep(ctx) =>
            {
                let directives = resolve(&element.attrs);
                self.push_inline(render(element, directives, ctx));
            }
            _ => self.push_str(&translate(node, ctx)),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.text
    }
}

/// Characters that, directly before an opening or after a closing delimiter, stop Typst from
/// reading it as emphasis markup.
fn glues_to_delimiter(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '*' | '_' | ']' | '`' | '\\')
}

/// Translate a sequence of sibling nodes as inline content.
pub(crate) fn children(nodes: &[Node], ctx: Context) -> String {
    let ctx = ctx.descend().as_inline();
    let mut buffer = InlineBuffer::new();
    for node in nodes {
        buffer.push_node(node, ctx);
    }
    buffer.finish()
}

/// Render a recognized inline element.
pub(crate) fn render(element: &Element, directives: Directives, ctx: Context) -> Inline {
    match element.tag.as_str() {
        "strong" | "b" => Inline::Emphasis(Emphasis::Strong, children(&element.children, ctx)),
        "em" | "i" => Inline::Emphasis(Emphasis::Emph, children(&element.children, ctx)),
        "a" => Inline::Text(link(element, ctx)),
        "img" => Inline::Text(image(element, ctx)),
        "code" | "kbd" | "samp" | "tt" => Inline::Text(raw_element(element, ctx)),
        "br" => Inline::Text(line_break(ctx)),
        "sup" => Inline::Text(format!("#super[{}]", children(&element.children, ctx))),
        "sub" => Inline::Text(format!("#sub[{}]", children(&element.children, ctx))),
        // Underline, strikethrough and plain wrappers: styling from attributes only.
        _ => styled(children(&element.children, ctx), directives),
    }
}

/// Apply bold/italic directives to already translated content. Italic sits inside bold.
fn styled(content: String, directives: Directives) -> Inline {
    match (directives.bold, directives.italic) {
        (true, true) => {
            let inner = Inline::Emphasis(Emphasis::Emph, content).into_string();
            Inline::Emphasis(Emphasis::Strong, inner)
        }
        (true, false) => Inline::Emphasis(Emphasis::Strong, content),
        (false, true) => Inline::Emphasis(Emphasis::Emph, content),
        (false, false) => Inline::Text(content),
    }
}

fn link(element: &Element, ctx: Context) -> String {
    let label = children(&element.children, ctx);
    match element.attr("href").map(str::trim).filter(|href| !href.is_empty()) {
        Some(href) if label.trim().is_empty() => {
            format!("#link({}){label}", string_literal(href))
        }
        Some(href) => format!("#link({})[{label}]", string_literal(href)),
        None => label,
    }
}

fn image(element: &Element, ctx: Context) -> String {
    let alt = element.attr("alt").unwrap_or_default();
    match element.attr("src").and_then(|src| debug::image_marker(src, ctx)) {
        Some(marker) if alt.is_empty() => marker,
        Some(marker) => format!("{marker} {alt}"),
        None => alt.to_string(),
    }
}

/// A line break inside the current block. Continuation lines of a list item are indented so
/// they stay inside the item.
pub(crate) fn line_break(ctx: Context) -> String {
    format!("\n{}", " ".repeat(ctx.continuation))
}

/// Inline raw text. Content containing a backtick needs the block form with a delimiter
/// longer than any backtick run inside, and a leading space so the first word is not read as
/// a language tag.
pub(crate) fn raw(text: &str) -> String {
    match longest_backtick_run(text) {
        0 => format!("`{text}`"),
        run => {
            let fence = "`".repeat((run + 1).max(3));
            format!("{fence} {text} {fence}")
        }
    }
}

/// Raw text of a code element, preceded in debug mode by markers for unsupported tags in it.
pub(crate) fn raw_element(element: &Element, ctx: Context) -> String {
    let raw = raw(&element.text_content());
    match debug::nested_markers(element, ctx) {
        Some(markers) => format!("{markers} {raw}"),
        None => raw,
    }
}

pub(crate) fn longest_backtick_run(code: &str) -> usize {
    code.split(|c| c != '`').map(str::len).max().unwrap_or(0)
}

/// Quote `value` as a Typst string literal.
pub(crate) fn string_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
