//! Block formatting
//!
//! Headings, paragraphs and generic containers, lists, quotes, code blocks and rules. Each
//! function returns one block fragment without surrounding blank lines; the caller joins
//! fragments. [`flatten`] is the degraded form used when a block tag turns up inside a line of
//! text.

use super::inline::{self, line_break, longest_backtick_run, InlineBuffer};
use super::{
    classify, debug, fallback, is_block, too_deep, translate, translate_blocks, ElementKind,
};
use crate::assemble::{join, paragraph};
use crate::context::{Context, ListKind};
use crate::dom::{Element, Node};
use crate::style::{resolve, Directives};

/// Width of one list indentation level.
const INDENT: &str = "  ";

/// Format a block element in block position.
pub(crate) fn format(element: &Element, directives: Directives, ctx: Context) -> String {
    match element.tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => heading(element, ctx),
        "ul" | "ol" => list(element, list_kind(&element.tag), ctx),
        "li" => item(element, directives, ctx),
        "blockquote" => blockquote(element, ctx),
        "pre" => code_block(element, ctx),
        "hr" => "#line(length: 100%)".to_string(),
        // p, div
        _ => align(container(element, ctx), directives),
    }
}

/// Render a block element found inside a line of text. Lists keep their item lines, code
/// becomes inline raw text, everything else is reduced to its content followed by a line
/// break.
pub(crate) fn flatten(element: &Element, ctx: Context) -> String {
    match element.tag.as_str() {
        "ul" | "ol" => {
            let lines = list(element, list_kind(&element.tag), ctx);
            if lines.is_empty() {
                lines
            } else {
                format!("\n{lines}{}", line_break(ctx))
            }
        }
        "pre" => inline::raw_element(element, ctx),
        "hr" => String::new(),
        _ => {
            let content = inline::children(&element.children, ctx);
            if content.trim().is_empty() {
                content
            } else {
                content + &line_break(ctx)
            }
        }
    }
}

fn list_kind(tag: &str) -> ListKind {
    match tag {
        "ol" => ListKind::Ordered,
        "ul" => ListKind::Unordered,
        _ => ListKind::None,
    }
}

fn is_list(tag: &str) -> bool {
    matches!(tag, "ul" | "ol")
}

fn heading(element: &Element, ctx: Context) -> String {
    let level = element.tag[1..].parse::<usize>().unwrap_or(1);
    let content = paragraph(&inline::children(&element.children, ctx));
    if content.is_empty() {
        return content;
    }
    format!("{} {content}", "=".repeat(level))
}

/// Inline content of a `p` or `div`, or the joined blocks when it holds block children.
fn container(element: &Element, ctx: Context) -> String {
    if !ctx.inline && element.children.iter().any(is_block) {
        join(translate_blocks(&element.children, ctx.descend()))
    } else {
        paragraph(&inline::children(&element.children, ctx))
    }
}

fn align(content: String, directives: Directives) -> String {
    match directives.aligned() {
        Some(alignment) if !content.is_empty() => {
            format!("#align({})[{content}]", alignment.keyword())
        }
        _ => content,
    }
}

/// Item lines of a `ul` or `ol`. The container itself emits nothing.
fn list(element: &Element, kind: ListKind, ctx: Context) -> String {
    if too_deep(ctx) {
        return fallback(element);
    }

    let ctx = ctx.descend().with_list(ctx.list.entering(kind));
    list_lines(&element.children, ctx)
}

/// Item lines for the children of a list, or of a wrapper inside one.
fn list_lines(children: &[Node], ctx: Context) -> String {
    let pad = INDENT.repeat(ctx.list.depth);
    let mut lines = Vec::new();

    for child in children {
        let line = match child {
            node if node.is_blank_text() => continue,
            Node::Element(child) if child.tag == "li" => item(child, resolve(&child.attrs), ctx),
            // A list directly inside a list belongs one level deeper.
            Node::Element(child) if is_list(&child.tag) => {
                let nested = ctx.with_list(ctx.list.nested_under(ctx.list.depth));
                list(child, list_kind(&child.tag), nested)
            }
            Node::Element(wrapper) if wraps_items(wrapper) => wrapped_items(wrapper, ctx),
            node if is_block(node) => translate(node, ctx).trim_matches('\n').to_string(),
            node => {
                let text = paragraph(&translate(node, ctx.as_inline()));
                if text.is_empty() {
                    text
                } else {
                    format!("{pad}{text}")
                }
            }
        };
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// True for a `div` or an unformatted wrapper holding items or lists of its own.
fn wraps_items(element: &Element) -> bool {
    let wrapper = element.tag == "div"
        || matches!(
            classify(&element.tag),
            ElementKind::Transparent | ElementKind::Unknown
        );
    wrapper
        && element.children.iter().any(|child| {
            matches!(child, Node::Element(child) if child.tag == "li" || is_list(&child.tag))
        })
}

/// Items inside a wrapper stay on consecutive lines of the enclosing list.
fn wrapped_items(wrapper: &Element, ctx: Context) -> String {
    if too_deep(ctx) {
        return fallback(wrapper);
    }

    let lines = list_lines(&wrapper.children, ctx.descend());
    if classify(&wrapper.tag) == ElementKind::Unknown {
        debug::annotate(&wrapper.tag, lines, ctx)
    } else {
        lines
    }
}

/// One list item: `indent * 2` spaces, the marker, then the item text. Lists nested in the
/// item follow on their own lines one level below the item's effective indent.
fn item(element: &Element, directives: Directives, ctx: Context) -> String {
    if too_deep(ctx) {
        return fallback(element);
    }

    let indent = ctx.list.effective_indent(directives.indent);
    let continuation = INDENT.len() * indent + 2;
    let content_ctx = ctx
        .descend()
        .as_inline()
        .with_list(ctx.list.nested_under(indent))
        .continued(continuation);

    let mut head: Option<String> = None;
    let mut rest = Vec::new();
    let mut buffer = InlineBuffer::new();

    let flush = |buffer: &mut InlineBuffer, head: &mut Option<String>, rest: &mut Vec<String>| {
        let text = paragraph(&std::mem::take(buffer).finish());
        if head.is_none() {
            *head = Some(text);
        } else if !text.is_empty() {
            rest.push(format!("{}{text}", " ".repeat(continuation)));
        }
    };

    for child in &element.children {
        match child {
            Node::Element(nested) if is_list(&nested.tag) => {
                flush(&mut buffer, &mut head, &mut rest);
                let lines = list(nested, list_kind(&nested.tag), content_ctx);
                if !lines.is_empty() {
                    rest.push(lines);
                }
            }
            node => buffer.push_node(node, content_ctx),
        }
    }
    flush(&mut buffer, &mut head, &mut rest);

    let head = head.unwrap_or_default();
    if head.is_empty() && rest.is_empty() {
        return head;
    }

    let marker = ctx.list.kind.marker();
    let first = format!("{}{marker} {head}", INDENT.repeat(indent));
    std::iter::once(first.trim_end().to_string())
        .chain(rest)
        .collect::<Vec<_>>()
        .join("\n")
}

fn blockquote(element: &Element, ctx: Context) -> String {
    let content = container(element, ctx);
    content
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fenced raw block. The fence is one backtick longer than any backtick run in the code.
/// Debug markers for unsupported tags inside go on the line above the fence.
fn code_block(element: &Element, ctx: Context) -> String {
    let text = element.text_content();
    let code = text.trim_end_matches(['\n', '\r']);
    let fence = "`".repeat(longest_backtick_run(code).max(2) + 1);
    let language = language_hint(element).unwrap_or_default();
    let block = format!("{fence}{language}\n{code}\n{fence}");
    match debug::nested_markers(element, ctx) {
        Some(markers) => format!("{markers}\n{block}"),
        None => block,
    }
}

/// Language from `data-language` on the `pre` or its `code` child, or from a `language-x` /
/// `lang-x` class.
fn language_hint(pre: &Element) -> Option<String> {
    let code = pre.child_element("code");
    let from_attr = pre
        .attr("data-language")
        .or_else(|| code.and_then(|code| code.attr("data-language")));
    let from_class = || {
        [Some(pre), code]
            .into_iter()
            .flatten()
            .filter_map(|element| element.attr("class"))
            .flat_map(str::split_ascii_whitespace)
            .find_map(|token| {
                token
                    .strip_prefix("language-")
                    .or_else(|| token.strip_prefix("lang-"))
            })
    };

    from_attr
        .or_else(from_class)
        .map(str::trim)
        .filter(|language| is_fence_language(language))
        .map(str::to_string)
}

fn is_fence_language(language: &str) -> bool {
    !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '+' | '-' | '_' | '#' | '.'))
}
