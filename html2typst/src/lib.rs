//! HTML to Typst translation
//!
//!     Converts the rich-text HTML produced by WYSIWYG editors into Typst markup. Editors mark
//!     structure with class names (`ql-indent-2`, `ql-align-center`) and inline `style`
//!     attributes rather than with nesting, so both are read alongside the tags themselves.
//!
//!     The one hard rule is text preservation: every piece of text in the input ends up in the
//!     output. Markup that is not understood degrades to its text, never to nothing and never to
//!     an error. With `debug` enabled, unsupported tags are additionally flagged with a Typst
//!     comment placed next to their content, e.g. `/* Unsupported tag: marquee */`.
//!
//!     This is a pure lib: no stdout, no env vars, no files. The CLI lives in html2typst-cli and
//!     the configuration layer in html2typst-config.
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── assemble.rs             # Joins block fragments into the final document
//!     ├── context.rs              # Immutable translation context (list depth, debug, inline)
//!     ├── dom.rs                  # Owned document tree built from html5ever's RcDom
//!     ├── error.rs
//!     ├── style.rs                # style/class attributes to formatting directives
//!     ├── translate
//!     │   ├── mod.rs              # Node dispatcher, block/inline placement
//!     │   ├── block.rs            # Headings, paragraphs, lists, quotes, code blocks
//!     │   ├── inline.rs           # Emphasis, links, images, raw, breaks
//!     │   └── debug.rs            # Diagnostic comments
//!     └── lib.rs
//!
//!     Data flows one way: HTML → html5ever → dom::Node → translate → assemble → Typst.
//!
//!     Every recursive step receives a `Context` by value and derives the value for its children
//!     from it. There is no global or shared state, so translations with different options can
//!     run concurrently.
//!
//! Testing
//!     tests
//!     └── typst
//!         ├── <concern>.rs
//!         └── fixtures
//!             └── <docname>.html
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
pub mod assemble;
pub mod context;
pub mod dom;
pub mod error;
pub mod style;
pub mod translate;

use std::io::Read;

pub use context::{Context, ListContext, ListKind};
pub use dom::{parse_html, Element, Node};
pub use error::TranslateError;
pub use style::{Alignment, Directives};

/// Options for a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslateOptions {
    /// Emit `/* Unsupported tag: … */` markers next to content from unrecognized tags.
    pub debug: bool,
}

impl TranslateOptions {
    pub fn with_debug(debug: bool) -> Self {
        Self { debug }
    }
}

/// Translate an HTML document or fragment into Typst markup.
///
/// Never fails. Empty or whitespace-only input yields an empty string.
pub fn translate_html_to_typst(html: &str, debug: bool) -> String {
    translate_with_options(html, &TranslateOptions::with_debug(debug))
}

pub fn translate_with_options(html: &str, options: &TranslateOptions) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    translate_nodes(&dom::parse_html(html), options)
}

/// Translate HTML read from `reader`. Bytes are decoded as UTF-8, invalid sequences replaced.
pub fn translate_reader<R: Read>(
    mut reader: R,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    let nodes = dom::parse_html_from_reader(&mut reader)?;
    Ok(translate_nodes(&nodes, options))
}

/// Translate a tree the caller already holds.
pub fn translate_node(node: &Node, options: &TranslateOptions) -> String {
    translate_nodes(std::slice::from_ref(node), options)
}

fn translate_nodes(nodes: &[Node], options: &TranslateOptions) -> String {
    let ctx = Context::new(options.debug);
    assemble::assemble(translate::translate_blocks(nodes, ctx))
}
