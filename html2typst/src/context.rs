//! Translation context
//!
//! The context is a small `Copy` value handed down every recursive call. A callee derives
//! the value for its children from its own copy; nothing is shared or written back, so
//! translations with different settings can run side by side.

/// Kind of the innermost enclosing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    Ordered,
    Unordered,
    #[default]
    None,
}

impl ListKind {
    /// Typst list marker for items of this kind. Items outside a list render as bullets.
    pub fn marker(self) -> char {
        match self {
            ListKind::Ordered => '+',
            ListKind::Unordered | ListKind::None => '-',
        }
    }
}

/// Structural list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListContext {
    /// Nesting depth of the current list, 0 for a top-level list.
    pub depth: usize,
    pub kind: ListKind,
}

impl ListContext {
    /// Context for the items of a list container found at this position.
    pub fn entering(self, kind: ListKind) -> Self {
        Self { kind, ..self }
    }

    /// Context for a list nested inside an item rendered at `indent`.
    pub fn nested_under(self, indent: usize) -> Self {
        Self {
            depth: indent + 1,
            ..self
        }
    }

    /// Indentation level of an item: an explicit indent class replaces the structural depth.
    pub fn effective_indent(self, explicit: Option<usize>) -> usize {
        explicit.unwrap_or(self.depth)
    }
}

/// Everything a recursive translation step needs to know about its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub list: ListContext,
    /// Emit diagnostic comments for unsupported tags.
    pub debug: bool,
    /// Inside a single line of text (heading, paragraph, list item…); block tags flatten.
    pub inline: bool,
    /// Spaces written after a line break so continuation lines stay inside a list item.
    pub continuation: usize,
    /// Recursion depth, used to bound the call stack.
    pub nesting: usize,
}

impl Context {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Self::default()
        }
    }

    /// Context for the children of the current node.
    pub fn descend(self) -> Self {
        Self {
            nesting: self.nesting + 1,
            ..self
        }
    }

    pub fn as_inline(self) -> Self {
        Self {
            inline: true,
            ..self
        }
    }

    pub fn with_list(self, list: ListContext) -> Self {
        Self { list, ..self }
    }

    pub fn continued(self, continuation: usize) -> Self {
        Self {
            continuation,
            ..self
        }
    }
}
