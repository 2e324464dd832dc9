//! Style and class resolution
//!
//! Maps an element's `style` declarations and `class` tokens onto the few formatting
//! directives the Typst output can express. Everything else is parsed (so a stray token never
//! corrupts the ones after it) and dropped.
//!
//! | Source                                        | Directive               |
//! |-----------------------------------------------|-------------------------|
//! | `font-weight: bold` / `bolder` / 600..=900    | bold                    |
//! | `font-style: italic` / `oblique`              | italic                  |
//! | `text-align: left\|center\|right`             | alignment               |
//! | `text-align: justify`                         | alignment = center      |
//! | class `ql-align-<x>` (or `align-<x>`)         | as `text-align: <x>`    |
//! | class `ql-indent-<N>` (or `indent-<N>`)       | indent level N          |
//!
//! Classes are applied before inline styles, so `style="text-align: …"` wins over an
//! alignment class on the same element.

use tracing::trace;

/// Paragraph alignment supported by the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parse a CSS `text-align` value. Typst has no justified block alignment, so `justify`
    /// falls back to `center`.
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Alignment::Left),
            "center" | "justify" => Some(Alignment::Center),
            "right" | "end" => Some(Alignment::Right),
            _ => None,
        }
    }

    /// The alignment keyword as written in `#align(...)`.
    pub fn keyword(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Formatting directives derived from one element's attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directives {
    pub bold: bool,
    pub italic: bool,
    /// `None` inherits (left).
    pub alignment: Option<Alignment>,
    /// `None` inherits the structural list depth.
    pub indent: Option<usize>,
}

impl Directives {
    /// The alignment to render, if it differs from the default left alignment.
    pub fn aligned(&self) -> Option<Alignment> {
        self.alignment.filter(|align| *align != Alignment::Left)
    }
}

/// Resolve the directives for an attribute list. Never fails.
pub fn resolve(attrs: &[(String, String)]) -> Directives {
    let mut directives = Directives::default();

    for (name, value) in attrs {
        if name == "class" {
            for token in value.split_ascii_whitespace() {
                apply_class(&mut directives, token);
            }
        }
    }

    for (name, value) in attrs {
        if name == "style" {
            for (property, value) in declarations(value) {
                apply_declaration(&mut directives, &property, &value);
            }
        }
    }

    directives
}

/// Split a `style` attribute into normalized `(property, value)` pairs.
///
/// Properties are lower-cased, values trimmed and lower-cased with any `!important` removed.
/// Declarations without a colon or with an empty property are skipped.
pub fn declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            if property.is_empty() {
                return None;
            }
            let value = value.trim().to_ascii_lowercase();
            let value = value
                .strip_suffix("!important")
                .map(str::trim_end)
                .unwrap_or(value.as_str())
                .to_string();
            Some((property, value))
        })
        .collect()
}

fn apply_declaration(directives: &mut Directives, property: &str, value: &str) {
    match property {
        "font-weight" => directives.bold = is_bold_weight(value),
        "font-style" => directives.italic = matches!(value, "italic" | "oblique"),
        "text-align" => {
            if let Some(alignment) = Alignment::from_css(value) {
                directives.alignment = Some(alignment);
            }
        }
        _ => trace!(property, value, "ignoring style declaration"),
    }
}

fn is_bold_weight(value: &str) -> bool {
    match value {
        "bold" | "bolder" => true,
        numeric => numeric.parse::<u16>().is_ok_and(|weight| weight >= 600),
    }
}

fn apply_class(directives: &mut Directives, token: &str) {
    let token = token.strip_prefix("ql-").unwrap_or(token);

    if let Some(level) = token.strip_prefix("indent-") {
        if let Ok(level) = level.parse::<usize>() {
            directives.indent = Some(level);
        }
    } else if let Some(align) = token.strip_prefix("align-") {
        if let Some(alignment) = Alignment::from_css(align) {
            directives.alignment = Some(alignment);
        }
    }
}
