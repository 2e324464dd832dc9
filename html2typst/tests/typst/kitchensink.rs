//! A complete editor document.

use super::{typst, typst_debug};
use insta::assert_snapshot;

const EDITOR_HTML: &str = include_str!("fixtures/editor.html");

#[test]
fn test_editor_document() {
    assert_snapshot!(typst(EDITOR_HTML), @r##"
p { margin: 0; }

= Release notes

This release brings *faster* exports and _better_ lists.

#align(center)[Centered paragraph]

#align(right)[Right aligned]

- First item
  - Indented item
- Item with #link("https://example.com/docs?a=1&b=2")[a link]

+ Step one
+ Step two

> Quoted line
> Second line

```rust
fn main() {
    println!("*not bold*");
}
```

Inline `x < y` and *bold span*.

Widget text

#line(length: 100%)

H#sub[2]O and E = mc#super[2]
"##);
}

#[test]
fn test_editor_document_in_debug_mode() {
    let output = typst_debug(EDITOR_HTML);
    let production = typst(EDITOR_HTML);

    assert!(output.starts_with(
        "/* Unsupported tag: meta *//* Unsupported tag: style */ p { margin: 0; }\n\n= Release notes"
    ));
    assert!(output.contains("/* Unsupported tag: custom-widget */ Widget text"));
    // Apart from the markers both renderings agree.
    let stripped = output
        .replace("/* Unsupported tag: style */ ", "")
        .replace("/* Unsupported tag: meta */", "")
        .replace("/* Unsupported tag: custom-widget */ ", "");
    assert_eq!(stripped, production);
}

#[test]
fn test_editor_document_keeps_all_text() {
    let output = typst(EDITOR_HTML);
    for text in [
        "p { margin: 0; }",
        "Release notes",
        "faster",
        "Centered paragraph",
        "Indented item",
        "a link",
        "Step two",
        "Second line",
        "println!(\"*not bold*\");",
        "x < y",
        "bold span",
        "Widget text",
        "mc",
    ] {
        assert!(output.contains(text), "missing {text:?}");
    }
}
