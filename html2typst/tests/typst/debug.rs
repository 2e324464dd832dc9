//! Diagnostic markers for unsupported tags.

use super::{typst, typst_debug};
use proptest::prelude::*;

#[test]
fn test_production_output_has_no_markers() {
    let html = "<p><custom>Content</custom> <blink>more</blink></p><widget><p>x</p></widget>";
    let output = typst(html);
    assert!(!output.contains("/*"));
    assert!(!output.contains("Unsupported"));
    assert!(output.contains("Content"));
    assert!(output.contains("more"));
}

#[test]
fn test_marker_precedes_inline_content() {
    assert_eq!(
        typst_debug("<p><custom>Important text</custom></p>"),
        "/* Unsupported tag: custom */ Important text"
    );
}

#[test]
fn test_marker_on_its_own_line_before_blocks() {
    assert_eq!(
        typst_debug("<widget><p>a</p><p>b</p></widget>"),
        "/* Unsupported tag: widget */\na\n\nb"
    );
}

#[test]
fn test_every_unsupported_tag_is_named() {
    assert_eq!(
        typst_debug("<x-outer><x-inner>deep</x-inner></x-outer>"),
        "/* Unsupported tag: x-outer */ /* Unsupported tag: x-inner */ deep"
    );
}

#[test]
fn test_transparent_wrappers_are_not_reported() {
    let html = "<main><section><article><header><p>x</p></header></article></section></main>";
    assert_eq!(typst_debug(html), "x");
}

#[test]
fn test_supported_tags_are_not_reported() {
    let html = r#"<h1>T</h1><p><b>b</b> <i>i</i> <a href="u">l</a> <span>s</span></p><ul><li>x</li></ul>"#;
    assert!(!typst_debug(html).contains("/*"));
}

#[test]
fn test_empty_unsupported_tag_still_reported() {
    assert_eq!(
        typst_debug("<p>a <custom></custom>b</p>"),
        "a /* Unsupported tag: custom */b"
    );
}

#[test]
fn test_unsupported_tags_inside_code_are_reported_outside_it() {
    assert_eq!(
        typst_debug("<pre><x-mark>code</x-mark></pre>"),
        "/* Unsupported tag: x-mark */\n```\ncode\n```"
    );
    assert_eq!(
        typst_debug("<p><code><x-mark>c</x-mark></code></p>"),
        "/* Unsupported tag: x-mark */ `c`"
    );
    assert_eq!(typst("<p><code><x-mark>c</x-mark></code></p>"), "`c`");
}

#[test]
fn test_noscript_is_reported() {
    let output = typst_debug("<p>a</p><noscript>Enable JS</noscript>");
    assert!(output.contains("/* Unsupported tag: noscript */ Enable JS"), "{output:?}");
}

proptest! {
    #[test]
    fn debug_silence_in_production(
        tag in "x-[a-z]{1,8}",
        text in "[a-z][a-z ]{0,20}",
    ) {
        let html = format!("<p><{tag}>{text}</{tag}></p><{tag}><p>{text}</p></{tag}>");
        let output = typst(&html);
        prop_assert!(!output.contains("/*"));
    }

    #[test]
    fn debug_completeness(
        tag in "x-[a-z]{1,8}",
        text in "[a-z]{1,12}",
        wrapper in prop::sample::select(vec![
            "p", "div", "li", "h3", "blockquote", "strong", "pre", "code",
        ]),
    ) {
        let html = format!("<{wrapper}><{tag}>{text}</{tag}></{wrapper}>");
        let output = typst_debug(&html);
        let marker = format!("/* Unsupported tag: {tag} */");
        prop_assert!(output.contains(&marker), "missing marker in {:?}", output);
        prop_assert!(output.contains(&text), "missing text in {:?}", output);
    }
}
