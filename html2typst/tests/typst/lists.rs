//! List markers, structural nesting and editor indent classes.

use super::typst;

#[test]
fn test_unordered_list() {
    assert_eq!(
        typst("<ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul>"),
        "- Item 1\n- Item 2\n- Item 3"
    );
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        typst("<ol><li>First</li><li>Second</li><li>Third</li></ol>"),
        "+ First\n+ Second\n+ Third"
    );
}

#[test]
fn test_nested_lists() {
    let html = "<ul><li>Item 1<ul><li>Nested 1</li><li>Nested 2</li></ul></li><li>Item 2</li></ul>";
    assert_eq!(
        typst(html),
        "- Item 1\n  - Nested 1\n  - Nested 2\n- Item 2"
    );
}

#[test]
fn test_mixed_list_kinds() {
    assert_eq!(
        typst("<ul><li>a<ol><li>b<ul><li>c</li></ul></li></ol></li></ul>"),
        "- a\n  + b\n    - c"
    );
}

#[test]
fn test_pretty_printed_list() {
    let html = "<ul>\n  <li>One</li>\n  <li>\n    Two\n  </li>\n</ul>";
    assert_eq!(typst(html), "- One\n- Two");
}

#[test]
fn test_indent_classes() {
    let html = r#"<ul><li>A</li><li class="indent-1">B</li></ul>"#;
    assert_eq!(typst(html), "- A\n  - B");

    assert_eq!(
        typst(r#"<ul><li class="ql-indent-1">Indented item</li></ul>"#),
        "  - Indented item"
    );
    assert_eq!(
        typst(r#"<ul><li class="ql-indent-2">Double indented</li></ul>"#),
        "    - Double indented"
    );
    assert_eq!(
        typst(r#"<ul><li class="ql-indent-5">Deep indent</li></ul>"#),
        "          - Deep indent"
    );
}

#[test]
fn test_flat_editor_list() {
    let html = concat!(
        "<ol>",
        "<li>One</li>",
        r#"<li class="ql-indent-1">Sub</li>"#,
        r#"<li class="ql-indent-2">Subsub</li>"#,
        "<li>Two</li>",
        "</ol>",
    );
    assert_eq!(typst(html), "+ One\n  + Sub\n    + Subsub\n+ Two");
}

#[test]
fn test_indent_override_replaces_structural_depth() {
    // Structurally at depth 1, but the class says level 0.
    let html = r#"<ul><li>a<ul><li class="ql-indent-0">b</li></ul></li></ul>"#;
    assert_eq!(typst(html), "- a\n- b");

    // Structurally at depth 1, the class says level 3: not 4.
    let html = r#"<ul><li>a<ul><li class="ql-indent-3">b</li></ul></li></ul>"#;
    assert_eq!(typst(html), "- a\n      - b");
}

#[test]
fn test_list_nested_under_overridden_item() {
    let html = r#"<ul><li class="ql-indent-2">a<ul><li>b</li></ul></li></ul>"#;
    assert_eq!(typst(html), "    - a\n      - b");
}

#[test]
fn test_item_with_formatting() {
    assert_eq!(
        typst("<ul><li><strong>Bold</strong> item</li></ul>"),
        "- *Bold* item"
    );
}

#[test]
fn test_item_continuation_lines() {
    assert_eq!(
        typst("<ul><li><p>first</p><p>second</p></li></ul>"),
        "- first\n  second"
    );
    assert_eq!(typst("<ol><li>line<br>more</li></ol>"), "+ line\n  more");
    assert_eq!(
        typst(r#"<ul><li class="ql-indent-1">a<br>b</li></ul>"#),
        "  - a\n    b"
    );
}

#[test]
fn test_text_after_nested_list_stays_in_item() {
    assert_eq!(
        typst("<ul><li>a<ul><li>b</li></ul>tail</li></ul>"),
        "- a\n  - b\n  tail"
    );
}

#[test]
fn test_empty_items_are_skipped() {
    assert_eq!(typst("<ul><li></li><li>x</li><li> </li></ul>"), "- x");
}

#[test]
fn test_stray_text_in_list_is_kept() {
    assert_eq!(typst("<ul>stray<li>x</li></ul>"), "stray\n- x");
}

#[test]
fn test_list_between_paragraphs() {
    assert_eq!(
        typst("<p>Before</p><ul><li>x</li></ul><p>After</p>"),
        "Before\n\n- x\n\nAfter"
    );
}

#[test]
fn test_items_in_a_wrapper_stay_in_one_list() {
    assert_eq!(
        typst("<ul><div><li>a</li><li>b</li></div><li>c</li></ul>"),
        "- a\n- b\n- c"
    );
}
