//! Text preservation: every text payload of the input appears in the output.

use html2typst::{parse_html, translate_html_to_typst, Node};
use proptest::prelude::*;

/// Tags used to build random documents. Tables and `textarea` are left out: the parser moves
/// or rewrites their content.
const CONTAINER_TAGS: &[&str] = &[
    "p",
    "div",
    "span",
    "strong",
    "b",
    "em",
    "i",
    "u",
    "s",
    "sup",
    "sub",
    "code",
    "h1",
    "h3",
    "h6",
    "ul",
    "ol",
    "li",
    "blockquote",
    "pre",
    "section",
    "x-widget",
    "custom",
    "noscript",
    "style",
];

/// Plain words without markup characters, leading or trailing whitespace.
fn payload() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,8}( [A-Za-z0-9.,!?]{1,8}){0,3}"
}

fn attributes() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(r#" class="ql-indent-2""#.to_string()),
        Just(r#" class="ql-align-center""#.to_string()),
        Just(r#" style="font-weight: bold; font-style: italic""#.to_string()),
        Just(r#" style="text-align: right""#.to_string()),
    ]
}

fn fragment() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        4 => payload(),
        1 => Just("<br>".to_string()),
        1 => payload().prop_map(|alt| format!(r#"<img src="a.png" alt="{alt}">"#)),
    ];
    leaf.prop_recursive(6, 48, 5, |inner| {
        prop_oneof![
            (
                prop::sample::select(CONTAINER_TAGS),
                attributes(),
                prop::collection::vec(inner.clone(), 0..5),
            )
                .prop_map(|(tag, attrs, children)| {
                    format!("<{tag}{attrs}>{}</{tag}>", children.concat())
                }),
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|children| format!(r#"<a href="https://example.com">{}</a>"#, children.concat())),
        ]
    })
}

/// Text payloads of the parsed tree, as the translator receives them.
fn text_payloads(nodes: &[Node]) -> Vec<String> {
    let mut texts = Vec::new();
    let mut stack: Vec<&Node> = nodes.iter().collect();
    while let Some(node) = stack.pop() {
        match node {
            Node::Text(text) => texts.push(text.clone()),
            Node::Element(element) => stack.extend(element.children.iter()),
        }
    }
    texts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_payload_is_in_the_output(fragments in prop::collection::vec(fragment(), 1..4), debug in any::<bool>()) {
        let html = fragments.concat();
        let output = translate_html_to_typst(&html, debug);

        for text in text_payloads(&parse_html(&html)) {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            prop_assert!(
                output.contains(text),
                "lost {:?}\nhtml: {}\noutput: {}",
                text,
                html,
                output
            );
        }
    }

    #[test]
    fn alt_text_is_kept(alt in payload()) {
        let html = format!(r#"<p>before <img src="x.png" alt="{alt}"> after</p>"#);
        prop_assert!(translate_html_to_typst(&html, false).contains(&alt));
    }
}

#[test]
fn test_raw_text_elements_are_kept() {
    let html = "<p>a</p><noscript>Enable JS</noscript><style>p{color:red}</style>";
    for debug in [false, true] {
        let output = translate_html_to_typst(html, debug);
        assert!(output.contains("Enable JS"), "{output:?}");
        assert!(output.contains("p{color:red}"), "{output:?}");
    }
    let output = translate_html_to_typst(html, true);
    assert!(output.contains("/* Unsupported tag: noscript */"));
    assert!(output.contains("/* Unsupported tag: style */"));
}

#[test]
fn test_entities_are_decoded_once() {
    let output = translate_html_to_typst("<p>Fish &amp; chips &lt;3 &copy;</p>", false);
    assert_eq!(output, "Fish & chips <3 ©");
}

#[test]
fn test_unicode_text() {
    let html = "<h2>Überschrift</h2><p>日本語のテキスト <em>強調</em> 🎉</p>";
    assert_eq!(
        translate_html_to_typst(html, false),
        "== Überschrift\n\n日本語のテキスト _強調_ 🎉"
    );
}
