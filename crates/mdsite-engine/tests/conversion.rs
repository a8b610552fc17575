use mdsite_engine::{
    ConvertError, RenderOptions, SpanKind, TextSpan, convert, extract_title,
    parsing::inline::text_to_spans,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn render(markdown: &str) -> String {
    convert(markdown).unwrap().render()
}

#[rstest]
#[case::mixed_blocks("mixed_blocks")]
#[case::paragraphs("paragraphs")]
fn fixture_renders_expected_html(#[case] name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    assert_eq!(render(&md), expected);
}

#[test]
fn heading_and_bold_paragraph() {
    insta::assert_snapshot!(
        render("# Title\n\nSome **bold** text"),
        @"<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>"
    );
}

#[test]
fn quote_lines_are_joined() {
    insta::assert_snapshot!(
        render("> line one\n> line two"),
        @"<div><blockquote>line one line two</blockquote></div>"
    );
}

#[test]
fn ordered_list() {
    insta::assert_snapshot!(
        render("1. first\n2. second"),
        @"<div><ol><li>first</li><li>second</li></ol></div>"
    );
}

#[test]
fn ordered_list_with_gap_is_a_paragraph() {
    insta::assert_snapshot!(
        render("1. first\n3. second"),
        @"<div><p>1. first 3. second</p></div>"
    );
}

#[test]
fn lists_side_by_side() {
    let md = "
- This is a list
- with items
- and *more* items

1. This is an `ordered` list
2. with items
3. and more items

";
    insta::assert_snapshot!(
        render(md),
        @"<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
    );
}

#[test]
fn headings_between_paragraphs() {
    let md = "
# this is an h1

this is paragraph text

## this is an h2
";
    insta::assert_snapshot!(
        render(md),
        @"<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
    );
}

#[test]
fn blockquote_then_paragraph() {
    let md = "
> This is a
> blockquote block

this is paragraph text

";
    insta::assert_snapshot!(
        render(md),
        @"<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
    );
}

#[test]
fn ordering_law_bold_before_italic() {
    assert_eq!(
        text_to_spans("**bold** and *italic*").unwrap(),
        vec![
            TextSpan::new("bold", SpanKind::Bold),
            TextSpan::plain(" and "),
            TextSpan::new("italic", SpanKind::Italic),
        ]
    );
}

#[test]
fn image_is_never_a_link() {
    assert_eq!(
        text_to_spans("![alt](u)").unwrap(),
        vec![TextSpan::with_target("alt", SpanKind::Image, "u")]
    );
}

#[test]
fn odd_bold_markers_fail_the_document() {
    assert_eq!(
        convert("fine\n\n**one** **two"),
        Err(ConvertError::UnbalancedDelimiter { delimiter: "**" })
    );
}

#[test]
fn whitespace_only_line_keeps_paragraph_together() {
    assert_eq!(render("a\n   \nb"), "<div><p>a     b</p></div>");
}

#[test]
fn code_fence_with_indented_blank_line() {
    assert_eq!(
        render("```\nfn f() {\n    \n}\n```"),
        "<div><pre><code>fn f() {\n    \n}\n</code></pre></div>"
    );
}

#[test]
fn empty_document_fails() {
    assert_eq!(
        convert("\n\n"),
        Err(ConvertError::EmptyChildren {
            tag: "div".to_string()
        })
    );
}

#[test]
fn rendering_is_deterministic() {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/mixed_blocks.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    assert_eq!(render(&md), render(&md));
}

#[test]
fn conversion_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || render(&format!("# Page {i}\n\nbody *{i}*"))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("<div><h1>Page {i}</h1><p>body <i>{i}</i></p></div>")
        );
    }
}

#[test]
fn strict_rendering_escapes_link_targets() {
    let node = convert(r#"[q](/search?q="x")"#).unwrap();
    assert_eq!(
        node.render_with(&RenderOptions::strict()),
        r#"<div><p><a href="/search?q=&quot;x&quot;">q</a></p></div>"#
    );
}

#[rstest]
#[case("no heading here", Err(ConvertError::NoTitleFound))]
#[case("text\n# Real Title\nmore", Ok("Real Title".to_string()))]
#[case("## Not it\n# It", Ok("It".to_string()))]
fn titles(#[case] md: &str, #[case] expected: Result<String, ConvertError>) {
    assert_eq!(extract_title(md), expected);
}
