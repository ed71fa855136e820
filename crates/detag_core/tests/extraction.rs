//! Integration tests for the parse-and-extract pipeline.
//!
//! These tests run real HTML sources through the parser and the text
//! extractor together and check the exact plain-text output, including
//! line termination.

use detag_core::extract_text;
use detag_dom::DomArena;
use detag_parser::{HtmlParser, Parser};

fn convert(source: &str) -> String {
    let arena = DomArena::new();
    let root = HtmlParser::new()
        .parse(&arena, source)
        .expect("parse failed");
    extract_text(&root)
}

#[test]
fn test_simple_paragraph_collapses_whitespace() {
    let output = convert("<html><body><p>Hello   world</p></body></html>");
    assert_eq!(output, "Hello world\r\n");
}

#[test]
fn test_pre_preserves_internal_runs() {
    let output = convert("<html><body><pre>  keep   me  </pre></body></html>");
    assert_eq!(output, "keep   me\r\n");
}

#[test]
fn test_each_text_node_becomes_its_own_line() {
    let output = convert("<div><span>Foo</span><span>Bar</span></div>");
    assert_eq!(output, "Foo\r\nBar\r\n");
}

#[test]
fn test_whitespace_only_nodes_emit_nothing() {
    let output = convert("<html><body><div>   \n\t  </div></body></html>");
    assert_eq!(output, "");
}

#[test]
fn test_inline_markup_splits_text_fragments() {
    let output = convert("<p>before <em>middle</em> after</p>");
    assert_eq!(output, "before\r\nmiddle\r\nafter\r\n");
}

#[test]
fn test_title_text_is_preserved() {
    let output = convert("<html><head><title>My   Page</title></head><body></body></html>");
    assert_eq!(output, "My   Page\r\n");
}

#[test]
fn test_title_precedes_body_text() {
    let output = convert("<html><head><title>T</title></head><body><p>B</p></body></html>");
    assert_eq!(output, "T\r\nB\r\n");
}

#[test]
fn test_textarea_content_is_preserved() {
    let output = convert("<body><textarea>a    b</textarea></body>");
    assert_eq!(output, "a    b\r\n");
}

#[test]
fn test_nbsp_entity_collapses_to_space() {
    let output = convert("<p>a&nbsp;&nbsp;b</p>");
    assert_eq!(output, "a b\r\n");
}

#[test]
fn test_entities_are_decoded() {
    let output = convert("<p>fish &amp; chips &lt;fresh&gt;</p>");
    assert_eq!(output, "fish & chips <fresh>\r\n");
}

#[test]
fn test_zero_width_characters_are_dropped() {
    let output = convert("<p>zero\u{200B}width and soft\u{00AD}hyphen</p>");
    assert_eq!(output, "zerowidth and softhyphen\r\n");
}

#[test]
fn test_markup_between_block_elements_emits_no_blank_lines() {
    let output = convert(
        "<html>\n  <body>\n    <p>One</p>\n    <p>Two</p>\n  </body>\n</html>",
    );
    assert_eq!(output, "One\r\nTwo\r\n");
}

#[test]
fn test_comments_emit_nothing() {
    let output = convert("<body><!-- note --><p>visible</p></body>");
    assert_eq!(output, "visible\r\n");
}

#[test]
fn test_script_and_style_source_is_not_visible_text() {
    let output = convert(
        "<html><head><style>body { color: red; }</style></head>\
         <body><script>var x = 1;</script><p>visible</p></body></html>",
    );
    assert_eq!(output, "visible\r\n");
}

#[test]
fn test_deeply_nested_text_stays_in_document_order() {
    let output = convert("<div><p>A<span>B<em>C</em>D</span>E</p></div>");
    assert_eq!(output, "A\r\nB\r\nC\r\nD\r\nE\r\n");
}

#[test]
fn test_preserve_reaches_through_nested_inline_elements() {
    let output = convert("<pre><span><b>a   b</b></span></pre>");
    assert_eq!(output, "a   b\r\n");
}

#[test]
fn test_preserve_lookup_is_depth_limited() {
    // Seven elements separate the text from pre (six spans plus a b);
    // the lookup stops after six, so the run collapses.
    let output = convert(
        "<pre><span><span><span><span><span><span><b>a   b</b></span></span></span></span></span></span></pre>",
    );
    assert_eq!(output, "a b\r\n");
}

#[test]
fn test_empty_document_produces_empty_output() {
    let output = convert("");
    assert_eq!(output, "");
}

#[test]
fn test_malformed_markup_still_extracts_text() {
    let output = convert("<p>unclosed <b>bold");
    assert_eq!(output, "unclosed\r\nbold\r\n");
}

#[test]
fn test_unicode_text_passes_through() {
    let output = convert("<p>日本語   テスト</p>");
    assert_eq!(output, "日本語 テスト\r\n");
}

#[test]
fn test_crlf_line_endings_throughout() {
    let output = convert("<p>a</p><p>b</p><p>c</p>");
    assert!(!output.replace("\r\n", "").contains('\n'));
    assert_eq!(output.matches("\r\n").count(), 3);
}
