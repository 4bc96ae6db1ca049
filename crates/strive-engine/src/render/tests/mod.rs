//! Behaviour tests for the renderer.
//!
//! Exact output is pinned with insta inline snapshots; structural
//! properties (balanced containers, prefix stability) are checked over
//! every prefix of a realistic streamed reply.


use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::render::{LINE_BREAK, render, render_fragments};

const STREAMED_REPLY: &str = "# Your Plan

Great goal! Here is a **step-by-step** plan:

1. Install the toolchain from [rustup](https://rustup.rs)
2. Read *The Book* chapters 1-4
  - Focus on ownership
  - Try the exercises at www.exercism.org
    1. Hello World
    2. Two Fer
3. Build a small CLI

## Milestones
- Week 1: basics
* Week 2: a <real> project & review

Questions? Ask me anything.
";

// Scenario tests

#[test]
fn flat_bullet_list() {
    let html = render("- a\n- b\n");
    assert_snapshot!(html, @"<ul><li>a</li><li>b</li></ul><br>");
    invariants::check(&html);
}

#[test]
fn nested_bullet_list() {
    let html = render("- a\n  - b\n- c\n");
    assert_snapshot!(html, @"<ul><li>a</li><ul><li>b</li></ul><li>c</li></ul><br>");
    invariants::check(&html);
}

#[test]
fn heading_then_list() {
    let html = render("# Title\n- x\n");
    assert_snapshot!(html, @"<h1>Title</h1><ul><li>x</li></ul><br>");
}

#[test]
fn bare_url_in_paragraph() {
    let html = render("Check https://example.com/page for info");
    assert_snapshot!(
        html,
        @r#"Check <a href="https://example.com/page" target="_blank" rel="noopener">example.com</a> for info<br>"#
    );
}

#[test]
fn bold_and_italic_line() {
    let html = render("**bold** and *italic*");
    assert_snapshot!(html, @"<strong>bold</strong> and <em>italic</em><br>");
}

#[test]
fn ordered_list() {
    let html = render("1. first\n2. second\n");
    assert_snapshot!(html, @"<ol><li>first</li><li>second</li></ol><br>");
}

// Edge cases

#[test]
fn empty_input_is_a_single_break() {
    assert_eq!(render(""), LINE_BREAK);
}

#[test]
fn kind_change_at_same_level_is_not_merged() {
    let html = render("- a\n1. b");
    assert_snapshot!(html, @"<ul><li>a</li></ul><ol><li>b</li></ol>");
}

#[test]
fn blank_line_ends_list_for_good() {
    let html = render("- a\n\n- b");
    assert_snapshot!(html, @"<ul><li>a</li></ul><br><ul><li>b</li></ul>");
}

#[test]
fn heading_collapses_nested_lists() {
    let html = render("- a\n  - b\n## Next");
    assert_snapshot!(html, @"<ul><li>a</li><ul><li>b</li></ul></ul><h2>Next</h2>");
}

#[test]
fn paragraph_collapses_list() {
    let html = render("1. one\nsome text\n2. two");
    assert_snapshot!(html, @"<ol><li>one</li></ol>some text<br><ol><li>two</li></ol>");
}

#[test]
fn unterminated_nested_list_is_closed_innermost_first() {
    let html = render("1. a\n  - b\n    - c");
    assert_snapshot!(html, @"<ol><li>a</li><ul><li>b</li><ul><li>c</li></ul></ul></ol>");
}

#[test]
fn plain_text_keeps_indentation() {
    assert_eq!(render("  indented"), "  indented<br>");
}

#[test]
fn seven_hashes_is_plain_text() {
    assert_eq!(render("####### deep"), "####### deep<br>");
}

#[test]
fn heading_content_is_formatted() {
    let html = render("### Read **this** at rust-lang.org");
    assert_snapshot!(
        html,
        @r#"<h3>Read <strong>this</strong> at <a href="https://rust-lang.org" target="_blank" rel="noopener">rust-lang.org</a></h3>"#
    );
}

#[test]
fn apostrophe_is_escaped_as_hex_entity() {
    assert_snapshot!(render("it's <b>"), @"it&#x27;s &lt;b&gt;<br>");
}

#[test]
fn carriage_return_is_content() {
    // CRLF list lines stay items, with the \r kept in the item text.
    // A `(.*)$` match that stops at \r would render them as plain text.
    let html = render("- a\r\n- b");
    assert!(html.starts_with("<ul><li>a\r</li>"));
}

#[rstest]
#[case("- <script>alert(1)</script>")]
#[case("# <b>heading</b>")]
#[case("plain <i>text</i> & \"quotes\" 'single'")]
#[case("1. [x](https://a.com/?q=<tag>)")]
fn user_markup_is_escaped(#[case] input: &str) {
    let html = render(input);
    for raw in ["<script>", "<b>", "<i>", "<tag>", "</script>", "</b>", "</i>"] {
        assert!(!html.contains(raw), "{raw} leaked into {html:?}");
    }
    assert!(html.contains("&lt;"));
}

// Properties

#[test]
fn every_prefix_is_balanced() {
    for (idx, _) in STREAMED_REPLY.char_indices() {
        let html = render(&STREAMED_REPLY[..idx]);
        invariants::check(&html);
        assert_eq!(
            invariants::lists_opened(&html),
            invariants::lists_closed(&html)
        );
    }
    invariants::check(&render(STREAMED_REPLY));
}

#[test]
fn prefixes_at_line_boundaries_agree_with_full_render() {
    let full = render_fragments(STREAMED_REPLY);

    for (idx, ch) in STREAMED_REPLY.char_indices() {
        if ch != '\n' {
            continue;
        }
        let mut partial = render_fragments(&STREAMED_REPLY[..idx]);
        // Containers the prefix had to close early are the only difference
        while partial
            .last()
            .is_some_and(|f| f == "</ul>" || f == "</ol>")
        {
            partial.pop();
        }
        assert_eq!(
            &full[..partial.len()],
            partial.as_slice(),
            "prefix ending at byte {idx} diverged"
        );
    }
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render(STREAMED_REPLY), render(STREAMED_REPLY));
}

#[test]
fn streamed_reply_snapshot() {
    assert_snapshot!(render(STREAMED_REPLY), @r#"<h1>Your Plan</h1><br>Great goal! Here is a <strong>step-by-step</strong> plan:<br><br><ol><li>Install the toolchain from <a href="https://rustup.rs" target="_blank" rel="noopener">rustup</a></li><li>Read <em>The Book</em> chapters 1-4</li><ul><li>Focus on ownership</li><li>Try the exercises at <a href="https://www.exercism.org" target="_blank" rel="noopener">exercism.org</a></li><ol><li>Hello World</li><li>Two Fer</li></ol></ul><li>Build a small CLI</li></ol><br><h2>Milestones</h2><ul><li>Week 1: basics</li><li>Week 2: a &lt;real&gt; project &amp; review</li></ul><br>Questions? Ask me anything.<br><br>"#);
}
