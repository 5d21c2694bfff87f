//! Whole-document conversions in article mode

use crate::common::{article, load_fixture, with_code_style};
use insta::assert_snapshot;
use md2x_engine::{CodeStyle, ConvertOptions};

#[test]
fn test_launch_notes_fixture() {
    let source = load_fixture("launch.md");
    let output = article(&source, &ConvertOptions::default());

    assert_snapshot!(output.trim_end(), @r"
    Launch Notes

    We shipped 「md2x」 today. Read the announcement https://example.com/post for details.

    【Highlights】

    • Faster ✦inline parsing
    • Fewer bugs surprises
      • Nested items keep their indent

    — Example —

    💻 md2x post.md --mode thread

    Thanks for reading!
    ");
}

#[test]
fn test_launch_notes_without_links() {
    let source = load_fixture("launch.md");
    let options = ConvertOptions {
        keep_links: false,
        ..ConvertOptions::default()
    };
    let output = article(&source, &options);

    assert!(output.contains("Read the announcement for details."));
    assert!(!output.contains("https://"));
}

#[test]
fn test_readme_scenario() {
    let output = article(
        "# Hello\n\n- A\n- B\n\n**bold** text",
        &ConvertOptions::default(),
    );
    assert_eq!(output, "Hello\n\n• A\n• B\n\n「bold」 text");
}

#[test]
fn test_plain_code_block_scenario() {
    let output = article("```\nline1\nline2\n```", &with_code_style(CodeStyle::Plain));
    assert_eq!(output, "    line1\n    line2");
    assert!(!output.contains("```"));
}

#[test]
fn test_blockquote_code_style_covers_blocks_and_spans() {
    let output = article(
        "Use `grep`:\n\n```\ngrep -r todo .\n```",
        &with_code_style(CodeStyle::Blockquote),
    );
    assert_eq!(output, "Use > grep:\n\n> grep -r todo .");
}

#[test]
fn test_text_without_markdown_passes_through() {
    let source = "Just a note.\n\n\n\nWith two paragraphs.\n";
    let output = article(source, &ConvertOptions::default());
    assert_eq!(output, "Just a note.\n\nWith two paragraphs.\n");
}

#[test]
fn test_unterminated_fence_is_not_an_error() {
    let output = article(
        "Setup:\n```\nnpm install\n\n\nnpm test",
        &with_code_style(CodeStyle::Plain),
    );
    assert_eq!(output, "Setup:\n    npm install\n\n    npm test");
}

#[test]
fn test_ordered_items_use_keycaps() {
    let output = article("1. Install\n2) Run", &ConvertOptions::default());
    assert_eq!(
        output,
        "1\u{FE0F}\u{20E3} Install\n2\u{FE0F}\u{20E3} Run"
    );
}

#[test]
fn test_emphasis_in_headings() {
    let output = article("### The *real* story", &ConvertOptions::default());
    assert_eq!(output, "— The ✦real story —");
}
