//! Thread mode conversions

use crate::common::{load_fixture, thread};
use insta::assert_debug_snapshot;

#[test]
fn test_essay_fixture_packs_sentences() {
    let source = load_fixture("essay.md");
    let segments = thread(&source, 280);

    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0], "Why short posts win");
    assert!(segments[1].starts_with("Short posts are easier"));
    assert!(segments[1].ends_with("skipped entirely."));
    assert!(segments[2].starts_with("When a thought needs more room"));
    assert!(segments[2].ends_with("arbitrary character count."));
    assert_eq!(segments[3], "Thanks for reading.");
    assert!(segments.iter().all(|s| s.chars().count() <= 280));
}

#[test]
fn test_essay_fixture_with_tight_limit() {
    let source = load_fixture("essay.md");
    let segments = thread(&source, 120);

    assert_debug_snapshot!(segments, @r#"
    [
        "Why short posts win",
        "Short posts are easier to read on a phone.",
        "They also get shared more often, because readers can take in the whole idea at a glance.",
        "Long walls of text, on the other hand, tend to be skipped entirely.",
        "When a thought needs more room, a thread lets it breathe without losing the reader.",
        "Each post should still make sense on its own? Ideally yes!",
        "That is the whole point of splitting at sentence boundaries rather than at an arbitrary character count.",
        "Thanks for reading.",
    ]
    "#);
}

#[test]
fn test_six_hundred_character_paragraph() {
    let first = format!("{}.", "a".repeat(199));
    let second = format!("{}.", "b".repeat(199));
    let third = format!("{}.", "c".repeat(197));
    let paragraph = format!("{first} {second} {third}");
    assert_eq!(paragraph.chars().count(), 600);

    let segments = thread(&paragraph, 280);
    assert_eq!(segments, vec![first, second, third]);
}

#[test]
fn test_oversized_sentence_is_emitted_whole() {
    let long = format!("{}!", "x".repeat(300));
    let source = format!("Short one. {long} Tail.");

    let segments = thread(&source, 280);
    assert_eq!(segments, vec!["Short one.".to_string(), long, "Tail.".to_string()]);
}

#[test]
fn test_markdown_is_converted_before_splitting() {
    let segments = thread("## Title\n\n- **one**\n- two", 280);
    assert_eq!(segments, vec!["【Title】", "• 「one」\n• two"]);
}

#[test]
fn test_empty_document_has_no_segments() {
    assert!(thread("", 280).is_empty());
    assert!(thread("\n\n\n", 280).is_empty());
}
