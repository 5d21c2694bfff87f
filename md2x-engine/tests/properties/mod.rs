//! Property tests over arbitrary input

use md2x_engine::{convert, normalize_blank_lines, split_thread, ConvertOptions, Converted, Mode};
use proptest::prelude::*;

fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

fn prose() -> impl Strategy<Value = String> {
    "[a-zA-Z.?! \n]{0,400}"
}

fn markdown() -> impl Strategy<Value = String> {
    "([#*`~_\\[\\]()!a-z0-9.\\- \n]|```|\n\n){0,200}"
}

proptest! {
    #[test]
    fn normalizing_is_idempotent(text in "[a-z \t\n]{0,200}") {
        let once = normalize_blank_lines(&text);
        prop_assert_eq!(normalize_blank_lines(&once), once.clone());
        prop_assert!(!once.contains("\n\n\n"));
    }

    #[test]
    fn splitting_preserves_word_order(text in prose(), max_length in 1usize..80) {
        let segments = split_thread(&text, max_length);
        let rejoined: Vec<&str> = segments.iter().flat_map(|s| words(s)).collect();
        prop_assert_eq!(rejoined, words(&text));
    }

    #[test]
    fn segments_respect_the_bound(text in prose(), max_length in 1usize..80) {
        for segment in split_thread(&text, max_length) {
            prop_assert!(!segment.trim().is_empty());
            if segment.chars().count() > max_length {
                // Only a single sentence may run over.
                for boundary in [". ", "? ", "! ", "\n"] {
                    prop_assert!(!segment.contains(boundary), "{:?}", segment);
                }
            }
        }
    }

    #[test]
    fn thread_and_article_carry_the_same_words(text in markdown()) {
        let article = match convert(&text, &ConvertOptions::default()) {
            Converted::Article(text) => text,
            Converted::Thread(_) => unreachable!(),
        };
        let options = ConvertOptions { mode: Mode::Thread, max_length: 40, ..ConvertOptions::default() };
        let segments = match convert(&text, &options) {
            Converted::Thread(segments) => segments,
            Converted::Article(_) => unreachable!(),
        };
        let rejoined: Vec<&str> = segments.iter().flat_map(|s| words(s)).collect();
        prop_assert_eq!(rejoined, words(&article));
    }

    #[test]
    fn conversion_is_total(text in "\\PC{0,300}") {
        let _ = convert(&text, &ConvertOptions::default());
    }
}
