//! Thread splitting
//!
//! Partitions normalized text into segments of at most `max_length`
//! characters. Paragraphs (runs of non-blank lines) that fit are emitted
//! whole. Longer paragraphs are cut into sentences and packed greedily, each
//! segment taking as many consecutive sentences as fit. A sentence that is
//! longer than `max_length` on its own becomes its own segment, over length;
//! nothing is truncated and nothing is reordered.
//!
//! Sentence boundaries are `.`, `?` or `!` followed by a space, the CJK
//! terminators `。！？`, and line breaks inside a paragraph. Packed sentences
//! are re-joined with the separator that preceded them in the source: a
//! single space after `. `, `? ` and `! `, a newline after a line break.
//!
//! Lengths are counted in `char`s.

use std::mem;
use tracing::{debug, trace};

/// One sentence of a paragraph and the separator that came before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sentence<'a> {
    separator: &'static str,
    text: &'a str,
}

/// Split text into thread segments no longer than `max_length` characters,
/// except for single sentences that exceed it on their own.
///
/// Empty or blank input yields no segments.
pub fn split_thread(text: &str, max_length: usize) -> Vec<String> {
    let mut segments = Vec::new();
    for paragraph in paragraphs(text) {
        if char_len(&paragraph) <= max_length {
            segments.push(paragraph);
        } else {
            let sentences = split_sentences(&paragraph);
            trace!(sentences = sentences.len(), "packing long paragraph");
            pack(&sentences, max_length, &mut segments);
        }
    }
    debug!(segments = segments.len(), max_length, "thread split");
    segments
}

/// Maximal runs of non-blank lines, joined by newlines.
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

fn split_sentences(paragraph: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut separator = "";
    let mut start = 0;
    let mut chars = paragraph.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => {
                push_sentence(&mut sentences, separator, &paragraph[start..i]);
                separator = "\n";
                start = i + 1;
            }
            '.' | '?' | '!' | '。' | '！' | '？' => {
                let end = i + c.len_utf8();
                let mut next = end;
                while let Some(&(j, ' ')) = chars.peek() {
                    chars.next();
                    next = j + 1;
                }
                let spaced = next > end;
                if !spaced && c.is_ascii() {
                    continue;
                }
                push_sentence(&mut sentences, separator, &paragraph[start..end]);
                separator = if spaced { " " } else { "" };
                start = next;
            }
            _ => {}
        }
    }
    push_sentence(&mut sentences, separator, &paragraph[start..]);
    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<Sentence<'a>>, separator: &'static str, text: &'a str) {
    if !text.is_empty() {
        sentences.push(Sentence { separator, text });
    }
}

fn pack(sentences: &[Sentence<'_>], max_length: usize, segments: &mut Vec<String>) {
    let mut buffer = String::new();
    let mut buffer_len = 0;

    for sentence in sentences {
        let len = char_len(sentence.text);
        if buffer.is_empty() {
            buffer.push_str(sentence.text);
            buffer_len = len;
            continue;
        }

        let joined_len = buffer_len + char_len(sentence.separator) + len;
        if joined_len <= max_length {
            buffer.push_str(sentence.separator);
            buffer.push_str(sentence.text);
            buffer_len = joined_len;
        } else {
            trace!(chars = buffer_len, "flushing segment");
            segments.push(mem::take(&mut buffer));
            buffer.push_str(sentence.text);
            buffer_len = len;
        }
    }

    if !buffer.is_empty() {
        segments.push(buffer);
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(sentences: &[Sentence<'a>]) -> Vec<&'a str> {
        sentences.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(paragraphs("a\nb\n\nc\n"), vec!["a\nb", "c"]);
        assert!(paragraphs("").is_empty());
        assert!(paragraphs("\n \n").is_empty());
    }

    #[test]
    fn test_split_sentences_on_terminators() {
        let sentences = split_sentences("One. Two? Three! Four");
        assert_eq!(texts(&sentences), vec!["One.", "Two?", "Three!", "Four"]);
        assert!(sentences[1..].iter().all(|s| s.separator == " "));
    }

    #[test]
    fn test_terminator_needs_following_space() {
        let sentences = split_sentences("Version 1.2 is out.");
        assert_eq!(texts(&sentences), vec!["Version 1.2 is out."]);
    }

    #[test]
    fn test_split_sentences_on_line_breaks() {
        let sentences = split_sentences("• a\n• b");
        assert_eq!(
            sentences,
            vec![
                Sentence {
                    separator: "",
                    text: "• a"
                },
                Sentence {
                    separator: "\n",
                    text: "• b"
                },
            ]
        );
    }

    #[test]
    fn test_split_cjk_sentences() {
        let sentences = split_sentences("你好。世界！");
        assert_eq!(texts(&sentences), vec!["你好。", "世界！"]);
        assert_eq!(sentences[1].separator, "");
    }

    #[test]
    fn test_short_paragraphs_are_kept_whole() {
        let segments = split_thread("First para.\n\nSecond para.", 280);
        assert_eq!(segments, vec!["First para.", "Second para."]);
    }

    #[test]
    fn test_long_paragraph_packs_sentences() {
        let segments = split_thread("Aaaa. Bbbb. Cccc. Dddd.", 11);
        assert_eq!(segments, vec!["Aaaa. Bbbb.", "Cccc. Dddd."]);
    }

    #[test]
    fn test_oversized_sentence_stands_alone() {
        let segments = split_thread("Hi. This sentence is far too long. Ok.", 10);
        assert_eq!(segments, vec!["Hi.", "This sentence is far too long.", "Ok."]);
    }

    #[test]
    fn test_packed_lines_keep_newlines() {
        let segments = split_thread("• one\n• two\n• three", 12);
        assert_eq!(segments, vec!["• one\n• two", "• three"]);
    }

    #[test]
    fn test_empty_input_has_no_segments() {
        assert!(split_thread("", 280).is_empty());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "你好你好。世界世界。";
        assert_eq!(split_thread(text, 10), vec![text]);
        assert_eq!(split_thread(text, 9), vec!["你好你好。", "世界世界。"]);
    }
}
