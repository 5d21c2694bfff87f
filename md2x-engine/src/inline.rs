//! Inline span rendering
//!
//! Rewrites links, images, code spans, bold, italic and strikethrough inside a
//! single line. The line is scanned once, left to right. At each position the
//! longer delimiter is tried before the shorter one (`**` before `*`), and a
//! span's closer is searched for with nested spans and code spans skipped, so
//! bold and italic never steal each other's markers.
//!
//! Emphasis delimiters follow the usual flanking rule: an opener must be
//! followed by non-whitespace and a closer preceded by non-whitespace. That
//! keeps arithmetic like `2 * 3 * 4` literal.
//!
//! Span contents are rendered recursively, except code spans which are
//! emitted verbatim. Code spans are opaque: link or emphasis syntax between
//! backticks is left alone.
//!
//! Positions are byte offsets into the whole line. Closer searches are
//! memoized per position (see [`Closers`]), so a line full of unmatched
//! markers is scanned in linear time.

use crate::options::{CodeStyle, ConvertOptions};
use std::collections::HashMap;

/// Render the inline spans of one line of text.
pub fn render_inline(text: &str, options: &ConvertOptions) -> String {
    let mut scanner = Scanner {
        line: text,
        options,
        closers: Closers::new(text),
        out: String::with_capacity(text.len()),
    };
    scanner.scan(0, text.len());
    scanner.out
}

struct Scanner<'a> {
    line: &'a str,
    options: &'a ConvertOptions,
    closers: Closers<'a>,
    out: String,
}

impl Scanner<'_> {
    fn scan(&mut self, start: usize, end: usize) {
        let mut pos = start;
        while pos < end {
            pos += self.step(pos, end);
        }
    }

    /// Consume one token at `pos`, returning its byte length.
    fn step(&mut self, pos: usize, end: usize) -> usize {
        let line = self.line;
        let rest = &line[pos..end];

        if rest.starts_with("![") {
            // Images have no plain-text rendering.
            if let Some(link) = parse_link(&rest[1..]) {
                return 1 + link.len;
            }
        }

        if rest.starts_with('[') {
            if let Some(link) = parse_link(rest) {
                self.link(pos, &link);
                return link.len;
            }
        }

        if rest.starts_with('`') {
            return match code_span(rest) {
                Some(span) => {
                    self.code(span.content);
                    span.len
                }
                None => {
                    let run = backtick_run(rest);
                    self.out.push_str(&rest[..run]);
                    run
                }
            };
        }

        for delim in ["**", "__"] {
            if rest.starts_with(delim) {
                return match self.closers.delimited(pos, end, delim) {
                    Some(close) => {
                        self.out.push_str(&self.options.glyphs.bold_open);
                        self.scan(pos + delim.len(), close);
                        self.out.push_str(&self.options.glyphs.bold_close);
                        close + delim.len() - pos
                    }
                    None => {
                        self.out.push_str(delim);
                        delim.len()
                    }
                };
            }
        }

        if rest.starts_with("~~") {
            if let Some(close) = self.closers.delimited(pos, end, "~~") {
                self.scan(pos + 2, close);
                return close + 2 - pos;
            }
        }

        if rest.starts_with('*') {
            if let Some(close) = self.closers.delimited(pos, end, "*") {
                self.out.push_str(&self.options.glyphs.italic_prefix);
                self.scan(pos + 1, close);
                return close + 1 - pos;
            }
        }

        if let Some(escaped) = rest.strip_prefix('\\') {
            if let Some(c) = escaped.chars().next().filter(char::is_ascii_punctuation) {
                self.out.push(c);
                return 1 + c.len_utf8();
            }
        }

        match rest.chars().next() {
            Some(c) => {
                self.out.push(c);
                c.len_utf8()
            }
            None => rest.len().max(1),
        }
    }

    /// Render a link whose `[` sits at `pos`.
    fn link(&mut self, pos: usize, link: &Link<'_>) {
        let before = self.out.len();
        let text_start = pos + 1;
        self.scan(text_start, text_start + link.text.len());
        if self.options.keep_links && !link.url.is_empty() {
            if self.out.len() > before {
                self.out.push(' ');
            }
            self.out.push_str(link.url);
        }
    }

    fn code(&mut self, content: &str) {
        match self.options.code_style {
            CodeStyle::Inline | CodeStyle::Plain => self.out.push_str(content),
            CodeStyle::Blockquote => {
                self.out.push_str("> ");
                self.out.push_str(content);
            }
        }
    }
}

/// Closer lookups for one line.
///
/// A search walks right from its opener, hopping over code spans and (for
/// `*`) whole `**` spans. From any position it passes, the rest of the walk
/// depends only on that position, the delimiter and the end of the enclosing
/// span, so the outcome is recorded for every position walked and a later
/// search stops as soon as it lands on a known one.
struct Closers<'a> {
    line: &'a str,
    known: HashMap<(&'static str, usize, usize), Option<usize>>,
}

impl<'a> Closers<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            known: HashMap::new(),
        }
    }

    /// Closing position of a span opened by `delim` at `start`.
    fn delimited(&mut self, start: usize, end: usize, delim: &'static str) -> Option<usize> {
        let open = start + delim.len();
        if !self.line[open..end].starts_with(|c: char| !c.is_whitespace()) {
            return None;
        }
        self.find(open, end, delim)
    }

    /// Position of the first valid closer for `delim` after `from` and
    /// before `end`.
    fn find(&mut self, from: usize, end: usize, delim: &'static str) -> Option<usize> {
        let line = self.line;
        let mut walked = Vec::new();
        let mut pos = from;

        let found = loop {
            if pos >= end {
                break None;
            }
            if pos > from {
                if let Some(&outcome) = self.known.get(&(delim, end, pos)) {
                    break outcome;
                }
                walked.push(pos);
            }

            let rest = &line[pos..end];
            if rest.starts_with('`') {
                pos += code_span(rest).map_or_else(|| backtick_run(rest), |span| span.len);
                continue;
            }
            if delim == "*" && rest.starts_with("**") {
                pos = self
                    .delimited(pos, end, "**")
                    .map_or(pos + 2, |close| close + 2);
                continue;
            }
            if rest.starts_with(delim) && pos > from && flanks_left(&line[..pos]) {
                break Some(pos);
            }
            pos += rest.chars().next().map_or(1, char::len_utf8);
        };

        for pos in walked {
            self.known.insert((delim, end, pos), found);
        }
        found
    }
}

/// A `[text](url)` span found at the start of a string
#[derive(Debug, PartialEq)]
struct Link<'a> {
    text: &'a str,
    url: &'a str,
    /// Byte length of the whole span
    len: usize,
}

fn parse_link(s: &str) -> Option<Link<'_>> {
    let body = s.strip_prefix('[')?;
    let close = body.find(']')?;
    let target = body[close + 1..].strip_prefix('(')?;
    let end = target.find(')')?;
    // Drop an optional title: [text](url "title")
    let url = target[..end].split_whitespace().next().unwrap_or("");
    Some(Link {
        text: &body[..close],
        url,
        len: 1 + close + 2 + end + 1,
    })
}

struct CodeSpan<'a> {
    content: &'a str,
    len: usize,
}

fn backtick_run(s: &str) -> usize {
    s.bytes().take_while(|&b| b == b'`').count()
}

/// Match a code span opened by the backtick run at the start of `s`; the
/// closer must be a run of the same length.
fn code_span(s: &str) -> Option<CodeSpan<'_>> {
    let run = backtick_run(s);
    let mut pos = run;
    while pos < s.len() {
        let found = s[pos..].find('`')? + pos;
        let closing = backtick_run(&s[found..]);
        if closing == run {
            let content = s[run..found].trim();
            if content.is_empty() {
                return None;
            }
            return Some(CodeSpan {
                content,
                len: found + closing,
            });
        }
        pos = found + closing;
    }
    None
}

fn flanks_left(before: &str) -> bool {
    before.chars().next_back().is_some_and(|c| !c.is_whitespace())
}
