//! Line classification and structural rendering
//!
//! Each line is matched against an ordered rule table; the first rule whose
//! matcher accepts the line decides its [`LineKind`] and how it renders.
//! Classification only looks at the line itself. Whether a line sits inside
//! a fenced code block is tracked by [`crate::code_block`].
//!
//! Heading text goes through the inline renderer too, so `## **Title**`
//! renders the same emphasis as body text would.

use crate::inline::render_inline;
use crate::options::ConvertOptions;

/// Token opening and closing a fenced code block
pub const FENCE: &str = "```";

/// Structural tag assigned to a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading1,
    Heading2,
    Heading3,
    UnorderedItem,
    OrderedItem,
    CodeFenceMarker,
    Plain,
}

/// The pieces of a line a rule matched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker<'a> {
    /// Leading whitespace kept in front of list markers
    indent: &'a str,
    /// Digits of an ordered list marker
    number: &'a str,
    /// Text after the marker
    body: &'a str,
}

impl<'a> Marker<'a> {
    fn body(body: &'a str) -> Self {
        Marker {
            indent: "",
            number: "",
            body,
        }
    }
}

struct LineRule {
    kind: LineKind,
    matches: fn(&str) -> Option<Marker<'_>>,
    render: fn(&Marker<'_>, &ConvertOptions) -> String,
}

/// Rules in precedence order; the first match wins.
const RULES: &[LineRule] = &[
    LineRule {
        kind: LineKind::CodeFenceMarker,
        matches: match_fence,
        render: render_fence,
    },
    LineRule {
        kind: LineKind::Heading3,
        matches: match_heading3,
        render: render_heading3,
    },
    LineRule {
        kind: LineKind::Heading2,
        matches: match_heading2,
        render: render_heading2,
    },
    LineRule {
        kind: LineKind::Heading1,
        matches: match_heading1,
        render: render_heading1,
    },
    LineRule {
        kind: LineKind::UnorderedItem,
        matches: match_unordered,
        render: render_unordered,
    },
    LineRule {
        kind: LineKind::OrderedItem,
        matches: match_ordered,
        render: render_ordered,
    },
];

fn find_rule(line: &str) -> Option<(&'static LineRule, Marker<'_>)> {
    RULES
        .iter()
        .find_map(|rule| (rule.matches)(line).map(|marker| (rule, marker)))
}

/// Classify a line by its leading characters.
pub fn classify(line: &str) -> LineKind {
    find_rule(line).map_or(LineKind::Plain, |(rule, _)| rule.kind)
}

/// Whether the line opens or closes a fenced code block.
pub fn is_fence(line: &str) -> bool {
    match_fence(line).is_some()
}

/// Render a line outside of any code block.
///
/// Fence markers render to an empty string; the code block handler consumes
/// them before they get here.
pub fn render_line(line: &str, options: &ConvertOptions) -> String {
    match find_rule(line) {
        Some((rule, marker)) => (rule.render)(&marker, options),
        None => render_inline(line, options),
    }
}

fn match_fence(line: &str) -> Option<Marker<'_>> {
    // Anything after the fence is an info string (```rust) and is dropped.
    line.trim_start().strip_prefix(FENCE).map(Marker::body)
}

fn match_heading1(line: &str) -> Option<Marker<'_>> {
    line.strip_prefix("# ").map(Marker::body)
}

fn match_heading2(line: &str) -> Option<Marker<'_>> {
    line.strip_prefix("## ").map(Marker::body)
}

fn match_heading3(line: &str) -> Option<Marker<'_>> {
    line.strip_prefix("### ").map(Marker::body)
}

fn match_unordered(line: &str) -> Option<Marker<'_>> {
    let (indent, rest) = split_indent(line);
    let body = ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| rest.strip_prefix(marker))?;
    Some(Marker {
        indent,
        number: "",
        body,
    })
}

fn match_ordered(line: &str) -> Option<Marker<'_>> {
    let (indent, rest) = split_indent(line);
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let after = &rest[digits..];
    let body = after
        .strip_prefix(". ")
        .or_else(|| after.strip_prefix(") "))?;
    Some(Marker {
        indent,
        number: &rest[..digits],
        body,
    })
}

fn split_indent(line: &str) -> (&str, &str) {
    let rest = line.trim_start_matches([' ', '\t']);
    (&line[..line.len() - rest.len()], rest)
}

fn render_fence(_: &Marker<'_>, _: &ConvertOptions) -> String {
    String::new()
}

fn render_heading1(marker: &Marker<'_>, options: &ConvertOptions) -> String {
    render_inline(marker.body.trim(), options)
}

fn render_heading2(marker: &Marker<'_>, options: &ConvertOptions) -> String {
    let glyphs = &options.glyphs;
    format!(
        "{}{}{}",
        glyphs.heading2_open,
        render_inline(marker.body.trim(), options),
        glyphs.heading2_close
    )
}

fn render_heading3(marker: &Marker<'_>, options: &ConvertOptions) -> String {
    let mark = &options.glyphs.heading3_mark;
    format!("{mark} {} {mark}", render_inline(marker.body.trim(), options))
}

fn render_unordered(marker: &Marker<'_>, options: &ConvertOptions) -> String {
    list_item(marker.indent, &options.glyphs.bullet, marker.body, options)
}

fn render_ordered(marker: &Marker<'_>, options: &ConvertOptions) -> String {
    list_item(marker.indent, &keycap_number(marker.number), marker.body, options)
}

fn list_item(indent: &str, glyph: &str, body: &str, options: &ConvertOptions) -> String {
    let text = render_inline(body.trim(), options);
    if text.is_empty() {
        format!("{indent}{glyph}")
    } else {
        format!("{indent}{glyph} {text}")
    }
}

/// Spell a decimal number with keycap emoji, one keycap per digit.
pub fn keycap_number(digits: &str) -> String {
    if digits == "10" {
        return "🔟".to_string();
    }
    digits
        .chars()
        .flat_map(|digit| [digit, '\u{FE0F}', '\u{20E3}'])
        .collect()
}
