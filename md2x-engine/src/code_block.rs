//! Fenced code block handling
//!
//! Drives a document through a two-state machine. Outside a fence every line
//! is rendered by [`render_line`]. A fence marker switches to
//! [`FenceState::Inside`], where lines are collected verbatim until the next
//! fence marker closes the block and the whole block is rendered in the
//! configured [`CodeStyle`]. A fence left open at the end of the document is
//! rendered with whatever it collected.

use crate::classify::{is_fence, render_line};
use crate::options::{CodeStyle, ConvertOptions, Glyphs};
use tracing::{debug, warn};

/// Lines captured between an opening and a closing fence marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    style: CodeStyle,
    lines: Vec<String>,
}

impl CodeBlock {
    pub fn open(style: CodeStyle) -> Self {
        Self {
            style,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render every captured line with the block's style prefix.
    pub fn render(self, glyphs: &Glyphs) -> Vec<String> {
        let prefix = match self.style {
            CodeStyle::Inline => glyphs.code_label.as_str(),
            CodeStyle::Blockquote => "> ",
            CodeStyle::Plain => glyphs.code_indent.as_str(),
        };
        self.lines
            .into_iter()
            .map(|line| {
                if line.trim().is_empty() {
                    prefix.trim_end().to_string()
                } else {
                    format!("{prefix}{line}")
                }
            })
            .collect()
    }
}

/// Position of the scanner relative to code fences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceState {
    Outside,
    Inside(CodeBlock),
}

impl FenceState {
    /// Feed one raw line, appending any rendered output to `out`.
    pub fn advance(self, line: &str, options: &ConvertOptions, out: &mut Vec<String>) -> Self {
        match self {
            FenceState::Outside if is_fence(line) => {
                debug!(line = out.len(), "code fence opened");
                FenceState::Inside(CodeBlock::open(options.code_style))
            }
            FenceState::Outside => {
                out.push(render_line(line, options));
                FenceState::Outside
            }
            FenceState::Inside(block) if is_fence(line) => {
                debug!(lines = block.len(), "code fence closed");
                out.extend(block.render(&options.glyphs));
                FenceState::Outside
            }
            FenceState::Inside(mut block) => {
                block.push(line);
                FenceState::Inside(block)
            }
        }
    }

    /// Flush a block still open at the end of the document.
    pub fn finish(self, options: &ConvertOptions, out: &mut Vec<String>) {
        if let FenceState::Inside(block) = self {
            warn!(lines = block.len(), "code fence not closed before end of document");
            out.extend(block.render(&options.glyphs));
        }
    }
}

/// Render a whole document line by line, preserving line order.
///
/// Input is split on `\n`; a trailing `\r` on each line is dropped.
pub fn render_document(text: &str, options: &ConvertOptions) -> Vec<String> {
    let mut out = Vec::new();
    let mut state = FenceState::Outside;
    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        state = state.advance(line, options, &mut out);
    }
    state.finish(options, &mut out);
    out
}
