//! Markdown to social-post text conversion
//!
//!     This crate turns a Markdown document into plain text suitable for a
//!     character-limited social platform. Markdown syntax is stripped or replaced
//!     by visual equivalents (brackets, bullets, keycap numbers), and long content
//!     can be split into an ordered thread of length-bounded segments.
//!
//!     This is a pure lib: it never reads files, stdin, or environment variables.
//!     The md2x-cli crate does the shell work and hands over one text blob and a
//!     [`ConvertOptions`] record.
//!
//! Pipeline
//!
//!     raw text
//!       → code_block   fence state machine; non-fenced lines go to
//!                      classify (structural rules) and inline (span rewrites)
//!       → normalize    blank runs collapsed to one blank line
//!       → article mode: done
//!       → thread mode:  thread (paragraph / sentence packing)
//!
//!     Line order is preserved end to end. Every stage is total: any UTF-8 input,
//!     including empty input and unterminated fences, converts without error.
//!
//!     The file structure :
//!     .
//!     ├── error.rs        # Option parsing errors
//!     ├── options.rs      # ConvertOptions, Mode, CodeStyle, Glyphs
//!     ├── classify.rs     # Line rule table (headings, lists, fences)
//!     ├── inline.rs       # Single-pass inline span scanner
//!     ├── code_block.rs   # Fence state machine and block rendering
//!     ├── normalize.rs    # Blank line collapsing
//!     └── thread.rs       # Thread segment packing
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common          # Fixture loading
//!     ├── article         # Whole-document conversions
//!     ├── thread          # Thread mode conversions
//!     ├── properties      # Property tests (idempotence, ordering, bounds)
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so they
//!     are included from tests/lib.rs.

pub mod classify;
pub mod code_block;
pub mod error;
pub mod inline;
pub mod normalize;
pub mod options;
pub mod thread;

pub use classify::{classify, render_line, LineKind};
pub use code_block::render_document;
pub use error::ConvertError;
pub use inline::render_inline;
pub use normalize::normalize_blank_lines;
pub use options::{CodeStyle, ConvertOptions, Glyphs, Mode, DEFAULT_MAX_LENGTH};
pub use thread::split_thread;

use tracing::debug;

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    /// The whole document as one string
    Article(String),
    /// Ordered thread segments
    Thread(Vec<String>),
}

/// Convert a Markdown document.
///
/// Never fails. Option values the engine cannot honour meaningfully (a zero
/// `max_length`) still produce output; use [`ConvertOptions::validate`] to
/// reject them up front.
pub fn convert(text: &str, options: &ConvertOptions) -> Converted {
    let rendered = render_document(text, options);
    let normalized =
        normalize::normalize_lines(rendered.iter().map(String::as_str)).join("\n");
    debug!(
        input_lines = rendered.len(),
        chars = normalized.chars().count(),
        mode = %options.mode,
        "document rendered"
    );

    match options.mode {
        Mode::Article => Converted::Article(normalized),
        Mode::Thread => Converted::Thread(split_thread(&normalized, options.max_length)),
    }
}
