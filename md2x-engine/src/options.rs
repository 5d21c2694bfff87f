//! Conversion options
//!
//! Mirrors the knobs exposed by the CLI and the configuration file. Option
//! names arriving from configuration are parsed leniently (unknown values
//! fall back to the default with a warning) so that [`crate::convert`] stays
//! total; callers that must reject bad input use the strict [`FromStr`]
//! implementations instead.

use crate::error::ConvertError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Default segment length for thread mode, in characters
pub const DEFAULT_MAX_LENGTH: usize = 280;

/// Output shape of a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Mode {
    /// One flat document
    #[default]
    Article,
    /// Ordered sequence of length-bounded segments
    Thread,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Article => "article",
            Mode::Thread => "thread",
        }
    }
}

impl FromStr for Mode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "article" => Ok(Mode::Article),
            "thread" => Ok(Mode::Thread),
            _ => Err(ConvertError::UnknownMode(s.to_string())),
        }
    }
}

impl From<String> for Mode {
    fn from(name: String) -> Self {
        name.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to article mode");
            Mode::default()
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How fenced code blocks and inline code spans are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CodeStyle {
    /// Each code line carries the code label
    #[default]
    Inline,
    /// Each code line is quoted with `> `
    Blockquote,
    /// Each code line is indented
    Plain,
}

impl CodeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeStyle::Inline => "inline",
            CodeStyle::Blockquote => "blockquote",
            CodeStyle::Plain => "plain",
        }
    }
}

impl FromStr for CodeStyle {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(CodeStyle::Inline),
            "blockquote" => Ok(CodeStyle::Blockquote),
            "plain" => Ok(CodeStyle::Plain),
            _ => Err(ConvertError::UnknownCodeStyle(s.to_string())),
        }
    }
}

impl From<String> for CodeStyle {
    fn from(name: String) -> Self {
        name.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to inline code style");
            CodeStyle::default()
        })
    }
}

impl fmt::Display for CodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual substitutes for Markdown syntax
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Replaces unordered list markers
    pub bullet: String,

    /// Opens a level-two heading
    pub heading2_open: String,

    /// Closes a level-two heading
    pub heading2_close: String,

    /// Placed on both sides of a level-three heading
    pub heading3_mark: String,

    /// Opens a bold span
    pub bold_open: String,

    /// Closes a bold span
    pub bold_close: String,

    /// Prefixes an italic span
    pub italic_prefix: String,

    /// Prefixes each line of a code block in the inline code style
    pub code_label: String,

    /// Prefixes each line of a code block in the plain code style
    pub code_indent: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            bullet: "•".to_string(),
            heading2_open: "【".to_string(),
            heading2_close: "】".to_string(),
            heading3_mark: "—".to_string(),
            bold_open: "「".to_string(),
            bold_close: "」".to_string(),
            italic_prefix: "✦".to_string(),
            code_label: "💻 ".to_string(),
            code_indent: "    ".to_string(),
        }
    }
}

/// Configuration record handed to [`crate::convert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Article (one string) or thread (segments)
    pub mode: Mode,

    /// Keep link targets next to the link text
    pub keep_links: bool,

    /// Rendering of code blocks and inline code
    pub code_style: CodeStyle,

    /// Maximum characters per thread segment
    pub max_length: usize,

    /// Visual substitutes for Markdown syntax
    pub glyphs: Glyphs,
}

impl ConvertOptions {
    /// Reject configurations the engine cannot honour meaningfully.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.max_length == 0 {
            return Err(ConvertError::InvalidMaxLength(self.max_length));
        }
        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Article,
            keep_links: true,
            code_style: CodeStyle::Inline,
            max_length: DEFAULT_MAX_LENGTH,
            glyphs: Glyphs::default(),
        }
    }
}
