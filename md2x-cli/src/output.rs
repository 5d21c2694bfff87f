//! Output serialization
//!
//! Turns a [`Converted`] result into the bytes the CLI writes, and derives
//! the default output path used by `--write`.
//!
//! - Article output is the converted text, newline terminated.
//! - Thread output is either a pretty JSON array of strings or numbered
//!   `i/N` blocks separated by blank lines.

use md2x_config::ThreadOutput;
use md2x_engine::Converted;
use std::path::{Path, PathBuf};

/// Serialize a conversion result for writing.
pub fn render(converted: &Converted, thread_output: ThreadOutput) -> Result<String, serde_json::Error> {
    let mut text = match (converted, thread_output) {
        (Converted::Article(text), _) => text.clone(),
        (Converted::Thread(segments), ThreadOutput::Json) => serde_json::to_string_pretty(segments)?,
        (Converted::Thread(segments), ThreadOutput::Numbered) => numbered(segments),
    };
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

fn numbered(segments: &[String]) -> String {
    let total = segments.len();
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| format!("{}/{total}\n{segment}", i + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Path written by `--write`: next to the input, named after its stem.
///
/// `post.md` becomes `post-twitter.md` for articles, and `post-thread.json`
/// or `post-thread.txt` for threads.
pub fn default_output_path(input: &Path, converted: &Converted, thread_output: ThreadOutput) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match (converted, thread_output) {
        (Converted::Article(_), _) => format!("{stem}-twitter.md"),
        (Converted::Thread(_), ThreadOutput::Json) => format!("{stem}-thread.json"),
        (Converted::Thread(_), ThreadOutput::Numbered) => format!("{stem}-thread.txt"),
    };
    input.with_file_name(name)
}
