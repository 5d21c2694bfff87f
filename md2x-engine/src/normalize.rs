//! Blank line normalization
//!
//! Collapses every run of blank lines (empty or whitespace only) into exactly
//! one empty line. Runs at the start and end of the text are collapsed the
//! same way rather than stripped, and no blank line is ever introduced.

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Collapse blank runs in a sequence of lines.
pub fn normalize_lines<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    let mut previous_blank = false;
    for line in lines {
        if is_blank(line) {
            if !previous_blank {
                out.push("");
            }
            previous_blank = true;
        } else {
            out.push(line);
            previous_blank = false;
        }
    }
    out
}

/// Collapse blank runs in a `\n` separated text.
pub fn normalize_blank_lines(text: &str) -> String {
    normalize_lines(text.split('\n')).join("\n")
}
