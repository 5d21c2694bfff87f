//! Shared helpers for md2x-engine integration tests

use md2x_engine::{convert, CodeStyle, ConvertOptions, Converted, Mode};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}

pub fn article(source: &str, options: &ConvertOptions) -> String {
    match convert(source, options) {
        Converted::Article(text) => text,
        Converted::Thread(_) => panic!("expected article output"),
    }
}

pub fn thread(source: &str, max_length: usize) -> Vec<String> {
    let options = ConvertOptions {
        mode: Mode::Thread,
        max_length,
        ..ConvertOptions::default()
    };
    match convert(source, &options) {
        Converted::Thread(segments) => segments,
        Converted::Article(_) => panic!("expected thread output"),
    }
}

pub fn with_code_style(code_style: CodeStyle) -> ConvertOptions {
    ConvertOptions {
        code_style,
        ..ConvertOptions::default()
    }
}
