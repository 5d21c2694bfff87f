// Command-line interface for md2x
//
// Converts a Markdown document into plain text for posting on a character-limited
// social platform, either as one article or as a thread of bounded segments.
// All conversion logic lives in md2x-engine; this binary only reads input, layers
// configuration and writes output.
//
// Usage:
//  md2x <input> [--mode article|thread] [-o <file> | --write]   - Convert a file
//  md2x --text "<markdown>" [options]                           - Convert an inline argument
//  cat post.md | md2x [options]                                 - Convert stdin
//
// Configuration:
//
// Settings are layered: embedded defaults, then ./md2x.toml if present, then the
// file given with --config, then command-line flags.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use md2x_cli::output;
use md2x_config::{Loader, Md2xConfig, PROJECT_CONFIG_FILE};
use md2x_engine::{convert, ConvertOptions};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const MODES: &[&str] = &["article", "thread"];
const CODE_STYLES: &[&str] = &["inline", "blockquote", "plain"];
const THREAD_OUTPUTS: &[&str] = &["json", "numbered"];

fn build_cli() -> Command {
    Command::new("md2x")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into plain text for social posts and threads")
        .long_about(
            "md2x strips or substitutes Markdown syntax (headings, emphasis, lists,\n\
            links, code) with plain-text equivalents suitable for a character-limited\n\
            social platform.\n\n\
            Modes:\n  \
            - article: one converted document (default)\n  \
            - thread:  an ordered list of segments of at most --max-length characters\n\n\
            Input is read from INPUT, from --text, or from stdin when neither is given\n\
            (or INPUT is '-'). Output goes to stdout unless -o or --write is used.\n\n\
            Examples:\n  \
            md2x post.md                          # Article to stdout\n  \
            md2x post.md --write                  # Writes post-twitter.md\n  \
            md2x post.md --mode thread            # Thread as a JSON array\n  \
            md2x post.md --mode thread --thread-output numbered -o thread.txt\n  \
            md2x --text '**hi** [me](https://x.dev)' --strip-links",
        )
        .arg(
            Arg::new("input")
                .help("Markdown file to convert ('-' for stdin)")
                .index(1)
                .conflicts_with("text")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .short('t')
                .value_name("MARKDOWN")
                .help("Convert this Markdown text instead of reading a file"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("write")
                .long("write")
                .short('w')
                .help("Write next to the input file (<stem>-twitter.md, <stem>-thread.json)")
                .action(ArgAction::SetTrue)
                .requires("input")
                .conflicts_with("output"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("Output mode")
                .value_parser(clap::builder::PossibleValuesParser::new(MODES)),
        )
        .arg(
            Arg::new("keep-links")
                .long("keep-links")
                .help("Keep link targets after link text")
                .action(ArgAction::SetTrue)
                .conflicts_with("strip-links"),
        )
        .arg(
            Arg::new("strip-links")
                .long("strip-links")
                .help("Drop link targets, keeping only link text")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("code-style")
                .long("code-style")
                .help("How code blocks and inline code are rendered")
                .value_parser(clap::builder::PossibleValuesParser::new(CODE_STYLES)),
        )
        .arg(
            Arg::new("max-length")
                .long("max-length")
                .value_name("CHARS")
                .help("Maximum characters per thread segment")
                .value_parser(clap::value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new("thread-output")
                .long("thread-output")
                .help("Serialization of thread segments")
                .value_parser(clap::builder::PossibleValuesParser::new(THREAD_OUTPUTS)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an md2x.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level when RUST_LOG is not set (error, warn, info, debug, trace)")
                .default_value("warn"),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    setup_logging(level);

    let config = load_cli_config(&matches).unwrap_or_else(|err| {
        eprintln!("Error: failed to load configuration: {err}");
        std::process::exit(1);
    });

    let options = ConvertOptions::from(&config);
    if let Err(err) = options.validate() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let input = matches.get_one::<String>("input").map(String::as_str);
    let source = read_source(input, matches.get_one::<String>("text")).unwrap_or_else(|err| {
        eprintln!("Error: cannot read input: {err}");
        std::process::exit(1);
    });
    debug!(chars = source.chars().count(), mode = %options.mode, "converting");

    let converted = convert(&source, &options);
    let rendered = output::render(&converted, config.thread.output).unwrap_or_else(|err| {
        eprintln!("Error: cannot serialize output: {err}");
        std::process::exit(1);
    });

    let destination = if matches.get_flag("write") {
        match input {
            Some(path) if path != "-" => Some(output::default_output_path(
                Path::new(path),
                &converted,
                config.thread.output,
            )),
            _ => {
                eprintln!("Error: --write needs an input file to name the output after");
                std::process::exit(1);
            }
        }
    } else {
        matches.get_one::<String>("output").map(PathBuf::from)
    };

    match destination {
        Some(path) => {
            fs::write(&path, rendered).unwrap_or_else(|e| {
                eprintln!("Error: cannot write '{}': {e}", path.display());
                std::process::exit(1);
            });
            eprintln!("Output written to: {}", path.display());
        }
        None => print!("{rendered}"),
    }
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Layer project and explicit config files, then command-line flags.
fn load_cli_config(matches: &ArgMatches) -> Result<Md2xConfig, md2x_config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(mode) = matches.get_one::<String>("mode") {
        loader = loader.set_override("convert.mode", mode.as_str())?;
    }
    if matches.get_flag("keep-links") {
        loader = loader.set_override("convert.keep_links", true)?;
    }
    if matches.get_flag("strip-links") {
        loader = loader.set_override("convert.keep_links", false)?;
    }
    if let Some(style) = matches.get_one::<String>("code-style") {
        loader = loader.set_override("convert.code_style", style.as_str())?;
    }
    if let Some(max_length) = matches.get_one::<i64>("max-length") {
        loader = loader.set_override("thread.max_length", *max_length)?;
    }
    if let Some(thread_output) = matches.get_one::<String>("thread-output") {
        loader = loader.set_override("thread.output", thread_output.as_str())?;
    }

    loader.build()
}

/// Read the document from `--text`, a file, or stdin (no input or `-`).
fn read_source(input: Option<&str>, text: Option<&String>) -> io::Result<String> {
    if let Some(text) = text {
        return Ok(text.clone());
    }
    match input {
        Some(path) if path != "-" => fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("'{path}': {e}"))
        }),
        _ => io::read_to_string(io::stdin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use md2x_config::ThreadOutput;
    use md2x_engine::{CodeStyle, Mode};

    fn matches_for(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["md2x"];
        argv.extend_from_slice(args);
        build_cli().try_get_matches_from(argv).expect("args to parse")
    }

    #[test]
    fn flags_override_defaults() {
        let matches = matches_for(&[
            "post.md",
            "--mode",
            "thread",
            "--strip-links",
            "--code-style",
            "plain",
            "--max-length",
            "140",
            "--thread-output",
            "numbered",
        ]);
        let config = load_cli_config(&matches).expect("config");
        assert_eq!(config.convert.mode, Mode::Thread);
        assert!(!config.convert.keep_links);
        assert_eq!(config.convert.code_style, CodeStyle::Plain);
        assert_eq!(config.thread.max_length, 140);
        assert_eq!(config.thread.output, ThreadOutput::Numbered);
    }

    #[test]
    fn defaults_without_flags() {
        let matches = matches_for(&["post.md"]);
        let config = load_cli_config(&matches).expect("config");
        assert_eq!(config.convert.mode, Mode::Article);
        assert!(config.convert.keep_links);
        assert_eq!(config.thread.max_length, 280);
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = build_cli().try_get_matches_from(["md2x", "--mode", "essay"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_max_length() {
        let result = build_cli().try_get_matches_from(["md2x", "--max-length", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn write_requires_input() {
        let result = build_cli().try_get_matches_from(["md2x", "--text", "hi", "--write"]);
        assert!(result.is_err());
    }

    #[test]
    fn link_flags_conflict() {
        let result =
            build_cli().try_get_matches_from(["md2x", "post.md", "--keep-links", "--strip-links"]);
        assert!(result.is_err());
    }

    #[test]
    fn inline_text_wins_over_stdin() {
        let text = "# hi".to_string();
        assert_eq!(read_source(None, Some(&text)).unwrap(), "# hi");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_source(Some("/nonexistent/post.md"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/post.md"));
    }
}
