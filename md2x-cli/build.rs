use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the value lists from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const MODES: &[&str] = &["article", "thread"];
const CODE_STYLES: &[&str] = &["inline", "blockquote", "plain"];
const THREAD_OUTPUTS: &[&str] = &["json", "numbered"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2x")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into plain text for social posts and threads")
        .arg(
            Arg::new("input")
                .help("Markdown file to convert ('-' for stdin)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("text").long("text").short('t'))
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("write")
                .long("write")
                .short('w')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .value_parser(clap::builder::PossibleValuesParser::new(MODES)),
        )
        .arg(
            Arg::new("keep-links")
                .long("keep-links")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strip-links")
                .long("strip-links")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("code-style")
                .long("code-style")
                .value_parser(clap::builder::PossibleValuesParser::new(CODE_STYLES)),
        )
        .arg(Arg::new("max-length").long("max-length"))
        .arg(
            Arg::new("thread-output")
                .long("thread-output")
                .value_parser(clap::builder::PossibleValuesParser::new(THREAD_OUTPUTS)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("log-level").long("log-level"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2x", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2x", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2x", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
