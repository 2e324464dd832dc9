use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the log levels from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("html2typst")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate rich-text HTML into Typst markup")
        .arg(
            Arg::new("input")
                .help("Input HTML file, or '-' for stdin (default)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Mark content from unsupported tags with Typst comments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to an html2typst.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Diagnostics written to stderr")
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "html2typst", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "html2typst", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "html2typst", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
