// Command-line interface for html2typst
//
// Reads rich-text HTML from a file or stdin and writes the Typst translation to stdout or a file.
// The translation itself lives in the html2typst crate; this binary only deals with the shell:
// arguments, configuration files, logging and I/O.
//
// Usage:
//  html2typst [<input>] [--output <file>] [--debug] [--config <file>] [--log-level <level>]
//
//  <input> is a path, or "-" (the default) for stdin.
//
// Configuration:
//
// Settings are layered, last one wins: built-in defaults, ./html2typst.toml if present, the file
// given with --config, then command line flags. RUST_LOG, when set, replaces the configured log
// level. Logs always go to stderr so stdout carries nothing but the translation.

use clap::{Arg, ArgAction, Command, ValueHint};
use html2typst::{translate_reader, TranslateOptions};
use html2typst_config::{ConfigError, Html2TypstConfig, LogLevel, Loader, PROJECT_CONFIG_FILE};
use std::fs;
use std::io::{self, Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Input path meaning stdin.
const STDIN: &str = "-";

fn build_cli() -> Command {
    Command::new("html2typst")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate rich-text HTML into Typst markup")
        .long_about(
            "html2typst converts HTML produced by rich-text editors into Typst markup.\n\n\
            Every piece of text in the input is kept. Tags, classes and styles that are not\n\
            understood degrade to their text; --debug additionally marks unsupported tags\n\
            with /* Unsupported tag: <name> */ comments.\n\n\
            Examples:\n  \
            html2typst page.html                     # Translate to stdout\n  \
            html2typst page.html -o page.typ         # Translate to a file\n  \
            cat page.html | html2typst               # Read from stdin\n  \
            html2typst page.html --debug             # Mark unsupported tags",
        )
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
                .value_name("PATH")
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
                .value_name("PATH")
                .help("Path to an html2typst.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Diagnostics written to stderr (RUST_LOG takes precedence)")
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS)),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_flag("debug"),
        matches.get_one::<String>("log-level").map(|s| s.as_str()),
    );
    init_logging(config.logging.level);

    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or(STDIN);
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    handle_translate_command(input, output, &config);
}

fn handle_translate_command(input: &str, output: Option<&str>, config: &Html2TypstConfig) {
    let options = TranslateOptions::from(&config.translate);
    info!(input, debug = options.debug, "translating");

    let typst = translate_input(input, &options).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });
    let typst = with_trailing_newline(typst);

    match output {
        Some(path) => {
            fs::write(path, &typst).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            debug!(path, bytes = typst.len(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(typst.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error writing to stdout: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn translate_input(input: &str, options: &TranslateOptions) -> Result<String, String> {
    let reader: Box<dyn Read> = if input == STDIN {
        Box::new(io::stdin().lock())
    } else {
        Box::new(fs::File::open(input).map_err(|e| e.to_string())?)
    };
    translate_reader(reader, options).map_err(|e| e.to_string())
}

fn with_trailing_newline(mut typst: String) -> String {
    if !typst.is_empty() && !typst.ends_with('\n') {
        typst.push('\n');
    }
    typst
}

fn load_cli_config(
    explicit_path: Option<&str>,
    debug: bool,
    log_level: Option<&str>,
) -> Html2TypstConfig {
    build_config(explicit_path, debug, log_level).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn build_config(
    explicit_path: Option<&str>,
    debug: bool,
    log_level: Option<&str>,
) -> Result<Html2TypstConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = explicit_path {
        loader = loader.with_file(path);
    }
    // Only a flag that is present overrides; absent flags leave the files in charge.
    if debug {
        loader = loader.set_override("translate.debug", true)?;
    }
    if let Some(level) = log_level {
        loader = loader.set_override("logging.level", level)?;
    }
    loader.build()
}

fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
