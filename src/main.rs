//! Variable Text CLI
//!
//! Usage:
//!   variable-text [OPTIONS] [TEXT]
//!
//! Options:
//!   -c, --config <FILE>       Config file with values and styles (TOML format)
//!   -s, --set <NAME=VALUE>    Bind a placeholder to a string (repeatable)
//!   -f, --format <FORMAT>     Output format: plain or html
//!   -m, --missing <MODE>      Unbound placeholders: keep, blank or mark
//!   --lint                    Report missing/unused bindings and stray braces
//!   --strict                  Exit with an error when the lint reports anything
//!   -v, --verbose             Debug logging on stderr
//!   -h, --help                Print help

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use variable_text::config::fallback_for;
use variable_text::{
    render_html, render_plain, render_with_lint, Config, ConfigError, HtmlConfig, MissingMode,
    RenderError, Value,
};

/// Failures reported by the CLI, printed as `Error: ...`
#[derive(Debug, Error)]
enum CliError {
    #[error("failed to load config '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: ConfigError,
    },
    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Parser)]
#[command(name = "variable-text")]
#[command(about = "Substitute {name} placeholders in text")]
struct Cli {
    /// Template text (reads from stdin if not provided)
    text: Option<String>,

    /// Config file with values and styles (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind a placeholder to a string value, e.g. --set name=World
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    set: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// What to render for unbound placeholders (overrides the config file)
    #[arg(short, long, value_enum)]
    missing: Option<Missing>,

    /// Report missing and unused bindings and stray braces on stderr
    #[arg(long)]
    lint: bool,

    /// Exit with an error when the lint reports anything (implies --lint)
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Plain,
    Html,
}

#[derive(Clone, Copy, ValueEnum)]
enum Missing {
    Keep,
    Blank,
    Mark,
}

impl From<Missing> for MissingMode {
    fn from(missing: Missing) -> Self {
        match missing {
            Missing::Keep => MissingMode::Keep,
            Missing::Blank => MissingMode::Blank,
            Missing::Mark => MissingMode::Mark,
        }
    }
}

/// Parse a `NAME=VALUE` pair; the value may itself contain `=`
fn parse_binding(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", arg)),
    }
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // If no text and stdin is a terminal (interactive), show intro help
    if cli.text.is_none() && io::stdin().is_terminal() {
        print_intro();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => Config::from_file(path).map_err(|source| CliError::Config {
            path: path.display().to_string(),
            source,
        }),
        None => Ok(Config::default()),
    }
}

/// Read the template from `input`, dropping one trailing newline
fn read_template(mut input: impl Read) -> Result<String, CliError> {
    let mut buffer = String::new();
    input.read_to_string(&mut buffer).map_err(CliError::Stdin)?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let config = load_config(cli.config.as_deref())?;

    let text = match &cli.text {
        Some(text) => text.clone(),
        None => read_template(io::stdin())?,
    };

    let mut bindings = config.bindings();
    for (name, value) in &cli.set {
        bindings.insert(name.as_str(), Value::from(value.as_str()));
    }

    let lint = cli.lint || cli.strict;
    let mut render_config = config.render_config().with_lint(lint);
    if let Some(missing) = cli.missing {
        render_config = render_config.with_fallback(fallback_for(missing.into(), &config.missing_style));
    }

    let (output, warnings) = render_with_lint(&text, &bindings, &render_config)?;

    let source_name = match &cli.text {
        Some(_) => "<text>",
        None => "<stdin>",
    };
    for warning in &warnings {
        eprint!("{}", warning.report(&text, source_name));
    }

    match cli.format {
        Format::Plain => println!("{}", render_plain(&output)),
        Format::Html => println!("{}", render_html(&output, &HtmlConfig::default())),
    }

    if cli.strict && !warnings.is_empty() {
        eprintln!("Error: lint reported {} warning(s)", warnings.len());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_intro() {
    println!(
        r##"Variable Text - substitute {{name}} placeholders in text

USAGE:
    variable-text [OPTIONS] [TEXT]
    echo '<template>' | variable-text [OPTIONS]

OPTIONS:
    -c, --config <FILE>      Values, default style and missing mode (TOML)
    -s, --set <NAME=VALUE>   Bind a placeholder to a string (repeatable)
    -f, --format <FORMAT>    plain (default) or html
    -m, --missing <MODE>     keep (default), blank or mark
    --lint                   Report missing/unused bindings and stray braces
    --strict                 Fail when the lint reports anything
    -v, --verbose            Debug logging on stderr
    -h, --help               Print help

QUICK START:
    variable-text --set name=World 'Hello, {{name}}!'

CONFIG FILE:
    missing = "mark"

    [style]
    color = "#333"

    [values]
    player = {{ text = "Hero", bold = true, color = "green" }}
    item = "Treasure"
    hp = 30"##
    );
}
