//! bisect command-line front end
//!
//! Searches sorted lists given inline or in a file, checks whether a list
//! is sorted, and replays the canonical `[2, 3, 4, 10, 40]` example.
//!
//! Exit codes: 0 when found (or sorted), 1 when not found (or unsorted),
//! 2 on usage, input, or configuration errors.

mod commands;
mod config;
mod error;
mod input;
mod logging;
mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use commands::{Completed, ListSource, SearchRequest};
use config::CliConfig;
use error::{CliError, ERROR_EXIT_CODE};
use output::OutputFormat;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bisect", version, about = "Binary search over sorted lists")]
struct Cli {
    /// Config file (defaults to ./bisect.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the index of a target in a sorted list
    Search(SearchArgs),
    /// Report whether a list is sorted ascending
    Check(CheckArgs),
    /// Search the built-in example list [2, 3, 4, 10, 40]
    Demo(DemoArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Comma- or whitespace-separated values
    #[arg(long, allow_hyphen_values = true, conflicts_with = "file", required_unless_present = "file")]
    values: Option<String>,

    /// File holding the values
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Compare values as strings instead of integers
    #[arg(long)]
    text: bool,
}

impl From<InputArgs> for ListSource {
    fn from(args: InputArgs) -> Self {
        Self {
            values: args.values,
            file: args.file,
            text: args.text,
        }
    }
}

#[derive(Args)]
struct SearchArgs {
    /// Value to look for
    #[arg(long, allow_hyphen_values = true)]
    target: String,

    #[command(flatten)]
    input: InputArgs,

    /// Verify the list is sorted before searching
    #[arg(long, overrides_with = "no_checked")]
    checked: bool,

    /// Skip the sortedness check even if the config enables it
    #[arg(long, overrides_with = "checked")]
    no_checked: bool,

    /// Show each probe of the bisection
    #[arg(long, overrides_with = "no_trace")]
    trace: bool,

    /// Hide the bisection path even if the config enables it
    #[arg(long, overrides_with = "trace")]
    no_trace: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args)]
struct CheckArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args)]
struct DemoArgs {
    /// Value to look for
    #[arg(long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// Show each probe of the bisection
    #[arg(long, overrides_with = "no_trace")]
    trace: bool,

    /// Hide the bisection path even if the config enables it
    #[arg(long, overrides_with = "trace")]
    no_trace: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(done) => {
            if let Err(err) = write_output(&mut io::stdout().lock(), &done.output) {
                eprintln!("error: failed to write output: {err}");
                return ExitCode::from(ERROR_EXIT_CODE);
            }
            ExitCode::from(done.status.exit_code())
        }
        Err(err) => {
            eprintln!("{}", render_error(&err));
            let code = err
                .downcast_ref::<CliError>()
                .map_or(ERROR_EXIT_CODE, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// One-line error report: the error, then each cause once
fn render_error(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}

/// Print command output; a closed pipe on the reading side is not an error
fn write_output(out: &mut impl Write, text: &str) -> io::Result<()> {
    match writeln!(out, "{text}").and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// `--flag` / `--no-flag` pair: `None` when neither was given
fn flag_choice(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn run(cli: Cli) -> anyhow::Result<Completed> {
    let config = CliConfig::load(cli.config.as_deref())?;
    logging::init(
        config.effective_level(cli.verbose)?,
        cli.log_json || config.log_json,
    )?;
    tracing::debug!(?config, "configuration resolved");

    let done = match cli.command {
        Commands::Search(args) => {
            let request = SearchRequest::new(
                args.target,
                args.input.into(),
                flag_choice(args.checked, args.no_checked),
                flag_choice(args.trace, args.no_trace),
                args.format,
                &config,
            );
            commands::search(&request)?
        }
        Commands::Check(args) => {
            commands::check(&args.input.into(), args.format.unwrap_or(config.format))?
        }
        Commands::Demo(args) => commands::demo(
            args.target,
            flag_choice(args.trace, args.no_trace).unwrap_or(config.trace),
            args.format.unwrap_or(config.format),
        )?,
    };

    Ok(done)
}
