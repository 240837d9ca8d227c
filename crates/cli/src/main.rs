// linkgroup CLI - group linked records into connected components

mod exit_codes;
mod link;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};

use exit_codes::{EXIT_ERROR, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "linkgroup")]
#[command(about = "Group linked records into connected components")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find connected components in a CSV of link pairs
    #[command(after_help = "\
Examples:
  linkgroup run links.csv
  linkgroup run links.csv -o components.csv
  linkgroup run links.csv --json --no-output
  linkgroup run matches.csv --config crm.link.toml
  linkgroup run matches.csv --left-column a --right-column b --separator ::")]
    Run {
        /// Input CSV with one link per row
        input: PathBuf,

        /// Output CSV path [default: config output.path, else connected_components_output.csv]
        #[arg(long, short = 'o', conflicts_with = "no_output")]
        output: Option<PathBuf>,

        /// Do not write the output CSV
        #[arg(long)]
        no_output: bool,

        /// Separator between source and local id in node identifiers
        #[arg(long)]
        separator: Option<String>,

        /// Source assigned to identifiers without a separator
        #[arg(long)]
        unknown_source: Option<String>,

        /// Print the run result (meta, summary, groups) as JSON to stdout
        #[arg(long)]
        json: bool,

        /// Suppress the summary on stderr
        #[arg(long, short = 'q')]
        quiet: bool,

        #[command(flatten)]
        input_args: InputArgs,
    },

    /// Check that a CSV has the required columns and values, without grouping
    #[command(after_help = "\
Examples:
  linkgroup validate links.csv
  linkgroup validate matches.csv --config crm.link.toml")]
    Validate {
        /// Input CSV with one link per row
        input: PathBuf,

        #[command(flatten)]
        input_args: InputArgs,
    },
}

/// Options shared by every command that reads link pairs.
#[derive(Args, Clone, Default)]
pub struct InputArgs {
    /// TOML config file ([columns] left/right, [output] separator/unknown_source/path)
    #[arg(long, short = 'c', env = "LINKGROUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Column holding the left side of each link [default: LEFT_SIDE]
    #[arg(long)]
    pub left_column: Option<String>,

    /// Column holding the right side of each link [default: RIGHT_SIDE]
    #[arg(long)]
    pub right_column: Option<String>,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("LINKGROUP_GIT_HASH"), ")",
        "\nengine:  linkgroup-partition ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("LINKGROUP_TARGET"),
    )
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            no_output,
            separator,
            unknown_source,
            json,
            quiet,
            input_args,
        } => link::cmd_run(link::RunArgs {
            input,
            output,
            no_output,
            separator,
            unknown_source,
            json,
            quiet,
            input_args,
        }),
        Commands::Validate { input, input_args } => link::cmd_validate(input, input_args),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            eprintln!("error: {}", message);
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::new(EXIT_IO, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
