//! Contains structures and functionality for the binary
use std::path::PathBuf;

use clap::ArgAction;

/// Environment variable holding the default log filter
const LOG_ENVIRONMENT_VARIABLE: &str = "ALG_LOG";

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `ALG_LOG` environment variable value
    ///  * `Warn` otherwise
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env(LOG_ENVIRONMENT_VARIABLE);
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}

/// Cli arguments related to running the translated plan
#[derive(Debug, clap::Args)]
pub(crate) struct ExecutionArgs {
    /// Run the physical plan and print the resulting rows instead of the plan
    #[arg(short = 'x', long = "execute")]
    pub(crate) execute: bool,
    /// Import a group from a headerless csv file, given as NAME=FILE
    #[arg(short, long = "group", value_parser = parse_group_source, action = ArgAction::Append)]
    pub(crate) groups: Vec<GroupSource>,
}

/// Cli arguments related to the translation
#[derive(Debug, clap::Args)]
pub(crate) struct TranslationArgs {
    /// Refuse to translate plans deeper than this
    #[arg(long = "max-depth")]
    pub(crate) max_depth: Option<usize>,
    /// Also print the logical plan before translating it
    #[arg(short = 'L', long = "print-logical")]
    pub(crate) print_logical: bool,
}

/// Algebra CLI
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
pub struct CliApp {
    /// JSON file describing the logical plan
    #[arg(value_parser)]
    pub(crate) plan: PathBuf,
    /// Arguments related to the translation
    #[command(flatten)]
    pub(crate) translation: TranslationArgs,
    /// Arguments related to execution
    #[command(flatten)]
    pub(crate) execution: ExecutionArgs,
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}

/// Group name together with the file its rows are read from
#[derive(Debug, Clone)]
pub struct GroupSource {
    /// Name of the group
    pub name: String,
    /// Csv file containing the rows of the group
    pub file: PathBuf,
}

/// Parse `NAME=FILE` pairs.
fn parse_group_source(s: &str) -> Result<GroupSource, String> {
    match s.split_once('=') {
        Some((name, file)) if !name.is_empty() && !file.is_empty() => Ok(GroupSource {
            name: name.to_owned(),
            file: PathBuf::from(file),
        }),
        _ => Err(format!("Invalid group source, expected NAME=FILE: {s}")),
    }
}
