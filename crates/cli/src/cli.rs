use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use zkchain_protobuf_config::Format;

#[derive(Debug, Parser, Clone)]
#[command(
    author = "Matter Labs",
    version,
    about = "Checks and converts zkchain node configuration files",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log filter level. Overridden by `RUST_LOG` when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true, help_heading = "Logging")]
    pub log_level: LogLevel,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Loads a configuration file and reports every invalid field.
    Check(CheckArgs),
    /// Validates a configuration file and re-encodes it in another format.
    Convert(ConvertArgs),
    /// Prints a valid configuration to use as a starting point.
    Example(ExampleArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Configuration file to check.
    #[arg(env = "ZKCHAIN_CONFIG_PATH")]
    pub path: PathBuf,

    /// Record stored in the file.
    #[arg(long, value_enum, default_value_t = Kind::General)]
    pub kind: Kind,

    /// File encoding. Inferred from the extension when omitted.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Prints the whole decoded record instead of a summary.
    #[arg(long)]
    pub print: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = Kind::General)]
    pub kind: Kind,

    /// Encoding of the input file. Inferred from the extension when omitted.
    #[arg(long, value_enum)]
    pub from: Option<FormatArg>,

    /// Encoding of the output file. Inferred from the extension when omitted.
    #[arg(long, value_enum)]
    pub to: Option<FormatArg>,
}

#[derive(Debug, Args, Clone)]
pub struct ExampleArgs {
    #[arg(long, value_enum, default_value_t = FormatArg::Yaml)]
    pub format: FormatArg,
}

/// Configuration record a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// All sections together.
    General,
    Network,
    StateKeeper,
    OperationsManager,
    Mempool,
    CircuitBreaker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Yaml,
    Json,
    /// Protobuf wire format.
    Binary,
}

impl From<FormatArg> for Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Yaml => Format::Yaml,
            FormatArg::Json => Format::Json,
            FormatArg::Binary => Format::Binary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}
