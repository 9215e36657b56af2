use std::fmt::Debug;
use std::io::Write;

use clap::Parser;
use colored::Colorize;
use serde::{de::DeserializeOwned, Serialize};
use zkchain_config::GeneralConfig;
use zkchain_protobuf_config::{
    encode_as, proto, read_file, write_file, ConfigError, Format, ProtoRepr,
};

use crate::cli::{CheckArgs, Cli, Command, ConvertArgs, ExampleArgs, Kind};
use crate::summary::Summary;

mod cli;
mod observability;
mod summary;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    observability::init(cli.log_level.into())?;

    let result = match &cli.command {
        Command::Check(args) => check(args),
        Command::Convert(args) => convert(args),
        Command::Example(args) => example(args),
    };
    if let Err(err) = result {
        report_error(&err);
        std::process::exit(1);
    }
    Ok(())
}

fn check(args: &CheckArgs) -> Result<(), ConfigError> {
    match args.kind {
        Kind::General => check_as::<proto::general::GeneralConfig>(args),
        Kind::Network => check_as::<proto::chain::EthNetwork>(args),
        Kind::StateKeeper => check_as::<proto::chain::StateKeeper>(args),
        Kind::OperationsManager => check_as::<proto::chain::OperationsManager>(args),
        Kind::Mempool => check_as::<proto::chain::Mempool>(args),
        Kind::CircuitBreaker => check_as::<proto::chain::CircuitBreaker>(args),
    }
}

fn check_as<P>(args: &CheckArgs) -> Result<(), ConfigError>
where
    P: ProtoRepr + DeserializeOwned,
    P::Type: Summary + Debug,
{
    let config = read_file::<P>(&args.path, args.format.map(Format::from))?;
    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    println!("{} {} is valid", "OK".green(), args.path.display());
    if args.print {
        println!("{config:#?}");
    } else {
        for line in config.summary() {
            println!("  {line}");
        }
    }
    Ok(())
}

fn convert(args: &ConvertArgs) -> Result<(), ConfigError> {
    match args.kind {
        Kind::General => convert_as::<proto::general::GeneralConfig>(args),
        Kind::Network => convert_as::<proto::chain::EthNetwork>(args),
        Kind::StateKeeper => convert_as::<proto::chain::StateKeeper>(args),
        Kind::OperationsManager => convert_as::<proto::chain::OperationsManager>(args),
        Kind::Mempool => convert_as::<proto::chain::Mempool>(args),
        Kind::CircuitBreaker => convert_as::<proto::chain::CircuitBreaker>(args),
    }
}

fn convert_as<P>(args: &ConvertArgs) -> Result<(), ConfigError>
where
    P: ProtoRepr + DeserializeOwned + Serialize,
{
    let config = read_file::<P>(&args.input, args.from.map(Format::from))?;
    write_file::<P>(&args.output, args.to.map(Format::from), &config)?;
    println!(
        "{} {} -> {}",
        "OK".green(),
        args.input.display(),
        args.output.display()
    );
    Ok(())
}

fn example(args: &ExampleArgs) -> Result<(), ConfigError> {
    let bytes =
        encode_as::<proto::general::GeneralConfig>(args.format.into(), &GeneralConfig::for_tests())?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&bytes)
        .and_then(|()| stdout.flush())
        .map_err(|source| ConfigError::Io {
            path: "<stdout>".into(),
            source,
        })
}

fn report_error(err: &ConfigError) {
    match err.validation_errors() {
        Some(errors) => {
            eprintln!(
                "{} configuration has {} invalid field(s):",
                "error:".red().bold(),
                errors.len()
            );
            for violation in errors.violations() {
                eprintln!("  - {}: {}", violation.field.yellow(), violation.kind);
            }
        }
        None => eprintln!("{} {err}", "error:".red().bold()),
    }
}
