//! Command-line interface for tome
//! Converts transcribed reference entries into emphasis-marked documents.
//!
//! Usage:
//!   tome convert `<path>`... [--out-dir `<dir>`] [--stdout]   - Convert entry files
//!   tome rules [--rules `<file>`] [--config `<file>`]         - Print the effective rules

mod convert;
mod source;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use convert::Destination;
use std::path::PathBuf;
use tome_config::{load_rules, Loader, TomeConfig};
use tome_parser::tome::{Converter, TrailingFragment};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn rule_args() -> [Arg; 2] {
    [
        Arg::new("rules")
            .long("rules")
            .short('r')
            .value_name("FILE")
            .help("Rules file (TOML, JSON or YAML) replacing the configured rules")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("config")
            .long("config")
            .short('c')
            .value_name("FILE")
            .help("Configuration file layered over the built-in defaults")
            .value_parser(value_parser!(PathBuf)),
    ]
}

fn cli() -> Command {
    Command::new("tome")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting transcribed reference entries")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert entry files")
                .arg(
                    Arg::new("paths")
                        .help("Entry files (.txt)")
                        .value_name("PATH")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .short('o')
                        .value_name("DIR")
                        .help("Directory for converted files (default: next to each input)")
                        .value_parser(value_parser!(PathBuf))
                        .conflicts_with("stdout"),
                )
                .arg(
                    Arg::new("preamble-length")
                        .long("preamble-length")
                        .short('p')
                        .value_name("N")
                        .help("Number of preamble fields, title included")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("extras")
                        .long("extras")
                        .short('x')
                        .help("Recognise extra markers in the body")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("keep-trailing")
                        .long("keep-trailing")
                        .help("Emit an unterminated final fragment instead of dropping it")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .help("Print converted documents instead of writing files")
                        .action(ArgAction::SetTrue),
                )
                .args(rule_args()),
        )
        .subcommand(
            Command::new("rules")
                .about("Print the effective rules and options as JSON")
                .args(rule_args()),
        )
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the configuration: defaults, then `--config`, then `--rules`.
fn load_settings(matches: &ArgMatches) -> anyhow::Result<TomeConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    let mut settings = loader.build().context("failed to load configuration")?;

    if let Some(path) = matches.get_one::<PathBuf>("rules") {
        settings.rules = load_rules(path)
            .with_context(|| format!("failed to load rules from {}", path.display()))?;
        debug!(path = %path.display(), "loaded rules file");
    }
    Ok(settings)
}

fn handle_convert_command(matches: &ArgMatches) -> anyhow::Result<()> {
    let mut settings = load_settings(matches)?;
    let options = &mut settings.convert;
    if let Some(&length) = matches.get_one::<usize>("preamble-length") {
        options.preamble_length = length;
    }
    if matches.get_flag("extras") {
        options.extras_enabled = true;
    }
    if matches.get_flag("keep-trailing") {
        options.trailing_fragment = TrailingFragment::Flush;
    }
    debug!(?options, "effective conversion options");

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let destination = if matches.get_flag("stdout") {
        Destination::Stdout
    } else {
        Destination::Files {
            out_dir: matches.get_one::<PathBuf>("out-dir").cloned(),
        }
    };

    let converter = Converter::new(settings.rules, settings.convert);
    convert::run(&converter, &paths, &destination)
}

fn handle_rules_command(matches: &ArgMatches) -> anyhow::Result<()> {
    let settings = load_settings(matches)?;
    let json = serde_json::to_string_pretty(&settings).context("failed to serialize rules")?;
    println!("{}", json);
    Ok(())
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("convert", sub)) => handle_convert_command(sub),
        Some(("rules", sub)) => handle_rules_command(sub),
        _ => Ok(()),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
