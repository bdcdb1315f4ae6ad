// src/bin/cipher.rs
//! `cipher` — run one classical cipher from the command line
//!
//! Result goes to stdout, logs and errors to stderr.

use std::process::ExitCode;

use anyhow::{Context, Result};
use classical_cipher::config::{self, Config};
use classical_cipher::{Algorithm, CipherError, CipherRequest, Direction, Shift};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: cipher [<algorithm> [<encode|decode>]] <text> [options]
       cipher list

algorithms: atbash, caesar, rot13, vigenere

options:
  -s, --shift <N>      Caesar shift, 1-25 (anything else means 3)
  -k, --keyword <K>    Vigenère keyword (letters only, empty means no shift)
      --strict         reject messages with anything but letters and spaces
      --json           print the result as JSON
  -h, --help           show this help";

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct UsageError(String);

#[derive(Debug, Default)]
struct Args {
    positionals: Vec<String>,
    shift: Option<String>,
    keyword: Option<String>,
    strict: bool,
    json: bool,
    help: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if is_usage_error(&err) {
                eprintln!("\n{USAGE}");
                return ExitCode::from(2);
            }
            ExitCode::FAILURE
        }
    }
}

fn is_usage_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<UsageError>().is_some()
        || matches!(
            err.downcast_ref::<CipherError>(),
            Some(CipherError::UnknownAlgorithm(_) | CipherError::UnknownDirection(_))
        )
}

fn run(raw: impl Iterator<Item = String>) -> Result<()> {
    let args = parse_args(raw)?;

    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    if args.positionals.len() == 1 && args.positionals[0] == "list" {
        print_list();
        return Ok(());
    }

    let conf = config::load();
    let request = build_request(&args, conf)?;
    debug!(algorithm = %request.algorithm, direction = %request.direction, "running");

    let mut policy = conf.input;
    policy.strict |= args.strict;

    let result = request
        .execute_checked(&policy)
        .context("message rejected")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut only_positionals = false;

    while let Some(arg) = raw.next() {
        if only_positionals || !arg.starts_with('-') || arg == "-" {
            args.positionals.push(arg);
            continue;
        }

        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_owned(), Some(value.to_owned())),
            None => (arg.clone(), None),
        };

        match flag.as_str() {
            "--" => only_positionals = true,
            "-s" | "--shift" => args.shift = Some(flag_value(&flag, inline, &mut raw)?),
            "-k" | "--keyword" => args.keyword = Some(flag_value(&flag, inline, &mut raw)?),
            "--strict" => args.strict = true,
            "--json" => args.json = true,
            "-h" | "--help" => args.help = true,
            _ => return Err(UsageError(format!("unknown option '{arg}'")).into()),
        }
    }

    Ok(args)
}

fn flag_value(
    flag: &str,
    inline: Option<String>,
    raw: &mut impl Iterator<Item = String>,
) -> Result<String> {
    inline
        .or_else(|| raw.next())
        .ok_or_else(|| UsageError(format!("option '{flag}' needs a value")).into())
}

fn build_request(args: &Args, conf: &Config) -> Result<CipherRequest> {
    let defaults = &conf.defaults;

    let (algorithm, direction, text) = match args.positionals.as_slice() {
        [] => return Err(UsageError("missing text".into()).into()),
        [text] => (defaults.algorithm, defaults.direction, text.clone()),
        // `cipher caesar encode`: direction given, text forgotten
        [_, direction] if is_direction_name(direction) => {
            return Err(UsageError("missing text".into()).into())
        }
        [algorithm, text] => (algorithm.parse::<Algorithm>()?, defaults.direction, text.clone()),
        [algorithm, direction, rest @ ..] => (
            algorithm.parse::<Algorithm>()?,
            direction.parse::<Direction>()?,
            rest.join(" "),
        ),
    };

    let shift = match &args.shift {
        Some(raw) => Some(Shift::parse(Some(raw.as_str())).get()),
        None => defaults.shift,
    };

    Ok(CipherRequest {
        text,
        algorithm,
        direction,
        shift,
        keyword: args.keyword.clone().or_else(|| defaults.keyword.clone()),
    })
}

fn is_direction_name(arg: &str) -> bool {
    matches!(arg.to_lowercase().as_str(), "encode" | "decode")
}

fn print_list() {
    for algorithm in Algorithm::ALL {
        let params = match (algorithm.uses_shift(), algorithm.uses_keyword()) {
            (true, _) => " [--shift N]",
            (_, true) => " [--keyword K]",
            _ => "",
        };
        println!(
            "{:<9} {}: {} ({}){}",
            algorithm.name(),
            algorithm.title(),
            algorithm.description(),
            algorithm.example(),
            params
        );
    }
}
