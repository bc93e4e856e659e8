use crate::handlers::metadata::METADATA_COMMAND;
use crate::presentation::Verbosity;
use crate::types::ColorMode;
use clap::{ArgAction, Parser};

const EXAMPLES: &str = "\
Examples:
  docker psa                 List all containers
  docker psa web             Containers whose name or image matches 'web'
  docker psa '^api-' -v      Verbose listing of names starting with 'api-'
  docker psa -vv             Include networks and volumes
  docker psa -w              Refresh the listing every few seconds";

#[derive(Parser, Debug)]
#[command(name = "docker-psa")]
#[command(about = "Human-readable format for Docker container listings", long_about = None)]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Regex matched against container names and images
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Increase detail (-v, -vv)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Set detail level explicitly (0-2)
    #[arg(long, value_name = "LEVEL")]
    pub verbosity: Option<u8>,

    /// Refresh the listing until interrupted
    #[arg(short, long)]
    pub watch: bool,

    /// When to use colors [default: from config, else auto]
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from(self.verbosity.unwrap_or(self.verbose))
    }

    pub fn pattern(&self) -> &str {
        self.filter.as_deref().unwrap_or("")
    }
}

/// What the process was asked to do, decided before clap sees argv.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Metadata,
    Listing(NormalizedArgs),
}

/// argv ready for clap, plus the flags that were dropped on the way.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizedArgs {
    pub args: Vec<String>,
    pub unknown: Vec<String>,
}

pub fn classify(args: Vec<String>) -> Invocation {
    if args.get(1).map(String::as_str) == Some(METADATA_COMMAND) {
        return Invocation::Metadata;
    }
    Invocation::Listing(normalize_args(args))
}

/// Rewrites the single-dash long flags users type into forms clap accepts.
///
/// Unrecognized flags are moved to `unknown` so a typo only costs a
/// warning. Everything after `--` is passed through untouched.
pub fn normalize_args(args: Vec<String>) -> NormalizedArgs {
    let mut iter = args.into_iter().peekable();
    let mut normalized = NormalizedArgs::default();

    if let Some(program) = iter.next() {
        normalized.args.push(program);
    }

    // `docker psa` runs the plugin as `docker-psa psa ...`
    if iter.peek().map(String::as_str) == Some("psa") {
        iter.next();
    }

    let mut passthrough = false;
    while let Some(arg) = iter.next() {
        if passthrough || !arg.starts_with('-') || arg == "-" {
            normalized.args.push(arg);
            continue;
        }

        match arg.as_str() {
            "--" => {
                passthrough = true;
                normalized.args.push(arg);
            }
            "-v" | "-verbosity" => {
                let level = iter.next_if(|next| next.parse::<u8>().is_ok());
                match level {
                    Some(level) => {
                        normalized.args.push("--verbosity".to_string());
                        normalized.args.push(level);
                    }
                    None => normalized.args.push("-v".to_string()),
                }
            }
            "-help" => normalized.args.push("--help".to_string()),
            "--verbosity" | "--color" => {
                normalized.args.push(arg);
                normalized.args.extend(iter.next());
            }
            _ if is_known_flag(&arg) => normalized.args.push(arg),
            _ => normalized.unknown.push(arg),
        }
    }

    normalized
}

fn is_known_flag(arg: &str) -> bool {
    match arg {
        "-h" | "--help" | "-V" | "--version" | "--watch" => true,
        _ if arg.starts_with("--") => {
            arg.starts_with("--verbosity=") || arg.starts_with("--color=")
        }
        // Clustered short flags such as -vv or -vw
        _ => arg[1..].chars().all(|c| c == 'v' || c == 'w'),
    }
}
