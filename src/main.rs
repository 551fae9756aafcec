mod debug_report;

use std::io::{self, IsTerminal, Read};
use strsieve::{MatchKind, Options, PatternSpec, StringFilter, UnknownKind};

const LOG_ENV: &str = "STRSIEVE_LOG";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error: {0} expects a value")]
    MissingValue(&'static str),
    #[error("error: {0} provided multiple times")]
    Repeated(&'static str),
    #[error("error: unknown option '{0}'")]
    UnknownOption(String),
    #[error("error: {0}")]
    Kind(#[from] UnknownKind),
    #[error("error: failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("error: no entries provided\n\n{0}")]
    NoEntries(String),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn")).init();

    let config = match parse_args(std::env::args().skip(1), io::stdin(), io::stdout().is_terminal()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut filter = StringFilter::with_options(Options { sorted: config.sorted });
    filter.extend(config.entries.iter().map(String::as_str));

    let pattern = config.pattern.as_deref();
    let kind = config.kind.unwrap_or_else(|| MatchKind::infer(pattern));
    log::info!("filtering {} entries with {kind}", filter.store().len());

    let res = filter.find_verbose(&PatternSpec::new(kind, pattern));
    debug_report::print_run(&res, config.color);
}

struct CliConfig {
    entries: Vec<String>,
    /// `None` means infer from the pattern.
    kind: Option<MatchKind>,
    pattern: Option<String>,
    sorted: bool,
    color: bool,
}

/// Parse command-line `args` (program name already skipped). `stdin` is only
/// read when no entries were given as arguments.
fn parse_args(
    mut args: impl Iterator<Item = String>,
    stdin: impl Read,
    color: bool,
) -> Result<CliConfig, CliError> {
    let mut entries: Vec<String> = Vec::new();
    let mut kind: Option<MatchKind> = None;
    let mut pattern: Option<String> = None;
    let mut sorted = false;
    let mut color = color;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("strsieve {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--sorted" => sorted = true,
            "--kind" | "-k" => {
                let value = args.next().ok_or(CliError::MissingValue("--kind"))?;
                kind = parse_kind(&value)?;
            }
            "--pattern" | "-p" => {
                let value = args.next().ok_or(CliError::MissingValue("--pattern"))?;
                set_pattern(&mut pattern, value)?;
            }
            "--" => {
                entries.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--kind=") => {
                kind = parse_kind(arg.trim_start_matches("--kind="))?;
            }
            _ if arg.starts_with("--pattern=") => {
                set_pattern(&mut pattern, arg.trim_start_matches("--pattern=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::UnknownOption(arg));
            }
            _ => entries.push(arg),
        }
    }

    if entries.is_empty() {
        entries = read_entries(stdin)?;
    }

    if entries.is_empty() {
        return Err(CliError::NoEntries(help_text()));
    }

    Ok(CliConfig { entries, kind, pattern, sorted, color })
}

fn parse_kind(value: &str) -> Result<Option<MatchKind>, CliError> {
    if value.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

fn set_pattern(slot: &mut Option<String>, value: String) -> Result<(), CliError> {
    if slot.is_some() {
        return Err(CliError::Repeated("--pattern"));
    }
    *slot = Some(value);
    Ok(())
}

fn read_entries(mut reader: impl Read) -> Result<Vec<String>, CliError> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(split_entries(&buffer))
}

/// One entry per line; blank lines are skipped.
fn split_entries(text: &str) -> Vec<String> {
    text.lines().filter(|line| !line.is_empty()).map(str::to_string).collect()
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "strsieve {version}

Filter a case-folded string set without regular expressions.

Usage:
  strsieve [OPTIONS] [--] <entries...>
  printf 'a\\nb\\n' | strsieve [OPTIONS]

Entries given on stdin are read one per line; blank lines are skipped.

Options:
  -k, --kind <kind>          contains | prefix | number-format | wildcard | auto
                             Default: auto (`*` -> wildcard, `#` -> number-format,
                             otherwise contains).
  -p, --pattern <text>       Pattern to filter with. Omitted means every entry.
  --sorted                   Print matches in ascending order.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}               Log filter, e.g. strsieve::engine=trace.

Exit codes:
  0  Success.
  2  Invalid arguments or missing entries.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
