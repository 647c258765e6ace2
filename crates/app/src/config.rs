use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use services::HttpSourceConfig;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLimit { origin: &'static str, raw: String },
    InvalidTimeout { origin: &'static str, raw: String },
    InvalidUrl { origin: &'static str, raw: String },
    InvalidSwitch { origin: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLimit { origin, raw }
            | ArgsError::InvalidTimeout { origin, raw }
            | ArgsError::InvalidUrl { origin, raw }
            | ArgsError::InvalidSwitch { origin, raw } => {
                write!(f, "invalid {origin} value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Http(HttpSourceConfig),
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub http: HttpSourceConfig,
    /// When set, questions come from this file instead of `http`.
    pub file: Option<PathBuf>,
    pub shuffle: bool,
    pub limit: Option<usize>,
}

/// Outcome of argument parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Run(Config),
    Help,
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  trivia [--url <questions_url>] [--file <questions.json>]");
    eprintln!("         [--timeout-secs <n>] [--limit <n>] [--shuffle]");
    eprintln!();
    eprintln!("Controls:");
    eprintln!("  1..9  choose an answer   s  submit   n  next   q  quit");
    eprintln!();
    eprintln!("Environment (also read from .env):");
    eprintln!("  TRIVIA_QUESTIONS_URL, TRIVIA_QUESTIONS_FILE, TRIVIA_TIMEOUT_SECS,");
    eprintln!("  TRIVIA_SHUFFLE, TRIVIA_LIMIT, TRIVIA_LOG");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_url(origin: &'static str, raw: String) -> Result<String, ArgsError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw)
    } else {
        Err(ArgsError::InvalidUrl { origin, raw })
    }
}

fn parse_timeout(origin: &'static str, raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ArgsError::InvalidTimeout { origin, raw })
}

fn parse_limit(origin: &'static str, raw: String) -> Result<usize, ArgsError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ArgsError::InvalidLimit { origin, raw })
}

fn parse_switch(origin: &'static str, raw: String) -> Result<bool, ArgsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ArgsError::InvalidSwitch { origin, raw }),
    }
}

impl Config {
    #[must_use]
    pub fn source(&self) -> SourceConfig {
        match &self.file {
            Some(path) => SourceConfig::File(path.clone()),
            None => SourceConfig::Http(self.http.clone()),
        }
    }

    /// Defaults from the environment, before any flags are applied.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` when a variable is set but cannot be parsed, using
    /// the same rules as the matching flag.
    pub fn from_env() -> Result<Self, ArgsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = var("TRIVIA_QUESTIONS_URL") {
            config.http.url = parse_url("TRIVIA_QUESTIONS_URL", raw)?;
        }
        if let Some(raw) = var("TRIVIA_TIMEOUT_SECS") {
            config.http.timeout = parse_timeout("TRIVIA_TIMEOUT_SECS", raw)?;
        }
        if let Some(raw) = var("TRIVIA_LIMIT") {
            config.limit = Some(parse_limit("TRIVIA_LIMIT", raw)?);
        }
        if let Some(raw) = var("TRIVIA_SHUFFLE") {
            config.shuffle = parse_switch("TRIVIA_SHUFFLE", raw)?;
        }
        config.file = var("TRIVIA_QUESTIONS_FILE").map(PathBuf::from);

        Ok(config)
    }

    /// Apply command-line flags on top of `self`. The last of `--url`/`--file` wins.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing values, or unparsable values.
    pub fn parse_args(
        mut self,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Parsed, ArgsError> {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--url" => {
                    self.http.url = parse_url("--url", require_value(&mut args, "--url")?)?;
                    self.file = None;
                }
                "--file" => {
                    self.file = Some(PathBuf::from(require_value(&mut args, "--file")?));
                }
                "--timeout-secs" => {
                    let value = require_value(&mut args, "--timeout-secs")?;
                    self.http.timeout = parse_timeout("--timeout-secs", value)?;
                }
                "--limit" => {
                    let value = require_value(&mut args, "--limit")?;
                    self.limit = Some(parse_limit("--limit", value)?);
                }
                "--shuffle" => self.shuffle = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(self))
    }
}
