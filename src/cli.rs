//! Command-line interface argument parsing for nhl-ticker.
//!
//! - `nhl-ticker` polls the scoreboard every 30 seconds
//! - `nhl-ticker --test` renders the scoreboard once and exits
//! - `nhl-ticker --interval 60 --url http://localhost:8080/scoreboard.jsonp`
//!
//! Unknown arguments are ignored rather than rejected.

use std::ffi::OsString;
use std::time::Duration;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use crate::feed::RetryPolicy;

/// Scoreboard used when neither `--url` nor `NHL_TICKER_URL` is set
pub const DEFAULT_FEED_URL: &str = "http://live.nhle.com/GameData/RegularSeasonScoreboardv3.jsonp";

/// A terminal scoreboard of today's NHL games.
///
/// By default games from yesterday and today will be displayed.
#[derive(Parser, Debug)]
#[command(name = "nhl-ticker")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Render the scoreboard once, then exit
    #[arg(short, long)]
    pub test: bool,

    /// Seconds between scoreboard refreshes
    #[arg(short, long, default_value = "30")]
    pub interval: u64,

    /// Scoreboard feed URL
    #[arg(long)]
    pub url: Option<String>,

    /// Network timeout in seconds for each fetch attempt
    #[arg(long, default_value = "10")]
    pub timeout: u64,

    /// Fetch attempts per refresh before the refresh counts as failed
    #[arg(long, default_value = "3")]
    pub retries: u32,

    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse command line arguments, exiting on --help/--version
    pub fn parse_args() -> Self {
        Self::try_parse_lenient(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args`, dropping every argument clap does not recognize
    pub fn try_parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        loop {
            let err = match Cli::try_parse_from(&args) {
                Ok(cli) => return Ok(cli),
                Err(err) => err,
            };
            if err.kind() != ErrorKind::UnknownArgument {
                return Err(err);
            }
            let Some(ContextValue::String(unknown)) = err.get(ContextKind::InvalidArg) else {
                return Err(err);
            };
            if !drop_argument(&mut args, unknown) {
                return Err(err);
            }
        }
    }
}

/// Remove `unknown` from `args`, either as a whole argument, as `unknown=value`
/// or as one letter of a short-flag cluster such as `-tx`
fn drop_argument(args: &mut Vec<OsString>, unknown: &str) -> bool {
    let with_value = format!("{unknown}=");
    // Skip the binary name
    let whole = args.iter().skip(1).position(|arg| {
        arg.to_str()
            .is_some_and(|arg| arg == unknown || arg.starts_with(&with_value))
    });
    if let Some(idx) = whole {
        args.remove(idx + 1);
        return true;
    }

    let mut letters = unknown.strip_prefix('-').unwrap_or(unknown).chars();
    let (Some(letter), None) = (letters.next(), letters.next()) else {
        return false;
    };
    let cluster = args.iter().skip(1).position(|arg| {
        arg.to_str().is_some_and(|arg| {
            arg.len() > 2 && arg.starts_with('-') && !arg.starts_with("--") && arg[1..].contains(letter)
        })
    });
    let Some(idx) = cluster else {
        return false;
    };
    let idx = idx + 1;
    let Some(flags) = args[idx].to_str() else {
        return false;
    };
    let rest: String = flags[1..].replacen(letter, "", 1);
    if rest.is_empty() {
        args.remove(idx);
    } else {
        args[idx] = format!("-{rest}").into();
    }
    true
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub single_shot: bool,
    pub refresh_interval: Duration,
    pub feed_url: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        // Flag first, then NHL_TICKER_URL, then the public feed
        let feed_url = cli
            .url
            .or_else(|| std::env::var("NHL_TICKER_URL").ok())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        AppConfig {
            single_shot: cli.test,
            refresh_interval: Duration::from_secs(cli.interval.max(1)),
            feed_url,
            timeout: Duration::from_secs(cli.timeout.max(1)),
            retry: RetryPolicy {
                attempts: cli.retries.max(1),
                ..RetryPolicy::default()
            },
            log_filter: cli.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_lenient(std::iter::once("nhl-ticker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(!cli.test);
        assert_eq!(cli.interval, 30);
        assert_eq!(cli.retries, 3);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_single_shot_flags() {
        assert!(parse(&["--test"]).test);
        assert!(parse(&["-t"]).test);
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        let cli = parse(&["--colour", "banana", "-t", "--frobnicate=yes", "-i", "45"]);
        assert!(cli.test);
        assert_eq!(cli.interval, 45);
    }

    #[test]
    fn test_unknown_letters_in_flag_clusters_are_ignored() {
        assert!(parse(&["-tx"]).test);
        assert!(parse(&["-xt"]).test);
        assert!(parse(&["-xyt", "-i", "20"]).test);
        assert!(!parse(&["-xy"]).test);
    }

    #[test]
    fn test_repeated_flags_are_accepted() {
        assert!(parse(&["-t", "-t"]).test);
        assert_eq!(parse(&["-i", "10", "--interval", "20"]).interval, 20);
    }

    #[test]
    fn test_help_is_reported() {
        let err = Cli::try_parse_lenient(["nhl-ticker", "--bogus", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_config_from_cli() {
        let config = AppConfig::from_cli(parse(&[
            "--url",
            "http://127.0.0.1:9/scoreboard.jsonp",
            "--retries",
            "0",
            "--interval",
            "60",
        ]));
        assert_eq!(config.feed_url, "http://127.0.0.1:9/scoreboard.jsonp");
        assert_eq!(config.retry.attempts, 1);
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert!(!config.single_shot);
    }
}
