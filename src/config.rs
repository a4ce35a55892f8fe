// File: src/config.rs
//! Command-line arguments and environment settings.
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the log filter directive (`tracing` `EnvFilter` syntax).
pub const LOG_FILTER_ENV: &str = "DICT_SHELL_LOG";
/// Environment variable forcing coloured log output on or off.
pub const LOG_ANSI_ENV: &str = "DICT_SHELL_LOG_ANSI";

const DEFAULT_LOG_FILTER: &str = "warn";

/// `dict_shell [--help] [FILE]`
///
/// clap's generated help is disabled: `--help` prints the shell's command table instead.
#[derive(Debug, Parser)]
#[command(name = "dict_shell", version, disable_help_flag = true)]
pub struct Cli {
    /// Print the command reference and exit.
    #[arg(long)]
    pub help: bool,

    /// Dictionary file loaded as `default` before reading commands.
    pub file: Option<PathBuf>,
}

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    /// `None` leaves the choice to terminal detection.
    pub log_ansi: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_ansi: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_filter: lookup(LOG_FILTER_ENV)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_filter),
            log_ansi: lookup(LOG_ANSI_ENV).and_then(|v| parse_bool(&v)),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
