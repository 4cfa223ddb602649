// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `watchurl`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchurl",
    version,
    about = "Poll URLs on an interval and report content changes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the watch-list file (one `<url> <name>` pair per line).
    #[arg(long, value_name = "PATH", default_value = "urls.txt")]
    pub urls: String,

    /// Path to the interval file (poll period in milliseconds on the first line).
    #[arg(long, value_name = "PATH", default_value = "interval.txt")]
    pub interval_file: String,

    /// Run a single poll round and exit, no watching.
    #[arg(long)]
    pub once: bool,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHURL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse the config, print the watch list, but don't poll anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
