// src/config/loader.rs

//! Pure parsers for the two configuration file formats.
//!
//! Parsing is separated from file access so malformed content can be tested
//! without touching the filesystem, and so a failed parse can leave the
//! previously loaded configuration in place.

use std::time::Duration;

use crate::config::model::ResourceSpec;
use crate::errors::{Result, WatchurlError};

/// Parse the watch-list format: one `<url> <name>` pair per line.
///
/// Blank lines (including whitespace-only ones) are skipped. Any other line
/// must split into exactly two whitespace-separated fields; a line that does
/// not rejects the whole document, so a half-edited file never replaces a
/// working watch list.
pub fn parse_watch_list(contents: &str) -> Result<Vec<ResourceSpec>> {
    let mut specs = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let url = fields.next();
        let name = fields.next();
        let extra = fields.next();

        match (url, name, extra) {
            (Some(url), Some(name), None) => {
                specs.push(ResourceSpec::new(url, name));
            }
            _ => {
                return Err(WatchurlError::ConfigError(format!(
                    "watch list line {}: expected '<url> <name>', got {:?}",
                    idx + 1,
                    line
                )));
            }
        }
    }

    Ok(specs)
}

/// Parse the interval format: poll period in milliseconds on the first line.
///
/// Anything after the first line is ignored. The value must be a positive
/// integer; zero is rejected because a zero-length sleep would spin.
pub fn parse_interval(contents: &str) -> Result<Duration> {
    let first = contents
        .lines()
        .next()
        .map(str::trim)
        .unwrap_or_default();

    if first.is_empty() {
        return Err(WatchurlError::ConfigError(
            "interval file is empty; expected milliseconds on the first line".to_string(),
        ));
    }

    let millis: u64 = first.parse().map_err(|_| {
        WatchurlError::ConfigError(format!(
            "interval {:?} is not a whole number of milliseconds",
            first
        ))
    })?;

    if millis == 0 {
        return Err(WatchurlError::ConfigError(
            "interval of 0 ms is not allowed".to_string(),
        ));
    }

    Ok(Duration::from_millis(millis))
}
