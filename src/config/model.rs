// src/config/model.rs

//! Parsed configuration values.

use std::time::Duration;

/// Poll period used when no interval file is readable at startup.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5_000);

/// One entry of the watch list: the URL to poll and a short display name.
///
/// The name is what shows up in logs; it does not have to be unique, though
/// logs are easier to follow when it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    pub url: String,
    pub name: String,
}

impl ResourceSpec {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        ResourceSpec {
            url: url.into(),
            name: name.into(),
        }
    }
}
