// src/config/store.rs

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::loader::{parse_interval, parse_watch_list};
use crate::config::model::ResourceSpec;
use crate::errors::{Result, WatchurlError};

/// Abstract source of watch-list and interval configuration.
///
/// The runtime reloads through this trait, so tests can swap in an in-memory
/// store ([`crate::config::mock::MemStore`]) and flip its contents between
/// rounds without writing files.
pub trait ConfigStore: Send + Sync + Debug {
    fn load_watch_list(&self) -> Result<Vec<ResourceSpec>>;
    fn load_interval(&self) -> Result<Duration>;
}

/// Implementation that reads the two config files from disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    urls_path: PathBuf,
    interval_path: PathBuf,
}

impl FileStore {
    pub fn new(urls_path: impl Into<PathBuf>, interval_path: impl Into<PathBuf>) -> Self {
        FileStore {
            urls_path: urls_path.into(),
            interval_path: interval_path.into(),
        }
    }

    pub fn urls_path(&self) -> &Path {
        &self.urls_path
    }

    pub fn interval_path(&self) -> &Path {
        &self.interval_path
    }

    fn read(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(WatchurlError::ConfigError(format!(
                "config file {:?} does not exist",
                path
            )));
        }
        Ok(fs::read_to_string(path)?)
    }
}

impl ConfigStore for FileStore {
    fn load_watch_list(&self) -> Result<Vec<ResourceSpec>> {
        let contents = Self::read(&self.urls_path)?;
        parse_watch_list(&contents)
    }

    fn load_interval(&self) -> Result<Duration> {
        let contents = Self::read(&self.interval_path)?;
        parse_interval(&contents)
    }
}
