// src/config/mock.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::model::ResourceSpec;
use crate::config::store::ConfigStore;
use crate::errors::{Result, WatchurlError};

#[derive(Debug, Default)]
struct Inner {
    watch_list: Option<Vec<ResourceSpec>>,
    interval: Option<Duration>,
}

/// In-memory [`ConfigStore`] for tests.
///
/// Contents can be swapped at any time; a `None` slot behaves like a missing
/// config file so reload-failure paths can be exercised too.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore::default()
    }

    pub fn set_watch_list(&self, specs: Vec<ResourceSpec>) {
        self.inner.lock().unwrap().watch_list = Some(specs);
    }

    pub fn clear_watch_list(&self) {
        self.inner.lock().unwrap().watch_list = None;
    }

    pub fn set_interval(&self, interval: Duration) {
        self.inner.lock().unwrap().interval = Some(interval);
    }

    pub fn clear_interval(&self) {
        self.inner.lock().unwrap().interval = None;
    }
}

impl ConfigStore for MemStore {
    fn load_watch_list(&self) -> Result<Vec<ResourceSpec>> {
        self.inner
            .lock()
            .unwrap()
            .watch_list
            .clone()
            .ok_or_else(|| WatchurlError::ConfigError("no watch list configured".to_string()))
    }

    fn load_interval(&self) -> Result<Duration> {
        self.inner
            .lock()
            .unwrap()
            .interval
            .ok_or_else(|| WatchurlError::ConfigError("no interval configured".to_string()))
    }
}
