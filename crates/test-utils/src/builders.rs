#![allow(dead_code)]

use std::time::Duration;

use watchurl::config::mock::MemStore;
use watchurl::config::model::ResourceSpec;
use watchurl::config::DEFAULT_POLL_INTERVAL;

/// Shorthand for a watch-list entry.
pub fn spec(url: &str, name: &str) -> ResourceSpec {
    ResourceSpec::new(url, name)
}

/// Builder for a preloaded `MemStore` to simplify test setup.
pub struct StoreBuilder {
    watch_list: Vec<ResourceSpec>,
    interval: Option<Duration>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            watch_list: Vec::new(),
            interval: None,
        }
    }

    pub fn with_resource(mut self, url: &str, name: &str) -> Self {
        self.watch_list.push(ResourceSpec::new(url, name));
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_interval_ms(self, millis: u64) -> Self {
        self.with_interval(Duration::from_millis(millis))
    }

    pub fn build(self) -> MemStore {
        let store = MemStore::new();
        store.set_watch_list(self.watch_list);
        store.set_interval(self.interval.unwrap_or(DEFAULT_POLL_INTERVAL));
        store
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
