// src/metrics.rs

//! Process-wide counters updated by poll workers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Running total of response body bytes fetched since startup.
///
/// Workers on different tasks record into the same counter, so the total is
/// kept in an atomic and only ever increases.
#[derive(Debug, Default)]
pub struct ByteCounter {
    bytes: AtomicU64,
}

impl ByteCounter {
    pub fn new() -> Self {
        ByteCounter::default()
    }

    /// Record `count` bytes fetched.
    pub fn add(&self, count: u64) {
        self.bytes.fetch_add(count, Ordering::Relaxed);
    }

    /// Total bytes recorded so far.
    pub fn total(&self) -> u64 {
        self.bytes.load(Ordering::Relaxed)
    }
}
