// src/types.rs

//! Core domain types shared across the crate.
//!
//! A [`Resource`] is one watched URL together with the outcome of its most
//! recent poll. State transitions are pure functions on [`ResourceState`] so
//! the change-detection rules can be tested without any I/O.

use std::time::SystemTime;

/// Fingerprint and timestamp captured from a successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    /// CRC32 of the fetched body.
    pub fingerprint: u32,
    /// When the successful fetch completed.
    pub last_access: SystemTime,
}

/// Poll history of a single resource.
///
/// `Failed` keeps the baseline from the last success (if there ever was one)
/// so a failure does not erase what we knew about the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceState {
    /// Never polled yet.
    #[default]
    Unknown,
    /// Last poll succeeded.
    Success(Baseline),
    /// Last poll failed; the previous baseline survives if one existed.
    Failed(Option<Baseline>),
}

impl ResourceState {
    /// Next state after a successful fetch, plus whether the content changed.
    ///
    /// A change is reported only when the previous poll also succeeded and its
    /// fingerprint differs. The first success after `Unknown` or `Failed`
    /// establishes a baseline silently.
    pub fn on_success(&self, fingerprint: u32, now: SystemTime) -> (ResourceState, bool) {
        let changed = matches!(self, ResourceState::Success(prev) if prev.fingerprint != fingerprint);
        let next = ResourceState::Success(Baseline {
            fingerprint,
            last_access: now,
        });
        (next, changed)
    }

    /// Next state after a failed fetch. Any existing baseline is retained.
    pub fn on_failure(&self) -> ResourceState {
        match self {
            ResourceState::Unknown => ResourceState::Failed(None),
            ResourceState::Success(baseline) => ResourceState::Failed(Some(*baseline)),
            ResourceState::Failed(baseline) => ResourceState::Failed(*baseline),
        }
    }

    /// Fingerprint of the last known content, if any poll ever succeeded.
    pub fn fingerprint(&self) -> Option<u32> {
        match self {
            ResourceState::Unknown => None,
            ResourceState::Success(baseline) => Some(baseline.fingerprint),
            ResourceState::Failed(baseline) => baseline.map(|b| b.fingerprint),
        }
    }

    /// Timestamp of the last successful fetch, if any.
    pub fn last_access(&self) -> Option<SystemTime> {
        match self {
            ResourceState::Unknown => None,
            ResourceState::Success(baseline) => Some(baseline.last_access),
            ResourceState::Failed(baseline) => baseline.map(|b| b.last_access),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResourceState::Success(_))
    }
}

/// One watched URL and its poll history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub url: String,
    pub name: String,
    pub state: ResourceState,
}

impl Resource {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Resource {
            url: url.into(),
            name: name.into(),
            state: ResourceState::Unknown,
        }
    }
}
