// src/poll/mod.rs

//! Polling pipeline: tick generation, per-resource checks, change detection.
//!
//! - [`scheduler`] turns the configured interval into a stream of ticks.
//! - [`registry`] holds the live set of watched resources.
//! - [`detector`] runs one check: fetch, fingerprint, compare, report.
//! - [`fingerprint`] is the content digest both of the above share.

pub mod detector;
pub mod fingerprint;
pub mod registry;
pub mod scheduler;

pub use detector::{check_resource, CheckOutcome};
pub use fingerprint::fingerprint;
pub use registry::ResourceRegistry;
pub use scheduler::spawn_scheduler;
