// src/watch/mod.rs

//! Config-file watching that drives live reloads.
//!
//! [`watcher::spawn_config_watcher`] observes the watch-list and interval
//! files and sends [`crate::engine::RuntimeEvent::Reload`] into the runtime
//! whenever one of them is rewritten.

pub mod watcher;

pub use watcher::{spawn_config_watcher, WatcherHandle};
