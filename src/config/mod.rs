// src/config/mod.rs

//! Watch-list and poll-interval configuration.
//!
//! Two plain text files drive the daemon:
//!
//! - the watch list: one `<url> <name>` pair per line
//! - the interval file: poll period in milliseconds on the first line
//!
//! [`loader`] holds the pure parsers, [`store`] the [`ConfigStore`] trait and
//! its file-backed implementation, and [`mock`] an in-memory store for tests.

pub mod loader;
pub mod mock;
pub mod model;
pub mod store;

pub use model::{ResourceSpec, DEFAULT_POLL_INTERVAL};
pub use store::{ConfigStore, FileStore};
