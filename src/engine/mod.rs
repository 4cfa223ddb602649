// src/engine/mod.rs

//! Orchestration engine for watchurl.
//!
//! This module ties together:
//! - the poll scheduler (tick generation at the configured interval)
//! - the resource registry (the live watch list)
//! - the main runtime event loop that reacts to:
//!   - poll ticks
//!   - reload commands from the config watcher
//!   - shutdown signals
//!
//! The async event loop lives in [`runtime`]; per-resource check logic is in
//! [`crate::poll::detector`].

/// Which piece of configuration a reload command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadCommand {
    /// Re-read the watch list and replace the registry contents.
    WatchList,
    /// Re-read the poll interval and hand it to the scheduler.
    Interval,
}

/// Runtime options used by the event loop.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeOptions {
    /// If true, exit the runtime after one complete poll round
    /// (used for `--once`).
    pub exit_after_round: bool,
}

/// Events flowing into the runtime from the scheduler, config watcher, etc.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// The poll interval elapsed; start a round of checks.
    PollTick,
    /// Part of the configuration should be re-read.
    Reload(ReloadCommand),
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod runtime;

pub use runtime::Runtime;
