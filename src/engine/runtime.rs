// src/engine/runtime.rs

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use crate::config::ConfigStore;
use crate::errors::Result;
use crate::fetch::Fetcher;
use crate::metrics::ByteCounter;
use crate::poll::detector::{check_resource, CheckOutcome};
use crate::poll::registry::ResourceRegistry;

use super::{ReloadCommand, RuntimeEvent, RuntimeOptions};

/// Drives poll rounds and configuration reloads in response to
/// `RuntimeEvent`s.
///
/// The runtime owns the registry and dispatches one detached check per
/// resource on every tick. In continuous mode ticks are fire-and-forget, so
/// a round slower than the interval overlaps the next one; in `--once` mode
/// the single round is awaited so the process can report it before exiting.
pub struct Runtime {
    registry: Arc<ResourceRegistry>,
    store: Arc<dyn ConfigStore>,
    fetcher: Arc<dyn Fetcher>,
    counter: Arc<ByteCounter>,
    interval_tx: watch::Sender<Duration>,
    events_rx: mpsc::Receiver<RuntimeEvent>,
    options: RuntimeOptions,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("resources", &self.registry.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    pub fn new(
        registry: Arc<ResourceRegistry>,
        store: Arc<dyn ConfigStore>,
        fetcher: Arc<dyn Fetcher>,
        counter: Arc<ByteCounter>,
        interval_tx: watch::Sender<Duration>,
        events_rx: mpsc::Receiver<RuntimeEvent>,
        options: RuntimeOptions,
    ) -> Self {
        Self {
            registry,
            store,
            fetcher,
            counter,
            interval_tx,
            events_rx,
            options,
        }
    }

    /// Main event loop.
    ///
    /// - Consumes `RuntimeEvent`s from `events_rx`.
    /// - Starts a poll round per tick.
    /// - Applies reload commands, keeping the previous configuration when a
    ///   reload fails.
    pub async fn run(mut self) -> Result<()> {
        info!("watchurl runtime started");

        loop {
            let event = match self.events_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::PollTick => {
                    self.handle_poll_tick().await;
                    if self.options.exit_after_round {
                        info!("single poll round complete; stopping runtime");
                        break;
                    }
                }
                RuntimeEvent::Reload(ReloadCommand::WatchList) => {
                    self.reload_watch_list();
                }
                RuntimeEvent::Reload(ReloadCommand::Interval) => {
                    self.reload_interval();
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested; stopping runtime");
                    break;
                }
            }
        }

        info!("runtime exiting");
        Ok(())
    }

    /// Start one round of checks, one detached task per resource.
    ///
    /// In `--once` mode the round is awaited and summarized; otherwise the
    /// handles are dropped and the checks finish on their own.
    async fn handle_poll_tick(&self) {
        let slots = self.registry.snapshot();
        debug!(resources = slots.len(), "starting poll round");

        let mut handles = Vec::with_capacity(slots.len());
        for slot in slots {
            let fetcher = Arc::clone(&self.fetcher);
            let counter = Arc::clone(&self.counter);
            handles.push(tokio::spawn(check_resource(slot, fetcher, counter)));
        }

        if !self.options.exit_after_round {
            return;
        }

        let resources = handles.len();
        let mut changed = 0usize;
        let mut failed = 0usize;

        for handle in handles {
            match handle.await {
                Ok(CheckOutcome::Changed) => changed += 1,
                Ok(CheckOutcome::Failed) => failed += 1,
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "poll check task panicked");
                    failed += 1;
                }
            }
        }

        info!(
            resources,
            changed,
            failed,
            total_bytes = self.counter.total(),
            "poll round finished"
        );
    }

    fn reload_watch_list(&self) {
        match self.store.load_watch_list() {
            Ok(specs) => {
                debug!(resources = specs.len(), "watch list reloaded");
                self.registry.replace(specs);
            }
            Err(err) => {
                error!(error = %err, "failed to reload watch list; keeping previous one");
            }
        }
    }

    fn reload_interval(&self) {
        match self.store.load_interval() {
            Ok(interval) => {
                debug!(interval_ms = interval.as_millis() as u64, "poll interval reloaded");
                self.interval_tx.send_replace(interval);
            }
            Err(err) => {
                error!(error = %err, "failed to reload interval; keeping previous one");
            }
        }
    }
}
