// src/poll/scheduler.rs

//! Fixed-interval tick generation.
//!
//! The scheduler reads the current poll period at the top of every iteration,
//! sleeps that long, then emits a [`RuntimeEvent::PollTick`]. Reloading the
//! interval therefore affects the tick *after* the one already pending; the
//! sleep in progress runs to completion at the old period.
//!
//! Ticks are emitted regardless of whether earlier rounds have finished.
//! With a short interval and slow servers, rounds overlap; per-resource slot
//! locks keep that safe.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::engine::RuntimeEvent;

/// Spawn the tick loop. It runs until the runtime side of `events_tx` drops.
pub fn spawn_scheduler(
    interval_rx: watch::Receiver<Duration>,
    events_tx: mpsc::Sender<RuntimeEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let period = *interval_rx.borrow();
            tokio::time::sleep(period).await;

            if events_tx.send(RuntimeEvent::PollTick).await.is_err() {
                debug!("runtime event channel closed; stopping scheduler");
                break;
            }
        }
    })
}
