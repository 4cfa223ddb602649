// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fetch;
pub mod logging;
pub mod metrics;
pub mod poll;
pub mod types;
pub mod watch;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::{mpsc, watch as watch_ch};
use tracing::{error, info};

use crate::cli::CliArgs;
use crate::config::model::ResourceSpec;
use crate::config::{ConfigStore, FileStore, DEFAULT_POLL_INTERVAL};
use crate::engine::{Runtime, RuntimeEvent, RuntimeOptions};
use crate::fetch::HttpFetcher;
use crate::metrics::ByteCounter;
use crate::poll::registry::ResourceRegistry;
use crate::poll::scheduler::spawn_scheduler;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - registry / scheduler / runtime
/// - the HTTP fetcher
/// - (optional) config-file watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let store = FileStore::new(&args.urls, &args.interval_file);
    let (specs, interval) = startup_state(&store);

    if args.dry_run {
        print_dry_run(&specs, interval);
        return Ok(());
    }

    let registry = Arc::new(ResourceRegistry::new(specs));
    let counter = Arc::new(ByteCounter::new());
    let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(args.timeout_secs))?);

    info!(
        resources = registry.len(),
        interval_ms = interval.as_millis() as u64,
        once = args.once,
        "watchurl starting"
    );

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Interval channel; the scheduler re-reads it every iteration.
    let (interval_tx, interval_rx) = watch_ch::channel(interval);

    // Optional config-file watcher (disabled in --once mode).
    let _watcher_handle = if !args.once {
        Some(crate::watch::spawn_config_watcher(
            store.urls_path(),
            store.interval_path(),
            rt_tx.clone(),
        )?)
    } else {
        None
    };

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    let _scheduler_handle = if !args.once {
        Some(spawn_scheduler(interval_rx, rt_tx.clone()))
    } else {
        // A single round now instead of a tick loop.
        rt_tx.send(RuntimeEvent::PollTick).await?;
        None
    };

    let options = RuntimeOptions {
        exit_after_round: args.once,
    };

    let store: Arc<dyn ConfigStore> = Arc::new(store);
    let runtime = Runtime::new(
        registry,
        store,
        fetcher,
        counter,
        interval_tx,
        rt_rx,
        options,
    );
    runtime.run().await?;
    Ok(())
}

/// Initial watch list and interval for a fresh process.
///
/// Startup tolerates broken or missing config: the watch list falls back to
/// empty and the interval to the default, with the failure logged at error.
/// Either can be corrected later through a reload.
pub fn startup_state(store: &dyn ConfigStore) -> (Vec<ResourceSpec>, Duration) {
    let specs = match store.load_watch_list() {
        Ok(specs) => specs,
        Err(err) => {
            error!(
                error = %err,
                "failed to load watch list at startup; starting with an empty one"
            );
            Vec::new()
        }
    };

    let interval = match store.load_interval() {
        Ok(interval) => interval,
        Err(err) => {
            error!(
                error = %err,
                "failed to load interval at startup; using the default"
            );
            DEFAULT_POLL_INTERVAL
        }
    };

    (specs, interval)
}

/// Simple dry-run output: print the watch list and interval.
fn print_dry_run(specs: &[ResourceSpec], interval: Duration) {
    println!("watchurl dry-run");
    println!("  interval = {} ms", interval.as_millis());
    println!();

    println!("resources ({}):", specs.len());
    for spec in specs {
        println!("  - {}", spec.name);
        println!("      url: {}", spec.url);
    }
}
