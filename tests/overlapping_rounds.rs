// tests/overlapping_rounds.rs

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, watch, Semaphore};
use tokio::time::{sleep, timeout, Duration};

use watchurl::config::ConfigStore;
use watchurl::engine::{ReloadCommand, Runtime, RuntimeEvent, RuntimeOptions};
use watchurl::fetch::Fetcher;
use watchurl::metrics::ByteCounter;
use watchurl::poll::registry::ResourceRegistry;
use watchurl::types::ResourceState;
use watchurl_test_utils::builders::{spec, StoreBuilder};

type TestResult = Result<(), Box<dyn Error>>;

/// A fetcher whose requests block on a semaphore until the test releases
/// them, so a round can be held open deliberately.
#[derive(Debug)]
struct GatedFetcher {
    gate: Arc<Semaphore>,
    started: Arc<AtomicUsize>,
}

impl Fetcher for GatedFetcher {
    fn fetch<'a>(
        &'a self,
        _url: &'a str,
    ) -> Pin<Box<dyn Future<Output = watchurl::errors::Result<Vec<u8>>> + Send + 'a>> {
        let gate = Arc::clone(&self.gate);
        let started = Arc::clone(&self.started);

        Box::pin(async move {
            started.fetch_add(1, Ordering::SeqCst);
            let _permit = gate.acquire().await.map_err(anyhow::Error::from)?;
            Ok(b"body".to_vec())
        })
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn a_slow_round_does_not_block_the_next_tick() -> TestResult {
    init_tracing();

    let gate = Arc::new(Semaphore::new(0)); // nothing finishes until released
    let started = Arc::new(AtomicUsize::new(0));
    let fetcher: Arc<dyn Fetcher> = Arc::new(GatedFetcher {
        gate: Arc::clone(&gate),
        started: Arc::clone(&started),
    });

    let registry = Arc::new(ResourceRegistry::new(vec![spec(
        "http://slow.example/feed",
        "slow",
    )]));
    let store: Arc<dyn ConfigStore> = Arc::new(StoreBuilder::new().build());
    let counter = Arc::new(ByteCounter::new());
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(16);
    let (interval_tx, _interval_rx) = watch::channel(Duration::from_millis(5_000));

    let runtime = Runtime::new(
        registry,
        store,
        fetcher,
        counter,
        interval_tx,
        rt_rx,
        RuntimeOptions {
            exit_after_round: false,
        },
    );
    let handle = tokio::spawn(runtime.run());

    // Two ticks while every fetch is still stuck on the gate.
    rt_tx.send(RuntimeEvent::PollTick).await?;
    rt_tx.send(RuntimeEvent::PollTick).await?;

    // Both rounds must start their checks even though neither finished.
    timeout(Duration::from_secs(3), async {
        while started.load(Ordering::SeqCst) < 2 {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await?;

    gate.add_permits(2);
    rt_tx.send(RuntimeEvent::ShutdownRequested).await?;
    timeout(Duration::from_secs(3), handle).await???;

    assert_eq!(started.load(Ordering::SeqCst), 2);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn in_flight_check_survives_a_reload_without_touching_the_new_list() -> TestResult {
    init_tracing();

    let gate = Arc::new(Semaphore::new(0));
    let started = Arc::new(AtomicUsize::new(0));
    let fetcher: Arc<dyn Fetcher> = Arc::new(GatedFetcher {
        gate: Arc::clone(&gate),
        started: Arc::clone(&started),
    });

    let registry = Arc::new(ResourceRegistry::new(vec![spec(
        "http://old.example/feed",
        "old",
    )]));
    let store = StoreBuilder::new()
        .with_resource("http://new.example/feed", "new")
        .build();
    let counter = Arc::new(ByteCounter::new());
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(16);
    let (interval_tx, _interval_rx) = watch::channel(Duration::from_millis(5_000));

    let runtime = Runtime::new(
        Arc::clone(&registry),
        Arc::new(store),
        fetcher,
        counter,
        interval_tx,
        rt_rx,
        RuntimeOptions {
            exit_after_round: false,
        },
    );
    let handle = tokio::spawn(runtime.run());

    // Get a check in flight against the old list, then swap the list out
    // from under it.
    rt_tx.send(RuntimeEvent::PollTick).await?;
    timeout(Duration::from_secs(3), async {
        while started.load(Ordering::SeqCst) < 1 {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await?;

    rt_tx
        .send(RuntimeEvent::Reload(ReloadCommand::WatchList))
        .await?;

    gate.add_permits(1);
    rt_tx.send(RuntimeEvent::ShutdownRequested).await?;
    timeout(Duration::from_secs(3), handle).await???;

    // The stranded check finished against its orphaned slot; the new list
    // is untouched.
    let resources = registry.current();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].name, "new");
    assert_eq!(resources[0].state, ResourceState::Unknown);

    Ok(())
}
