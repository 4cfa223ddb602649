// tests/reload_logging.rs

//! Log-level contract for reload handling.
//!
//! A successful reload is routine bookkeeping and stays at debug; only a
//! failed reload surfaces at error. These tests capture formatted output
//! through a thread-local subscriber, so they must not install the shared
//! global one.

use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::timeout;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use watchurl::config::ConfigStore;
use watchurl::engine::{ReloadCommand, Runtime, RuntimeEvent, RuntimeOptions};
use watchurl::fetch::Fetcher;
use watchurl::metrics::ByteCounter;
use watchurl::poll::registry::ResourceRegistry;
use watchurl_test_utils::builders::StoreBuilder;
use watchurl_test_utils::fake_fetcher::FakeFetcher;

type TestResult = Result<(), Box<dyn Error>>;

/// `MakeWriter` that appends every formatted line to a shared buffer.
#[derive(Clone, Default)]
struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Drive a watch-list and an interval reload through the runtime with logs
/// capped at `level`, and return the captured output plus the observable
/// effects (registry size, current interval).
///
/// The runtime is awaited on this thread so every log line it emits lands
/// in the thread-local subscriber.
async fn run_reloads_at(
    level: Level,
    store: Arc<dyn ConfigStore>,
) -> Result<(String, usize, Duration), Box<dyn Error>> {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let fetcher: Arc<dyn Fetcher> = Arc::new(FakeFetcher::new());
    let registry = Arc::new(ResourceRegistry::new(Vec::new()));
    let counter = Arc::new(ByteCounter::new());
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(16);
    let (interval_tx, interval_rx) = watch::channel(Duration::from_millis(5_000));

    let runtime = Runtime::new(
        Arc::clone(&registry),
        store,
        fetcher,
        counter,
        interval_tx,
        rt_rx,
        RuntimeOptions {
            exit_after_round: false,
        },
    );

    rt_tx
        .send(RuntimeEvent::Reload(ReloadCommand::WatchList))
        .await?;
    rt_tx
        .send(RuntimeEvent::Reload(ReloadCommand::Interval))
        .await?;
    rt_tx.send(RuntimeEvent::ShutdownRequested).await?;
    timeout(Duration::from_secs(3), runtime.run()).await??;

    Ok((capture.contents(), registry.len(), *interval_rx.borrow()))
}

fn loaded_store() -> Arc<dyn ConfigStore> {
    Arc::new(
        StoreBuilder::new()
            .with_resource("http://a.example/x", "alpha")
            .with_interval_ms(250)
            .build(),
    )
}

fn broken_store() -> Arc<dyn ConfigStore> {
    let store = StoreBuilder::new().build();
    store.clear_watch_list();
    store.clear_interval();
    Arc::new(store)
}

#[tokio::test]
async fn successful_reloads_stay_quiet_at_info_level() -> TestResult {
    let (logs, resources, interval) = run_reloads_at(Level::INFO, loaded_store()).await?;

    // Both reloads took effect...
    assert_eq!(resources, 1);
    assert_eq!(interval, Duration::from_millis(250));

    // ...without announcing themselves above debug.
    assert!(!logs.contains("watch list reloaded"), "got: {logs}");
    assert!(!logs.contains("poll interval reloaded"), "got: {logs}");

    Ok(())
}

#[tokio::test]
async fn successful_reloads_are_recorded_at_debug_level() -> TestResult {
    let (logs, _, _) = run_reloads_at(Level::DEBUG, loaded_store()).await?;

    assert!(logs.contains("watch list reloaded"), "got: {logs}");
    assert!(logs.contains("poll interval reloaded"), "got: {logs}");

    Ok(())
}

#[tokio::test]
async fn failed_reloads_remain_visible_at_info_level() -> TestResult {
    let (logs, resources, interval) = run_reloads_at(Level::INFO, broken_store()).await?;

    // Nothing was applied...
    assert_eq!(resources, 0);
    assert_eq!(interval, Duration::from_millis(5_000));

    // ...and both failures log at error, which an info cap lets through.
    assert!(logs.contains("failed to reload watch list"), "got: {logs}");
    assert!(logs.contains("failed to reload interval"), "got: {logs}");

    Ok(())
}
