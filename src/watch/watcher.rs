// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::{ReloadCommand, RuntimeEvent};

/// Handle for the config-file watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle stops config watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher over the two config files and send
/// `RuntimeEvent::Reload` whenever one of them is rewritten.
///
/// The parent directories are watched rather than the files themselves;
/// editors often replace a file instead of writing in place, and a directory
/// watch survives that.
pub fn spawn_config_watcher(
    urls_path: impl Into<PathBuf>,
    interval_path: impl Into<PathBuf>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let urls_path = normalize(urls_path.into());
    let interval_path = normalize(interval_path.into());

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel::<Event>();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        {
            let event_tx = event_tx.clone();
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if let Err(err) = event_tx.send(event) {
                        // We can't log via tracing here easily, so fallback to stderr.
                        eprintln!("watchurl: failed to forward notify event: {err}");
                    }
                }
                Err(err) => {
                    eprintln!("watchurl: config watch error: {err}");
                }
            }
        },
        Config::default(),
    )?;

    for dir in watch_dirs(&urls_path, &interval_path) {
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("watching config dir {:?}", dir))?;
    }

    info!(urls = ?urls_path, interval = ?interval_path, "config watcher started");

    // Async task that consumes notify events and forwards reload commands to
    // the runtime.
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!(?event, "received notify event");

            // A reload reads the files right back, so reacting to access
            // events would loop. Only mutations count.
            if !(event.kind.is_modify() || event.kind.is_create()) {
                continue;
            }

            for path in &event.paths {
                let command = if paths_match(path, &urls_path) {
                    ReloadCommand::WatchList
                } else if paths_match(path, &interval_path) {
                    ReloadCommand::Interval
                } else {
                    continue;
                };

                debug!(?command, ?path, "config file changed");
                if runtime_tx
                    .send(RuntimeEvent::Reload(command))
                    .await
                    .is_err()
                {
                    debug!("runtime event channel closed; stopping config watcher");
                    return;
                }
            }
        }
        debug!("config watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Resolve a config path to an absolute form so it can be compared against
/// the absolute paths notify reports.
fn normalize(path: PathBuf) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&path))
                .unwrap_or(path)
        }
    })
}

/// Unique parent directories of the two config files.
fn watch_dirs(urls_path: &Path, interval_path: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![parent_dir(urls_path)];
    let second = parent_dir(interval_path);
    if !dirs.contains(&second) {
        dirs.push(second);
    }
    dirs
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn paths_match(event_path: &Path, config_path: &Path) -> bool {
    if event_path == config_path {
        return true;
    }
    // Recreated files may arrive under a non-canonical spelling.
    event_path
        .canonicalize()
        .map(|p| p == config_path)
        .unwrap_or(false)
}
