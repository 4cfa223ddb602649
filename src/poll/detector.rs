// src/poll/detector.rs

//! A single poll check: fetch, fingerprint, compare against the baseline.

use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use tracing::{debug, error, info, warn};

use crate::fetch::Fetcher;
use crate::metrics::ByteCounter;
use crate::poll::fingerprint::fingerprint;
use crate::types::Resource;

/// What one check concluded about a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// First successful fetch; a baseline now exists but nothing is reported.
    FirstSuccess,
    /// Fetch succeeded and the body matches the baseline fingerprint.
    Unchanged,
    /// Fetch succeeded with a fingerprint that differs from the baseline.
    Changed,
    /// Fetch failed; the previous baseline (if any) is retained.
    Failed,
}

/// Check one resource and record the result in its slot.
///
/// This never returns an error: a failed fetch is a recorded outcome, not a
/// fault that should take down the round. A change is announced at `info`
/// level only when two consecutive-success fingerprints differ; a success
/// right after a failure re-establishes the baseline silently.
pub async fn check_resource(
    slot: Arc<Mutex<Resource>>,
    fetcher: Arc<dyn Fetcher>,
    counter: Arc<ByteCounter>,
) -> CheckOutcome {
    let (url, name) = {
        let guard = match slot.lock() {
            Ok(g) => g,
            Err(_) => {
                warn!("resource slot mutex poisoned; skipping check");
                return CheckOutcome::Failed;
            }
        };
        (guard.url.clone(), guard.name.clone())
    };

    debug!(resource = %name, url = %url, "fetching resource");

    match fetcher.fetch(&url).await {
        Ok(body) => {
            let digest = fingerprint(&body);
            counter.add(body.len() as u64);

            let mut guard = match slot.lock() {
                Ok(g) => g,
                Err(_) => {
                    warn!(resource = %name, "resource slot mutex poisoned; discarding result");
                    return CheckOutcome::Failed;
                }
            };

            let first = !guard.state.is_success();
            let (next, changed) = guard.state.on_success(digest, SystemTime::now());
            guard.state = next;

            debug!(
                resource = %name,
                bytes = body.len(),
                fingerprint = digest,
                "fetched resource"
            );

            if changed {
                info!(
                    resource = %name,
                    url = %url,
                    fingerprint = digest,
                    "content changed since last fetch"
                );
                CheckOutcome::Changed
            } else if first {
                CheckOutcome::FirstSuccess
            } else {
                CheckOutcome::Unchanged
            }
        }
        Err(err) => {
            error!(
                resource = %name,
                url = %url,
                error = %err,
                "fetch failed"
            );

            let mut guard = match slot.lock() {
                Ok(g) => g,
                Err(_) => {
                    warn!(resource = %name, "resource slot mutex poisoned; discarding result");
                    return CheckOutcome::Failed;
                }
            };
            guard.state = guard.state.on_failure();

            CheckOutcome::Failed
        }
    }
}
