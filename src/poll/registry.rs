// src/poll/registry.rs

//! Live set of watched resources.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::config::model::ResourceSpec;
use crate::types::Resource;

/// Shared, replaceable collection of [`Resource`] slots.
///
/// Each slot is its own `Arc<Mutex<Resource>>` so concurrent checks from
/// overlapping rounds serialize per resource, not across the whole set. A
/// watch-list reload swaps the slot vector wholesale; in-flight checks from
/// the previous round keep their (now detached) slots and finish harmlessly.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    entries: Mutex<Vec<Arc<Mutex<Resource>>>>,
}

impl ResourceRegistry {
    pub fn new(specs: Vec<ResourceSpec>) -> Self {
        let registry = ResourceRegistry::default();
        registry.replace(specs);
        registry
    }

    /// Replace the whole watch list. All poll history is discarded; every
    /// resource starts over at `Unknown`.
    pub fn replace(&self, specs: Vec<ResourceSpec>) {
        let fresh: Vec<Arc<Mutex<Resource>>> = specs
            .into_iter()
            .map(|spec| Arc::new(Mutex::new(Resource::new(spec.url, spec.name))))
            .collect();

        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(_) => {
                warn!("resource registry mutex poisoned; keeping previous watch list");
                return;
            }
        };

        debug!(
            previous = entries.len(),
            next = fresh.len(),
            "replacing watch list"
        );
        *entries = fresh;
    }

    /// Slots of the current watch list, for handing to poll workers.
    pub fn snapshot(&self) -> Vec<Arc<Mutex<Resource>>> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                warn!("resource registry mutex poisoned; treating watch list as empty");
                Vec::new()
            }
        }
    }

    /// Copies of the current resources, for inspection in logs and tests.
    pub fn current(&self) -> Vec<Resource> {
        self.snapshot()
            .iter()
            .filter_map(|slot| match slot.lock() {
                Ok(guard) => Some(guard.clone()),
                Err(_) => {
                    warn!("resource slot mutex poisoned; omitting it from the snapshot");
                    None
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(guard) => guard.len(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
