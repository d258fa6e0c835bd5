use hookwell_core::WebhookEntry;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Bounded newest-first store of captured webhooks.
///
/// Holds at most `capacity` entries; inserting past capacity silently
/// evicts the oldest. A single mutex serializes every operation, so no
/// reader observes a partially applied insert and the capacity invariant
/// holds under concurrent use. Readers receive clones; the store is the
/// sole owner of its entries.
pub struct HistoryStore {
    inner: Mutex<VecDeque<WebhookEntry>>,
    capacity: usize,
}

impl HistoryStore {
    /// Create an empty store. `capacity` is fixed for the store's lifetime
    /// and clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add an entry at the front, evicting the oldest when full.
    pub fn insert(&self, entry: WebhookEntry) {
        let mut entries = self.lock();
        if entries.len() == self.capacity {
            if let Some(evicted) = entries.pop_back() {
                debug!(id = %evicted.id, "Evicted oldest entry at capacity");
            }
        }
        entries.push_front(entry);
    }

    /// Snapshot of up to `limit` entries starting at `offset`,
    /// newest first. Does not reflect later mutation.
    pub fn list(&self, offset: usize, limit: usize) -> Vec<WebhookEntry> {
        self.lock().iter().skip(offset).take(limit).cloned().collect()
    }

    /// First entry whose id matches, or `None`.
    pub fn get(&self, id: &str) -> Option<WebhookEntry> {
        self.lock().iter().find(|e| e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The deque is only mutated under the lock by infallible operations,
    // so a poisoned lock cannot hold torn data. Recover it.
    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<WebhookEntry>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
