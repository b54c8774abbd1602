//! Per-id mutual exclusion for hierarchy writes.
//!
//! The service keeps one [`KeyedLocks`] for plants (capacity-affecting
//! operations) and one for energy managers (plant writes that reference a
//! manager, and manager deletion).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::types::DbId;

type Registry = Arc<Mutex<HashMap<DbId, Arc<AsyncMutex<()>>>>>;

/// One async mutex per id, created on first use and dropped again once
/// nobody holds or awaits it.
///
/// The registry itself sits behind a std mutex: it is only touched for a
/// map lookup and never across an `.await`, which lets [`KeyedGuard`] prune
/// its entry synchronously on drop.
#[derive(Clone, Default)]
pub struct KeyedLocks {
    registry: Registry,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `id`.
    pub async fn lock(&self, id: DbId) -> KeyedGuard {
        let mutex = {
            let mut map = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(map.entry(id).or_default())
        };
        let guard = mutex.lock_owned().await;
        KeyedGuard {
            id,
            registry: Arc::clone(&self.registry),
            guard: Some(guard),
        }
    }

    /// Number of ids with a live entry (held or awaited).
    pub fn len(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Exclusive access to one id. Releasing the last interest in an id
/// removes it from the registry, so ids that never existed leave no trace.
/// An entry left behind by a cancelled waiter is pruned by the next release
/// of that id.
pub struct KeyedGuard {
    id: DbId,
    registry: Registry,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyedGuard {
    fn drop(&mut self) {
        // Release the mutex (and its Arc) before inspecting the count.
        drop(self.guard.take());

        let mut map = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        // Waiters and new lockers each hold a clone taken under this same
        // registry lock, so a count of one means only the map refers to it.
        if map.get(&self.id).is_some_and(|m| Arc::strong_count(m) == 1) {
            map.remove(&self.id);
        }
    }
}
