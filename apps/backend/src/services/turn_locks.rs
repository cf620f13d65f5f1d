//! Per-alpha turn serialization.
//!
//! Two messages from the same user processed concurrently would read the
//! same stored record and race each other's writes. Turns for one alpha
//! therefore queue on a per-key async mutex and run in lock-acquisition
//! order; turns for different alphas proceed independently.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct AlphaLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl AlphaLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Run `work` while holding this key's lock.
    pub async fn serialize<F, T>(&self, key: &str, work: F) -> T
    where
        F: Future<Output = T>,
    {
        let lock = self
            .locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let out = {
            let _guard = lock.lock().await;
            work.await
        };

        // Last turn out drops the entry: the map's reference plus ours
        // account for two strong counts; more means another turn is
        // holding or waiting. The check runs under the shard lock, so it
        // cannot race a concurrent entry().clone().
        self.locks
            .remove_if(key, |_, entry| Arc::strong_count(entry) <= 2);

        out
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.len()
    }
}
