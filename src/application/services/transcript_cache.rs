use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

struct CacheEntry {
    transcript: String,
    created_at: Instant,
}

/// In-memory transcript cache keyed by the exact request URL. Entries older
/// than the retention window read as absent and are evicted lazily on read
/// or by the periodic sweep.
pub struct TranscriptCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    retention: Duration,
}

impl TranscriptCache {
    pub fn new(retention: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            retention,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        if let Some(entry) = entries.get(key) {
            if entry.created_at.elapsed() < self.retention {
                return Some(entry.transcript.clone());
            }
            entries.remove(key);
        }
        None
    }

    pub fn put(&self, key: &str, transcript: String) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            CacheEntry {
                transcript,
                created_at: Instant::now(),
            },
        );
    }

    /// Drop all stale entries. Returns the number removed.
    pub fn sweep(&self) -> usize {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        let before = entries.len();
        entries.retain(|_, entry| entry.created_at.elapsed() < self.retention);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `sweep` on a fixed interval on a background task, independent of
    /// request traffic.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> tokio::task::JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = cache.sweep();
                if removed > 0 {
                    tracing::debug!(removed = removed, "Swept expired transcripts from cache");
                }
            }
        })
    }
}
