use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use sha2::{Digest, Sha256};

use crate::language::LanguageTag;
use crate::model::{ConstraintSet, Strategy};
use crate::traversal::CURATED_NODE_TABLE_VERSION;

/// Default cache capacity, per the external-interface default.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Content-addressed fingerprint: `hash(source) ⊕ LanguageTag ⊕
/// strategy_id ⊕ extractor_version`, rendered as a hex string for
/// logging and test assertions.
pub fn fingerprint(source: &[u8], language: LanguageTag, strategy: Strategy) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source);
    let mut digest: [u8; 32] = hasher.finalize().into();

    let language_byte = language as u8 ^ strategy as u8 ^ (CURATED_NODE_TABLE_VERSION as u8);
    for byte in digest.iter_mut() {
        *byte ^= language_byte;
    }

    hex::encode(digest)
}

struct CacheEntry {
    constraints: ConstraintSet,
    /// Tick from the cache's monotonic clock at last access. An atomic
    /// so a hit can bump recency under only a shared (read) lock,
    /// instead of needing the exclusive lock LRU bookkeeping would
    /// otherwise require.
    last_access: AtomicU64,
}

/// In-process, content-addressed LRU cache. Reads acquire a shared lock;
/// insert/evict acquire an exclusive lock, per the single-writer/
/// multi-reader concurrency contract. Recency bookkeeping for a hit
/// lives in each entry's own atomic counter so concurrent readers never
/// contend with each other — only `insert` (which may evict) takes the
/// exclusive lock.
pub struct ConstraintCache {
    capacity: usize,
    clock: AtomicU64,
    inner: RwLock<Inner>,
}

struct Inner {
    entries: HashMap<String, CacheEntry>,
}

impl ConstraintCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            clock: AtomicU64::new(0),
            inner: RwLock::new(Inner { entries: HashMap::new() }),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.capacity == 0
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// A cache hit always returns a fresh, independently owned deep copy
    /// — the caller cannot observe or mutate the cache's internal copy.
    /// Takes only a shared lock: bumping an entry's recency is an
    /// atomic store, not a write-lock-requiring mutation of the map.
    pub fn get(&self, key: &str) -> Option<ConstraintSet> {
        if self.is_disabled() {
            return None;
        }
        let inner = self.inner.read().expect("cache lock poisoned");
        let entry = inner.entries.get(key)?;
        entry.last_access.store(self.tick(), Ordering::Relaxed);
        Some(entry.constraints.clone())
    }

    /// Inserts a deep clone of `constraints`; evicts the least-recently
    /// used entry if at capacity.
    pub fn insert(&self, key: String, constraints: ConstraintSet) {
        if self.is_disabled() {
            return;
        }
        let mut inner = self.inner.write().expect("cache lock poisoned");
        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.capacity {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_access.load(Ordering::Relaxed))
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                inner.entries.remove(&oldest);
            }
        }
        let tick = self.tick();
        inner.entries.insert(
            key,
            CacheEntry {
                constraints,
                last_access: AtomicU64::new(tick),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("cache lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
