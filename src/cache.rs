//! Memoization for idempotent document lookups.
//!
//! Destination insights and packing lists depend only on their arguments, so
//! repeat requests within a process can be answered without another model
//! call. Keys are content fingerprints of the operation name and its
//! arguments; the cache is capacity-bounded and evicts the oldest entry.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Mutex;

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::Result;

/// Compute a deterministic fingerprint for an operation and its arguments.
///
/// Two calls with the same operation name and argument values always produce
/// the same key, regardless of when or where they run.
pub fn fingerprint(operation: &str, args: &[&str]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(operation.as_bytes());
    for arg in args {
        // Unit separator keeps ("ab","c") distinct from ("a","bc").
        hasher.update([0x1f]);
        hasher.update(arg.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

struct CacheInner {
    entries: HashMap<String, Value>,
    order: VecDeque<String>,
}

/// Bounded in-memory cache of parsed model responses.
///
/// Only successful results are stored; a failed producer leaves no entry, so
/// the next identical call retries it. The lock is never held across the
/// producer's await, which means two concurrent callers can both miss and
/// both invoke the producer; the first writer wins and the duplicate result
/// is discarded.
pub struct ResponseCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity: capacity.max(1),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let inner = self.inner.lock().expect("cache lock poisoned");
        inner.entries.get(key).cloned()
    }

    /// Insert a value for `key` unless one is already present.
    pub fn put(&self, key: &str, value: Value) {
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        if inner.entries.contains_key(key) {
            return;
        }
        if inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }
        inner.entries.insert(key.to_string(), value);
        inner.order.push_back(key.to_string());
    }

    /// Return the cached value for `(operation, args)` or invoke `producer`
    /// and store its result.
    pub async fn get_or_compute<F, Fut>(
        &self,
        operation: &str,
        args: &[&str],
        producer: F,
    ) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        let key = fingerprint(operation, args);
        if let Some(hit) = self.get(&key) {
            debug!(operation, "cache hit");
            return Ok(hit);
        }

        let value = producer().await?;
        self.put(&key, value.clone());
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        inner.entries.clear();
        inner.order.clear();
    }
}
