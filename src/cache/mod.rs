//! In-memory TTL cache for audit reports
//!
//! Maps a normalized URL to the last report produced for it. Expiry is lazy:
//! a stale entry is never returned, but it stays in the map until the same key
//! is written again. There is no capacity bound.

pub mod key;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::report::Report;

pub use key::normalize_url;

/// Default freshness window for a cached report
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60); // 10 min

/// A stored report and when it was written
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub report: Report,
    pub created_at: DateTime<Utc>,
}

/// Process-local report cache guarded by a single mutex.
pub struct ReportCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: TimeDelta,
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ReportCache {
    /// Create an empty cache with the given freshness window
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Get the report for `key` if it is still fresh
    pub fn get(&self, key: &str) -> Option<Report> {
        self.get_at(key, Utc::now())
    }

    /// Get the report for `key` as seen at `now`
    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<Report> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        if self.is_fresh(entry, now) {
            Some(entry.report.clone())
        } else {
            None
        }
    }

    /// Store a report, replacing any previous entry for `key`
    pub fn put(&self, key: &str, report: Report) {
        self.put_at(key, report, Utc::now());
    }

    /// Store a report stamped with an explicit creation time
    pub fn put_at(&self, key: &str, report: Report, now: DateTime<Utc>) {
        self.lock().insert(
            key.to_string(),
            CacheEntry {
                report,
                created_at: now,
            },
        );
    }

    /// Number of stored entries, stale ones included
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics as of now
    pub fn stats(&self) -> CacheStats {
        self.stats_at(Utc::now())
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> CacheStats {
        let entries = self.lock();
        let fresh: Vec<&CacheEntry> = entries
            .values()
            .filter(|entry| self.is_fresh(entry, now))
            .collect();

        CacheStats {
            total_entries: entries.len(),
            valid_entries: fresh.len(),
            expired_entries: entries.len() - fresh.len(),
            oldest_entry: fresh.iter().map(|e| e.created_at).min(),
            newest_entry: fresh.iter().map(|e| e.created_at).max(),
        }
    }

    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.created_at) < self.ttl
    }

    // A panic while holding the lock cannot leave a half-written entry, so the
    // map is still usable after poisoning.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Statistics about cache state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub oldest_entry: Option<DateTime<Utc>>,
    pub newest_entry: Option<DateTime<Utc>>,
}
