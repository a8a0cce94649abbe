//! Eviction Statistics Module
//!
//! Counts what the eviction passes of a map removed and why.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Eviction Stats ==
/// Eviction counters for a bounded map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvictionStats {
    /// Entries removed for exceeding the age limit
    pub age_evictions: u64,
    /// Entries removed for exceeding the size limit
    pub size_evictions: u64,
    /// Eviction passes that ran, including ones that removed nothing
    pub eviction_passes: u64,
    /// When the last pass that removed something ran
    pub last_eviction_at: Option<DateTime<Utc>>,
    /// Current number of entries in the map
    pub total_entries: usize,
}

impl EvictionStats {
    // == Constructor ==
    /// Creates a new EvictionStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entries removed by either limit.
    pub fn total_evictions(&self) -> u64 {
        self.age_evictions + self.size_evictions
    }

    // == Record Pass ==
    /// Records one eviction pass that ran at `at`.
    pub fn record_pass(&mut self, age_evicted: usize, size_evicted: usize, at: DateTime<Utc>) {
        self.eviction_passes += 1;
        self.age_evictions += age_evicted as u64;
        self.size_evictions += size_evicted as u64;
        if age_evicted + size_evicted > 0 {
            self.last_eviction_at = Some(at);
        }
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = EvictionStats::new();
        assert_eq!(stats.age_evictions, 0);
        assert_eq!(stats.size_evictions, 0);
        assert_eq!(stats.eviction_passes, 0);
        assert!(stats.last_eviction_at.is_none());
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_record_pass() {
        let mut stats = EvictionStats::new();
        let now = Utc::now();

        stats.record_pass(2, 1, now);
        stats.record_pass(0, 3, now);

        assert_eq!(stats.eviction_passes, 2);
        assert_eq!(stats.age_evictions, 2);
        assert_eq!(stats.size_evictions, 4);
        assert_eq!(stats.total_evictions(), 6);
        assert_eq!(stats.last_eviction_at, Some(now));
    }

    #[test]
    fn test_empty_pass_keeps_last_eviction() {
        let mut stats = EvictionStats::new();
        let first = Utc::now();

        stats.record_pass(1, 0, first);
        stats.record_pass(0, 0, first + chrono::TimeDelta::seconds(10));

        assert_eq!(stats.eviction_passes, 2);
        assert_eq!(stats.last_eviction_at, Some(first));
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = EvictionStats::new();
        stats.record_pass(0, 1, Utc::now());
        stats.set_total_entries(4);

        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["size_evictions"], 1);
        assert_eq!(json["age_evictions"], 0);
        assert_eq!(json["total_entries"], 4);
        assert!(json["last_eviction_at"].is_string());
    }
}
