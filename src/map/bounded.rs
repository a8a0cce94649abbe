//! Bounded Map Module
//!
//! Main container combining HashMap storage with a creation-order index
//! and size/age limit eviction.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, trace};

use crate::clock::{to_time_delta, Clock, SystemClock};
use crate::config::MapConfig;
use crate::map::entry::MapEntry;
use crate::map::{CreationOrder, EvictionStats, Limits};

// == Bounded Map ==
/// Key/value map that evicts its oldest entries once a size or age limit
/// is exceeded.
///
/// Only insertion time counts: reading an entry never refreshes it.
/// The map does no locking of its own; wrap it in a mutex to share it.
#[derive(Debug)]
pub struct BoundedMap<V> {
    /// Key-value storage
    entries: HashMap<String, MapEntry<V>>,
    /// Creation order index, oldest first
    order: CreationOrder,
    /// Size and age limits, fixed at construction
    limits: Limits,
    /// Age limit as a signed delta for comparisons against clock time
    age_limit: TimeDelta,
    /// Source of "now"
    clock: Box<dyn Clock>,
    /// Eviction counters
    stats: EvictionStats,
    /// Sequence number for the next stored entry
    next_seq: u64,
}

impl<V> BoundedMap<V> {
    // == Constructors ==
    /// Creates an empty map. A zero `size_limit` or `age_limit` disables
    /// that limit.
    pub fn new(size_limit: usize, age_limit: Duration) -> Self {
        Self::with_limits(Limits::new(size_limit, age_limit))
    }

    /// Creates an empty map using the system clock.
    pub fn with_limits(limits: Limits) -> Self {
        Self::with_clock(limits, SystemClock)
    }

    /// Creates an empty map reading time from `clock`.
    pub fn with_clock(limits: Limits, clock: impl Clock + 'static) -> Self {
        Self {
            entries: HashMap::new(),
            order: CreationOrder::new(),
            limits,
            age_limit: to_time_delta(limits.age),
            clock: Box::new(clock),
            stats: EvictionStats::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty map from loaded configuration.
    pub fn from_config(config: &MapConfig) -> Self {
        let limits = config.limits();
        info!(
            "Bounded map configured: size_limit={}, age_limit={}s",
            limits.size,
            limits.age.as_secs()
        );
        Self::with_limits(limits)
    }

    // == Bulk Construction ==
    /// Creates a map pre-populated from `initial`, then runs an eviction
    /// pass.
    ///
    /// Every initial entry gets the same creation time. Among them, the
    /// iteration order of `initial` decides which are treated as older, so
    /// for an unordered source the survivors of a size-limited load are
    /// arbitrary. A key repeated in `initial` keeps its last value.
    pub fn from_map<K, I>(size_limit: usize, age_limit: Duration, initial: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_map_with_clock(Limits::new(size_limit, age_limit), SystemClock, initial)
    }

    /// Same as [`BoundedMap::from_map`], reading time from `clock`.
    pub fn from_map_with_clock<K, I>(limits: Limits, clock: impl Clock + 'static, initial: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::with_clock(limits, clock);
        let now = map.clock.now();

        for (key, value) in initial {
            map.store(key.into(), value, now);
        }

        map.evict_at(now);
        map
    }

    // == Insert ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// An existing entry is replaced and its age starts over. Runs an
    /// eviction pass before returning if the map is over its size limit
    /// or its oldest entry is over the age limit.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let now = self.clock.now();
        self.store(key.into(), value, now);

        if self.needs_eviction(now) {
            self.evict_at(now);
        }
    }

    // == Get ==
    /// Returns the value stored under `key`.
    ///
    /// Never evicts and never changes recency.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns true if `key` is stored.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Oldest ==
    /// Returns the entry that the next eviction would remove first.
    pub fn oldest(&self) -> Option<(&str, &V)> {
        self.order
            .peek_oldest()
            .and_then(|(_, key)| self.lookup(key))
    }

    /// Iterates entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.order.iter().filter_map(move |key| self.lookup(key))
    }

    // == Evict ==
    /// Runs an eviction pass now and returns how many entries it removed.
    pub fn evict(&mut self) -> usize {
        let now = self.clock.now();
        self.evict_at(now)
    }

    // == Accessors ==
    /// Returns the limits this map was built with.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Returns current eviction statistics.
    pub fn stats(&self) -> EvictionStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Internals ==
    fn lookup<'a>(&'a self, key: &'a str) -> Option<(&'a str, &'a V)> {
        self.entries.get(key).map(|entry| (key, &entry.value))
    }

    /// Writes an entry and its order position, dropping the old position
    /// on overwrite so each key appears in the index exactly once.
    fn store(&mut self, key: String, value: V, now: DateTime<Utc>) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let entry = MapEntry::new(value, now, seq);
        let at = entry.order;

        match self.entries.insert(key.clone(), entry) {
            Some(previous) => {
                self.order.remove(&previous.order);
                trace!(key = %key, "overwrote entry");
            }
            None => trace!(key = %key, "inserted entry"),
        }
        self.order.push(at, key);
    }

    fn needs_eviction(&self, now: DateTime<Utc>) -> bool {
        if self.limits.has_size_limit() && self.entries.len() > self.limits.size {
            return true;
        }
        self.limits.has_age_limit() && self.oldest_expired(now)
    }

    fn oldest_expired(&self, now: DateTime<Utc>) -> bool {
        self.order
            .peek_oldest()
            .and_then(|(_, key)| self.entries.get(key))
            .is_some_and(|entry| entry.is_older_than(now, self.age_limit))
    }

    fn evict_at(&mut self, now: DateTime<Utc>) -> usize {
        let mut age_evicted = 0;
        if self.limits.has_age_limit() {
            while self.oldest_expired(now) && self.remove_oldest() {
                age_evicted += 1;
            }
        }

        let mut size_evicted = 0;
        if self.limits.has_size_limit() {
            while self.entries.len() > self.limits.size && self.remove_oldest() {
                size_evicted += 1;
            }
        }

        self.stats.record_pass(age_evicted, size_evicted, now);
        self.stats.set_total_entries(self.entries.len());

        let removed = age_evicted + size_evicted;
        if removed > 0 {
            debug!(
                age_evicted,
                size_evicted,
                remaining = self.entries.len(),
                "eviction pass removed entries"
            );
        }
        removed
    }

    fn remove_oldest(&mut self) -> bool {
        match self.order.pop_oldest() {
            Some(key) => {
                self.entries.remove(&key);
                true
            }
            None => false,
        }
    }
}
