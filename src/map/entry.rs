//! Map Entry Module
//!
//! Defines a stored value together with the creation stamp that drives its
//! eviction.

use chrono::{DateTime, TimeDelta, Utc};

// == Order Key ==
/// Position of an entry in creation order.
///
/// Sorts by creation time, then by insertion sequence so entries stamped
/// with the same instant still have a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey {
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Insertion sequence number, unique per map
    pub seq: u64,
}

// == Map Entry ==
/// A single stored value with its creation stamp.
#[derive(Debug, Clone)]
pub struct MapEntry<V> {
    /// The stored value
    pub value: V,
    /// Where this entry sits in creation order
    pub order: OrderKey,
}

impl<V> MapEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped at `created_at` with sequence `seq`.
    pub fn new(value: V, created_at: DateTime<Utc>, seq: u64) -> Self {
        Self {
            value,
            order: OrderKey { created_at, seq },
        }
    }

    /// Creation timestamp of the entry.
    #[allow(dead_code)]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.order.created_at
    }

    // == Age ==
    /// Age of the entry at `now`. Negative if the clock went backwards.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.order.created_at)
    }

    // == Is Older Than ==
    /// Checks whether the entry's age at `now` is strictly greater than
    /// `limit`. An entry exactly `limit` old is kept.
    pub fn is_older_than(&self, now: DateTime<Utc>, limit: TimeDelta) -> bool {
        self.age(now) > limit
    }
}
