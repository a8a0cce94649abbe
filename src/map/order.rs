//! Creation Order Module
//!
//! Keeps map keys sorted by creation time so the oldest entries can be
//! found and removed without sorting.

use std::collections::BTreeMap;

use crate::map::entry::OrderKey;

// == Creation Order ==
/// Tracks creation order for oldest-first eviction.
///
/// Keys are stored in a BTreeMap where:
/// - First = oldest
/// - Last = newest
#[derive(Debug, Default)]
pub struct CreationOrder {
    /// Keys indexed by creation position
    order: BTreeMap<OrderKey, String>,
}

impl CreationOrder {
    // == Constructor ==
    /// Creates a new empty order index.
    pub fn new() -> Self {
        Self {
            order: BTreeMap::new(),
        }
    }

    // == Push ==
    /// Records `key` at position `at`.
    pub fn push(&mut self, at: OrderKey, key: String) {
        self.order.insert(at, key);
    }

    // == Remove ==
    /// Removes the position `at`, returning the key that was there.
    pub fn remove(&mut self, at: &OrderKey) -> Option<String> {
        self.order.remove(at)
    }

    // == Peek Oldest ==
    /// Returns the oldest position and its key without removing them.
    pub fn peek_oldest(&self) -> Option<(&OrderKey, &String)> {
        self.order.first_key_value()
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest key.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_first().map(|(_, key)| key)
    }

    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &String> {
        self.order.values()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
