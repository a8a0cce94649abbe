//! Map Module
//!
//! Provides the bounded map: a key/value container with size and age
//! limits and oldest-first eviction.

mod bounded;
mod entry;
mod limits;
mod order;
mod stats;


// Re-export public types
pub use bounded::BoundedMap;
pub use limits::Limits;
pub use stats::EvictionStats;

pub(crate) use order::CreationOrder;
