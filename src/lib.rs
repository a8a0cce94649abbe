//! Bounded Map - A self-evicting in-process key/value container
//!
//! Enforces an optional maximum entry count and an optional maximum entry
//! age, evicting the oldest entries first when either is exceeded.

pub mod clock;
pub mod config;
pub mod error;
pub mod map;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::MapConfig;
pub use error::{MapError, Result};
pub use map::{BoundedMap, EvictionStats, Limits};
