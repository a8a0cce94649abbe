//! Limits Module
//!
//! The size and age limits a bounded map is built with. A zero in either
//! position disables that limit.

use std::time::Duration;

use chrono::TimeDelta;

use crate::error::{MapError, Result};

// == Limits ==
/// Size and age limits for a bounded map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of entries, 0 = unlimited
    pub size: usize,
    /// Maximum entry age, zero = unlimited
    pub age: Duration,
}

impl Limits {
    // == Constructor ==
    /// Creates limits from unsigned values. Never fails.
    pub fn new(size: usize, age: Duration) -> Self {
        Self { size, age }
    }

    /// Limits that never trigger eviction.
    pub fn unbounded() -> Self {
        Self::default()
    }

    // == Signed Conversion ==
    /// Creates limits from signed values, rejecting anything below zero.
    ///
    /// Zero stays valid and means "disabled", same as in [`Limits::new`].
    pub fn try_from_signed(size: i64, age: TimeDelta) -> Result<Self> {
        if size < 0 {
            return Err(MapError::NegativeSizeLimit(size));
        }
        let age = age
            .to_std()
            .map_err(|_| MapError::NegativeAgeLimit(age.to_string()))?;

        Ok(Self {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            age,
        })
    }

    /// Returns true if the entry count is bounded.
    pub fn has_size_limit(&self) -> bool {
        self.size != 0
    }

    /// Returns true if entry age is bounded.
    pub fn has_age_limit(&self) -> bool {
        !self.age.is_zero()
    }
}
