//! Configuration Module
//!
//! Loads bounded map limits from environment variables.

use std::env;
use std::time::Duration;

use chrono::TimeDelta;

use crate::error::{MapError, Result};
use crate::map::Limits;

/// Environment variable holding the size limit (entries)
pub const SIZE_LIMIT_VAR: &str = "BOUNDED_MAP_SIZE_LIMIT";
/// Environment variable holding the age limit (seconds)
pub const AGE_LIMIT_VAR: &str = "BOUNDED_MAP_AGE_LIMIT_SECS";

/// Map configuration parameters.
///
/// A zero value disables the corresponding limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    /// Maximum number of entries the map can hold
    pub size_limit: usize,
    /// Maximum entry age
    pub age_limit: Duration,
}

impl MapConfig {
    /// Creates a new MapConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `BOUNDED_MAP_SIZE_LIMIT` - Maximum entries (default: 1000)
    /// - `BOUNDED_MAP_AGE_LIMIT_SECS` - Maximum age in seconds (default: 300)
    ///
    /// Unset variables use the default. Negative or non-numeric values are
    /// rejected.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`MapConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let size = parse_var(&lookup, SIZE_LIMIT_VAR)?
            .unwrap_or(defaults.size_limit as i64);
        let age_secs = parse_var(&lookup, AGE_LIMIT_VAR)?
            .unwrap_or(defaults.age_limit.as_secs() as i64);

        let age = TimeDelta::try_seconds(age_secs).ok_or_else(|| MapError::InvalidConfig {
            var: AGE_LIMIT_VAR.to_string(),
            value: age_secs.to_string(),
        })?;

        let limits = Limits::try_from_signed(size, age)?;
        Ok(Self {
            size_limit: limits.size,
            age_limit: limits.age,
        })
    }

    /// Returns the limits described by this configuration.
    pub fn limits(&self) -> Limits {
        Limits::new(self.size_limit, self.age_limit)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size_limit: 1000,
            age_limit: Duration::from_secs(300),
        }
    }
}

fn parse_var<F>(lookup: &F, var: &str) -> Result<Option<i64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| MapError::InvalidConfig {
                var: var.to_string(),
                value,
            }),
    }
}
