//! Cache configuration types
//!
//! Construction-time settings for a simulator instance. The confidence
//! threshold is intentionally not configurable; see
//! [`crate::cache::scoring::CONFIDENCE_THRESHOLD`].

use serde::{Deserialize, Serialize};

use super::error::CacheOperationError;
use super::types::WorkloadMode;

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of resident blocks; must be positive
    pub capacity: usize,
    /// Scoring regime active before the first access
    pub initial_mode: WorkloadMode,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 8,
            initial_mode: WorkloadMode::Friendly,
        }
    }
}

impl CacheConfig {
    /// Shorthand for a config with the given capacity and default mode
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Validate invariants the type system cannot express
    pub fn validate(&self) -> Result<(), CacheOperationError> {
        if self.capacity == 0 {
            return Err(CacheOperationError::invalid_configuration(
                "cache capacity must be a positive number of blocks",
            ));
        }
        Ok(())
    }
}
