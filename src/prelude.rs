//! Oraclecache prelude - convenient imports for users
//!
//! This module provides everything needed to drive the simulator and read
//! back its decisions.

// Re-export the public API
pub use crate::cache::core::{Cache, CacheBuilder};

// Re-export essential error and config types
pub use crate::cache::config::CacheConfig;
pub use crate::cache::error::CacheOperationError;

// Re-export the access surface and decision metadata
pub use crate::cache::types::{
    AccessOutcome, BlockId, CacheBlock, DecisionRecord, EvictionMethod, WorkloadMode,
};

// Re-export the scoring seam for custom predictors
pub use crate::cache::scoring::{
    CONFIDENCE_THRESHOLD, FriendlyPredictor, HostilePredictor, ReusePredictor,
    predict_reuse_probability,
};

// Re-export accounting and workload driving
pub use crate::telemetry::CacheStatistics;
pub use crate::workload::{BlockTag, Workload, WorkloadReport, compare_patterns};
