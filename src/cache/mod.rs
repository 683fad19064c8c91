//! Replacement policy core
//!
//! The simulator pairs a per-block feature tracker with a confidence-gated
//! policy engine: every access updates recency/frequency features and
//! rescores the resident set; capacity misses pick a victim either by
//! minimum predicted reuse probability (when the gate trusts the predictor)
//! or by LRU fallback.

pub mod config;
pub mod core;
pub mod error;
pub mod scoring;
pub mod types;

pub(crate) mod features;
pub(crate) mod policy;

// Re-export the core surface at the module root
pub use self::config::CacheConfig;
pub use self::core::{Cache, CacheBuilder};
pub use self::error::CacheOperationError;
pub use self::scoring::{
    CONFIDENCE_THRESHOLD, FriendlyPredictor, HostilePredictor, ReusePredictor,
    predict_reuse_probability,
};
pub use self::types::{
    AccessOutcome, BlockId, CacheBlock, DecisionRecord, EvictionMethod, WorkloadMode,
};
