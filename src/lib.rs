//! Oraclecache - hybrid cache replacement simulator
//!
//! A set-associative cache simulator whose replacement policy blends a
//! learned reuse-probability predictor with a deterministic LRU fallback,
//! gated by a fixed confidence threshold.
//!
//! # Features
//!
//! - **Hybrid replacement**: score-guided eviction when the predictor is
//!   confident, LRU fallback whenever it is not
//! - **Feature tracking**: per-block recency and frequency counters,
//!   rescored on every access
//! - **Pluggable scoring**: a trained model slots in behind
//!   [`ReusePredictor`] without touching the eviction state machine
//! - **Workload patterns**: named, reproducible access sequences with
//!   per-pattern hit-rate reporting
//! - **Decision telemetry**: hit/miss/eviction accounting plus a decision
//!   record per eviction for display layers

// Public API modules
pub mod prelude;

// Simulator implementation modules
pub mod cache;
pub mod telemetry;
pub mod workload;

// Re-export the public API at the crate root for convenience
pub use cache::core::{Cache, CacheBuilder};
pub use cache::error::CacheOperationError;
pub use prelude::*;

/// Traits users implement to plug in identifiers and predictors
pub mod traits {
    pub use crate::cache::scoring::ReusePredictor;
    pub use crate::cache::types::BlockId;
}
