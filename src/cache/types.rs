//! Common types for the replacement policy core
//!
//! This module contains the block representation, the scoring regimes, and
//! the per-access outcome records shared across the policy implementation.

use serde::{Deserialize, Serialize};

/// Marker bounds for opaque block identifiers
///
/// Any comparable token can name a cache block; the simulator never inspects
/// identifier contents. Implemented automatically for integers, strings,
/// `ArrayString`, and anything else meeting the bounds.
pub trait BlockId: Clone + Eq + std::fmt::Debug {}

impl<T> BlockId for T where T: Clone + Eq + std::fmt::Debug {}

/// Scoring regime governing reuse-probability computation
///
/// Selected externally by the workload driver; switching regimes takes
/// effect on the next access, when every resident block is rescored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkloadMode {
    /// Predictor output is structurally capped below the confidence
    /// threshold, so every eviction falls back to LRU
    #[serde(rename = "friendly")]
    Friendly,
    /// Repeated access produces a high-confidence keep signal that enables
    /// ML-guided eviction
    #[serde(rename = "hostile")]
    Hostile,
}

impl Default for WorkloadMode {
    fn default() -> Self {
        Self::Friendly
    }
}

impl std::fmt::Display for WorkloadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkloadMode::Friendly => write!(f, "friendly"),
            WorkloadMode::Hostile => write!(f, "hostile"),
        }
    }
}

/// How a victim was chosen on a capacity miss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvictionMethod {
    /// Minimum predicted reuse probability, trusted above the threshold
    #[serde(rename = "ml-guided")]
    MlGuided,
    /// Maximum recency, used whenever confidence is insufficient
    #[serde(rename = "lru-fallback")]
    LruFallback,
}

impl std::fmt::Display for EvictionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvictionMethod::MlGuided => write!(f, "ml-guided"),
            EvictionMethod::LruFallback => write!(f, "lru-fallback"),
        }
    }
}

/// One resident cache line and its tracked features
///
/// `recency` is the number of accesses since this block was last touched
/// (0 = most recently used); `frequency` counts accesses since insertion;
/// `score` is the predicted reuse probability in `[0.0, 1.0]`, recomputed
/// from the current counters before any decision reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheBlock<K: BlockId> {
    pub(crate) id: K,
    pub(crate) recency: u32,
    pub(crate) frequency: u32,
    pub(crate) score: f64,
}

impl<K: BlockId> CacheBlock<K> {
    /// Block identifier
    #[inline]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Accesses since this block was last touched
    #[inline]
    pub fn recency(&self) -> u32 {
        self.recency
    }

    /// Accesses to this block since it entered the cache
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Predicted reuse probability at the last rescoring
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Eviction decision metadata, produced once per capacity miss
///
/// Transient: exists to report a single access outcome to the display
/// collaborator and is not retained by the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRecord<K: BlockId> {
    /// Identifier of the evicted block
    pub victim_id: K,
    /// How the victim was selected
    pub method: EvictionMethod,
    /// Maximum resident score at decision time
    pub confidence: f64,
}

/// Outcome of a single access event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AccessOutcome<K: BlockId> {
    /// The block was resident; features updated, no capacity change
    Hit,
    /// The block was absent and inserted into free capacity
    MissInsert,
    /// The block was absent and replaced a victim chosen by the gate
    MissEvict(DecisionRecord<K>),
}

impl<K: BlockId> AccessOutcome<K> {
    /// Whether the access found its block resident
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit)
    }

    /// Whether the access missed, with or without an eviction
    #[inline]
    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    /// Decision metadata, when the access forced an eviction
    pub fn decision(&self) -> Option<&DecisionRecord<K>> {
        match self {
            AccessOutcome::MissEvict(record) => Some(record),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_classification() {
        let hit: AccessOutcome<u32> = AccessOutcome::Hit;
        assert!(hit.is_hit());
        assert!(!hit.is_miss());
        assert!(hit.decision().is_none());

        let evict = AccessOutcome::MissEvict(DecisionRecord {
            victim_id: 7u32,
            method: EvictionMethod::LruFallback,
            confidence: 0.55,
        });
        assert!(evict.is_miss());
        let record = evict.decision().expect("eviction carries a record");
        assert_eq!(record.victim_id, 7);
        assert_eq!(record.method, EvictionMethod::LruFallback);
    }

    #[test]
    fn test_mode_display_matches_serde_names() {
        assert_eq!(WorkloadMode::Friendly.to_string(), "friendly");
        assert_eq!(WorkloadMode::Hostile.to_string(), "hostile");
    }
}
