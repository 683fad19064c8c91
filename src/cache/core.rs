//! Cache core and replacement policy engine
//!
//! Owns the resident block set and drives the per-access state machine:
//! feature updates, rescoring, and the confidence-gated eviction decision.
//! Models a single set of a set-associative cache.

use super::config::CacheConfig;
use super::error::CacheOperationError;
use super::features;
use super::policy;
use super::scoring::{self, ReusePredictor};
use super::types::{AccessOutcome, BlockId, CacheBlock, DecisionRecord, WorkloadMode};
use crate::telemetry::CacheStatistics;

/// Set-associative cache with confidence-gated hybrid replacement
///
/// The cache is the sole owner of its blocks; callers observe state through
/// [`snapshot`](Cache::snapshot) and the [`AccessOutcome`] returned per
/// access. Each `access` call is atomic from the caller's perspective: it
/// fully updates features, scores, and residency before returning.
///
/// The core is single-threaded by design: replacement decisions are only
/// meaningful under a total order of accesses. Driving one instance from
/// multiple threads requires external serialization; independent instances
/// share nothing and may run concurrently.
#[derive(Debug)]
pub struct Cache<K: BlockId> {
    blocks: Vec<CacheBlock<K>>,
    capacity: usize,
    mode: WorkloadMode,
    /// Maximum resident score observed at the last eviction decision
    last_confidence: f64,
    stats: CacheStatistics,
    /// Installed model override; built-in regime dispatch when absent
    predictor: Option<Box<dyn ReusePredictor>>,
}

impl<K: BlockId> Cache<K> {
    /// Start building a cache with fluent configuration
    pub fn builder() -> CacheBuilder<K> {
        CacheBuilder::new()
    }

    /// Create a cache with the given capacity and initial scoring regime
    pub fn new(capacity: usize, mode: WorkloadMode) -> Result<Self, CacheOperationError> {
        Self::with_config(&CacheConfig {
            capacity,
            initial_mode: mode,
        })
    }

    /// Create a cache from a validated configuration
    pub fn with_config(config: &CacheConfig) -> Result<Self, CacheOperationError> {
        config.validate()?;
        Ok(Self {
            blocks: Vec::with_capacity(config.capacity),
            capacity: config.capacity,
            mode: config.initial_mode,
            last_confidence: 0.0,
            stats: CacheStatistics::default(),
            predictor: None,
        })
    }

    /// Switch the scoring regime
    ///
    /// Residents are rescored lazily on the next access; every access path
    /// rescores before deciding, so no decision ever uses a mode-stale score.
    pub fn set_workload_mode(&mut self, mode: WorkloadMode) {
        if mode != self.mode {
            log::trace!("workload mode switched to {}", mode);
        }
        self.mode = mode;
    }

    /// Apply one access event and return its outcome
    ///
    /// Every access is a global tick: all resident features age and rescore
    /// before any decision is taken, including on hits.
    pub fn access(&mut self, id: &K) -> AccessOutcome<K> {
        self.stats.record_access();

        let mode = self.mode;
        let predictor = self.predictor.as_deref();
        let score = move |frequency: u32, recency: u32| match predictor {
            Some(model) => model.predict(frequency, recency).clamp(0.0, 1.0),
            None => scoring::predict_reuse_probability(frequency, recency, mode),
        };

        if self.blocks.iter().any(|block| block.id == *id) {
            features::touch(&mut self.blocks, id, score);
            self.stats.record_hit();
            return AccessOutcome::Hit;
        }

        // The new access still ages everyone already resident.
        features::age_for_insert(&mut self.blocks, score);

        if self.blocks.len() < self.capacity {
            self.blocks.push(features::init_features(id.clone(), score));
            self.stats.record_miss_insert();
            return AccessOutcome::MissInsert;
        }

        let Some(choice) = policy::select_victim(&self.blocks) else {
            // Capacity is validated positive, so a full cache is never
            // empty; an empty set degrades to a plain insert.
            self.blocks.push(features::init_features(id.clone(), score));
            self.stats.record_miss_insert();
            return AccessOutcome::MissInsert;
        };

        let replacement = features::init_features(id.clone(), score);
        let victim = std::mem::replace(&mut self.blocks[choice.index], replacement);
        self.last_confidence = choice.confidence;
        self.stats.record_eviction(choice.method);
        log::debug!(
            "evicted {:?} via {} (confidence {:.3})",
            victim.id,
            choice.method,
            choice.confidence
        );

        AccessOutcome::MissEvict(DecisionRecord {
            victim_id: victim.id,
            method: choice.method,
            confidence: choice.confidence,
        })
    }

    /// Ordered read-only view of the resident blocks
    pub fn snapshot(&self) -> &[CacheBlock<K>] {
        &self.blocks
    }

    /// Maximum resident score at the last eviction decision, `0.0` before
    /// any eviction has occurred
    pub fn confidence(&self) -> f64 {
        self.last_confidence
    }

    /// Number of resident blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks are resident
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Maximum number of resident blocks
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Currently active scoring regime
    pub fn workload_mode(&self) -> WorkloadMode {
        self.mode
    }

    /// Whether a block with the given identifier is resident
    pub fn contains(&self, id: &K) -> bool {
        self.blocks.iter().any(|block| block.id == *id)
    }

    /// Hit/miss/eviction accounting since creation or the last reset
    pub fn stats(&self) -> &CacheStatistics {
        &self.stats
    }

    /// Clear the accounting counters; residency is untouched
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

/// Fluent builder for cache configuration
#[derive(Debug)]
pub struct CacheBuilder<K: BlockId> {
    config: CacheConfig,
    predictor: Option<Box<dyn ReusePredictor>>,
    _phantom: std::marker::PhantomData<K>,
}

impl<K: BlockId> CacheBuilder<K> {
    /// Create new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CacheConfig::default(),
            predictor: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Set the maximum number of resident blocks
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the scoring regime active before the first access
    pub fn workload_mode(mut self, mode: WorkloadMode) -> Self {
        self.config.initial_mode = mode;
        self
    }

    /// Install a reuse predictor that replaces the built-in regime dispatch
    ///
    /// Predictions are clamped into `[0.0, 1.0]` before use.
    pub fn predictor(mut self, predictor: Box<dyn ReusePredictor>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    /// Build the cache, rejecting invalid configuration
    pub fn build(self) -> Result<Cache<K>, CacheOperationError> {
        let mut cache = Cache::with_config(&self.config)?;
        cache.predictor = self.predictor;
        Ok(cache)
    }
}

impl<K: BlockId> Default for CacheBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
