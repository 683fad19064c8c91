//! Confidence-gated victim selection
//!
//! On a capacity miss the gate compares the maximum resident score against
//! the confidence threshold: above it, the score-based choice is trusted and
//! the minimum-score block is evicted; otherwise the policy falls back to
//! evicting the maximum-recency block. Tie-breaks are first-match-wins so
//! identical inputs reproduce bit-identical decisions.

use super::scoring::CONFIDENCE_THRESHOLD;
use super::types::{BlockId, CacheBlock, EvictionMethod};

/// Victim choice together with the confidence that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VictimChoice {
    /// Index of the victim in block iteration order
    pub index: usize,
    /// Gate branch taken
    pub method: EvictionMethod,
    /// Maximum resident score at decision time
    pub confidence: f64,
}

/// Pick the victim for a capacity miss.
///
/// Scores must already be fresh for the active regime. Returns `None` only
/// for an empty block set.
pub(crate) fn select_victim<K: BlockId>(blocks: &[CacheBlock<K>]) -> Option<VictimChoice> {
    if blocks.is_empty() {
        return None;
    }

    let confidence = max_score(blocks);
    // Strictly greater-than: a score exactly at the threshold stays LRU.
    let choice = if confidence > CONFIDENCE_THRESHOLD {
        VictimChoice {
            index: min_score_index(blocks),
            method: EvictionMethod::MlGuided,
            confidence,
        }
    } else {
        VictimChoice {
            index: max_recency_index(blocks),
            method: EvictionMethod::LruFallback,
            confidence,
        }
    };
    Some(choice)
}

fn max_score<K: BlockId>(blocks: &[CacheBlock<K>]) -> f64 {
    let mut best = 0.0f64;
    for block in blocks {
        if block.score > best {
            best = block.score;
        }
    }
    best
}

// Scores recomputed from identical integer features can tie exactly, so the
// strict comparisons below keep the first occurrence in iteration order.
fn min_score_index<K: BlockId>(blocks: &[CacheBlock<K>]) -> usize {
    let mut best_index = 0;
    let mut best_score = f64::INFINITY;
    for (index, block) in blocks.iter().enumerate() {
        if block.score < best_score {
            best_score = block.score;
            best_index = index;
        }
    }
    best_index
}

fn max_recency_index<K: BlockId>(blocks: &[CacheBlock<K>]) -> usize {
    let mut best_index = 0;
    let mut best_recency = 0u32;
    for (index, block) in blocks.iter().enumerate() {
        if block.recency > best_recency {
            best_recency = block.recency;
            best_index = index;
        }
    }
    best_index
}
