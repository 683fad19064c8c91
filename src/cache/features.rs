//! Per-block feature maintenance
//!
//! Keeps the recency and frequency counters consistent with access history
//! and recomputes every resident score after any state change. The tracker
//! is a leaf component: the scoring function is injected by the policy
//! engine, so these routines know nothing about modes or predictors.

use super::types::{BlockId, CacheBlock};

/// Apply a hit to `accessed`: bump its frequency, zero its recency, age
/// every other resident, then rescore the whole set.
///
/// An empty block set is a no-op, not an error.
pub(crate) fn touch<K, F>(blocks: &mut [CacheBlock<K>], accessed: &K, score: F)
where
    K: BlockId,
    F: Fn(u32, u32) -> f64,
{
    for block in blocks.iter_mut() {
        if block.id == *accessed {
            block.frequency += 1;
            block.recency = 0;
        } else {
            block.recency += 1;
        }
    }
    rescore(blocks, score);
}

/// Age every resident by one tick and rescore.
///
/// Insertion counts as an access event for everyone already resident; this
/// runs on both the free-capacity and the eviction insert paths.
pub(crate) fn age_for_insert<K, F>(blocks: &mut [CacheBlock<K>], score: F)
where
    K: BlockId,
    F: Fn(u32, u32) -> f64,
{
    for block in blocks.iter_mut() {
        block.recency += 1;
    }
    rescore(blocks, score);
}

/// Fresh features for a newly inserted block: `frequency = 1, recency = 0`,
/// score computed against the active regime.
pub(crate) fn init_features<K, F>(id: K, score: F) -> CacheBlock<K>
where
    K: BlockId,
    F: Fn(u32, u32) -> f64,
{
    let initial_score = score(1, 0);
    CacheBlock {
        id,
        recency: 0,
        frequency: 1,
        score: initial_score,
    }
}

/// Recompute every resident score from its current counters.
pub(crate) fn rescore<K, F>(blocks: &mut [CacheBlock<K>], score: F)
where
    K: BlockId,
    F: Fn(u32, u32) -> f64,
{
    for block in blocks.iter_mut() {
        block.score = score(block.frequency, block.recency);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::scoring::predict_reuse_probability;
    use crate::cache::types::WorkloadMode;

    fn friendly(frequency: u32, recency: u32) -> f64 {
        predict_reuse_probability(frequency, recency, WorkloadMode::Friendly)
    }

    #[test]
    fn test_touch_updates_counters_and_scores() {
        let mut blocks = vec![
            init_features("a", friendly),
            init_features("b", friendly),
            init_features("c", friendly),
        ];

        touch(&mut blocks, &"b", friendly);

        assert_eq!(blocks[0].recency, 1);
        assert_eq!(blocks[0].frequency, 1);
        assert_eq!(blocks[1].recency, 0);
        assert_eq!(blocks[1].frequency, 2);
        assert_eq!(blocks[2].recency, 1);

        for block in &blocks {
            assert_eq!(block.score, friendly(block.frequency, block.recency));
        }
    }

    #[test]
    fn test_touch_on_empty_is_noop() {
        let mut blocks: Vec<CacheBlock<&str>> = Vec::new();
        touch(&mut blocks, &"a", friendly);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_age_for_insert_ages_everyone() {
        let mut blocks = vec![init_features(1u32, friendly), init_features(2u32, friendly)];
        age_for_insert(&mut blocks, friendly);
        assert_eq!(blocks[0].recency, 1);
        assert_eq!(blocks[1].recency, 1);
        assert_eq!(blocks[0].score, friendly(1, 1));
    }

    #[test]
    fn test_init_features_baseline() {
        let block = init_features("fresh", friendly);
        assert_eq!(block.recency, 0);
        assert_eq!(block.frequency, 1);
        assert_eq!(block.score, 0.7);
    }
}
