//! Named workload patterns and the drive loop
//!
//! Each pattern pairs a scoring regime with a deterministic access sequence,
//! so hit-rate behavior can be compared across patterns and reproduced
//! bit-identically between runs. The driver translates the sequence into
//! `access` calls and summarizes the outcomes per pattern.

use std::fmt::Write as _;

use arrayvec::ArrayString;
use serde::Serialize;

use crate::cache::core::Cache;
use crate::cache::error::CacheOperationError;
use crate::cache::types::WorkloadMode;

/// Short fixed-capacity tag naming a generated block
pub type BlockTag = ArrayString<8>;

/// A named, reproducible access sequence under a fixed scoring regime
#[derive(Debug, Clone)]
pub struct Workload {
    name: &'static str,
    mode: WorkloadMode,
    accesses: Vec<BlockTag>,
}

/// Per-pattern outcome summary for the display collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadReport {
    /// Pattern name
    pub name: &'static str,
    /// Scoring regime the pattern ran under
    pub mode: WorkloadMode,
    /// Accesses driven
    pub accesses: u64,
    /// Accesses that hit
    pub hits: u64,
    /// Hit fraction over the pattern's own accesses
    pub hit_rate: f64,
    /// Evictions decided by the score-based choice
    pub ml_guided_evictions: u64,
    /// Evictions decided by the LRU fallback
    pub lru_fallback_evictions: u64,
    /// Gate confidence at the last eviction, `0.0` if none occurred
    pub final_confidence: f64,
}

impl Workload {
    /// Tight reuse of a two-block hot set amid a stream of one-shot fillers,
    /// under the hostile regime
    ///
    /// Repeated hits push the hot blocks to a high-confidence keep signal,
    /// so capacity misses are decided by the gate and the hot set survives
    /// the surrounding churn (capacity permitting).
    pub fn hot_set(rounds: usize) -> Self {
        let hot = [tag("H0"), tag("H1")];
        let mut accesses = Vec::with_capacity(rounds * 3);
        for round in 0..rounds {
            accesses.extend_from_slice(&hot);
            accesses.push(numbered("S", round));
        }
        Self {
            name: "hot-set",
            mode: WorkloadMode::Hostile,
            accesses,
        }
    }

    /// One-shot streaming scan under the friendly regime
    ///
    /// No block is ever reused: scores stay capped below the gate and every
    /// eviction falls back to LRU.
    pub fn streaming_scan(length: usize) -> Self {
        let accesses = (0..length).map(|index| numbered("S", index)).collect();
        Self {
            name: "streaming-scan",
            mode: WorkloadMode::Friendly,
            accesses,
        }
    }

    /// A scan with one block re-accessed between every filler, under the
    /// hostile regime
    pub fn scan_with_hot_block(length: usize) -> Self {
        let hot = tag("H0");
        let mut accesses = Vec::with_capacity(length * 2);
        for index in 0..length {
            accesses.push(hot);
            accesses.push(numbered("S", index));
        }
        Self {
            name: "scan-with-hot-block",
            mode: WorkloadMode::Hostile,
            accesses,
        }
    }

    /// Pattern name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Scoring regime the pattern runs under
    pub fn mode(&self) -> WorkloadMode {
        self.mode
    }

    /// The generated access sequence
    pub fn accesses(&self) -> &[BlockTag] {
        &self.accesses
    }

    /// Drive a cache through the whole sequence and summarize the outcomes
    ///
    /// Switches the cache to the pattern's regime first. The report covers
    /// only this run: counters are measured as deltas, so a cache reused
    /// across patterns keeps its cumulative statistics intact.
    pub fn run(&self, cache: &mut Cache<BlockTag>) -> WorkloadReport {
        cache.set_workload_mode(self.mode);
        let before = cache.stats().clone();

        for id in &self.accesses {
            cache.access(id);
        }

        let after = cache.stats();
        let accesses = after.total_accesses - before.total_accesses;
        let hits = after.hits - before.hits;
        let hit_rate = if accesses == 0 {
            0.0
        } else {
            hits as f64 / accesses as f64
        };

        WorkloadReport {
            name: self.name,
            mode: self.mode,
            accesses,
            hits,
            hit_rate,
            ml_guided_evictions: after.ml_guided_evictions - before.ml_guided_evictions,
            lru_fallback_evictions: after.lru_fallback_evictions - before.lru_fallback_evictions,
            final_confidence: cache.confidence(),
        }
    }
}

/// Run every built-in pattern on a fresh cache of the given capacity and
/// collect the per-pattern reports.
pub fn compare_patterns(capacity: usize) -> Result<Vec<WorkloadReport>, CacheOperationError> {
    let patterns = [
        Workload::hot_set(32),
        Workload::streaming_scan(64),
        Workload::scan_with_hot_block(64),
    ];

    let mut reports = Vec::with_capacity(patterns.len());
    for pattern in &patterns {
        let mut cache = Cache::new(capacity, pattern.mode())?;
        reports.push(pattern.run(&mut cache));
    }
    Ok(reports)
}

fn tag(text: &str) -> BlockTag {
    let mut tag = BlockTag::new();
    for ch in text.chars().take(tag.capacity()) {
        let _ = tag.try_push(ch);
    }
    tag
}

fn numbered(prefix: &str, index: usize) -> BlockTag {
    let mut tag = BlockTag::new();
    let _ = write!(tag, "{}{}", prefix, index);
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_reproduce_bit_identically() {
        let pattern = Workload::hot_set(16);
        let mut first_cache = Cache::new(4, pattern.mode()).expect("valid capacity");
        let mut second_cache = Cache::new(4, pattern.mode()).expect("valid capacity");

        let first = pattern.run(&mut first_cache);
        let second = pattern.run(&mut second_cache);
        assert_eq!(first, second);
        assert_eq!(first_cache.snapshot(), second_cache.snapshot());
    }

    #[test]
    fn test_streaming_scan_never_hits_and_always_falls_back() {
        let pattern = Workload::streaming_scan(32);
        let mut cache = Cache::new(4, pattern.mode()).expect("valid capacity");
        let report = pattern.run(&mut cache);

        assert_eq!(report.accesses, 32);
        assert_eq!(report.hits, 0);
        assert_eq!(report.hit_rate, 0.0);
        assert_eq!(report.ml_guided_evictions, 0);
        assert_eq!(report.lru_fallback_evictions, 28);
    }

    #[test]
    fn test_hot_set_survives_the_churn() {
        let pattern = Workload::hot_set(12);
        let mut cache = Cache::new(4, pattern.mode()).expect("valid capacity");
        let report = pattern.run(&mut cache);

        assert!(cache.contains(&tag("H0")));
        assert!(cache.contains(&tag("H1")));
        assert!(report.ml_guided_evictions > 0);
        assert_eq!(report.lru_fallback_evictions, 0);
        assert!(report.hit_rate > 0.5);
        assert_eq!(report.final_confidence, 0.95);
    }

    #[test]
    fn test_scan_with_hot_block_protects_the_hot_block() {
        let pattern = Workload::scan_with_hot_block(24);
        let mut cache = Cache::new(3, pattern.mode()).expect("valid capacity");
        pattern.run(&mut cache);
        assert!(cache.contains(&tag("H0")));
    }

    #[test]
    fn test_compare_patterns_reports_each_builtin() {
        let reports = compare_patterns(4).expect("valid capacity");
        let names: Vec<_> = reports.iter().map(|report| report.name).collect();
        assert_eq!(names, ["hot-set", "streaming-scan", "scan-with-hot-block"]);
    }

    #[test]
    fn test_compare_patterns_rejects_zero_capacity() {
        assert!(compare_patterns(0).is_err());
    }

    #[test]
    fn test_report_serializes_for_display() {
        let pattern = Workload::streaming_scan(8);
        let mut cache = Cache::new(2, pattern.mode()).expect("valid capacity");
        let report = pattern.run(&mut cache);

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["name"], "streaming-scan");
        assert_eq!(json["mode"], "friendly");
        assert_eq!(json["accesses"], 8);
        assert!(json["hit_rate"].is_number());
    }

    #[test]
    fn test_generated_tags_are_unique_per_index() {
        let pattern = Workload::streaming_scan(200);
        let mut seen = std::collections::HashSet::new();
        for tag in pattern.accesses() {
            assert!(seen.insert(*tag), "duplicate tag {:?}", tag);
        }
    }
}
