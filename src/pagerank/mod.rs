//! Importance ranking
//!
//! This module provides PageRank power iteration over the sentence
//! similarity graph.

pub mod standard;

pub use standard::StandardPageRank;

use std::cmp::Ordering;

/// Result of a ranking computation
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores for each sentence (indexed by document position), summing to 1.0
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1 norm of the last score change)
    pub delta: f64,
    /// Whether the iteration converged within the cap
    pub converged: bool,
}

impl RankResult {
    /// Create a new ranking result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the top N sentences by score
    ///
    /// Equal scores break toward the earlier sentence, keeping the ordering
    /// deterministic.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific sentence
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }
}
