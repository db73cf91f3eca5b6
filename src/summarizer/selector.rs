//! Sentence selection
//!
//! Turns ranking scores into the final summary: take the top-scoring
//! sentences, then restore document order so the summary reads as a
//! subsequence of the original.

use std::cmp::Ordering;

use crate::types::Sentence;

/// Selects summary sentences from ranking scores
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    /// Number of sentences to keep
    num_sentences: usize,
}

impl SentenceSelector {
    /// Create a selector that keeps `num_sentences` sentences (minimum 1)
    pub fn new(num_sentences: usize) -> Self {
        Self {
            num_sentences: num_sentences.max(1),
        }
    }

    /// Select the top-scoring sentences, returned in document order
    ///
    /// Documents no longer than the requested count come back unchanged.
    /// Equal scores break toward the earlier sentence, so selection is
    /// deterministic.
    pub fn select(&self, sentences: &[Sentence], scores: &[f64]) -> Vec<Sentence> {
        if sentences.len() <= self.num_sentences {
            return sentences.to_vec();
        }

        let mut ranked: Vec<(&Sentence, f64)> =
            sentences.iter().zip(scores.iter().copied()).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.index.cmp(&b.0.index))
        });
        ranked.truncate(self.num_sentences);

        // Restore document order
        let mut selected: Vec<Sentence> = ranked.into_iter().map(|(s, _)| s.clone()).collect();
        selected.sort_by_key(|s| s.index);
        selected
    }

    /// Positional fallback: the leading sentences in document order
    ///
    /// Used when similarity carries no signal (degenerate vocabulary) and
    /// score-based selection is impossible.
    pub fn take_leading(&self, sentences: &[Sentence]) -> Vec<Sentence> {
        sentences.iter().take(self.num_sentences).cloned().collect()
    }
}
