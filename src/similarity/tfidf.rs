//! TF-IDF sentence vectors
//!
//! Each sentence becomes a sparse vector over a capped vocabulary, weighted
//! by term frequency times smoothed inverse document frequency and
//! L2-normalized, so cosine similarity reduces to a sparse dot product.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Default vocabulary cap
pub const DEFAULT_MAX_VOCAB: usize = 5000;

/// No usable terms survived filtering anywhere in the document
///
/// Recovered by the pipeline with a positional fallback; this never reaches
/// callers of the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no usable terms remained after stopword and length filtering")]
pub struct EmptyVocabulary;

/// A sparse L2-normalized sentence vector
#[derive(Debug, Clone, Default)]
pub struct SentenceVector {
    /// Non-zero dimensions: vocabulary term id -> normalized weight
    pub weights: FxHashMap<u32, f64>,
    /// L2 norm of the raw weights before normalization
    pub norm: f64,
}

impl SentenceVector {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw weights, normalizing to unit length
    pub fn from_weights(mut weights: FxHashMap<u32, f64>) -> Self {
        let norm = Self::compute_norm(&weights);
        if norm > 0.0 {
            for value in weights.values_mut() {
                *value /= norm;
            }
        }
        Self { weights, norm }
    }

    fn compute_norm(weights: &FxHashMap<u32, f64>) -> f64 {
        weights.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Cosine similarity with another vector
    ///
    /// Both vectors are unit length, so this is just the dot product over
    /// the smaller of the two dimension sets.
    pub fn cosine_similarity(&self, other: &SentenceVector) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };

        let mut dot = 0.0;
        for (id, value) in small {
            if let Some(other_value) = large.get(id) {
                dot += value * other_value;
            }
        }
        dot
    }

    /// Check if the vector has no dimensions
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// The vectorized document
#[derive(Debug, Clone)]
pub struct TfidfVectors {
    /// One vector per sentence, in document order
    pub vectors: Vec<SentenceVector>,
    /// Number of terms in the (possibly capped) vocabulary
    pub vocab_size: usize,
}

impl TfidfVectors {
    /// Number of sentence vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if there are no sentence vectors
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// TF-IDF vectorizer over a sentence collection
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Maximum vocabulary size; the most frequent terms are kept
    max_vocab: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            max_vocab: DEFAULT_MAX_VOCAB,
        }
    }
}

impl TfidfVectorizer {
    /// Create a vectorizer with the default vocabulary cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vocabulary cap (minimum 1)
    pub fn with_max_vocab(mut self, max_vocab: usize) -> Self {
        self.max_vocab = max_vocab.max(1);
        self
    }

    /// Build TF-IDF vectors for the tokenized sentences
    ///
    /// `sentence_terms` holds the extracted terms of each sentence in
    /// document order. Returns [`EmptyVocabulary`] when no sentence
    /// contributed a single term.
    pub fn vectorize(
        &self,
        sentence_terms: &[Vec<String>],
    ) -> Result<TfidfVectors, EmptyVocabulary> {
        let num_sentences = sentence_terms.len();

        // Corpus counts: total occurrences drive the cap, document
        // frequency drives IDF.
        let mut total_counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut doc_freq: FxHashMap<&str, usize> = FxHashMap::default();
        for terms in sentence_terms {
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for term in terms {
                *total_counts.entry(term.as_str()).or_insert(0) += 1;
                if seen.insert(term.as_str()) {
                    *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                }
            }
        }

        if total_counts.is_empty() {
            return Err(EmptyVocabulary);
        }

        // Cap the vocabulary at the most frequent terms; ties break
        // lexicographically so vectorization is deterministic.
        let mut vocab: Vec<&str> = total_counts.keys().copied().collect();
        if vocab.len() > self.max_vocab {
            vocab.sort_by(|a, b| total_counts[b].cmp(&total_counts[a]).then_with(|| a.cmp(b)));
            vocab.truncate(self.max_vocab);
        }
        vocab.sort_unstable();

        let term_ids: FxHashMap<&str, u32> = vocab
            .iter()
            .enumerate()
            .map(|(id, &term)| (term, id as u32))
            .collect();

        // Smooth IDF: terms present in every sentence keep a positive weight
        let idf: Vec<f64> = vocab
            .iter()
            .map(|&term| {
                let df = doc_freq[term] as f64;
                ((1.0 + num_sentences as f64) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vectors = sentence_terms
            .iter()
            .map(|terms| {
                let mut weights: FxHashMap<u32, f64> = FxHashMap::default();
                for term in terms {
                    if let Some(&id) = term_ids.get(term.as_str()) {
                        *weights.entry(id).or_insert(0.0) += 1.0;
                    }
                }
                for (id, value) in weights.iter_mut() {
                    *value *= idf[*id as usize];
                }
                SentenceVector::from_weights(weights)
            })
            .collect();

        Ok(TfidfVectors {
            vectors,
            vocab_size: vocab.len(),
        })
    }
}
