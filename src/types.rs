//! Core types for the summarization pipeline

use serde::{Deserialize, Serialize};

/// A sentence extracted from the source document
///
/// Identity is positional: `index` is the zero-based position of the sentence
/// in document order and is unique within a document. `text` is the trimmed
/// sentence content, used for term extraction and final output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence {
    /// Zero-based position in document order
    pub index: usize,
    /// Trimmed sentence text
    pub text: String,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// An extractive summary: a subsequence of the document's sentences
/// in their original order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Selected sentences, ordered by ascending `Sentence::index`
    pub sentences: Vec<Sentence>,
}

impl Summary {
    /// Create a summary from selected sentences
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Number of sentences in the summary
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the summary contains no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over the sentence texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    /// Join the sentence texts with a single space
    pub fn to_text(&self) -> String {
        self.texts().collect::<Vec<_>>().join(" ")
    }
}

/// Configuration for the summarization pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Number of sentences to select for the summary
    pub num_sentences: usize,
    /// PageRank damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum PageRank iterations before giving up
    pub max_iterations: usize,
    /// Convergence threshold for PageRank (L1 norm of the score change)
    pub convergence_threshold: f64,
    /// Maximum TF-IDF vocabulary size (most frequent terms are kept)
    pub max_vocab: usize,
    /// Language code for stopword filtering (e.g. "en", "de", "fr")
    pub language: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            num_sentences: 5,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            max_vocab: 5000,
            language: "en".to_string(),
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sentences to select (minimum 1)
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n.max(1);
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping.clamp(0.0, 1.0);
        self
    }

    /// Set the maximum PageRank iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the maximum vocabulary size (minimum 1)
    pub fn with_max_vocab(mut self, max_vocab: usize) -> Self {
        self.max_vocab = max_vocab.max(1);
        self
    }

    /// Set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
