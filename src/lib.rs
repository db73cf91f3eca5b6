//! # sentrank
//!
//! Extractive text summarization using the TextRank algorithm.
//!
//! The pipeline splits a document into sentences, scores how similar each
//! pair of sentences is (TF-IDF cosine similarity), runs PageRank over the
//! similarity graph to find the most central sentences, and returns the top
//! ones in their original document order.
//!
//! ## Features
//!
//! - **Unsupervised**: no training data or model downloads, works offline
//! - **Deterministic**: the same text and configuration always produce the
//!   same summary
//! - **Pluggable**: substitute sentence segmenters and stopword lists
//!   through traits
//! - **Parallel**: similarity computation scales across cores for large
//!   documents

pub mod errors;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod source;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{Sentence, Summary, SummaryConfig};

// Re-export main functionality
pub use nlp::{
    segmenter::{RuleSegmenter, SentenceSegmenter},
    stopwords::StopwordFilter,
};
pub use pagerank::{standard::StandardPageRank, RankResult};
pub use similarity::{SimilarityMatrix, TfidfVectorizer};
pub use source::{PlainText, TextSource};
pub use summarizer::{
    observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver},
    pipeline::{summarize, Summarizer},
    selector::SentenceSelector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
