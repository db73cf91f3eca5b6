//! Sentence similarity
//!
//! This module turns tokenized sentences into TF-IDF vectors and builds
//! the pairwise cosine similarity matrix the ranker walks.

pub mod matrix;
pub mod tfidf;

pub use matrix::SimilarityMatrix;
pub use tfidf::{EmptyVocabulary, SentenceVector, TfidfVectorizer, TfidfVectors};
