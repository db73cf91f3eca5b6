//! Summarization components
//!
//! Provides the [`pipeline::Summarizer`] orchestrator, score-based sentence
//! selection, and observer hooks for stage-level diagnostics.

pub mod observer;
pub mod pipeline;
pub mod selector;

pub use pipeline::{summarize, Summarizer};
pub use selector::SentenceSelector;
