//! Error types for the summarization pipeline
//!
//! Every failure is terminal for the request: the pipeline never returns a
//! partial summary. A summary with zero sentences is reported as
//! [`SummarizeError::EmptySummary`] rather than as an empty success.

use thiserror::Error;

/// Result type alias for summarization operations
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors that can occur during summarization
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizeError {
    /// The source produced no usable text (empty, whitespace-only, or
    /// the loader had nothing to extract)
    #[error("no text could be extracted from the input")]
    NoInputText,

    /// The importance ranking did not converge within the iteration cap
    #[error("ranking did not converge after {iterations} iterations (residual {residual:.3e})")]
    RankingFailed {
        /// Iterations performed before giving up
        iterations: usize,
        /// Final L1 residual when the cap was hit
        residual: f64,
    },

    /// A summary would have contained no sentences
    #[error("summary would contain no sentences")]
    EmptySummary,
}
