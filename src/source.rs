//! Input boundary for text extraction
//!
//! The pipeline does not fetch or parse documents itself; a [`TextSource`]
//! collaborator hands it plain text. Loaders for URLs and file formats live
//! with the caller and implement this trait.

/// A source of plain text to summarize
pub trait TextSource {
    /// Return the extracted text, or `None` when no text is available.
    ///
    /// Implementations report extraction failure as `None`; the pipeline
    /// turns that into [`crate::SummarizeError::NoInputText`].
    fn extract(&self) -> Option<String>;
}

/// A source wrapping text that has already been extracted
#[derive(Debug, Clone)]
pub struct PlainText {
    text: String,
}

impl PlainText {
    /// Create a source from plain text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for PlainText {
    fn extract(&self) -> Option<String> {
        Some(self.text.clone())
    }
}
