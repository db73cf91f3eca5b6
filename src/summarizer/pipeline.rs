//! Summarization pipeline
//!
//! [`Summarizer`] wires the stages together: normalize the text, segment it
//! into sentences, build TF-IDF vectors, compute the similarity matrix, rank
//! sentence importance with PageRank, and select the summary.
//!
//! The pipeline is a pure function of the input text and configuration; one
//! `Summarizer` can serve any number of concurrent requests. The sentence
//! segmenter is the only shared resource and sits behind an `Arc` as a
//! read-only capability.

use std::sync::Arc;

use crate::errors::{Result, SummarizeError};
use crate::nlp::normalizer::normalize;
use crate::nlp::segmenter::{RuleSegmenter, SentenceSegmenter};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::extract_terms;
use crate::pagerank::StandardPageRank;
use crate::similarity::{EmptyVocabulary, SimilarityMatrix, TfidfVectorizer};
use crate::source::TextSource;
use crate::summarizer::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_NORMALIZE,
    STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT, STAGE_SIMILARITY, STAGE_VECTORIZE,
};
use crate::summarizer::selector::SentenceSelector;
use crate::types::{Sentence, Summary, SummaryConfig};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Extractive summarizer
///
/// Holds the configuration, the shared sentence segmenter, and the stopword
/// filter. Stateless between requests.
#[derive(Clone)]
pub struct Summarizer {
    config: SummaryConfig,
    segmenter: Arc<dyn SentenceSegmenter>,
    stopwords: StopwordFilter,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with default settings
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Create a summarizer with a custom configuration
    ///
    /// The stopword filter is loaded for `config.language`.
    pub fn with_config(config: SummaryConfig) -> Self {
        let stopwords = StopwordFilter::new(&config.language);
        Self {
            config,
            segmenter: Arc::new(RuleSegmenter::new()),
            stopwords,
        }
    }

    /// Replace the sentence segmenter
    ///
    /// The segmenter is read-only and shared; one instance can serve any
    /// number of summarizers and threads.
    pub fn with_segmenter(mut self, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize text
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.summarize_observed(text, &mut NoopObserver)
    }

    /// Summarize text provided by a source collaborator
    ///
    /// A source with nothing to extract maps to
    /// [`SummarizeError::NoInputText`].
    pub fn summarize_source(&self, source: &dyn TextSource) -> Result<Summary> {
        let text = source.extract().ok_or(SummarizeError::NoInputText)?;
        self.summarize(&text)
    }

    /// Summarize text, notifying `observer` at each stage boundary
    ///
    /// Stages run in order: normalize, segment, vectorize, similarity, rank,
    /// select. Requests that short-circuit (short documents, degenerate
    /// vocabulary) skip the remaining stages.
    pub fn summarize_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        // Stage 0: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let text = normalize(text);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_NORMALIZE, &report);

        if text.is_empty() {
            return Err(SummarizeError::NoInputText);
        }

        // Stage 1: Segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences: Vec<Sentence> = self
            .segmenter
            .segment(&text)
            .enumerate()
            .map(|(index, sentence)| Sentence::new(index, sentence))
            .collect();
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);

        if sentences.is_empty() {
            return Err(SummarizeError::NoInputText);
        }

        let selector = SentenceSelector::new(self.config.num_sentences);

        // Documents that already fit the requested length are returned whole
        if sentences.len() <= self.config.num_sentences {
            return into_summary(sentences);
        }

        // Stage 2: Vectorize
        trace_stage!(STAGE_VECTORIZE);
        observer.on_stage_start(STAGE_VECTORIZE);
        let clock = StageClock::start();
        let sentence_terms: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| extract_terms(&s.text, &self.stopwords))
            .collect();
        let vectorized = TfidfVectorizer::new()
            .with_max_vocab(self.config.max_vocab)
            .vectorize(&sentence_terms);
        let vectors = match vectorized {
            Ok(vectors) => {
                let report = StageReportBuilder::new(clock.elapsed())
                    .sentences(vectors.len())
                    .terms(vectors.vocab_size)
                    .build();
                observer.on_stage_end(STAGE_VECTORIZE, &report);
                vectors
            }
            Err(EmptyVocabulary) => {
                // No usable terms anywhere: similarity carries no signal,
                // so fall back to the leading sentences instead of failing.
                let report = StageReportBuilder::new(clock.elapsed()).terms(0).build();
                observer.on_stage_end(STAGE_VECTORIZE, &report);
                return into_summary(selector.take_leading(&sentences));
            }
        };

        // Stage 3: Similarity
        trace_stage!(STAGE_SIMILARITY);
        observer.on_stage_start(STAGE_SIMILARITY);
        let clock = StageClock::start();
        let matrix = SimilarityMatrix::from_vectors(&vectors.vectors);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(matrix.num_sentences())
            .build();
        observer.on_stage_end(STAGE_SIMILARITY, &report);
        observer.on_matrix(&matrix);

        // Stage 4: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let ranking = StandardPageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations)
            .with_threshold(self.config.convergence_threshold)
            .run(&matrix);
        let report = StageReportBuilder::new(clock.elapsed())
            .iterations(ranking.iterations)
            .converged(ranking.converged)
            .residual(ranking.delta)
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_rank(&ranking);

        if !ranking.converged {
            return Err(SummarizeError::RankingFailed {
                iterations: ranking.iterations,
                residual: ranking.delta,
            });
        }

        // Stage 5: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selected = selector.select(&sentences, &ranking.scores);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(selected.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);

        into_summary(selected)
    }
}

/// Terminal guard: a summary is never empty on success
fn into_summary(sentences: Vec<Sentence>) -> Result<Summary> {
    if sentences.is_empty() {
        return Err(SummarizeError::EmptySummary);
    }
    Ok(Summary::new(sentences))
}

/// Summarize `text` into at most `num_sentences` sentences
///
/// Convenience wrapper around [`Summarizer`] with default settings,
/// returning the selected sentence texts in document order.
pub fn summarize(text: &str, num_sentences: usize) -> Result<Vec<String>> {
    let config = SummaryConfig::default().with_num_sentences(num_sentences);
    let summary = Summarizer::with_config(config).summarize(text)?;
    Ok(summary.sentences.into_iter().map(|s| s.text).collect())
}
