//! Pipeline observer hooks
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::pagerank::RankResult;
use crate::similarity::SimilarityMatrix;
use crate::types::Sentence;

/// Whitespace normalization stage
pub const STAGE_NORMALIZE: &str = "normalize";
/// Sentence segmentation stage
pub const STAGE_SEGMENT: &str = "segment";
/// TF-IDF vectorization stage
pub const STAGE_VECTORIZE: &str = "vectorize";
/// Similarity matrix construction stage
pub const STAGE_SIMILARITY: &str = "similarity";
/// Importance ranking stage
pub const STAGE_RANK: &str = "rank";
/// Sentence selection stage
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for a single stage
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since the clock started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Metrics reported when a stage completes
///
/// Only the fields a stage actually produces are set; the rest stay `None`.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    terms: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    residual: Option<f64>,
}

impl StageReport {
    /// Create a report carrying only the elapsed time
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }

    /// Wall-clock time the stage took
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Sentences flowing out of the stage
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Vocabulary size after vectorization
    pub fn terms(&self) -> Option<usize> {
        self.terms
    }

    /// Ranking iterations performed
    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    /// Whether the ranking converged
    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    /// Final ranking residual
    pub fn residual(&self) -> Option<f64> {
        self.residual
    }
}

/// Builder for reports with stage-specific metrics
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    /// Start a report with the stage's elapsed time
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    /// Record the sentence count
    pub fn sentences(mut self, count: usize) -> Self {
        self.report.sentences = Some(count);
        self
    }

    /// Record the vocabulary size
    pub fn terms(mut self, count: usize) -> Self {
        self.report.terms = Some(count);
        self
    }

    /// Record the ranking iteration count
    pub fn iterations(mut self, count: usize) -> Self {
        self.report.iterations = Some(count);
        self
    }

    /// Record whether the ranking converged
    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    /// Record the final ranking residual
    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    /// Finish the report
    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired at pipeline stage boundaries
///
/// All hooks default to no-ops; implement only what you need. Later-stage
/// hooks never fire for requests that short-circuit (short documents,
/// degenerate vocabulary).
pub trait PipelineObserver {
    /// A stage is about to run
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished with the given metrics
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Segmentation produced these sentences
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// The similarity matrix was built
    fn on_matrix(&mut self, _matrix: &SimilarityMatrix) {}

    /// Ranking finished
    fn on_rank(&mut self, _result: &RankResult) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records one report per completed stage
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed stages in execution order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Total time across all recorded stages
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder_sets_metrics() {
        let report = StageReportBuilder::new(Duration::from_millis(5))
            .sentences(12)
            .iterations(40)
            .converged(true)
            .residual(1e-7)
            .build();

        assert_eq!(report.elapsed(), Duration::from_millis(5));
        assert_eq!(report.sentences(), Some(12));
        assert_eq!(report.iterations(), Some(40));
        assert_eq!(report.converged(), Some(true));
        assert!(report.residual().is_some());
        assert_eq!(report.terms(), None);
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::from_micros(10));

        assert_eq!(report.sentences(), None);
        assert_eq!(report.iterations(), None);
        assert_eq!(report.converged(), None);
    }

    #[test]
    fn test_timing_observer_records_stage_order() {
        let mut observer = StageTimingObserver::new();

        observer.on_stage_end(STAGE_NORMALIZE, &StageReport::new(Duration::from_micros(1)));
        observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::from_micros(2)));

        let names: Vec<_> = observer.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec![STAGE_NORMALIZE, STAGE_SEGMENT]);
        assert_eq!(observer.total_elapsed(), Duration::from_micros(3));
    }
}
