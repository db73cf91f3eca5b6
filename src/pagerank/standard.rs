//! Standard PageRank algorithm
//!
//! Implements classic PageRank with power iteration over the similarity
//! matrix, with proper handling of dangling sentences (rows with no
//! similarity mass).

use super::RankResult;
use crate::similarity::SimilarityMatrix;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a similarity matrix
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged=false`; callers decide whether a partial ranking is usable.
    pub fn run(&self, matrix: &SimilarityMatrix) -> RankResult {
        let n = matrix.num_sentences();
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        // Sentences similar to nothing spread their mass uniformly
        let dangling_rows = matrix.dangling_rows();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling_rows.iter().map(|&i| scores[i]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            // Propagate scores along similarity edges
            for (i, &score) in scores.iter().enumerate() {
                let row_sum = matrix.row_sum(i);
                if row_sum > 0.0 {
                    let damped = self.damping * score / row_sum;
                    for (j, &weight) in matrix.row(i).iter().enumerate() {
                        if weight > 0.0 {
                            new_scores[j] += damped * weight;
                        }
                    }
                }
            }

            // Convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalize so the scores form a distribution
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        RankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fully-connected matrix with uniform off-diagonal similarity
    fn uniform_matrix(n: usize) -> SimilarityMatrix {
        let values = vec![1.0; n * n];
        SimilarityMatrix::from_values(n, values)
    }

    /// Hub sentence similar to three spokes that share nothing pairwise
    fn star_matrix() -> SimilarityMatrix {
        let values = vec![
            0.0, 0.8, 0.8, 0.8, //
            0.8, 0.0, 0.0, 0.0, //
            0.8, 0.0, 0.0, 0.0, //
            0.8, 0.0, 0.0, 0.0,
        ];
        SimilarityMatrix::from_values(4, values)
    }

    #[test]
    fn test_uniform_matrix_equal_scores() {
        let matrix = uniform_matrix(3);
        let pr = StandardPageRank::new();
        let result = pr.run(&matrix);

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_star_matrix_hub_highest() {
        let matrix = star_matrix();
        let pr = StandardPageRank::new();
        let result = pr.run(&matrix);

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let matrix = star_matrix();
        let pr = StandardPageRank::new();
        let result = pr.run(&matrix);

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::default();
        let pr = StandardPageRank::new();
        let result = pr.run(&matrix);

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_single_sentence() {
        let matrix = SimilarityMatrix::from_values(1, vec![1.0]);
        let pr = StandardPageRank::new();
        let result = pr.run(&matrix);

        assert!(result.converged);
        assert_eq!(result.scores.len(), 1);
        assert!((result.scores[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let matrix = uniform_matrix(3);
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&matrix);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        // Should still have valid scores
        assert_eq!(result.scores.len(), 3);
    }

    #[test]
    fn test_damping_factor() {
        let matrix = star_matrix();

        // Lower damping = more teleportation = more uniform scores
        let result_low = StandardPageRank::new().with_damping(0.5).run(&matrix);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&matrix);

        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_dangling_mass_redistributed() {
        // Sentence 2 is similar to nothing
        let values = vec![
            0.0, 0.6, 0.0, //
            0.6, 0.0, 0.0, //
            0.0, 0.0, 0.0,
        ];
        let matrix = SimilarityMatrix::from_values(3, values);
        let result = StandardPageRank::new().run(&matrix);

        assert!(result.converged);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        for &score in &result.scores {
            assert!(score > 0.0);
        }
    }

    #[test]
    fn test_top_n() {
        let matrix = star_matrix();
        let result = StandardPageRank::new().run(&matrix);

        let top_2 = result.top_n(2);
        assert_eq!(top_2.len(), 2);
        // Hub should be first
        assert_eq!(top_2[0].0, 0);
    }

    #[test]
    fn test_top_n_tie_breaks_toward_earlier_sentence() {
        let result = RankResult::new(vec![0.25, 0.25, 0.25, 0.25], 10, 0.0, true);

        let top_2 = result.top_n(2);
        assert_eq!(top_2[0].0, 0);
        assert_eq!(top_2[1].0, 1);
    }
}
