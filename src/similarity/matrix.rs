//! Dense sentence similarity matrix
//!
//! All-pairs cosine similarity is inherently dense, so the matrix stores
//! row-major `f64` values directly. Rows double as the edge weights of the
//! sentence graph during ranking, with precomputed row sums as the
//! propagation denominators.

use rayon::prelude::*;

use super::tfidf::SentenceVector;

/// Minimum sentence count before rows are filled in parallel
const PARALLEL_THRESHOLD: usize = 256;

/// A symmetric matrix of pairwise sentence similarities
///
/// The diagonal is always zero: self-similarity carries no ranking signal
/// and a sentence never propagates score to itself.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    /// Matrix dimension
    num_sentences: usize,
    /// Row-major values, length `num_sentences * num_sentences`
    values: Vec<f64>,
    /// Per-row sums, the out-weight of each sentence
    row_sums: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the pairwise similarity matrix for the given sentence vectors
    ///
    /// Large documents fill rows in parallel; small ones compute each pair
    /// once and mirror it, which beats the thread overhead.
    pub fn from_vectors(vectors: &[SentenceVector]) -> Self {
        let n = vectors.len();
        let mut values = vec![0.0; n * n];

        if n >= PARALLEL_THRESHOLD {
            values.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                for (j, slot) in row.iter_mut().enumerate() {
                    if i != j {
                        *slot = vectors[i].cosine_similarity(&vectors[j]);
                    }
                }
            });
        } else {
            for i in 0..n {
                for j in (i + 1)..n {
                    let similarity = vectors[i].cosine_similarity(&vectors[j]);
                    values[i * n + j] = similarity;
                    values[j * n + i] = similarity;
                }
            }
        }

        Self::with_values(n, values)
    }

    /// Build a matrix from raw row-major values
    ///
    /// `values` must have length `num_sentences²` and be symmetric; the
    /// diagonal is overwritten with zeros.
    pub fn from_values(num_sentences: usize, mut values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            num_sentences * num_sentences,
            "similarity matrix requires num_sentences^2 values"
        );
        for i in 0..num_sentences {
            values[i * num_sentences + i] = 0.0;
        }
        Self::with_values(num_sentences, values)
    }

    fn with_values(num_sentences: usize, values: Vec<f64>) -> Self {
        let mut row_sums = Vec::with_capacity(num_sentences);
        for i in 0..num_sentences {
            let start = i * num_sentences;
            row_sums.push(values[start..start + num_sentences].iter().sum());
        }
        Self {
            num_sentences,
            values,
            row_sums,
        }
    }

    /// Matrix dimension (number of sentences)
    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Check if the matrix has no sentences
    pub fn is_empty(&self) -> bool {
        self.num_sentences == 0
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.num_sentences + j]
    }

    /// The full similarity row for sentence `i`
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.num_sentences;
        &self.values[start..start + self.num_sentences]
    }

    /// Total outgoing weight of sentence `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row_sums[i]
    }

    /// Sentences with no similarity to any other sentence
    pub fn dangling_rows(&self) -> Vec<usize> {
        (0..self.num_sentences)
            .filter(|&i| self.row_sums[i] == 0.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn vector(dims: &[(u32, f64)]) -> SentenceVector {
        let weights: FxHashMap<u32, f64> = dims.iter().copied().collect();
        SentenceVector::from_weights(weights)
    }

    fn sample_vectors() -> Vec<SentenceVector> {
        vec![
            vector(&[(0, 1.0), (1, 1.0)]),
            vector(&[(1, 1.0), (2, 1.0)]),
            vector(&[(3, 1.0)]),
        ]
    }

    #[test]
    fn test_symmetry() {
        let matrix = SimilarityMatrix::from_vectors(&sample_vectors());

        for i in 0..3 {
            for j in 0..3 {
                assert!((matrix.get(i, j) - matrix.get(j, i)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_diagonal() {
        let matrix = SimilarityMatrix::from_vectors(&sample_vectors());

        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_values_in_unit_range() {
        let matrix = SimilarityMatrix::from_vectors(&sample_vectors());

        for i in 0..3 {
            for j in 0..3 {
                let v = matrix.get(i, j);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_overlapping_vectors_are_similar() {
        let matrix = SimilarityMatrix::from_vectors(&sample_vectors());

        // Vectors 0 and 1 share dimension 1; vector 2 shares nothing
        assert!(matrix.get(0, 1) > 0.0);
        assert_eq!(matrix.get(0, 2), 0.0);
        assert_eq!(matrix.get(1, 2), 0.0);
    }

    #[test]
    fn test_identical_vectors_fully_similar() {
        let vectors = vec![vector(&[(0, 2.0)]), vector(&[(0, 5.0)])];
        let matrix = SimilarityMatrix::from_vectors(&vectors);

        assert!((matrix.get(0, 1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_row_sums() {
        let matrix = SimilarityMatrix::from_vectors(&sample_vectors());

        for i in 0..3 {
            let expected: f64 = matrix.row(i).iter().sum();
            assert!((matrix.row_sum(i) - expected).abs() < 1e-12);
        }
        // Vector 2 overlaps nothing, so its row sum is zero
        assert_eq!(matrix.row_sum(2), 0.0);
    }

    #[test]
    fn test_dangling_rows() {
        let matrix = SimilarityMatrix::from_vectors(&sample_vectors());
        assert_eq!(matrix.dangling_rows(), vec![2]);

        let empty = SentenceVector::new();
        let vectors = vec![empty.clone(), empty];
        let matrix = SimilarityMatrix::from_vectors(&vectors);
        assert_eq!(matrix.dangling_rows(), vec![0, 1]);
    }

    #[test]
    fn test_from_values_zeroes_diagonal() {
        let matrix = SimilarityMatrix::from_values(2, vec![0.9, 0.5, 0.5, 0.9]);

        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(1, 1), 0.0);
        assert!((matrix.get(0, 1) - 0.5).abs() < 1e-12);
        assert!((matrix.row_sum(0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::default();
        assert!(matrix.is_empty());
        assert!(matrix.dangling_rows().is_empty());

        let built = SimilarityMatrix::from_vectors(&[]);
        assert!(built.is_empty());
    }

    #[test]
    fn test_parallel_fill_matches_direct_cosine() {
        // Enough vectors to cross the parallel threshold
        let vectors: Vec<SentenceVector> = (0..300)
            .map(|i| vector(&[(i % 7, 1.0), ((i % 5) + 7, 2.0)]))
            .collect();

        let matrix = SimilarityMatrix::from_vectors(&vectors);

        for &(i, j) in &[(0usize, 1usize), (12, 250), (299, 0), (150, 151)] {
            let expected = vectors[i].cosine_similarity(&vectors[j]);
            assert!((matrix.get(i, j) - expected).abs() < 1e-12);
            assert!((matrix.get(j, i) - expected).abs() < 1e-12);
        }
        assert_eq!(matrix.get(42, 42), 0.0);
    }
}
