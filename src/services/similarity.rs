use rayon::prelude::*;
use serde::Deserialize;

use crate::models::RowId;

use super::vectorizer::FeatureVector;

/// How pairwise similarities are obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStrategy {
    /// Precompute the full N×N matrix at startup
    Eager,
    /// Compute one row per query
    #[default]
    Lazy,
}

/// Similarity of one corpus row to the queried row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub row_id: RowId,
    pub score: f64,
}

/// Scores of every other row against a queried row
pub type SimilarityRow = Vec<Candidate>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Descending,
    Ascending,
}

/// Cosine of the angle between two vectors.
///
/// Zero when either vector has zero norm.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0)
}

/// Stable sort of a similarity row; equal scores keep their incoming order.
pub fn rank(mut row: SimilarityRow, order: SortOrder) -> SimilarityRow {
    match order {
        SortOrder::Descending => row.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortOrder::Ascending => row.sort_by(|a, b| a.score.total_cmp(&b.score)),
    }
    row
}

/// Pairwise cosine similarities over the corpus vectors
///
/// Immutable once built; safe to share across request handlers.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    vectors: Vec<FeatureVector>,
    /// Row-major N×N scores, present for `IndexStrategy::Eager`
    matrix: Option<Vec<f64>>,
}

impl SimilarityIndex {
    pub fn build(vectors: Vec<FeatureVector>, strategy: IndexStrategy) -> Self {
        let matrix = match strategy {
            IndexStrategy::Eager => Some(Self::compute_matrix(&vectors)),
            IndexStrategy::Lazy => None,
        };
        Self { vectors, matrix }
    }

    fn compute_matrix(vectors: &[FeatureVector]) -> Vec<f64> {
        let n = vectors.len();
        let mut matrix = vec![0.0; n * n];
        if n == 0 {
            return matrix;
        }
        matrix
            .par_chunks_mut(n)
            .zip(vectors.par_iter())
            .for_each(|(row, a)| {
                for (cell, b) in row.iter_mut().zip(vectors) {
                    *cell = cosine_similarity(a, b);
                }
            });
        matrix
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn strategy(&self) -> IndexStrategy {
        if self.matrix.is_some() {
            IndexStrategy::Eager
        } else {
            IndexStrategy::Lazy
        }
    }

    /// Similarity between two rows.
    ///
    /// # Panics
    /// If either row is out of range.
    pub fn similarity(&self, a: RowId, b: RowId) -> f64 {
        match &self.matrix {
            Some(matrix) => {
                assert!(a < self.len() && b < self.len(), "row out of range");
                matrix[a * self.len() + b]
            }
            None => cosine_similarity(&self.vectors[a], &self.vectors[b]),
        }
    }

    /// Scores of every other row against `row_id`, in corpus order.
    ///
    /// # Panics
    /// If `row_id` is out of range.
    pub fn row_similarities(&self, row_id: RowId) -> SimilarityRow {
        assert!(row_id < self.len(), "row {} out of range", row_id);
        (0..self.len())
            .filter(|&other| other != row_id)
            .map(|other| Candidate {
                row_id: other,
                score: self.similarity(row_id, other),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::vectorizer::TfIdfVectorizer;

    fn vectors() -> Vec<FeatureVector> {
        let titles = [
            "Toy Story",
            "Toy Story 2",
            "Cars",
            "Finding Nemo",
            "Up",
            "Toy Story 3",
            "Cars 2",
            "Story of a Toy Car",
        ];
        TfIdfVectorizer::fit_transform(&titles).1
    }

    #[test]
    fn test_cosine_self_is_one() {
        for vector in vectors().iter().filter(|v| !v.is_zero()) {
            assert!((cosine_similarity(vector, vector) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let zero = FeatureVector::zero(3);
        let other = FeatureVector::from_entries(3, vec![(1, 2.0)]);
        assert_eq!(cosine_similarity(&zero, &other), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_and_partial() {
        let a = FeatureVector::from_entries(3, vec![(0, 1.0)]);
        let b = FeatureVector::from_entries(3, vec![(1, 1.0)]);
        let c = FeatureVector::from_entries(3, vec![(0, 1.0), (1, 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert!((cosine_similarity(&a, &c) - 1.0 / 2.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let index = SimilarityIndex::build(vectors(), IndexStrategy::Lazy);
        for row in 0..index.len() {
            for candidate in index.row_similarities(row) {
                assert!((0.0..=1.0).contains(&candidate.score));
            }
        }
    }

    #[test]
    fn test_row_excludes_self_and_keeps_corpus_order() {
        let index = SimilarityIndex::build(vectors(), IndexStrategy::Lazy);
        let row = index.row_similarities(2);
        let ids: Vec<RowId> = row.iter().map(|c| c.row_id).collect();
        assert_eq!(ids, vec![0, 1, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_eager_and_lazy_agree() {
        let eager = SimilarityIndex::build(vectors(), IndexStrategy::Eager);
        let lazy = SimilarityIndex::build(vectors(), IndexStrategy::Lazy);
        assert_eq!(eager.strategy(), IndexStrategy::Eager);
        assert_eq!(lazy.strategy(), IndexStrategy::Lazy);
        for row in 0..eager.len() {
            assert_eq!(eager.row_similarities(row), lazy.row_similarities(row));
        }
    }

    #[test]
    fn test_empty_index() {
        let index = SimilarityIndex::build(Vec::new(), IndexStrategy::Eager);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let index = SimilarityIndex::build(vectors(), IndexStrategy::Lazy);
        index.row_similarities(42);
    }

    #[test]
    fn test_rank_orders_are_reverses_of_each_other() {
        let row = vec![
            Candidate { row_id: 0, score: 0.2 },
            Candidate { row_id: 1, score: 0.9 },
            Candidate { row_id: 2, score: 0.5 },
            Candidate { row_id: 3, score: 0.0 },
        ];
        let descending = rank(row.clone(), SortOrder::Descending);
        let mut ascending = rank(row, SortOrder::Ascending);
        ascending.reverse();
        assert_eq!(descending, ascending);
        let ids: Vec<RowId> = descending.iter().map(|c| c.row_id).collect();
        assert_eq!(ids, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_rank_ties_keep_corpus_order() {
        let row = vec![
            Candidate { row_id: 0, score: 0.0 },
            Candidate { row_id: 1, score: 0.7 },
            Candidate { row_id: 2, score: 0.0 },
            Candidate { row_id: 3, score: 0.7 },
        ];
        let ids: Vec<RowId> = rank(row, SortOrder::Descending)
            .iter()
            .map(|c| c.row_id)
            .collect();
        assert_eq!(ids, vec![1, 3, 0, 2]);
    }
}
