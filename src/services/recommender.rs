use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::catalog::TitleCorpus;
use crate::models::RowId;

use super::similarity::{rank, IndexStrategy, SimilarityIndex, SortOrder};
use super::vectorizer::TfIdfVectorizer;

/// Number of titles returned per recommendation
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Error types for the recommender
#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("The catalog is empty")]
    EmptyCorpus,
    #[error("No movie titled '{0}'")]
    NotFound(String),
    #[error("Row {0} is not present in the catalog")]
    UnknownRow(RowId),
}

/// Content-based recommender over movie titles
///
/// Built once from the catalog; every query afterwards is read-only.
pub struct Recommender {
    corpus: Arc<dyn TitleCorpus>,
    /// Exact title → first row carrying it
    first_rows: HashMap<String, RowId>,
    vectorizer: TfIdfVectorizer,
    index: SimilarityIndex,
}

impl Recommender {
    /// Vectorizes every title and builds the similarity index
    pub fn build(corpus: Arc<dyn TitleCorpus>, strategy: IndexStrategy) -> Self {
        let start = Instant::now();
        let titles = corpus.all_titles();

        let mut first_rows = HashMap::with_capacity(titles.len());
        for (row_id, title) in titles.iter().enumerate() {
            first_rows.entry(title.clone()).or_insert(row_id);
        }

        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(&titles);
        let index = SimilarityIndex::build(vectors, strategy);

        tracing::info!(
            titles = titles.len(),
            vocabulary = vectorizer.vocabulary_size(),
            strategy = ?strategy,
            build_time_ms = start.elapsed().as_millis(),
            "Similarity index built"
        );

        Self {
            corpus,
            first_rows,
            vectorizer,
            index,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Row of the first record whose title matches exactly (case-sensitive)
    pub fn resolve(&self, title: &str) -> Result<RowId, RecommendError> {
        if self.index.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }
        self.first_rows
            .get(title)
            .copied()
            .ok_or_else(|| RecommendError::NotFound(title.to_string()))
    }

    /// Up to five titles most similar to `title`, best first
    pub fn recommend(&self, title: &str) -> Result<Vec<String>, RecommendError> {
        self.recommend_top(title, RECOMMENDATION_LIMIT)
    }

    /// Up to `limit` titles most similar to `title`, best first.
    ///
    /// Duplicate titles resolve to their first row. The queried row itself is
    /// never returned; equal scores keep corpus order.
    pub fn recommend_top(&self, title: &str, limit: usize) -> Result<Vec<String>, RecommendError> {
        let row_id = self.resolve(title)?;
        let ranked = rank(self.index.row_similarities(row_id), SortOrder::Descending);

        tracing::debug!(
            row_id,
            candidates = ranked.len(),
            best_score = ranked.first().map(|c| c.score),
            "Ranked similarity row"
        );

        ranked
            .into_iter()
            .take(limit)
            .map(|candidate| {
                self.corpus
                    .title(candidate.row_id)
                    .ok_or(RecommendError::UnknownRow(candidate.row_id))
            })
            .collect()
    }
}
