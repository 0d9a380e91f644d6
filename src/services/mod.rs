pub mod people;
pub mod recommender;
pub mod releases;
pub mod similarity;
pub mod stopwords;
pub mod titles;
pub mod vectorizer;

pub use recommender::{RecommendError, Recommender};
pub use similarity::{IndexStrategy, SimilarityIndex};
pub use vectorizer::{FeatureVector, TfIdfVectorizer};

/// Rounds to two decimal places for display
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(26.889069), 26.89);
        assert_eq!(round2(5.333333), 5.33);
        assert_eq!(round2(-1.005), -1.0);
    }
}
