//! TF-IDF vectorization of movie titles.
//!
//! The vocabulary and IDF weights are learned once from the full list of
//! titles; every title then maps to a sparse vector in that fixed space.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::stopwords::is_stop_word;

/// Sparse feature vector over a fixed vocabulary
///
/// Entries are `(term_index, weight)` pairs sorted by term index; terms with a
/// zero weight are not stored. The L2 norm is cached at construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
    norm: f64,
}

impl FeatureVector {
    /// Builds a vector from arbitrary entries; duplicates are summed.
    pub fn from_entries(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|&(index, _)| index);
        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, weight) in entries {
            debug_assert!(index < dim, "term index out of range");
            match merged.last_mut() {
                Some(last) if last.0 == index => last.1 += weight,
                _ => merged.push((index, weight)),
            }
        }
        merged.retain(|&(_, weight)| weight != 0.0);

        let norm = merged.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        Self {
            dim,
            entries: merged,
            norm,
        }
    }

    pub fn zero(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
            norm: 0.0,
        }
    }

    /// Dimensionality, equal to the vocabulary size
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of a single term, zero when absent
    pub fn get(&self, term_index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&term_index, |&(index, _)| index)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Dot product, merging the two sorted entry lists
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_index, a_weight) = self.entries[i];
            let (b_index, b_weight) = other.entries[j];
            match a_index.cmp(&b_index) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary and IDF weights learned from a corpus of titles
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// term → dimension index
    vocabulary: HashMap<String, usize>,
    /// IDF weight per dimension
    idf: Vec<f64>,
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Learns the vocabulary and IDF weights from every document.
    ///
    /// Dimensions are assigned in lexicographic term order so the layout is
    /// deterministic for a given corpus. `idf = ln(N / (1 + df))`.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let n_documents = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for document in documents {
            let unique: HashSet<String> = tokenize(document.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let terms: BTreeSet<&String> = doc_freq.keys().collect();
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, term) in terms.into_iter().enumerate() {
            let df = doc_freq[term] as f64;
            vocabulary.insert(term.clone(), index);
            idf.push((n_documents as f64 / (1.0 + df)).ln());
        }

        Self {
            vocabulary,
            idf,
            n_documents,
        }
    }

    /// Maps text into the learned vector space; unknown tokens are ignored.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();
        FeatureVector::from_entries(self.vocabulary_size(), entries)
    }

    /// Fits on the documents and returns one vector per document, in order.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<FeatureVector>) {
        let vectorizer = Self::fit(documents);
        let vectors = documents
            .iter()
            .map(|document| vectorizer.transform(document.as_ref()))
            .collect();
        (vectorizer, vectors)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|index| self.idf[index])
    }
}

/// Lower-cases, splits on non-alphanumeric characters, keeps tokens of at
/// least two characters and drops stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}
