//! In-memory movie catalog
//!
//! The catalog is loaded once at startup and never mutated. Row positions are
//! stable for the process lifetime and double as identifiers for the
//! similarity index.

use crate::models::{MovieRecord, RowId};

mod loader;

pub use loader::CatalogError;

/// Read-only view of the catalog's title column
///
/// This is all the recommender needs from the catalog: titles in row order at
/// build time, and a way to resolve a row back to its title per request.
#[cfg_attr(test, mockall::automock)]
pub trait TitleCorpus: Send + Sync {
    /// Every title, aligned 1:1 with row ids
    fn all_titles(&self) -> Vec<String>;

    /// Title at the given row, if the row exists
    fn title(&self, row_id: RowId) -> Option<String>;
}

/// Ordered collection of movie records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn get(&self, row_id: RowId) -> Option<&MovieRecord> {
        self.movies.get(row_id)
    }

    /// First record whose title equals `title`, ignoring case
    pub fn find_title_ignore_case(&self, title: &str) -> Option<&MovieRecord> {
        let wanted = title.to_lowercase();
        self.movies
            .iter()
            .find(|movie| movie.title.to_lowercase() == wanted)
    }
}

impl TitleCorpus for Catalog {
    fn all_titles(&self) -> Vec<String> {
        self.movies.iter().map(|movie| movie.title.clone()).collect()
    }

    fn title(&self, row_id: RowId) -> Option<String> {
        self.get(row_id).map(|movie| movie.title.clone())
    }
}
