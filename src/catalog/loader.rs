use std::io::Read;
use std::path::Path;

use crate::models::MovieRecord;

use super::Catalog;

/// Errors raised while loading the dataset at startup
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed dataset row {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

impl Catalog {
    /// Loads the catalog from a CSV file with a header row
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(|source| CatalogError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_csv(reader)?;

        tracing::info!(
            path = %path.display(),
            movies = catalog.len(),
            "Loaded movie catalog"
        );

        Ok(catalog)
    }

    /// Loads the catalog from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, CatalogError> {
        let mut movies = Vec::new();
        let mut skipped = 0usize;

        for (index, result) in reader.deserialize::<MovieRecord>().enumerate() {
            // Header is line 1
            let line = index as u64 + 2;
            let mut movie = result.map_err(|source| CatalogError::Row { line, source })?;

            let trimmed = movie.title.trim();
            if trimmed.is_empty() {
                tracing::warn!(line, "Skipping row without a title");
                skipped += 1;
                continue;
            }
            if trimmed.len() != movie.title.len() {
                movie.title = trimmed.to_string();
            }

            movies.push(movie);
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Rows dropped while loading catalog");
        }

        Ok(Catalog::new(movies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
title,release_date,popularity,vote_count,vote_average,cast,name_director,return,budget,revenue,extra
Toy Story,1995-10-30,21.946943,5415.0,7.7,\"Tom Hanks, Tim Allen\",John Lasseter,12.45,30000000,373554033,x
Jumanji,1995-12-15,17.015539,2413,6.9,Robin Williams,Joe Johnston,4.04,65000000,262797249,y
,1995-12-22,11.7,92,6.5,,,,,,z
Heat,,,,,,Michael Mann,,,,w
";

    #[test]
    fn test_from_reader_parses_rows() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let toy_story = catalog.get(0).unwrap();
        assert_eq!(toy_story.title, "Toy Story");
        assert_eq!(toy_story.vote_count, Some(5415.0));
        assert_eq!(toy_story.cast.as_deref(), Some("Tom Hanks, Tim Allen"));
        assert_eq!(toy_story.director.as_deref(), Some("John Lasseter"));
        assert_eq!(toy_story.return_ratio, Some(12.45));
    }

    #[test]
    fn test_from_reader_keeps_empty_cells_as_none() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        let heat = catalog.get(2).unwrap();
        assert_eq!(heat.title, "Heat");
        assert_eq!(heat.release_date, None);
        assert_eq!(heat.popularity, None);
        assert_eq!(heat.director.as_deref(), Some("Michael Mann"));
    }

    #[test]
    fn test_from_reader_reports_malformed_row() {
        let data = "title,popularity\nAlien,high\n";
        let err = Catalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Row { line: 2, .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CatalogError::Open { .. }));
    }
}
