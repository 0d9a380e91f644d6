use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Position of a record in the catalog, used as the key into similarity structures
pub type RowId = usize;

/// One row of the movies dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MovieRecord {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default, rename = "name_director")]
    pub director: Option<String>,
    #[serde(default, rename = "return")]
    pub return_ratio: Option<f64>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub revenue: Option<f64>,
}

impl MovieRecord {
    /// Creates a record carrying only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parsed release date; `None` when missing or not `YYYY-MM-DD`
    pub fn release_day(&self) -> Option<NaiveDate> {
        let raw = self.release_date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_day().map(|d| d.year())
    }

    /// Case-insensitive substring match on the cast list
    pub fn has_cast_member(&self, needle_lower: &str) -> bool {
        contains_ci(self.cast.as_deref(), needle_lower)
    }

    /// Case-insensitive substring match on the director name
    pub fn has_director(&self, needle_lower: &str) -> bool {
        contains_ci(self.director.as_deref(), needle_lower)
    }
}

fn contains_ci(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(needle_lower))
        .unwrap_or(false)
}
