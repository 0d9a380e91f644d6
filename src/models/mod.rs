use serde::{Deserialize, Serialize};

mod movie;

pub use movie::{MovieRecord, RowId};

/// Number of releases in a calendar month or on a weekday
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseCount {
    /// The month or weekday as the client sent it
    pub period: String,
    pub count: usize,
    pub message: String,
}

/// Popularity lookup for a single title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleScore {
    pub title: String,
    pub release_year: Option<i32>,
    pub popularity: Option<f64>,
    pub message: String,
}

/// Vote statistics for a single title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleVotes {
    pub title: String,
    pub release_year: Option<i32>,
    pub vote_count: Option<f64>,
    pub vote_average: Option<f64>,
    /// Whether the title has enough votes for its average to be reported
    pub qualifies: bool,
    pub message: String,
}

/// Aggregate return for every film an actor appears in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActorReport {
    pub actor: String,
    pub movie_count: usize,
    pub total_return: f64,
    pub average_return: f64,
    pub message: String,
}

/// Aggregate return plus film list for a director
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectorReport {
    pub director: String,
    pub total_return: f64,
    pub movies: Vec<DirectedMovie>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectedMovie {
    pub title: String,
    pub release_date: Option<String>,
    #[serde(rename = "return")]
    pub return_ratio: Option<f64>,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
}

impl From<&MovieRecord> for DirectedMovie {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            return_ratio: movie.return_ratio,
            budget: movie.budget,
            revenue: movie.revenue,
        }
    }
}

/// Titles most similar to the queried one, best match first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub title: String,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_movie_serializes_return_field() {
        let movie = MovieRecord {
            return_ratio: Some(12.5),
            budget: Some(30_000_000.0),
            ..MovieRecord::titled("Toy Story")
        };
        let json = serde_json::to_value(DirectedMovie::from(&movie)).unwrap();
        assert_eq!(json["title"], "Toy Story");
        assert_eq!(json["return"], 12.5);
        assert!(json["revenue"].is_null());
    }
}
