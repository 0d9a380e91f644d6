use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{MovieRecord, TitleScore, TitleVotes},
};

use super::round2;

/// Minimum votes before a title's average is reported
pub const MIN_VOTES: f64 = 2000.0;

fn find<'a>(catalog: &'a Catalog, title: &str) -> AppResult<&'a MovieRecord> {
    catalog
        .find_title_ignore_case(title)
        .ok_or_else(|| AppError::NotFound("Película no encontrada".to_string()))
}

fn year_label(year: Option<i32>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| "desconocido".to_string())
}

/// Release year and popularity of the first title matching, ignoring case
pub fn title_score(catalog: &Catalog, title: &str) -> AppResult<TitleScore> {
    let movie = find(catalog, title)?;
    let release_year = movie.release_year();
    let popularity = movie.popularity.map(round2);

    let message = format!(
        "La película {} fue estrenada en el año {} con un score/popularidad de {}",
        movie.title,
        year_label(release_year),
        popularity.map(|p| p.to_string()).unwrap_or_else(|| "N/D".to_string())
    );

    Ok(TitleScore {
        title: movie.title.clone(),
        release_year,
        popularity,
        message,
    })
}

/// Vote count and average of the first title matching, ignoring case.
///
/// Titles with fewer than [`MIN_VOTES`] votes are reported as not qualifying.
pub fn title_votes(catalog: &Catalog, title: &str) -> AppResult<TitleVotes> {
    let movie = find(catalog, title)?;
    let release_year = movie.release_year();
    let vote_count = movie.vote_count;
    let vote_average = movie.vote_average.map(round2);
    let qualifies = vote_count.map(|votes| votes >= MIN_VOTES).unwrap_or(false);

    let message = if qualifies {
        format!(
            "La película {} fue estrenada en el año {}, tiene un total de {} valoraciones, con un promedio de {}",
            movie.title,
            year_label(release_year),
            vote_count.unwrap_or_default(),
            vote_average.map(|a| a.to_string()).unwrap_or_else(|| "N/D".to_string())
        )
    } else {
        format!(
            "La película {} no cumple con la condición de tener al menos {} valoraciones",
            movie.title, MIN_VOTES
        )
    };

    Ok(TitleVotes {
        title: movie.title.clone(),
        release_year,
        vote_count,
        vote_average,
        qualifies,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            MovieRecord {
                release_date: Some("1997-11-18".to_string()),
                popularity: Some(26.889069),
                vote_count: Some(7770.0),
                vote_average: Some(7.5),
                ..MovieRecord::titled("Titanic")
            },
            MovieRecord {
                release_date: Some("1953-01-01".to_string()),
                vote_count: Some(12.0),
                vote_average: Some(6.0),
                ..MovieRecord::titled("Titanic")
            },
            MovieRecord {
                vote_count: Some(150.0),
                ..MovieRecord::titled("Obscure")
            },
        ])
    }

    #[test]
    fn test_title_score_first_match_ignoring_case() {
        let score = title_score(&catalog(), "titanic").unwrap();
        assert_eq!(score.title, "Titanic");
        assert_eq!(score.release_year, Some(1997));
        assert_eq!(score.popularity, Some(26.89));
        assert!(score.message.contains("1997"));
    }

    #[test]
    fn test_title_votes_qualifies() {
        let votes = title_votes(&catalog(), "TITANIC").unwrap();
        assert!(votes.qualifies);
        assert_eq!(votes.vote_count, Some(7770.0));
        assert!(votes.message.contains("7770 valoraciones"));
    }

    #[test]
    fn test_title_votes_below_threshold() {
        let votes = title_votes(&catalog(), "Obscure").unwrap();
        assert!(!votes.qualifies);
        assert!(votes.message.contains("no cumple"));
    }

    #[test]
    fn test_unknown_title() {
        assert!(matches!(
            title_score(&catalog(), "Avatar"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            title_votes(&catalog(), "Avatar"),
            Err(AppError::NotFound(_))
        ));
    }
}
