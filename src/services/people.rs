use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{ActorReport, DirectedMovie, DirectorReport, MovieRecord},
};

use super::round2;

fn normalized_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("Debe indicar un nombre".to_string()));
    }
    Ok(trimmed.to_lowercase())
}

/// Sum of known returns; missing values are skipped
fn total_return<'a>(movies: impl Iterator<Item = &'a MovieRecord>) -> f64 {
    movies.filter_map(|movie| movie.return_ratio).sum()
}

/// Film count and return for every movie whose cast mentions `name`
pub fn actor_report(catalog: &Catalog, name: &str) -> AppResult<ActorReport> {
    let needle = normalized_name(name)?;
    let movies: Vec<&MovieRecord> = catalog
        .movies()
        .iter()
        .filter(|movie| movie.has_cast_member(&needle))
        .collect();

    if movies.is_empty() {
        return Err(AppError::NotFound(
            "Actor no encontrado en el dataset".to_string(),
        ));
    }

    let movie_count = movies.len();
    let total = total_return(movies.iter().copied());
    let average = total / movie_count as f64;

    tracing::debug!(actor = %name, movie_count, total_return = total, "Actor report");

    Ok(ActorReport {
        actor: name.to_string(),
        movie_count,
        total_return: round2(total),
        average_return: round2(average),
        message: format!(
            "El actor {} ha participado en {} películas, con un retorno total de {} y un promedio de {} por película",
            name,
            movie_count,
            round2(total),
            round2(average)
        ),
    })
}

/// Total return and film list for every movie whose director matches `name`
pub fn director_report(catalog: &Catalog, name: &str) -> AppResult<DirectorReport> {
    let needle = normalized_name(name)?;
    let movies: Vec<&MovieRecord> = catalog
        .movies()
        .iter()
        .filter(|movie| movie.has_director(&needle))
        .collect();

    if movies.is_empty() {
        return Err(AppError::NotFound(
            "Director no encontrado en el dataset".to_string(),
        ));
    }

    Ok(DirectorReport {
        director: name.to_string(),
        total_return: round2(total_return(movies.iter().copied())),
        movies: movies.into_iter().map(DirectedMovie::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            MovieRecord {
                cast: Some("Tom Hanks, Tim Allen".to_string()),
                director: Some("John Lasseter".to_string()),
                return_ratio: Some(12.45),
                ..MovieRecord::titled("Toy Story")
            },
            MovieRecord {
                cast: Some("Tom Hanks, Tim Allen, Joan Cusack".to_string()),
                director: Some("John Lasseter".to_string()),
                return_ratio: Some(3.55),
                ..MovieRecord::titled("Toy Story 2")
            },
            MovieRecord {
                cast: Some("Tom Hanks".to_string()),
                director: Some("Robert Zemeckis".to_string()),
                return_ratio: None,
                ..MovieRecord::titled("Cast Away")
            },
        ])
    }

    #[test]
    fn test_actor_report_aggregates_returns() {
        let report = actor_report(&catalog(), "tom hanks").unwrap();
        assert_eq!(report.movie_count, 3);
        assert_eq!(report.total_return, 16.0);
        assert_eq!(report.average_return, 5.33);
        assert_eq!(report.actor, "tom hanks");
    }

    #[test]
    fn test_actor_report_partial_name() {
        let report = actor_report(&catalog(), "Cusack").unwrap();
        assert_eq!(report.movie_count, 1);
    }

    #[test]
    fn test_director_report_lists_movies() {
        let report = director_report(&catalog(), "Lasseter").unwrap();
        assert_eq!(report.total_return, 16.0);
        let titles: Vec<&str> = report.movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Toy Story", "Toy Story 2"]);
    }

    #[test]
    fn test_unknown_people() {
        assert!(matches!(
            actor_report(&catalog(), "Keanu Reeves"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            director_report(&catalog(), "Nolan"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(
            actor_report(&catalog(), "  "),
            Err(AppError::InvalidInput(_))
        ));
    }
}
