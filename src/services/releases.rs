use chrono::{Datelike, Weekday};

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::ReleaseCount,
};

/// Month number for a Spanish month name, case-insensitive
pub fn parse_month(name: &str) -> Option<u32> {
    let month = match name.trim().to_lowercase().as_str() {
        "enero" => 1,
        "febrero" => 2,
        "marzo" => 3,
        "abril" => 4,
        "mayo" => 5,
        "junio" => 6,
        "julio" => 7,
        "agosto" => 8,
        "septiembre" | "setiembre" => 9,
        "octubre" => 10,
        "noviembre" => 11,
        "diciembre" => 12,
        _ => return None,
    };
    Some(month)
}

/// Weekday for a Spanish day name, with or without accents
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let day = match name.trim().to_lowercase().as_str() {
        "lunes" => Weekday::Mon,
        "martes" => Weekday::Tue,
        "miercoles" | "miércoles" => Weekday::Wed,
        "jueves" => Weekday::Thu,
        "viernes" => Weekday::Fri,
        "sabado" | "sábado" => Weekday::Sat,
        "domingo" => Weekday::Sun,
        _ => return None,
    };
    Some(day)
}

/// Number of movies released in the given month, across all years
pub fn count_by_month(catalog: &Catalog, month: &str) -> AppResult<ReleaseCount> {
    let number = parse_month(month)
        .ok_or_else(|| AppError::InvalidInput(format!("Mes no válido: {}", month)))?;

    let count = catalog
        .movies()
        .iter()
        .filter_map(|movie| movie.release_day())
        .filter(|day| day.month() == number)
        .count();

    Ok(ReleaseCount {
        period: month.to_string(),
        count,
        message: format!(
            "{} películas fueron estrenadas en el mes de {}",
            count, month
        ),
    })
}

/// Number of movies released on the given weekday
pub fn count_by_weekday(catalog: &Catalog, day: &str) -> AppResult<ReleaseCount> {
    let weekday = parse_weekday(day)
        .ok_or_else(|| AppError::InvalidInput(format!("Día no válido: {}", day)))?;

    let count = catalog
        .movies()
        .iter()
        .filter_map(|movie| movie.release_day())
        .filter(|date| date.weekday() == weekday)
        .count();

    Ok(ReleaseCount {
        period: day.to_string(),
        count,
        message: format!(
            "{} películas fueron estrenadas en los días {}",
            count, day
        ),
    })
}
