//! Parser for catalog data files.
//!
//! The catalog is stored as three `::`-separated files:
//! - movies.dat: id::title::year::runtime::language::rating::age_rating::poster_path::overview
//! - genres.dat: id::name
//! - movie_genres.dat: movie_id::genre_id
//!
//! Blank lines and lines starting with `#` are skipped. An empty field
//! means the value is missing.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

const FIELD_SEPARATOR: &str = "::";

/// Number of fields in a movies.dat record. The overview is the last
/// field and may itself contain the separator.
const MOVIE_FIELDS: usize = 9;

/// Read a UTF-8 file and return its meaningful lines with their 1-based numbers
fn read_records(path: &Path) -> Result<Vec<(usize, String)>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    Ok(content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| (line_no, line.to_string()))
        .collect())
}

/// Take the next field or report which one is missing
fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    file: &str,
    line: usize,
    name: &str,
) -> Result<&'a str> {
    parts.next().ok_or_else(|| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Missing {}", name),
    })
}

/// Parse a required field
fn parse_required<T>(raw: &str, file: &str, line: usize, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {}", name, e),
    })
}

/// Parse an optional field; empty means `None`
fn parse_optional<T>(raw: &str, file: &str, line: usize, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_required(raw, file, line, name).map(Some)
    }
}

/// Optional free-text field; empty means `None`
fn optional_text(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Parse an age-rating field.
///
/// Several certifications may be listed with `|` ("PG|12A"); each one is
/// normalised and the most restrictive wins.
fn parse_age_rating(raw: &str) -> Result<Option<AgeRating>> {
    let mut ratings = Vec::new();
    for cert in raw.split('|').map(str::trim).filter(|c| !c.is_empty()) {
        let rating = AgeRating::normalise(cert).ok_or_else(|| DataLoadError::InvalidValue {
            field: "age_rating".to_string(),
            value: cert.to_string(),
        })?;
        ratings.push(rating);
    }
    Ok(AgeRating::most_restrictive(ratings))
}

/// Parse the movies.dat file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    const FILE: &str = "movies.dat";
    let mut movies = Vec::new();

    for (line_no, line) in read_records(path)? {
        let mut parts = line.splitn(MOVIE_FIELDS, FIELD_SEPARATOR);

        let id = next_field(&mut parts, FILE, line_no, "movieId")?;
        let title = next_field(&mut parts, FILE, line_no, "title")?;
        let year = next_field(&mut parts, FILE, line_no, "year")?;
        let runtime = next_field(&mut parts, FILE, line_no, "runtime")?;
        let language = next_field(&mut parts, FILE, line_no, "language")?;
        let rating = next_field(&mut parts, FILE, line_no, "rating")?;
        let age_rating = next_field(&mut parts, FILE, line_no, "age_rating")?;
        // Trailing presentation fields may be left off entirely
        let poster_path = parts.next().unwrap_or("");
        let overview = parts.next().unwrap_or("");

        let title = title.trim();
        if title.is_empty() {
            return Err(DataLoadError::ParseError {
                file: FILE.to_string(),
                line: line_no,
                reason: "Empty title".to_string(),
            });
        }

        let movie = Movie {
            id: parse_required(id, FILE, line_no, "movieId")?,
            title: title.to_string(),
            year: parse_optional(year, FILE, line_no, "year")?,
            runtime: parse_optional(runtime, FILE, line_no, "runtime")?,
            language: optional_text(language).map(|code| code.to_lowercase()),
            rating: parse_optional(rating, FILE, line_no, "rating")?,
            age_rating: parse_age_rating(age_rating)?,
            poster_path: optional_text(poster_path),
            overview: optional_text(overview),
        };

        movies.push(movie);
    }
    Ok(movies)
}

/// Parse the genres.dat file
pub fn parse_genres(path: &Path) -> Result<Vec<Genre>> {
    const FILE: &str = "genres.dat";
    let mut genres = Vec::new();

    for (line_no, line) in read_records(path)? {
        let mut parts = line.splitn(2, FIELD_SEPARATOR);

        let id = next_field(&mut parts, FILE, line_no, "genreId")?;
        let name = next_field(&mut parts, FILE, line_no, "name")?.trim();
        if name.is_empty() {
            return Err(DataLoadError::ParseError {
                file: FILE.to_string(),
                line: line_no,
                reason: "Empty genre name".to_string(),
            });
        }

        genres.push(Genre {
            id: parse_required(id, FILE, line_no, "genreId")?,
            name: name.to_string(),
        });
    }
    Ok(genres)
}

/// Parse the movie_genres.dat file into (movie, genre) links
pub fn parse_movie_genres(path: &Path) -> Result<Vec<(MovieId, GenreId)>> {
    const FILE: &str = "movie_genres.dat";
    let mut links = Vec::new();

    for (line_no, line) in read_records(path)? {
        let mut parts = line.split(FIELD_SEPARATOR);

        let movie_id = next_field(&mut parts, FILE, line_no, "movieId")?;
        let genre_id = next_field(&mut parts, FILE, line_no, "genreId")?;

        links.push((
            parse_required(movie_id, FILE, line_no, "movieId")?,
            parse_required(genre_id, FILE, line_no, "genreId")?,
        ));
    }
    Ok(links)
}
