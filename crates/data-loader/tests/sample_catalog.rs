//! Loads the catalog shipped under data/catalog and checks it end to end.

use data_loader::{AgeRating, CatalogIndex};
use std::path::PathBuf;

fn sample_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog")
}

#[test]
fn test_load_sample_catalog() {
    let index = CatalogIndex::load_from_files(&sample_dir()).unwrap();
    let (movies, genres, links) = index.counts();

    assert_eq!(movies, 17);
    assert_eq!(genres, 14);
    assert_eq!(links, 45);
}

#[test]
fn test_sample_catalog_records() {
    let index = CatalogIndex::load_from_files(&sample_dir()).unwrap();

    let matrix = index.get_movie(603).unwrap();
    assert_eq!(matrix.title, "The Matrix");
    assert_eq!(matrix.year, Some(1999));
    assert_eq!(matrix.age_rating, Some(AgeRating::Fifteen));
    assert_eq!(index.genre_names_for(603), vec!["Action", "Science Fiction"]);

    // "15|12 A" resolves to the most restrictive certificate
    let labyrinth = index.get_movie(1417).unwrap();
    assert_eq!(labyrinth.age_rating, Some(AgeRating::Fifteen));

    // Sparse record keeps its gaps
    let festival = index.get_movie(900001).unwrap();
    assert_eq!(festival.year, None);
    assert_eq!(festival.runtime, None);
    assert_eq!(festival.rating, None);
    assert_eq!(festival.age_rating, None);
}

#[test]
fn test_sample_catalog_lookups() {
    let index = CatalogIndex::load_from_files(&sample_dir()).unwrap();

    let languages = index.language_counts();
    assert_eq!(languages[0], ("en".to_string(), 11));
    assert_eq!(languages[1], ("ja".to_string(), 3));

    let names = index.genre_names();
    assert_eq!(names.first().map(String::as_str), Some("Action"));
    assert_eq!(names.len(), 14);

    let nineties = index.movies_released_between(1990, 1999);
    assert_eq!(nineties.len(), 5);
}

#[test]
fn test_missing_directory_fails() {
    let result = CatalogIndex::load_from_files(&sample_dir().join("nope"));
    assert!(result.is_err());
}
