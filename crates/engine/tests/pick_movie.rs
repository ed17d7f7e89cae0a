//! End-to-end tests: catalog store, scorer and selector behind the picker.

use data_loader::{AgeRating, CatalogIndex, Genre, Movie};
use engine::{MoviePicker, Outcome, NO_MATCH_REASON};
use pipeline::Preferences;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sources::CatalogStore;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Rng that always yields the same word, forcing the extremes of the draw
struct FixedRng(u64);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0 as u8);
    }
}

fn two_movie_picker() -> MoviePicker {
    let mut index = CatalogIndex::new();
    let base = Movie {
        language: Some("en".to_string()),
        age_rating: Some(AgeRating::Fifteen),
        ..Movie::new(0, "")
    };

    index.insert_movie(Movie {
        id: 1,
        title: "A".to_string(),
        year: Some(2000),
        runtime: Some(120),
        rating: Some(8.0),
        ..base.clone()
    });
    index.insert_movie(Movie {
        id: 2,
        title: "B".to_string(),
        year: Some(1970),
        runtime: Some(80),
        rating: Some(10.0),
        ..base
    });
    index.insert_genre(Genre { id: 18, name: "Drama".to_string() });
    index.link_genre(1, 18);
    index.build_secondary_indices();

    MoviePicker::new(Arc::new(CatalogStore::new(Arc::new(index))))
}

fn two_movie_prefs() -> Preferences {
    Preferences::builder()
        .year_range(1990, 2010)
        .runtime_range(100, 140)
        .min_rating(7.0)
        .languages(["en"])
        .allowed_age_ratings([AgeRating::Fifteen])
        .build()
}

fn sample_picker() -> MoviePicker {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog");
    let index = CatalogIndex::load_from_files(&data_dir).unwrap();
    MoviePicker::new(Arc::new(CatalogStore::new(Arc::new(index))))
}

#[tokio::test]
async fn test_out_of_range_movie_is_never_picked() {
    let picker = two_movie_picker();
    let prefs = two_movie_prefs();

    for draw in [0, u64::MAX, 1 << 63] {
        let outcome = picker
            .pick_movie_with(&prefs, HashSet::new(), &mut FixedRng(draw))
            .await
            .unwrap();
        let pick = outcome.pick().unwrap();
        assert_eq!(pick.movie.movie.title, "A");
        assert_eq!(pick.movie.genres, vec!["Drama"]);
        assert_eq!(pick.components.year_fit, 1.0);
        assert_eq!(pick.components.runtime_fit, 1.0);
    }

    for _ in 0..20 {
        let outcome = picker.pick_movie(&prefs).await.unwrap();
        assert_eq!(outcome.pick().unwrap().movie.movie.id, 1);
    }
}

#[tokio::test]
async fn test_excluding_the_only_match_yields_no_match() {
    let picker = two_movie_picker();
    let mut rng = StdRng::seed_from_u64(0);

    let outcome = picker
        .pick_movie_with(&two_movie_prefs(), HashSet::from([1]), &mut rng)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::no_match());
}

#[tokio::test]
async fn test_sample_catalog_genre_pick() {
    let picker = sample_picker();
    let prefs = Preferences::builder()
        .genres(["Science Fiction"])
        .year_range(1990, 2010)
        .build();

    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..25 {
        let outcome = picker
            .pick_movie_with(&prefs, HashSet::new(), &mut rng)
            .await
            .unwrap();
        let pick = outcome.pick().unwrap();
        assert!([603, 27205].contains(&pick.movie.movie.id));
        assert!(pick.movie.genres.contains(&"Science Fiction".to_string()));
    }
}

#[tokio::test]
async fn test_sample_catalog_single_match() {
    let picker = sample_picker();
    let prefs = Preferences::builder()
        .languages(["ja"])
        .year_range(1990, 2024)
        .allowed_age_ratings([AgeRating::U, AgeRating::PG])
        .build();

    let outcome = picker.pick_movie(&prefs).await.unwrap();
    let pick = outcome.pick().unwrap();
    assert_eq!(pick.movie.movie.title, "Spirited Away");
    assert_eq!(pick.movie.genres, vec!["Animation", "Family", "Fantasy"]);
}

#[tokio::test]
async fn test_sample_catalog_no_match_message() {
    let picker = sample_picker();
    let prefs = Preferences::builder().year_range(1900, 1950).build();

    let outcome = picker.pick_movie(&prefs).await.unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["error"], NO_MATCH_REASON);
    assert_eq!(
        NO_MATCH_REASON,
        "No movies match your filters. Try widening year/runtime, languages, or age ratings."
    );
}
