use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{AgeRating, CatalogIndex};
use engine::{MoviePicker, Outcome, Pick};
use pipeline::preferences::{DEFAULT_MIN_RATING, DEFAULT_RUNTIME_RANGE, DEFAULT_YEAR_RANGE};
use pipeline::{Preferences, PreferencesPayload};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sources::CatalogStore;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

mod languages;

/// ReelPick - pick one movie to watch
#[derive(Parser)]
#[command(name = "reel-pick")]
#[command(about = "Pick a movie to watch from a local catalog, weighted by how well it fits", long_about = None)]
struct Cli {
    /// Path to the catalog directory (movies.dat, genres.dat, movie_genres.dat)
    #[arg(short, long, default_value = "data/catalog")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one movie matching the given preferences
    Pick {
        /// Genre to accept; any listed genre matches (repeat or comma-separate)
        #[arg(long = "genre", value_delimiter = ',')]
        genres: Vec<String>,

        /// Language code to accept, e.g. en (repeat or comma-separate)
        #[arg(long = "language", value_delimiter = ',')]
        languages: Vec<String>,

        /// Age rating to accept: U, PG, 12, 12A, 15, 18 (default: all)
        #[arg(long = "age", value_delimiter = ',', value_parser = parse_age_rating)]
        ages: Vec<AgeRating>,

        /// Earliest release year
        #[arg(long, default_value_t = DEFAULT_YEAR_RANGE.0)]
        year_min: i32,

        /// Latest release year
        #[arg(long, default_value_t = DEFAULT_YEAR_RANGE.1)]
        year_max: i32,

        /// Shortest runtime in minutes
        #[arg(long, default_value_t = DEFAULT_RUNTIME_RANGE.0)]
        runtime_min: i32,

        /// Longest runtime in minutes
        #[arg(long, default_value_t = DEFAULT_RUNTIME_RANGE.1)]
        runtime_max: i32,

        /// Lowest acceptable rating (0-10)
        #[arg(long, default_value_t = DEFAULT_MIN_RATING)]
        min_rating: f64,

        /// Read preferences from a JSON request file instead of the flags above
        #[arg(long)]
        request: Option<PathBuf>,

        /// Seed the random draw so the same preferences give the same pick
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Show how the score was put together
        #[arg(long)]
        explain: bool,
    },

    /// List all genres in the catalog
    Genres,

    /// List catalog languages, most common first
    Languages,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = Arc::new(
        CatalogIndex::load_from_files(&cli.data_dir)
            .with_context(|| format!("Failed to load catalog from {}", cli.data_dir.display()))?,
    );
    let (movies, genres, links) = index.counts();
    info!(
        "Loaded catalog in {:?}: {} movies, {} genres, {} genre links",
        start.elapsed(),
        movies,
        genres,
        links
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Pick {
            genres,
            languages,
            ages,
            year_min,
            year_max,
            runtime_min,
            runtime_max,
            min_rating,
            request,
            seed,
            json,
            explain,
        } => {
            let preferences = match request {
                Some(path) => load_request(&path)?,
                None => Preferences::builder()
                    .genres(genres)
                    .languages(languages)
                    .allowed_age_ratings(ages)
                    .year_range(year_min, year_max)
                    .runtime_range(runtime_min, runtime_max)
                    .min_rating(min_rating)
                    .build(),
            };
            handle_pick(index, &preferences, seed, json, explain).await?
        }
        Commands::Genres => handle_genres(&index),
        Commands::Languages => handle_languages(&index),
    }

    Ok(())
}

/// Accepts the labels as printed on certificates, e.g. "12A" or "12 a"
fn parse_age_rating(raw: &str) -> Result<AgeRating, String> {
    AgeRating::normalise(raw).ok_or_else(|| {
        format!(
            "unknown age rating '{}', expected one of U, PG, 12, 12A, 15, 18",
            raw
        )
    })
}

/// Read a JSON pick request from disk
fn load_request(path: &Path) -> Result<Preferences> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let payload: PreferencesPayload = serde_json::from_str(&body)
        .with_context(|| format!("Invalid pick request in {}", path.display()))?;
    Ok(payload.into())
}

/// Handle the 'pick' command
async fn handle_pick(
    index: Arc<CatalogIndex>,
    preferences: &Preferences,
    seed: Option<u64>,
    json: bool,
    explain: bool,
) -> Result<()> {
    let picker = MoviePicker::new(Arc::new(CatalogStore::new(index)));

    let outcome = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            picker
                .pick_movie_with(preferences, HashSet::new(), &mut rng)
                .await?
        }
        None => picker.pick_movie(preferences).await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        Outcome::Pick(pick) => print_pick(pick, explain),
        Outcome::NoMatch { reason } => println!("{}", reason.yellow()),
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(index: &CatalogIndex) {
    println!("{}", "Genres:".bold().blue());
    for name in index.genre_names() {
        let count = index.get_movies_by_genre(&name).len();
        println!("  {} {}", name, format!("({})", count).dimmed());
    }
}

/// Handle the 'languages' command
fn handle_languages(index: &CatalogIndex) {
    println!("{}", "Languages:".bold().blue());
    for (code, count) in index.language_counts() {
        println!(
            "  {} {}",
            languages::describe(&code),
            format!("- {} movies", count).dimmed()
        );
    }
}

/// Helper function to format and print a pick
fn print_pick(pick: &Pick, explain: bool) {
    let movie = &pick.movie.movie;
    let year = movie
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "????".to_string());

    println!("{} {} ({})", "🎬".green(), movie.title.bold(), year);

    let mut details = Vec::new();
    if let Some(runtime) = movie.runtime {
        details.push(format!("{} min", runtime));
    }
    if let Some(language) = &movie.language {
        details.push(languages::display_name(language).unwrap_or(language.as_str()).to_string());
    }
    if let Some(rating) = movie.rating {
        details.push(format!("rated {:.1}/10", rating));
    }
    if let Some(age) = movie.age_rating {
        details.push(format!("cert {}", age));
    }
    if !details.is_empty() {
        println!("   {}", details.join(" · "));
    }
    if !pick.movie.genres.is_empty() {
        println!("   {}", pick.movie.genres.join(", ").cyan());
    }
    if let Some(overview) = &movie.overview {
        println!("   {}", overview);
    }

    println!("   Score: {:.3}", pick.score);
    if explain {
        let c = &pick.components;
        println!("   {}", "Score components:".bold());
        println!("     rating       {:.3}", c.rating);
        println!("     year fit     {:.3}", c.year_fit);
        println!("     runtime fit  {:.3}", c.runtime_fit);
        println!("     genre bonus  {:.3}", c.genre_bonus);
    }
}
