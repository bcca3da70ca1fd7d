mod display;

use anyhow::{Context, Result, bail};
use catalog::{EARLIEST_RELEASE_YEAR, GenreId, GenreIndex, MovieId, current_year};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::SortKey;
use session::SearchSession;
use std::collections::BTreeSet;
use tmdb::{DEFAULT_BASE_URL, TmdbClient, TmdbConfig};

/// roteiro - search TMDB from the terminal
#[derive(Parser)]
#[command(name = "roteiro")]
#[command(about = "Search movies on TMDB, filter and sort the results, and view details", long_about = None)]
struct Cli {
    /// TMDB API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API endpoint root
    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Response language as an ISO-639-1 tag (e.g. pt-BR)
    #[arg(long)]
    language: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search movies by title and filter the first page of results
    Search {
        /// Text to search for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Keep movies in this genre (name or id, repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Earliest release year
        #[arg(long)]
        year_min: Option<i32>,

        /// Latest release year
        #[arg(long)]
        year_max: Option<i32>,

        /// Minimum number of votes
        #[arg(long, default_value_t = 0)]
        min_votes: u32,

        /// relevance, release-date-asc, release-date-desc or rating-desc
        #[arg(long, default_value_t = SortKey::Relevance)]
        sort: SortKey,
    },

    /// List the genres TMDB knows about
    Genres,

    /// Show details for a single movie
    Movie {
        /// TMDB movie id (shown next to each search result)
        id: MovieId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            query,
            genres,
            year_min,
            year_max,
            min_votes,
            sort,
        } => {
            let filters = SearchFilters {
                genres,
                year_min,
                year_max,
                min_votes,
                sort,
            };
            handle_search(client, &query.join(" "), filters).await?
        }
        Commands::Genres => handle_genres(client).await,
        Commands::Movie { id } => handle_movie(client, id).await,
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<TmdbClient> {
    let mut config = TmdbConfig::new(cli.api_key.clone().unwrap_or_default())
        .context("Missing credentials: pass --api-key or set TMDB_API_KEY")?
        .with_base_url(cli.base_url.as_str())
        .context("Invalid --base-url")?;
    if let Some(language) = &cli.language {
        config = config.with_language(language.as_str());
    }
    TmdbClient::new(config).context("Failed to create TMDB client")
}

/// Filter flags of the 'search' command
struct SearchFilters {
    genres: Vec<String>,
    year_min: Option<i32>,
    year_max: Option<i32>,
    min_votes: u32,
    sort: SortKey,
}

/// Handle the 'search' command
async fn handle_search(client: TmdbClient, query: &str, flags: SearchFilters) -> Result<()> {
    let mut session = SearchSession::new(client);
    session.load_genres().await;

    for genre in resolve_genres(session.genres(), &flags.genres)? {
        session.toggle_genre(genre);
    }
    let (year_min, year_max) = year_bounds(flags.year_min, flags.year_max, current_year());
    session
        .set_year_range(year_min, year_max)
        .context("Invalid --year-min/--year-max")?;
    session.set_min_vote_count(flags.min_votes);
    session.set_sort_key(flags.sort);

    if !session.submit(query).await {
        bail!("Search text is empty");
    }

    let query = session.last_query().unwrap_or(query);
    display::print_view(&session.view(), query, session.filters(), session.genres());
    Ok(())
}

/// Year window from the flags. An explicit `--year-min` past the current
/// year pulls the default upper bound along with it.
fn year_bounds(year_min: Option<i32>, year_max: Option<i32>, current_year: i32) -> (i32, i32) {
    let min = year_min.unwrap_or(EARLIEST_RELEASE_YEAR);
    let max = year_max.unwrap_or_else(|| current_year.max(min));
    (min, max)
}

/// Turn `--genre` values into ids.
///
/// Names need the genre list; bare numeric ids are accepted as-is when the
/// list couldn't be loaded.
fn resolve_genres(index: &GenreIndex, inputs: &[String]) -> Result<BTreeSet<GenreId>> {
    inputs
        .iter()
        .map(|input| {
            index
                .resolve(input)
                .or_else(|| {
                    if index.is_empty() {
                        input.trim().parse().ok()
                    } else {
                        None
                    }
                })
                .with_context(|| {
                    format!("Unknown genre '{}' (run `roteiro genres` to list them)", input)
                })
        })
        .collect()
}

/// Handle the 'genres' command
async fn handle_genres(client: TmdbClient) {
    let mut session = SearchSession::new(client);
    let genres = session.load_genres().await;
    if genres.is_empty() {
        println!("{}", "No genres available.".yellow());
        return;
    }
    println!("{}", "Genres:".bold().blue());
    for genre in genres.iter() {
        println!("{:>6}  {}", genre.id.to_string().green(), genre.name);
    }
}

/// Handle the 'movie' command
async fn handle_movie(client: TmdbClient, id: MovieId) {
    let session = SearchSession::new(client);
    match session.details(id).await {
        Ok(details) => display::print_details(&details),
        Err(e) => println!("{}", e.to_string().red()),
    }
}
