//! Terminal rendering for search results and the detail view.
//!
//! The `format_*` helpers are pure so the display rules can be tested
//! without capturing stdout.

use catalog::{GenreIndex, MovieDetails, MovieSummary};
use colored::Colorize;
use pipeline::FilterState;
use session::SessionView;

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/500x750/1a1a1a/ffffff";
const OVERVIEW_EXCERPT_CHARS: usize = 100;

pub const NO_RESULTS_MESSAGE: &str = "No movies found. Try a different search.";

/// Poster image URL, or a placeholder carrying the title when there's no poster.
pub fn poster_url(poster_path: Option<&str>, title: &str) -> String {
    match poster_path {
        Some(path) => format!("{POSTER_BASE}{path}"),
        None => format!("{PLACEHOLDER_BASE}?text={}", urlencoding::encode(title)),
    }
}

/// First `max_chars` characters of `text`, with `...` if anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn format_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// One decimal place; a zero average means "not rated yet"
pub fn format_rating(vote_average: f64) -> String {
    if vote_average == 0.0 {
        "N/A".to_string()
    } else {
        format!("{vote_average:.1}")
    }
}

pub fn format_language(language: &str) -> String {
    let language = language.trim();
    if language.is_empty() {
        "N/A".to_string()
    } else {
        language.to_uppercase()
    }
}

/// Whole US dollars with thousands separators, e.g. `$63,000,000`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Release date as month/day/year, or `N/A`.
pub fn format_release_date(details: &MovieDetails) -> String {
    details
        .parsed_release_date()
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Short description of the active filters, or `None` for the defaults.
pub fn describe_filters(filters: &FilterState, genres: &GenreIndex) -> Option<String> {
    if *filters == FilterState::default() {
        return None;
    }
    let mut parts = Vec::new();
    if !filters.selected_genres.is_empty() {
        let names: Vec<String> = filters
            .selected_genres
            .iter()
            .map(|&id| genres.name(id).map_or_else(|| id.to_string(), str::to_string))
            .collect();
        parts.push(format!("genres: {}", names.join(" | ")));
    }
    parts.push(format!(
        "years: {}-{}",
        filters.year_range.min(),
        filters.year_range.max()
    ));
    if filters.min_vote_count > 0 {
        parts.push(format!("min votes: {}", filters.min_vote_count));
    }
    parts.push(format!("sort: {}", filters.sort_key));
    Some(parts.join(", "))
}

/// Print the result area for the current session state.
pub fn print_view(view: &SessionView<'_>, query: &str, filters: &FilterState, genres: &GenreIndex) {
    match view {
        SessionView::NotSearched => {}
        SessionView::Failed(e) => println!("{}", e.to_string().red()),
        SessionView::NoResults => println!("{}", NO_RESULTS_MESSAGE.yellow()),
        SessionView::NoMatches { hidden } => println!(
            "{}",
            format!("None of the {hidden} results match the current filters.").yellow()
        ),
        SessionView::Results(movies) => {
            println!("{}", format!("Results for '{query}':").bold().blue());
            if let Some(description) = describe_filters(filters, genres) {
                println!("{}", format!("({description})").dimmed());
            }
            for (rank, movie) in movies.iter().enumerate() {
                print_summary(rank + 1, movie, genres);
            }
        }
    }
}

fn print_summary(rank: usize, movie: &MovieSummary, genres: &GenreIndex) {
    println!();
    println!(
        "{}. {} {}",
        rank.to_string().green(),
        movie.title.bold(),
        format!("[id {}]", movie.id).dimmed()
    );
    println!(
        "   {} {}  {} {}  {} {}",
        "Year:".cyan(),
        format_year(movie.release_year()),
        "Rating:".cyan(),
        format_rating(movie.vote_average),
        "Language:".cyan(),
        format_language(&movie.original_language)
    );
    let names = genres.names_for(&movie.genre_ids);
    if !names.is_empty() {
        println!("   {} {}", "Genres:".cyan(), names.join(", "));
    }
    println!(
        "   {} {}",
        "Poster:".cyan(),
        poster_url(movie.poster_path.as_deref(), &movie.title)
    );
    if !movie.overview.is_empty() {
        println!("   {}", excerpt(&movie.overview, OVERVIEW_EXCERPT_CHARS));
    }
}

/// Print the detail view for one title.
pub fn print_details(details: &MovieDetails) {
    println!("{}", details.title.bold().blue());
    if let Some(tagline) = &details.tagline {
        println!("{}", tagline.italic());
    }
    println!();

    let mut facts = vec![format!("{} {}", "Released:".cyan(), format_release_date(details))];
    if let Some(runtime) = details.runtime.filter(|&minutes| minutes > 0) {
        facts.push(format!("{} {} minutes", "Runtime:".cyan(), runtime));
    }
    facts.push(format!(
        "{} {} ({} votes)",
        "Rating:".cyan(),
        format_rating(details.vote_average),
        details.vote_count
    ));
    facts.push(format!(
        "{} {}",
        "Language:".cyan(),
        format_language(&details.original_language)
    ));
    println!("{}", facts.join("  "));
    println!(
        "{} {}",
        "Poster:".cyan(),
        poster_url(details.poster_path.as_deref(), &details.title)
    );

    if !details.overview.is_empty() {
        println!();
        println!("{}", details.overview);
    }

    if !details.genres.is_empty() {
        let names: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
        println!();
        println!("{} {}", "Genres:".bold(), names.join(", "));
    }
    if !details.production_countries.is_empty() {
        let names: Vec<&str> = details
            .production_countries
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        println!("{} {}", "Production Countries:".bold(), names.join(", "));
    }
    if details.budget > 0 {
        println!("{} {}", "Budget:".bold(), format_usd(details.budget));
    }
    if details.revenue > 0 {
        println!("{} {}", "Revenue:".bold(), format_usd(details.revenue));
    }
}
