//! Command-line front-end for the Soulscape catalog.
//!
//! # Responsibility
//! - Render the catalog pages (home, destinations, state, place, search) as
//!   text over the core query engine.
//! - Drive the visit-scheduling flow and surface its outcome.
//!
//! # Invariants
//! - Lookup misses render a not-found view and exit successfully; only a
//!   failed email send exits non-zero.
//! - No business logic lives here; every answer comes from `soulscape_core`.

use clap::{Parser, Subcommand};
use log::info;
use soulscape_core::{
    bundled_catalog, default_log_level, init_logging, parse_place_route, place_route,
    BookingService, HttpVisitMailer, MailerConfig, Place, QueryEngine, VisitRequest,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Discover the wonders of India")]
struct Cli {
    /// Absolute directory for rolling log files; logging stays off when
    /// omitted.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Featured states (the home page strip).
    Home,
    /// Every state with its place count (the destinations page).
    Destinations,
    /// All places of one state.
    State { name: String },
    /// Detail view for one place.
    Place { state: String, name: String },
    /// Detail view addressed by an encoded route, e.g.
    /// `/place/Kerala/Fort%20Kochi`.
    Open { route: String },
    /// State entries whose state or place names match the query.
    Search { query: String },
    /// The first five autocomplete suggestions for the query.
    Suggest { query: String },
    /// Schedule a visit and email the confirmation.
    Visit {
        state: String,
        place: String,
        #[arg(long)]
        email: String,
        /// Planned visit date, YYYY-MM-DD.
        #[arg(long)]
        date: String,
    },
    /// Core linkage probe.
    Version,
}

const FEATURED_STATES: usize = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(message) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    let engine = QueryEngine::new(bundled_catalog());
    info!(
        "event=cli_start module=cli status=ok states={} places={}",
        engine.state_count(),
        engine.place_count()
    );

    match cli.command {
        Command::Home => render_home(engine),
        Command::Destinations => render_destinations(engine),
        Command::State { name } => render_state(engine, &name),
        Command::Place { state, name } => render_place(engine, &state, &name),
        Command::Open { route } => render_route(engine, &route),
        Command::Search { query } => render_search(engine, &query),
        Command::Suggest { query } => render_suggestions(engine, &query),
        Command::Visit {
            state,
            place,
            email,
            date,
        } => schedule_visit(engine, &state, &place, email, date),
        Command::Version => {
            println!("soulscape_core {}", soulscape_core::core_version());
            ExitCode::SUCCESS
        }
    }
}

fn render_home(engine: QueryEngine<'_>) -> ExitCode {
    println!("Discover the Wonders of India");
    println!();
    for entry in engine.featured(FEATURED_STATES) {
        let first = entry.places.first().map_or("", |place| place.name.as_str());
        println!("  {} - {}", entry.state, first);
    }
    println!();
    println!(
        "{} states, {} places. Try `search <query>` or `destinations`.",
        engine.state_count(),
        engine.place_count()
    );
    ExitCode::SUCCESS
}

fn render_destinations(engine: QueryEngine<'_>) -> ExitCode {
    println!("Explore Indian States");
    for entry in engine.entries() {
        let count = entry.places.len();
        let plural = if count == 1 { "" } else { "s" };
        println!("  {} ({count} famous place{plural})", entry.state);
    }
    ExitCode::SUCCESS
}

fn render_state(engine: QueryEngine<'_>, name: &str) -> ExitCode {
    match engine.state_places(name) {
        Some(places) if places.is_empty() => {
            println!("{name}");
            println!("  No places listed yet.");
            ExitCode::SUCCESS
        }
        Some(places) => {
            println!("{name}");
            for place in places {
                println!("  {} - {}", place.name, place.description);
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("State `{name}` not found. See `destinations` for the full list.");
            ExitCode::SUCCESS
        }
    }
}

fn render_place(engine: QueryEngine<'_>, state: &str, name: &str) -> ExitCode {
    match engine.get_place(state, name) {
        Some(place) => {
            print_place(state, place);
            ExitCode::SUCCESS
        }
        None => {
            println!("Place not found. Back to `search {state}`.");
            ExitCode::SUCCESS
        }
    }
}

fn render_route(engine: QueryEngine<'_>, route: &str) -> ExitCode {
    match parse_place_route(route) {
        Ok((state, name)) => render_place(engine, &state, &name),
        Err(err) => {
            println!("Cannot open `{route}`: {err}");
            ExitCode::SUCCESS
        }
    }
}

fn render_search(engine: QueryEngine<'_>, query: &str) -> ExitCode {
    let results = engine.search(query);
    println!("Exploring India: \"{query}\"");
    if results.is_empty() {
        println!("No results found. Try a different search term.");
        return ExitCode::SUCCESS;
    }

    for entry in results {
        println!();
        println!("{}", entry.state);
        for place in entry.places {
            println!("  {}  ({})", place.name, place_route(entry.state, &place.name));
        }
    }
    ExitCode::SUCCESS
}

fn render_suggestions(engine: QueryEngine<'_>, query: &str) -> ExitCode {
    let suggestions = engine.suggest(query);
    if suggestions.is_empty() {
        println!("No suggestions.");
        return ExitCode::SUCCESS;
    }

    for (position, hit) in suggestions.iter().enumerate() {
        println!("{}. {} ({})", position + 1, hit.place.name, hit.state);
    }
    ExitCode::SUCCESS
}

fn schedule_visit(
    engine: QueryEngine<'_>,
    state: &str,
    place: &str,
    email: String,
    date: String,
) -> ExitCode {
    let Some(found) = engine.get_place(state, place) else {
        println!("Place not found. Back to `search {state}`.");
        return ExitCode::SUCCESS;
    };

    let request = VisitRequest {
        recipient_email: email,
        place_name: found.name.clone(),
        visit_date: date,
    };

    let service = BookingService::new(HttpVisitMailer::new(MailerConfig::load()));
    match service.schedule_visit(&request) {
        Ok(()) => {
            println!(
                "Visit to {} on {} confirmed; a confirmation email is on its way to {}.",
                request.place_name, request.visit_date, request.recipient_email
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Could not schedule the visit: {err}");
            println!("Please check the details and submit again.");
            ExitCode::FAILURE
        }
    }
}

fn print_place(state: &str, place: &Place) {
    println!("{}  ({state})", place.name);
    println!();
    println!("{}", place.description);
    println!();
    println!("Timings: {}", place.timings);
    println!("Ticket Price: {}", place.ticket_price);
    println!("Image: {}", place.image_url);
    println!("Route: {}", place_route(state, &place.name));
}
