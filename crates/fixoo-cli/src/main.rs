//! fixoo-cli - Command-line interface for fixoo-core
//!
//! This binary provides a simple way to inspect the Fixoo store directory
//! from your terminal. It supports printing basic statistics, listing
//! stores, looking up a specific store, listing cities and service tags,
//! running the full search/ranking pipeline, and managing the persisted
//! favorite set.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ fixoo-cli stats
//!
//! - List all stores
//!   $ fixoo-cli stores
//!
//! - Show details for a store by id
//!   $ fixoo-cli store 1
//!
//! - Search by text, ranked by distance from a position
//!   $ fixoo-cli search casa
//!   $ fixoo-cli search --near 31.63,-7.98 --max-distance 100
//!   $ fixoo-cli search --service "Réparation téléphone" --min-rating 4.5
//!
//! - Manage favorites (persisted to --favorites, default favorites.json)
//!   $ fixoo-cli fav add 1
//!   $ fixoo-cli fav list
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the catalog bundled with the `fixoo-core`
//! crate and automatically caches a binary version next to it for fast
//! subsequent runs. Use `--input <path>` to point to a custom `.json` or
//! `.json.gz` catalog.
mod args;

use crate::args::{CliArgs, Commands, FavAction};
use anyhow::{bail, Context};
use clap::Parser;
use fixoo_core::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = CliArgs::parse();

    // Load the directory (custom input path wins over the bundled catalog)
    let dir: DefaultDirectory = match &args.input {
        Some(path) => Directory::load_from_path(path)?,
        None => Directory::load()?,
    };

    let favorites_store = JsonFileStore::new(&args.favorites);

    match args.command {
        Commands::Stats => {
            let stats = dir.stats();
            println!("Directory statistics:");
            println!("  Stores: {}", stats.stores);
            println!("  Cities: {}", stats.cities);
            println!("  Services: {}", stats.services);
        }

        Commands::Stores => {
            for s in dir.stores() {
                println!("{}. {} - {} ({:.1}★)", s.id(), s.name(), s.city(), s.rating());
            }
        }

        Commands::Store { id } => match dir.find_store_by_id(&id) {
            Some(s) => {
                println!("Store: {}", s.name());
                println!("Address: {}, {}", s.address(), s.city());
                println!("Phone: {}", s.phone());
                println!("Email: {}", s.email());
                println!("Rating: {:.1}/5", s.rating());
                println!("Services: {}", s.services().join(", "));
                println!("Hours:");
                for day in Weekday::ALL {
                    println!("  {}: {}", day.label(), s.hours_on(day));
                }
            }
            None => {
                eprintln!("No store found for id: {id}");
            }
        },

        Commands::Cities => {
            for city in dir.cities() {
                println!("- {city}");
            }
        }

        Commands::Services => {
            for tag in dir.services() {
                println!("- {tag}");
            }
        }

        Commands::Search {
            query,
            city,
            min_rating,
            max_distance,
            services,
            near,
            favorites_only,
        } => {
            let mut criteria = FilterCriteria::new();
            if let Some(q) = query {
                criteria.query = q;
            }
            criteria.city = city;
            if let Some(r) = min_rating {
                criteria.min_rating = r;
            }
            if let Some(d) = max_distance {
                criteria.max_distance_km = d;
            }
            criteria.services = services;
            criteria.favorites_only = favorites_only;

            let user = near.as_deref().map(parse_coordinate).transpose()?;
            let favorites = favorites_store
                .load()
                .context("failed to read favorites file")?;

            let results = dir.search(&criteria, user, &favorites);
            if results.is_empty() {
                println!("No stores match these criteria");
            } else {
                for r in results {
                    match r.distance_km {
                        Some(d) => println!(
                            "{} - {} ({:.1}★, {:.1} km)",
                            r.store.name(),
                            r.store.city(),
                            r.store.rating(),
                            d
                        ),
                        None => println!(
                            "{} - {} ({:.1}★)",
                            r.store.name(),
                            r.store.city(),
                            r.store.rating()
                        ),
                    }
                }
            }
        }

        Commands::Fav { action } => {
            let mut ctl = FavoritesController::new(favorites_store, MemorySink::default());
            match action {
                FavAction::Add { id } => match dir.find_store_by_id(&id) {
                    Some(store) => {
                        if ctl.add(store) {
                            println!("Added {} to favorites", store.name());
                        } else {
                            println!("{} is already a favorite", store.name());
                        }
                    }
                    None => bail!("no store found for id: {id}"),
                },
                FavAction::Remove { id } => match dir.find_store_by_id(&id) {
                    Some(store) => {
                        if ctl.remove(store) {
                            println!("Removed {} from favorites", store.name());
                        } else {
                            println!("{} was not a favorite", store.name());
                        }
                    }
                    None => bail!("no store found for id: {id}"),
                },
                FavAction::List => {
                    if ctl.favorites().is_empty() {
                        println!("No favorite stores yet");
                    }
                    for id in ctl.favorites().iter() {
                        match dir.find_store_by_id(id) {
                            Some(s) => println!("{} - {} ({})", s.id(), s.name(), s.city()),
                            None => println!("{id} - (no longer in catalog)"),
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Parse a `lat,lng` pair such as `31.63,-7.98`.
fn parse_coordinate(s: &str) -> anyhow::Result<Coordinate> {
    let Some((lat, lng)) = s.split_once(',') else {
        bail!("expected LAT,LNG (e.g. 31.63,-7.98), got: {s}");
    };
    let lat: f64 = lat.trim().parse().context("invalid latitude")?;
    let lng: f64 = lng.trim().parse().context("invalid longitude")?;
    Ok(Coordinate::new(lat, lng))
}
