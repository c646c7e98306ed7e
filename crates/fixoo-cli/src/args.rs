use clap::{Parser, Subcommand};

/// CLI arguments for fixoo-cli
#[derive(Debug, Parser)]
#[command(
    name = "fixoo",
    version,
    about = "CLI for querying the Fixoo repair-store directory"
)]
pub struct CliArgs {
    /// Path to an input catalog file (.json, .json.gz or .bin); defaults
    /// to the catalog bundled with fixoo-core
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Path to the favorites file (JSON array of store ids)
    #[arg(long = "favorites", global = true, default_value = "favorites.json")]
    pub favorites: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the directory contents
    Stats,

    /// List all stores
    Stores,

    /// Show details for a store by id
    Store {
        /// Stable store identifier (e.g. 1)
        id: String,
    },

    /// List the cities covered by the directory
    Cities,

    /// List the universe of offered service tags
    Services,

    /// Search stores with the full filter/ranking pipeline
    Search {
        /// Free-text query against name, city and address
        query: Option<String>,

        /// Restrict to an exact city (accent-insensitive)
        #[arg(long)]
        city: Option<String>,

        /// Minimum aggregate rating (0.0 - 5.0)
        #[arg(long = "min-rating")]
        min_rating: Option<f64>,

        /// Maximum distance in km; only meaningful with --near
        #[arg(long = "max-distance")]
        max_distance: Option<f64>,

        /// Required service tag; may be repeated (OR semantics)
        #[arg(long = "service")]
        services: Vec<String>,

        /// Rank by distance from this position, e.g. --near 31.63,-7.98
        #[arg(long)]
        near: Option<String>,

        /// Only show favorited stores
        #[arg(long = "favorites-only")]
        favorites_only: bool,
    },

    /// Manage the favorite set
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavAction {
    /// Add a store to the favorites
    Add { id: String },
    /// Remove a store from the favorites
    Remove { id: String },
    /// List favorited stores
    List,
}
