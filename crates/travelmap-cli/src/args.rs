use clap::{Parser, Subcommand};

/// CLI arguments for travelmap-cli
#[derive(Debug, Parser)]
#[command(
    name = "travelmap",
    version,
    about = "CLI for inspecting and seeding travelmap itinerary store files"
)]
pub struct CliArgs {
    /// Path to the itinerary store file (default: data/travel_data.json)
    #[arg(short = 'd', long = "data-file", env = "TRAVEL_DATA", global = true)]
    pub data_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the itinerary
    Stats,

    /// List locations, optionally only those of one day
    Locations {
        #[arg(long)]
        day: Option<u32>,
    },

    /// List routes, optionally only those of one day
    Routes {
        #[arg(long)]
        day: Option<u32>,
    },

    /// Show one location with its photos
    Show {
        /// Location id
        id: i64,
    },

    /// Search locations by name or description (case- and accent-insensitive)
    Search { query: String },

    /// Load and validate the store file without falling back to defaults
    Check,

    /// Write the built-in itinerary to the store file
    Seed {
        /// Overwrite an existing store file
        #[arg(long)]
        force: bool,
    },

    /// Print the itinerary as pretty JSON
    Export,
}
