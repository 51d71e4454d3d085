//! travelmap-cli — inspect and seed itinerary store files
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ travelmap-cli stats
//!
//! - List the locations of day 2
//!   $ travelmap-cli locations --day 2
//!
//! - Show one location and its photos
//!   $ travelmap-cli show 3
//!
//! - Validate a store file (non-zero exit on failure)
//!   $ travelmap-cli --data-file trips/taipei.json check
//!
//! Read-only commands never write: when the store file is missing or broken
//! they fall back to the built-in itinerary in memory, the same data the
//! server would seed.
mod args;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use travelmap_core::{load_from_path, TravelData, DEFAULT_DATA_FILE};

use crate::args::{CliArgs, Commands};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let data_file: PathBuf = args
        .data_file
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    match args.command {
        Commands::Check => {
            let data = load_from_path(&data_file)
                .with_context(|| format!("{} is not a valid itinerary", data_file.display()))?;
            let stats = data.stats();
            println!(
                "OK: {} ({} days, {} locations, {} routes)",
                data_file.display(),
                stats.total_days,
                stats.locations,
                stats.routes
            );
        }

        Commands::Seed { force } => {
            if data_file.exists() && !force {
                bail!(
                    "{} already exists; pass --force to overwrite it",
                    data_file.display()
                );
            }
            TravelData::defaults()
                .save_as(&data_file)
                .with_context(|| format!("failed to write {}", data_file.display()))?;
            println!("Wrote default itinerary to {}", data_file.display());
        }

        Commands::Stats => {
            let db = load_for_reading(&data_file);
            let stats = db.stats();
            println!("Itinerary statistics:");
            println!("  Days: {}", stats.total_days);
            println!("  Locations: {}", stats.locations);
            println!("  Photos: {}", stats.photos);
            println!("  Routes: {}", stats.routes);
            println!("  Route points: {}", stats.route_points);
        }

        Commands::Locations { day } => {
            let db = load_for_reading(&data_file);
            for l in db.locations().iter().filter(|l| day.map_or(true, |d| l.day == d)) {
                println!(
                    "{:>4}  day {}  {} ({:.4}, {:.4})",
                    l.id, l.day, l.name, l.lat, l.lng
                );
            }
        }

        Commands::Routes { day } => {
            let db = load_for_reading(&data_file);
            for r in db.routes().iter().filter(|r| day.map_or(true, |d| r.day == d)) {
                println!(
                    "day {}  {}  {}  ({} points)",
                    r.day,
                    r.color,
                    r.name,
                    r.points.len()
                );
            }
        }

        Commands::Show { id } => {
            let db = load_for_reading(&data_file);
            match db.find_location(id) {
                Some(l) => {
                    println!("Location: {} (#{})", l.name, l.id);
                    println!("Day: {}", l.day);
                    println!("Position: {}, {}", l.lat, l.lng);
                    println!("Description: {}", l.description);
                    println!("Photos: {}", l.photos.len());
                    for p in &l.photos {
                        println!("  - {}  {}", p.caption, p.display_url());
                    }
                }
                None => eprintln!("No location found for id: {id}"),
            }
        }

        Commands::Search { query } => {
            let db = load_for_reading(&data_file);
            let matches = db.search_locations(&query);
            if matches.is_empty() {
                println!("No locations found matching: {query}");
            } else {
                for l in matches {
                    println!("{:>4}  day {}  {} — {}", l.id, l.day, l.name, l.description);
                }
            }
        }

        Commands::Export => {
            let db = load_for_reading(&data_file);
            print!("{}", db.to_json_pretty()?);
        }
    }

    Ok(())
}

/// Strict load, or the built-in itinerary (in memory only) when that fails.
fn load_for_reading(path: &Path) -> TravelData {
    match load_from_path(path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("note: {e}; using the built-in itinerary");
            TravelData::defaults()
        }
    }
}
