//! Itinerary summary demo for travelmap-rs
//!
//! Loads (or seeds) a store file in a temporary location and walks the trip
//! day by day.

use travelmap_core::{load_or_seed, render_location_photos, DataSource};

fn main() {
    let path = std::env::temp_dir().join("travelmap-demo").join("travel_data.json");

    let outcome = load_or_seed(&path);
    match &outcome.source {
        DataSource::Loaded(p) => println!("Loaded {}", p.display()),
        DataSource::Seeded { reason, persisted } => {
            println!("Seeded defaults ({reason}); written to disk: {persisted}")
        }
    }
    let data = outcome.data;

    for day in 1..=data.total_days {
        println!("\n=== Day {day} ===");
        for route in data.routes_on_day(day) {
            println!("  route {} [{}], {} points", route.name, route.color, route.points.len());
        }
        for location in data.locations_on_day(day) {
            println!("  #{} {} — {} photo(s)", location.id, location.name, location.photos.len());
        }
    }

    if let Some(location) = data.find_location(3) {
        println!("\n--- Photo panel for #{} ---", location.id);
        println!("{}", render_location_photos(location));
    }
}
