// crates/travelmap-core/src/model.rs
use crate::api::ItineraryStats;
use crate::error::{Result, TravelError};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single photo attached to a [`Location`].
///
/// Photos have no identity of their own; they are addressed by position
/// within the owning location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub thumbnail: String,
    /// Full-size image. Empty means "use the thumbnail".
    pub full: String,
    pub caption: String,
}

impl Photo {
    /// URL to show in the detail view: the full-size image, or the
    /// thumbnail when no full-size image was recorded.
    pub fn display_url(&self) -> &str {
        if self.full.is_empty() {
            &self.thumbnail
        } else {
            &self.full
        }
    }
}

/// A place on the map, visited on one day of the trip.
///
/// Every key is optional on input and zero-filled when absent; a missing
/// `day` then fails [`TravelData::validate`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub photos: Vec<Photo>,
    pub day: u32,
}

/// A vertex of a route polyline.
///
/// Unknown keys (older files carry a `routez` field) are ignored on input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

/// The path travelled on one day, drawn as a colored polyline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub points: Vec<Point>,
    /// CSS color string, e.g. `#3388ff`.
    pub color: String,
    pub name: String,
    pub day: u32,
}

/// The aggregate root: every location and route of the trip plus its length
/// in days.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelData {
    pub locations: Vec<Location>,
    pub routes: Vec<Route>,
    #[serde(rename = "totalDays")]
    pub total_days: u32,
}

impl TravelData {
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// First location (in stored order) carrying the given identifier.
    pub fn find_location(&self, id: i64) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn locations_on_day(&self, day: u32) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(move |l| l.day == day)
    }

    pub fn routes_on_day(&self, day: u32) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(move |r| r.day == day)
    }

    /// Largest day referenced by any location or route, 0 for an empty itinerary.
    pub fn max_day(&self) -> u32 {
        self.locations
            .iter()
            .map(|l| l.day)
            .chain(self.routes.iter().map(|r| r.day))
            .max()
            .unwrap_or(0)
    }

    pub fn stats(&self) -> ItineraryStats {
        ItineraryStats {
            total_days: self.total_days,
            locations: self.locations.len(),
            routes: self.routes.len(),
            photos: self.locations.iter().map(|l| l.photos.len()).sum(),
            route_points: self.routes.iter().map(|r| r.points.len()).sum(),
        }
    }

    /// Case- and script-insensitive substring search over location names and
    /// descriptions. `"ximen"` finds `西門町`.
    pub fn search_locations(&self, query: &str) -> Vec<&Location> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.locations
            .iter()
            .filter(|l| fold_key(&l.name).contains(&q) || fold_key(&l.description).contains(&q))
            .collect()
    }

    /// Checks the aggregate invariants: location ids are unique and every
    /// day number lies in `1..=total_days`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.locations.len());
        for loc in &self.locations {
            if !seen.insert(loc.id) {
                return Err(TravelError::InvalidData(format!(
                    "duplicate location id {}",
                    loc.id
                )));
            }
            if !self.is_valid_day(loc.day) {
                return Err(TravelError::InvalidData(format!(
                    "location {} ({}) is on day {}, outside 1..={}",
                    loc.id, loc.name, loc.day, self.total_days
                )));
            }
        }
        for route in &self.routes {
            if !self.is_valid_day(route.day) {
                return Err(TravelError::InvalidData(format!(
                    "route '{}' is on day {}, outside 1..={}",
                    route.name, route.day, self.total_days
                )));
            }
        }
        Ok(())
    }

    fn is_valid_day(&self, day: u32) -> bool {
        (1..=self.total_days).contains(&day)
    }
}
