// crates/travelmap-core/src/lib.rs

//! # travelmap-core
//!
//! The in-memory itinerary of a travel map: locations with photos, day-colored
//! routes and the total number of days, plus the JSON store file they are
//! loaded from (or seeded into) at startup.
//!
//! ```rust
//! use travelmap_core::TravelData;
//!
//! let data = TravelData::defaults();
//! assert_eq!(data.total_days, 3);
//! assert_eq!(data.find_location(3).map(|l| l.name.as_str()), Some("西門町"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api; // JSON views
pub mod defaults;
pub mod error;
pub mod fragment;
pub mod loader;
pub mod model;
pub mod text;

// Re-exports
pub use crate::api::{DaysView, ItineraryStats};
pub use crate::error::{Result, TravelError};
pub use crate::fragment::render_location_photos;
pub use crate::loader::{load_from_path, load_or_seed, DataSource, LoadOutcome, DEFAULT_DATA_FILE};
pub use crate::model::{Location, Photo, Point, Route, TravelData};
