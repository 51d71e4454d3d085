//! travelmap-server
//! ================
//!
//! HTTP front for a travel itinerary. The itinerary is loaded (or seeded)
//! once at startup and shared read-only by every request.
//!
//! | Path | Response |
//! |---|---|
//! | `/` | map page |
//! | `/api/locations` | JSON array of locations |
//! | `/api/routes` | JSON array of routes |
//! | `/api/days` | `{"totalDays": n}` |
//! | `/api/location-photos?id=N` | HTML fragment, or 404 |
//! | anything else | static file from the document root |
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod handlers;
pub mod page;

use std::path::Path;
use std::sync::Arc;

use axum::{body::Bytes, routing::get, Router};
use tower_http::{normalize_path::NormalizePath, services::ServeDir, trace::TraceLayer};
use travelmap_core::TravelData;

pub use crate::config::ServerConfig;

/// The complete service: the router behind trailing-slash normalization, so
/// `/travel/` and `/travel` reach the same page.
pub type App = NormalizePath<Router>;

/// Shared state backing HTTP handlers. Cloning is cheap; the itinerary is
/// never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<TravelData>,
    pub index_page: Bytes,
    locations_json: Bytes,
    routes_json: Bytes,
}

impl AppState {
    /// Serializes the location and route lists once; handlers hand out the bytes.
    pub fn new(data: TravelData, index_page: Bytes) -> serde_json::Result<Self> {
        let locations_json = Bytes::from(serde_json::to_vec(data.locations())?);
        let routes_json = Bytes::from(serde_json::to_vec(data.routes())?);
        Ok(Self {
            data: Arc::new(data),
            index_page,
            locations_json,
            routes_json,
        })
    }

    pub(crate) fn locations_json(&self) -> Bytes {
        self.locations_json.clone()
    }

    pub(crate) fn routes_json(&self) -> Bytes {
        self.routes_json.clone()
    }
}

/// Build the service, nested under `mount_path` unless it is empty. A
/// non-empty mount also gets a `<base>` tag in the index page so its
/// relative asset links stay inside the mount.
pub fn build_router(mut state: AppState, document_root: &Path, mount_path: &str) -> App {
    state.index_page = page::with_base_href(state.index_page.clone(), mount_path);

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/api/locations", get(handlers::locations))
        .route("/api/routes", get(handlers::routes))
        .route("/api/days", get(handlers::days))
        .route("/api/location-photos", get(handlers::location_photos))
        .fallback_service(ServeDir::new(document_root))
        .with_state(state);

    let app = if mount_path.is_empty() {
        app
    } else {
        Router::new().nest(mount_path, app)
    };

    NormalizePath::trim_trailing_slash(app.layer(TraceLayer::new_for_http()))
}
