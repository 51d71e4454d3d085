//! Request handlers. Every handler is a pure read of the shared itinerary.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use travelmap_core::{render_location_photos, DaysView};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PhotosQuery {
    id: Option<String>,
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.index_page.clone())
}

/// `GET /api/locations`
pub async fn locations(State(state): State<AppState>) -> Response {
    json_bytes(state.locations_json())
}

/// `GET /api/routes`
pub async fn routes(State(state): State<AppState>) -> Response {
    json_bytes(state.routes_json())
}

/// `GET /api/days`
pub async fn days(State(state): State<AppState>) -> Json<DaysView> {
    Json(DaysView::from(state.data.as_ref()))
}

/// `GET /api/location-photos?id=N`
///
/// A missing, malformed or unknown id is a plain-text 404.
pub async fn location_photos(
    State(state): State<AppState>,
    query: Option<Query<PhotosQuery>>,
) -> Response {
    let id = query
        .and_then(|Query(q)| q.id)
        .and_then(|raw| raw.parse::<i64>().ok());

    match id.and_then(|id| state.data.find_location(id)) {
        Some(location) => Html(render_location_photos(location)).into_response(),
        None => (StatusCode::NOT_FOUND, "Location not found").into_response(),
    }
}

fn json_bytes(body: Bytes) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
