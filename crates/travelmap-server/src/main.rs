//! travelmap-server — serve a travel itinerary to the map front end.
//!
//! Usage examples
//! --------------
//!
//! - Serve on the default port with the default store file
//!   $ travelmap-server
//!
//! - Serve a specific itinerary under the `/travel` prefix
//!   $ travelmap-server --data-file trips/taipei.json --base-path /travel
//!
//! Settings can also come from the environment (`PORT`, `DocumentRoot`,
//! `TemplateRoot`, `TRAVEL_DATA`, `BASE_PATH`) or from an `envfile` in the
//! working directory.
use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use travelmap_core::{load_or_seed, DataSource};
use travelmap_server::{build_router, page, AppState, ServerConfig};

const ENV_FILE: &str = "envfile";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before parsing so env-backed flags see the file's values.
    let env_file = dotenvy::from_filename(ENV_FILE);
    let config = ServerConfig::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match env_file {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "ignoring unreadable {ENV_FILE}"),
    }

    let outcome = load_or_seed(&config.data_file);
    if let DataSource::Seeded { persisted: false, .. } = outcome.source {
        warn!("serving default itinerary from memory only");
    }

    let index_page = page::resolve_index_page(&config.template_root);
    let state =
        AppState::new(outcome.data, index_page).context("failed to serialize itinerary")?;
    let mount_path = config.mount_path();
    let app = build_router(state, &config.document_root, &mount_path);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening on http://{addr}{mount_path}/");
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
